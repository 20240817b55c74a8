//! Accesor de metadata: callable -> descriptores de parámetros.
//!
//! Que no haya metadata es un resultado normal (muchos callables no tienen
//! parámetros), nunca un error.

use std::sync::Arc;

use log::{debug, warn};

use crate::callable::ParamMetadata;
use crate::model::ParamDescriptors;

pub mod registry;
pub mod slot;

pub use registry::MetadataRegistry;
pub use slot::MetadataSlot;

/// Fuente externa de descriptores. Se consulta una vez por operación de
/// wrapping, nunca por invocación.
pub trait MetadataSource {
    fn lookup<C: ParamMetadata + ?Sized>(&self, callable: &C) -> Option<ParamDescriptors>;
}

/// Fuente por defecto: metadata adjunta o, en su defecto, reflejada.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttachedMetadata;

impl MetadataSource for AttachedMetadata {
    fn lookup<C: ParamMetadata + ?Sized>(&self, callable: &C) -> Option<ParamDescriptors> {
        param_descriptors(callable)
    }
}

/// Descriptores de `callable`, o `None` si no hay ninguno (o la lista está vacía).
pub fn param_descriptors<C: ParamMetadata + ?Sized>(callable: &C) -> Option<ParamDescriptors> {
    callable.metadata_slot()
            .and_then(MetadataSlot::get)
            .cloned()
            .and_then(ParamDescriptors::non_empty)
            .or_else(|| callable.reflected_param_types().and_then(ParamDescriptors::non_empty))
}

/// `true` si se adjuntó una lista de descriptores al callable.
pub fn has_attached_descriptors<C: ParamMetadata + ?Sized>(callable: &C) -> bool {
    callable.metadata_slot().is_some_and(MetadataSlot::is_set)
}

/// Registra descriptores en el slot del callable y devuelve el mismo `Arc`.
pub fn attach_descriptors<C: ParamMetadata + ?Sized>(callable: Arc<C>, descriptors: ParamDescriptors) -> Arc<C> {
    match callable.metadata_slot() {
        Some(slot) => {
            if slot.attach(descriptors) {
                debug!("attached descriptors to '{}' ({})", callable.name(), callable.id());
            }
        }
        None => warn!("'{}' has no metadata slot; descriptors not attached", callable.name()),
    }
    callable
}
