//! Registro manual de descriptores indexado por `CallableId`.
//!
//! Sustituye a la reflexión automática: quien define un callable registra
//! aquí sus descriptores una vez, antes de envolverlo.

use dashmap::DashMap;
use log::debug;

use crate::callable::{CallableId, ParamMetadata};
use crate::model::ParamDescriptors;

use super::{param_descriptors, MetadataSource};

#[derive(Debug, Default)]
pub struct MetadataRegistry {
    entries: DashMap<CallableId, ParamDescriptors>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra descriptores para `id`. La primera escritura gana, igual que
    /// en `MetadataSlot`.
    pub fn register(&self, id: CallableId, descriptors: ParamDescriptors) -> bool {
        let entry = self.entries.entry(id).or_insert_with(|| descriptors.clone());
        let accepted = *entry == descriptors;
        if !accepted {
            debug!("registry: {id} already registered with a different descriptor list");
        }
        accepted
    }

    /// Atajo para registrar a partir del callable.
    pub fn register_callable<C: ParamMetadata + ?Sized>(&self, callable: &C, descriptors: ParamDescriptors) -> bool {
        self.register(callable.id(), descriptors)
    }

    pub fn get(&self, id: CallableId) -> Option<ParamDescriptors> {
        self.entries.get(&id).map(|e| e.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MetadataSource for MetadataRegistry {
    /// Entrada del registro si existe y no está vacía; si no, la metadata
    /// adjunta/reflejada del propio callable.
    fn lookup<C: ParamMetadata + ?Sized>(&self, callable: &C) -> Option<ParamDescriptors> {
        self.get(callable.id())
            .and_then(ParamDescriptors::non_empty)
            .or_else(|| param_descriptors(callable))
    }
}
