//! `NativeFn<R>`: función ordinaria respaldada por una closure.

use std::fmt;
use std::sync::Arc;

use crate::errors::InjectError;
use crate::metadata::MetadataSlot;
use crate::model::Arguments;

use super::{CallableId, Function, ParamMetadata};

type Body<R> = Box<dyn Fn(Arguments) -> Result<R, InjectError> + Send + Sync>;

/// Las funciones no declaran tipos de parámetros: su metadata sólo puede
/// venir de `attach_descriptors` o pasarse explícitamente a `inject_function`.
pub struct NativeFn<R> {
    id: CallableId,
    name: String,
    slot: MetadataSlot,
    body: Body<R>,
}

impl<R> NativeFn<R> {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
        where F: Fn(Arguments) -> Result<R, InjectError> + Send + Sync + 'static
    {
        Self { id: CallableId::new(), name: name.into(), slot: MetadataSlot::default(), body: Box::new(body) }
    }

    pub fn into_function(self) -> Arc<dyn Function<Output = R>>
        where R: 'static
    {
        Arc::new(self)
    }
}

impl<R> fmt::Debug for NativeFn<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFn").field("id", &self.id).field("name", &self.name).finish()
    }
}

impl<R> ParamMetadata for NativeFn<R> {
    fn id(&self) -> CallableId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn metadata_slot(&self) -> Option<&MetadataSlot> {
        Some(&self.slot)
    }
}

impl<R> Function for NativeFn<R> {
    type Output = R;

    fn call(&self, args: Arguments) -> Result<R, InjectError> {
        (self.body)(args)
    }
}
