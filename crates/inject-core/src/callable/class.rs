//! `Class<T>`: constructor respaldado por una closure.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::InjectError;
use crate::metadata::MetadataSlot;
use crate::model::{Arguments, ParamDescriptors};

use super::{CallableId, Constructor, ParamMetadata};

type Factory<T> = Box<dyn Fn(Arguments) -> Result<T, InjectError> + Send + Sync>;

/// Constructor con nombre, tipos de parámetros opcionales y una factory.
///
/// Los tipos declarados con `with_param_types` son los "reflejados": el
/// accesor de metadata los encuentra sin necesidad de `attach_descriptors`.
pub struct Class<T> {
    id: CallableId,
    name: String,
    param_types: Option<ParamDescriptors>,
    statics: Option<Value>,
    slot: MetadataSlot,
    factory: Factory<T>,
}

impl<T> Class<T> {
    pub fn new<F>(name: impl Into<String>, factory: F) -> Self
        where F: Fn(Arguments) -> Result<T, InjectError> + Send + Sync + 'static
    {
        Self { id: CallableId::new(),
               name: name.into(),
               param_types: None,
               statics: None,
               slot: MetadataSlot::default(),
               factory: Box::new(factory) }
    }

    pub fn with_param_types(mut self, types: impl Into<ParamDescriptors>) -> Self {
        self.param_types = Some(types.into());
        self
    }

    /// Datos asociados a la clase, accesibles también a través de sus wrappers.
    pub fn with_static_data(mut self, statics: Value) -> Self {
        self.statics = Some(statics);
        self
    }

    pub fn into_constructor(self) -> Arc<dyn Constructor<Instance = T>>
        where T: 'static
    {
        Arc::new(self)
    }
}

impl<T> fmt::Debug for Class<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
         .field("id", &self.id)
         .field("name", &self.name)
         .field("param_types", &self.param_types)
         .field("statics", &self.statics)
         .finish()
    }
}

impl<T> ParamMetadata for Class<T> {
    fn id(&self) -> CallableId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn static_data(&self) -> Option<&Value> {
        self.statics.as_ref()
    }

    fn metadata_slot(&self) -> Option<&MetadataSlot> {
        Some(&self.slot)
    }

    fn reflected_param_types(&self) -> Option<ParamDescriptors> {
        self.param_types.clone()
    }
}

impl<T> Constructor for Class<T> {
    type Instance = T;

    fn construct(&self, args: Arguments) -> Result<T, InjectError> {
        (self.factory)(args)
    }
}
