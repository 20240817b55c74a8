//! Wrapper de constructores.
//!
//! `InjectedConstructor` no es una subclase sino una delegación: guarda el
//! constructor original y construye siempre a través de él, por lo que las
//! instancias producidas son del mismo tipo que las del original.

use std::fmt;
use std::sync::Arc;

use crate::callable::{CallableId, Constructor, ParamMetadata};
use crate::errors::InjectError;
use crate::model::{Arguments, ParamDescriptors};

use super::config::InjectorConfig;
use super::provider::ParameterProvider;
use super::resolve::resolve_with;
use super::Injector;

pub struct InjectedConstructor<T> {
    id: CallableId,
    target: Arc<dyn Constructor<Instance = T>>,
    descriptors: ParamDescriptors,
    provider: Arc<dyn ParameterProvider>,
    config: InjectorConfig,
}

impl<T> InjectedConstructor<T> {
    pub(crate) fn new(target: Arc<dyn Constructor<Instance = T>>,
                      descriptors: ParamDescriptors,
                      provider: Arc<dyn ParameterProvider>,
                      config: InjectorConfig)
                      -> Self {
        Self { id: CallableId::new(), target, descriptors, provider, config }
    }
}

impl<T> fmt::Debug for InjectedConstructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectedConstructor")
         .field("id", &self.id)
         .field("target", &self.target.name())
         .field("descriptors", &self.descriptors)
         .field("config", &self.config)
         .finish()
    }
}

impl<T> ParamMetadata for InjectedConstructor<T> {
    fn id(&self) -> CallableId {
        self.id
    }

    fn name(&self) -> &str {
        self.target.name()
    }

    fn target_id(&self) -> CallableId {
        self.target.target_id()
    }

    fn static_data(&self) -> Option<&serde_json::Value> {
        self.target.static_data()
    }

    fn reflected_param_types(&self) -> Option<ParamDescriptors> {
        Some(self.descriptors.clone())
    }
}

impl<T> Constructor for InjectedConstructor<T> {
    type Instance = T;

    fn construct(&self, args: Arguments) -> Result<T, InjectError> {
        let resolved = resolve_with(&self.descriptors, &args, self.provider.as_ref(), self.config.extra_args)?;
        self.target.construct(resolved)
    }
}

/// Devuelve un constructor equivalente a `ty` cuyos parámetros omitidos se
/// piden a `provider`. Sin metadata devuelve `ty` mismo.
pub fn inject_constructor<T: 'static>(ty: Arc<dyn Constructor<Instance = T>>,
                                      provider: Arc<dyn ParameterProvider>)
                                      -> Arc<dyn Constructor<Instance = T>> {
    Injector::new(provider).constructor(ty)
}
