//! Wrapper de funciones.

use std::fmt;
use std::sync::Arc;

use crate::callable::{CallableId, Function, ParamMetadata};
use crate::errors::InjectError;
use crate::model::{Arguments, ParamDescriptors};

use super::config::InjectorConfig;
use super::provider::ParameterProvider;
use super::resolve::resolve_with;
use super::Injector;

pub struct InjectedFunction<R> {
    id: CallableId,
    target: Arc<dyn Function<Output = R>>,
    descriptors: ParamDescriptors,
    provider: Arc<dyn ParameterProvider>,
    config: InjectorConfig,
}

impl<R> InjectedFunction<R> {
    pub(crate) fn new(target: Arc<dyn Function<Output = R>>,
                      descriptors: ParamDescriptors,
                      provider: Arc<dyn ParameterProvider>,
                      config: InjectorConfig)
                      -> Self {
        Self { id: CallableId::new(), target, descriptors, provider, config }
    }
}

impl<R> fmt::Debug for InjectedFunction<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectedFunction")
         .field("id", &self.id)
         .field("target", &self.target.name())
         .field("descriptors", &self.descriptors)
         .field("config", &self.config)
         .finish()
    }
}

impl<R> ParamMetadata for InjectedFunction<R> {
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

impl<R> Function for InjectedFunction<R> {
    type Output = R;

    /// El resultado (o error) del target se devuelve sin transformar.
    fn call(&self, args: Arguments) -> Result<R, InjectError> {
        let resolved = resolve_with(&self.descriptors, &args, self.provider.as_ref(), self.config.extra_args)?;
        self.target.call(resolved)
    }
}

/// Devuelve una función equivalente a `func` cuyos argumentos omitidos se
/// piden a `provider`. `descriptors` explícitos tienen prioridad sobre la
/// metadata adjunta; si no hay ninguno (o está vacío) devuelve `func` mismo.
pub fn inject_function<R: 'static>(func: Arc<dyn Function<Output = R>>,
                                   descriptors: Option<ParamDescriptors>,
                                   provider: Arc<dyn ParameterProvider>)
                                   -> Arc<dyn Function<Output = R>> {
    Injector::new(provider).function(func, descriptors)
}
