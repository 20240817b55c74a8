//! Inyección de parámetros en constructores y funciones.
//!
//! Ambos wrappers deciden una sola vez, al envolver, si hay metadata: sin
//! descriptores devuelven el callable original; con descriptores devuelven un
//! wrapper que en cada invocación ejecuta `resolve` y delega en el original.

use std::sync::Arc;

use log::debug;

use crate::callable::{Constructor, Function};
use crate::metadata::{AttachedMetadata, MetadataSource};
use crate::model::ParamDescriptors;

pub mod config;
pub mod constructor;
pub mod function;
pub mod provider;
pub mod resolve;

pub use config::{ExtraArgs, InjectorConfig};
pub use constructor::{inject_constructor, InjectedConstructor};
pub use function::{inject_function, InjectedFunction};
pub use provider::{provider_fn, FnProvider, ParameterProvider};
pub use resolve::{resolve, resolve_with};

/// Combina provider, fuente de metadata y configuración para crear wrappers.
pub struct Injector<S = AttachedMetadata> {
    provider: Arc<dyn ParameterProvider>,
    source: S,
    config: InjectorConfig,
}

impl Injector<AttachedMetadata> {
    pub fn new(provider: Arc<dyn ParameterProvider>) -> Self {
        Self { provider, source: AttachedMetadata, config: InjectorConfig::default() }
    }
}

impl<S: MetadataSource> Injector<S> {
    /// Cambia la fuente de metadata (p.ej. un `MetadataRegistry`).
    pub fn with_source<S2: MetadataSource>(self, source: S2) -> Injector<S2> {
        Injector { provider: self.provider, source, config: self.config }
    }

    pub fn with_config(mut self, config: InjectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    pub fn constructor<T: 'static>(&self, ty: Arc<dyn Constructor<Instance = T>>) -> Arc<dyn Constructor<Instance = T>> {
        match self.source.lookup(ty.as_ref()) {
            None => {
                debug!("inject_constructor('{}'): no parameter metadata, returning original", ty.name());
                ty
            }
            Some(descriptors) => {
                debug!("inject_constructor('{}'): wrapping {} parameters", ty.name(), descriptors.len());
                Arc::new(InjectedConstructor::new(ty, descriptors, Arc::clone(&self.provider), self.config))
            }
        }
    }

    pub fn function<R: 'static>(&self,
                                func: Arc<dyn Function<Output = R>>,
                                descriptors: Option<ParamDescriptors>)
                                -> Arc<dyn Function<Output = R>> {
        // Una lista explícita (aunque esté vacía) excluye la consulta a la fuente.
        let effective = match descriptors {
            Some(explicit) => explicit.non_empty(),
            None => self.source.lookup(func.as_ref()),
        };
        match effective {
            None => {
                debug!("inject_function('{}'): no parameter metadata, returning original", func.name());
                func
            }
            Some(descriptors) => {
                debug!("inject_function('{}'): wrapping {} parameters", func.name(), descriptors.len());
                Arc::new(InjectedFunction::new(func, descriptors, Arc::clone(&self.provider), self.config))
            }
        }
    }
}
