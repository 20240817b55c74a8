//! Contrato del provider de parámetros.
//!
//! Un `ParameterProvider` recibe el valor pasado por el caller (si lo hubo) y
//! el descriptor de la posición, y devuelve el valor final. Si `passed` está
//! presente se espera que lo devuelva tal cual; el core confía en ello y no lo
//! comprueba.

use std::sync::Arc;

use serde_json::Value;

use crate::errors::InjectError;
use crate::model::ParamType;

pub trait ParameterProvider: Send + Sync {
    fn provide(&self, passed: Option<Value>, descriptor: Option<&ParamType>) -> Result<Value, InjectError>;
}

impl<P: ParameterProvider + ?Sized> ParameterProvider for Arc<P> {
    fn provide(&self, passed: Option<Value>, descriptor: Option<&ParamType>) -> Result<Value, InjectError> {
        (**self).provide(passed, descriptor)
    }
}

impl<P: ParameterProvider + ?Sized> ParameterProvider for Box<P> {
    fn provide(&self, passed: Option<Value>, descriptor: Option<&ParamType>) -> Result<Value, InjectError> {
        (**self).provide(passed, descriptor)
    }
}

/// Adaptador closure -> provider (ver `provider_fn`).
pub struct FnProvider<F>(F);

impl<F> ParameterProvider for FnProvider<F>
    where F: Fn(Option<Value>, Option<&ParamType>) -> Result<Value, InjectError> + Send + Sync
{
    fn provide(&self, passed: Option<Value>, descriptor: Option<&ParamType>) -> Result<Value, InjectError> {
        (self.0)(passed, descriptor)
    }
}

/// Envuelve una closure como provider compartible.
pub fn provider_fn<F>(f: F) -> Arc<dyn ParameterProvider>
    where F: Fn(Option<Value>, Option<&ParamType>) -> Result<Value, InjectError> + Send + Sync + 'static
{
    Arc::new(FnProvider(f))
}
