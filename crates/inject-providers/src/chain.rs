//! `ChainProvider`: aplica una serie de providers en orden, de forma
//! determinista. El primero que no responda `UnknownDescriptor` decide.

use std::fmt;
use std::sync::Arc;

use inject_core::{InjectError, ParamType, ParameterProvider};
use serde_json::Value;

use crate::descriptor_label;

pub struct ChainProvider {
    pub providers: Vec<Arc<dyn ParameterProvider>>,
}

impl ChainProvider {
    /// Crea un `ChainProvider` vacío.
    pub fn new() -> Self {
        Self { providers: vec![] }
    }

    pub fn with_providers(providers: Vec<Arc<dyn ParameterProvider>>) -> Self {
        Self { providers }
    }

    pub fn push(mut self, provider: Arc<dyn ParameterProvider>) -> Self {
        self.providers.push(provider);
        self
    }
}

impl Default for ChainProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChainProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainProvider").field("providers", &self.providers.len()).finish()
    }
}

impl ParameterProvider for ChainProvider {
    /// Cualquier otro error corta la cadena y se devuelve tal cual.
    fn provide(&self, passed: Option<Value>, descriptor: Option<&ParamType>) -> Result<Value, InjectError> {
        if let Some(v) = passed {
            return Ok(v);
        }
        for p in self.providers.iter() {
            match p.provide(None, descriptor) {
                Err(e) if e.is_unknown_descriptor() => continue,
                other => return other,
            }
        }
        Err(InjectError::UnknownDescriptor(descriptor_label(descriptor)))
    }
}
