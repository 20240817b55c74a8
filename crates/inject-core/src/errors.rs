//! Errores compartidos por providers y callables.
//!
//! El core nunca construye uno de estos errores por sí mismo: el motor de
//! resolución sólo devuelve (vía `?`) lo que haya devuelto el provider o el
//! callable envuelto.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum InjectError {
    #[error("unknown descriptor: {0}")] UnknownDescriptor(String),
    #[error("missing argument at position {index}")] MissingArgument { index: usize },
    #[error("invalid argument at position {index}: {reason}")] InvalidArgument { index: usize, reason: String },
    #[error("provider failed: {0}")] Provider(String),
    #[error("target failed: {0}")] Target(String),
}

impl InjectError {
    /// `true` cuando el provider no reconoce el descriptor. Lo usan los
    /// providers compuestos para decidir si delegar al siguiente.
    pub fn is_unknown_descriptor(&self) -> bool {
        matches!(self, InjectError::UnknownDescriptor(_))
    }
}
