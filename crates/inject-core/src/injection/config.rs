//! Configuración de los wrappers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Qué hacer con los argumentos del caller que exceden la lista de descriptores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraArgs {
    /// Se descartan: sólo se inyectan posiciones descritas.
    #[default]
    Truncate,
    /// Se añaden tal cual tras las posiciones resueltas.
    Forward,
}

impl FromStr for ExtraArgs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truncate" => Ok(ExtraArgs::Truncate),
            "forward" => Ok(ExtraArgs::Forward),
            other => Err(format!("unknown extra-args policy '{other}' (expected truncate|forward)")),
        }
    }
}

impl fmt::Display for ExtraArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtraArgs::Truncate => f.write_str("truncate"),
            ExtraArgs::Forward => f.write_str("forward"),
        }
    }
}

/// Parámetros de un `Injector`. Se fijan al crear el wrapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectorConfig {
    #[serde(default)]
    pub extra_args: ExtraArgs,
}
