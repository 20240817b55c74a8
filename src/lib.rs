//! ParamInject Rust Library
//!
//! Este crate actúa como fachada de los crates del workspace:
//! - Re-exporta `inject_core` (wrappers, motor de resolución, metadata).
//! - Re-exporta `inject_providers` (container, defaults, cadena).
//! - Expone `config` (variables de entorno) y `errors`.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod errors;

pub use inject_core;
pub use inject_providers;

use std::sync::Arc;

use inject_core::{Injector, ParameterProvider};
use inject_providers::ContainerProvider;

use config::AppConfig;

/// Crea un `ContainerProvider` con el modo estricto de `config`.
pub fn container_from_config(config: &AppConfig) -> ContainerProvider {
    ContainerProvider::new().strict(config.container.strict)
}

/// Crea un `Injector` sobre `provider` con la configuración de `config`.
pub fn injector_from_config(config: &AppConfig, provider: Arc<dyn ParameterProvider>) -> Injector {
    Injector::new(provider).with_config(config.injector)
}
