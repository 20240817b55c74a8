//! inject-providers: implementaciones de `ParameterProvider`.
//!
//! - `DefaultsProvider`: valores fijos por tipo primitivo.
//! - `ContainerProvider`: instancias registradas por descriptor (singleton por tipo).
//! - `ChainProvider`: compone providers en orden.

pub mod chain;
pub mod container;
pub mod defaults;
pub mod errors;

pub use chain::ChainProvider;
pub use container::ContainerProvider;
pub use defaults::DefaultsProvider;
pub use errors::ContainerError;

/// Nombre con el que se reporta un descriptor en errores y fallbacks.
pub(crate) fn descriptor_label(descriptor: Option<&inject_core::ParamType>) -> String {
    descriptor.map(|d| d.to_string()).unwrap_or_else(|| "undefined".to_string())
}
