//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`)
//! con los parámetros de los wrappers de inyección y del container.
use inject_core::{ExtraArgs, InjectorConfig};
use once_cell::sync::Lazy;
use std::env;

use crate::errors::core_error::CoreError;

/// Variable que fija la política para argumentos sobrantes (`truncate|forward`).
pub const ENV_EXTRA_ARGS: &str = "PARAMINJECT_EXTRA_ARGS";
/// Variable que activa el modo estricto del container (`true|false`).
pub const ENV_STRICT_CONTAINER: &str = "PARAMINJECT_STRICT_CONTAINER";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Configuración que se pasa a `Injector::with_config`.
    pub injector: InjectorConfig,
    /// Configuración del `ContainerProvider`.
    pub container: ContainerConfig,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerConfig {
    /// Un descriptor sin instancia registrada es un error en vez de un fallback.
    pub strict: bool,
}

impl AppConfig {
    /// Lee la configuración del entorno del proceso.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    /// Variables ausentes toman su valor por defecto.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let extra_args = match lookup(ENV_EXTRA_ARGS) {
            Some(raw) => raw.parse::<ExtraArgs>().map_err(CoreError::Config)?,
            None => ExtraArgs::default(),
        };
        let strict = match lookup(ENV_STRICT_CONTAINER) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                                              CoreError::Config(format!("{ENV_STRICT_CONTAINER}: expected true|false, got '{raw}'"))
                                          })?,
            None => false,
        };
        Ok(AppConfig { injector: InjectorConfig { extra_args },
                       container: ContainerConfig { strict } })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
/// Un valor inválido queda guardado como error; leer con `config()`.
pub static CONFIG: Lazy<Result<AppConfig, CoreError>> = Lazy::new(AppConfig::from_env);

/// Configuración global, o el error de configuración con el que se cargó.
pub fn config() -> Result<&'static AppConfig, CoreError> {
    loaded(&CONFIG)
}

fn loaded(result: &Result<AppConfig, CoreError>) -> Result<&AppConfig, CoreError> {
    match result {
        Ok(cfg) => Ok(cfg),
        Err(CoreError::Config(msg)) => Err(CoreError::Config(msg.clone())),
        Err(other) => Err(CoreError::Config(other.to_string())),
    }
}
