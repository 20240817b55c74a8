//! `ContainerProvider`: resuelve descriptores a instancias registradas.
//!
//! Cada descriptor tiene como mucho una instancia (singleton por tipo). No
//! hay ciclo de vida ni scopes: la instancia se guarda serializada y se clona
//! en cada resolución.

use dashmap::DashMap;
use inject_core::{InjectError, ParamType, ParameterProvider};
use log::{debug, trace};
use serde::Serialize;
use serde_json::Value;

use crate::defaults::DefaultsProvider;
use crate::descriptor_label;
use crate::errors::ContainerError;

#[derive(Debug, Default)]
pub struct ContainerProvider {
    instances: DashMap<ParamType, Value>,
    /// Si es `true`, un descriptor sin registro es un error en vez de usar
    /// `fallback`.
    strict: bool,
    fallback: DefaultsProvider,
}

impl ContainerProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_fallback(mut self, fallback: DefaultsProvider) -> Self {
        self.fallback = fallback;
        self
    }

    /// Registra `instance` para `descriptor`, reemplazando la anterior.
    pub fn register<T: Serialize>(&self, descriptor: ParamType, instance: &T) -> Result<(), ContainerError> {
        let value = serde_json::to_value(instance).map_err(|source| ContainerError::Serialize { descriptor: descriptor.to_string(),
                                                                                                  source })?;
        self.register_value(descriptor, value);
        Ok(())
    }

    /// Registra `instance` bajo el descriptor nominal de su tipo (`ParamType::of::<T>()`).
    pub fn register_instance<T: Serialize>(&self, instance: &T) -> Result<(), ContainerError> {
        self.register(ParamType::of::<T>(), instance)
    }

    pub fn register_value(&self, descriptor: ParamType, value: Value) {
        debug!("container: registered instance for {descriptor}");
        self.instances.insert(descriptor, value);
    }

    pub fn contains(&self, descriptor: &ParamType) -> bool {
        self.instances.contains_key(descriptor)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl ParameterProvider for ContainerProvider {
    fn provide(&self, passed: Option<Value>, descriptor: Option<&ParamType>) -> Result<Value, InjectError> {
        if let Some(v) = passed {
            return Ok(v);
        }
        if let Some(found) = descriptor.and_then(|d| self.instances.get(d)) {
            trace!("container: resolved {}", found.key());
            return Ok(found.value().clone());
        }
        if self.strict {
            return Err(InjectError::UnknownDescriptor(descriptor_label(descriptor)));
        }
        Ok(self.fallback.fallback(descriptor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Db {
        url: String,
    }

    #[test]
    fn registered_instances_win_over_fallback() {
        let c = ContainerProvider::new();
        c.register_instance(&Db { url: "mem://".into() }).unwrap();
        assert!(c.contains(&ParamType::named("Db")));
        assert_eq!(c.provide(None, Some(&ParamType::named("Db"))).unwrap(), json!({"url": "mem://"}));
        assert_eq!(c.provide(None, Some(&ParamType::Number)).unwrap(), json!(5));
    }

    #[test]
    fn strict_mode_rejects_unknown_descriptors() {
        let c = ContainerProvider::new().strict(true);
        assert_eq!(c.provide(None, Some(&ParamType::named("Cache"))),
                   Err(InjectError::UnknownDescriptor("Cache".into())));
        assert_eq!(c.provide(None, None), Err(InjectError::UnknownDescriptor("undefined".into())));
        assert_eq!(c.provide(Some(json!(1)), Some(&ParamType::named("Cache"))).unwrap(), json!(1));
    }

    #[test]
    fn custom_fallback_is_used_for_unregistered_primitives() {
        let defaults = DefaultsProvider { number: json!(0), ..DefaultsProvider::default() };
        let c = ContainerProvider::new().with_fallback(defaults);
        assert_eq!(c.provide(None, Some(&ParamType::Number)).unwrap(), json!(0));
        assert_eq!(c.provide(None, Some(&ParamType::String)).unwrap(), json!("stringArg"));
    }

    #[test]
    fn register_replaces_previous_instance() {
        let c = ContainerProvider::new();
        c.register_value(ParamType::String, json!("a"));
        c.register_value(ParamType::String, json!("b"));
        assert_eq!(c.len(), 1);
        assert_eq!(c.provide(None, Some(&ParamType::String)).unwrap(), json!("b"));
    }
}
