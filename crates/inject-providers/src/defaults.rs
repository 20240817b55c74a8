//! Provider con valores fijos por tipo primitivo.

use inject_core::{InjectError, ParamType, ParameterProvider};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::descriptor_label;

/// Devuelve el valor pasado si lo hay; si no, el valor configurado para el
/// tipo primitivo del descriptor. Para tipos nominales o posiciones sin
/// descriptor devuelve un texto determinista `unknown reflect type: <tipo>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsProvider {
    pub string: Value,
    pub number: Value,
    pub boolean: Value,
    pub array: Value,
    pub object: Value,
}

impl Default for DefaultsProvider {
    fn default() -> Self {
        Self { string: json!("stringArg"),
               number: json!(5),
               boolean: json!(true),
               array: json!([]),
               object: json!({}) }
    }
}

impl DefaultsProvider {
    /// Valor de respaldo para `descriptor` (ignora el valor pasado).
    pub fn fallback(&self, descriptor: Option<&ParamType>) -> Value {
        match descriptor {
            Some(ParamType::String) => self.string.clone(),
            Some(ParamType::Number) => self.number.clone(),
            Some(ParamType::Boolean) => self.boolean.clone(),
            Some(ParamType::Array) => self.array.clone(),
            Some(ParamType::Object) => self.object.clone(),
            Some(ParamType::Named(_)) | None => json!(format!("unknown reflect type: {}", descriptor_label(descriptor))),
        }
    }
}

impl ParameterProvider for DefaultsProvider {
    fn provide(&self, passed: Option<Value>, descriptor: Option<&ParamType>) -> Result<Value, InjectError> {
        Ok(passed.unwrap_or_else(|| self.fallback(descriptor)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_get_configured_values() {
        let p = DefaultsProvider::default();
        assert_eq!(p.provide(None, Some(&ParamType::String)).unwrap(), json!("stringArg"));
        assert_eq!(p.provide(None, Some(&ParamType::Number)).unwrap(), json!(5));
        assert_eq!(p.provide(None, Some(&ParamType::Boolean)).unwrap(), json!(true));
        assert_eq!(p.provide(None, Some(&ParamType::Array)).unwrap(), json!([]));
    }

    #[test]
    fn unknown_types_get_a_deterministic_text() {
        let p = DefaultsProvider::default();
        assert_eq!(p.provide(None, Some(&ParamType::named("Db"))).unwrap(), json!("unknown reflect type: Db"));
        assert_eq!(p.provide(None, None).unwrap(), json!("unknown reflect type: undefined"));
    }

    #[test]
    fn passed_values_are_echoed() {
        let p = DefaultsProvider::default();
        assert_eq!(p.provide(Some(json!(6)), Some(&ParamType::Number)).unwrap(), json!(6));
    }
}
