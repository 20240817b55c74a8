//! Argumentos de invocación.
//!
//! `Arguments` es la lista posicional que recibe un callable. Una posición
//! ausente (`None`) o explícitamente vacía (`Value::Null`) se considera
//! "no pasada" y es la que el provider puede completar.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::InjectError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments(Vec<Option<Value>>);

impl Arguments {
    pub fn new(items: Vec<Option<Value>>) -> Self {
        Self(items)
    }

    /// Lista sin argumentos (invocación `f()`).
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Valor presente en `index`. Fuera de rango, `None` y `Null` son ausencia.
    pub fn value(&self, index: usize) -> Option<&Value> {
        match self.0.get(index) {
            Some(Some(Value::Null)) | Some(None) | None => None,
            Some(Some(v)) => Some(v),
        }
    }

    pub fn is_present(&self, index: usize) -> bool {
        self.value(index).is_some()
    }

    /// Extrae (clonando) el valor de `index` normalizando la ausencia a `None`.
    pub fn take_passed(&self, index: usize) -> Option<Value> {
        self.value(index).cloned()
    }

    /// Decodifica el argumento `index` a un tipo concreto.
    pub fn get<T: DeserializeOwned>(&self, index: usize) -> Result<T, InjectError> {
        let v = self.value(index).ok_or(InjectError::MissingArgument { index })?;
        serde_json::from_value(v.clone())
            .map_err(|e| InjectError::InvalidArgument { index, reason: e.to_string() })
    }

    /// Como `get` pero devolviendo `None` si la posición está ausente.
    pub fn get_opt<T: DeserializeOwned>(&self, index: usize) -> Result<Option<T>, InjectError> {
        if self.is_present(index) { self.get(index).map(Some) } else { Ok(None) }
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&Value>> {
        self.0.iter().map(Option::as_ref)
    }

    /// Argumentos a partir de la posición `from` (tal cual, sin normalizar).
    pub fn tail(&self, from: usize) -> impl Iterator<Item = &Option<Value>> {
        self.0.iter().skip(from)
    }

    pub fn push(&mut self, item: Option<Value>) {
        self.0.push(item);
    }
}

impl From<Vec<Option<Value>>> for Arguments {
    fn from(items: Vec<Option<Value>>) -> Self {
        Self(items)
    }
}

impl From<Vec<Value>> for Arguments {
    fn from(items: Vec<Value>) -> Self {
        Self(items.into_iter().map(Some).collect())
    }
}

impl FromIterator<Option<Value>> for Arguments {
    fn from_iter<I: IntoIterator<Item = Option<Value>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_out_of_range_are_absent() {
        let a = Arguments::new(vec![Some(json!("x")), Some(Value::Null), None]);
        assert!(a.is_present(0));
        assert!(!a.is_present(1));
        assert!(!a.is_present(2));
        assert!(!a.is_present(10));
        assert_eq!(a.take_passed(1), None);
    }

    #[test]
    fn get_decodes_or_reports_position() {
        let a = Arguments::from(vec![json!("x"), json!(6)]);
        assert_eq!(a.get::<String>(0).unwrap(), "x");
        assert_eq!(a.get::<i64>(1).unwrap(), 6);
        assert_eq!(a.get::<String>(2), Err(InjectError::MissingArgument { index: 2 }));
        assert!(matches!(a.get::<bool>(0), Err(InjectError::InvalidArgument { index: 0, .. })));
        assert_eq!(a.get_opt::<bool>(3).unwrap(), None);
    }
}
