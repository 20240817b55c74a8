//! Descriptores de tipo de parámetro.
//!
//! Un `ParamType` es un token opaco y comparable: los providers hacen `match`
//! sobre sus variantes para elegir un valor de respaldo. `ParamDescriptors` es
//! la secuencia posicional (alineada con los parámetros declarados) donde cada
//! posición puede no tener descriptor.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tipo esperado de un parámetro posicional.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name")]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    /// Tipo nominal (una "clase" registrada por nombre).
    Named(String),
}

impl ParamType {
    /// Construye un descriptor nominal a partir de un nombre.
    pub fn named(name: impl Into<String>) -> Self {
        ParamType::Named(name.into())
    }

    /// Descriptor nominal para un tipo Rust. Usa el nombre corto (sin path)
    /// para que coincida con el nombre con el que se registran las clases.
    pub fn of<T: ?Sized>() -> Self {
        let full = std::any::type_name::<T>();
        let short = full.rsplit("::").next().unwrap_or(full);
        ParamType::Named(short.to_string())
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::String => f.write_str("String"),
            ParamType::Number => f.write_str("Number"),
            ParamType::Boolean => f.write_str("Boolean"),
            ParamType::Array => f.write_str("Array"),
            ParamType::Object => f.write_str("Object"),
            ParamType::Named(n) => f.write_str(n),
        }
    }
}

/// Secuencia ordenada de descriptores (posiciones sin descriptor = `None`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamDescriptors(Vec<Option<ParamType>>);

impl ParamDescriptors {
    pub fn new(items: Vec<Option<ParamType>>) -> Self {
        Self(items)
    }

    /// Todas las posiciones con descriptor.
    pub fn typed(items: impl IntoIterator<Item = ParamType>) -> Self {
        Self(items.into_iter().map(Some).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Descriptor de la posición `index` (`None` si no tiene o está fuera de rango).
    pub fn get(&self, index: usize) -> Option<&ParamType> {
        self.0.get(index).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&ParamType>> {
        self.0.iter().map(Option::as_ref)
    }

    /// `None` cuando la secuencia está vacía: "sin metadata" y "metadata
    /// vacía" son equivalentes para los wrappers.
    pub fn non_empty(self) -> Option<Self> {
        if self.0.is_empty() { None } else { Some(self) }
    }
}

impl From<Vec<Option<ParamType>>> for ParamDescriptors {
    fn from(items: Vec<Option<ParamType>>) -> Self {
        Self(items)
    }
}

impl From<Vec<ParamType>> for ParamDescriptors {
    fn from(items: Vec<ParamType>) -> Self {
        Self::typed(items)
    }
}

impl FromIterator<Option<ParamType>> for ParamDescriptors {
    fn from_iter<I: IntoIterator<Item = Option<ParamType>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
