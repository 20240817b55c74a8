//! Contratos de los callables envolvibles.
//!
//! Un callable es un `Arc<dyn Constructor<..>>` o un `Arc<dyn Function<..>>`.
//! La identidad de un callable es la dirección de su `Arc`: los wrappers
//! devuelven el mismo `Arc` cuando no hay metadata (ver `same_callable`).

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::InjectError;
use crate::metadata::MetadataSlot;
use crate::model::{Arguments, ParamDescriptors};

pub mod class;
pub mod native_fn;

pub use class::Class;
pub use native_fn::NativeFn;

/// Identificador estable de un callable (clave del `MetadataRegistry`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CallableId(Uuid);

impl CallableId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CallableId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CallableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lo que el accesor de metadata necesita saber de un callable.
pub trait ParamMetadata {
    fn id(&self) -> CallableId;

    fn name(&self) -> &str;

    /// Id del callable original. Los wrappers lo delegan a su target, así
    /// que un wrapper (o un wrapper de un wrapper) reporta el id de origen.
    fn target_id(&self) -> CallableId {
        self.id()
    }

    /// Datos asociados al callable (sus "miembros estáticos"). Los wrappers
    /// devuelven los del target.
    fn static_data(&self) -> Option<&Value> {
        None
    }

    /// Slot donde `attach_descriptors` registra descriptores. `None` si el
    /// callable no admite metadata adjunta.
    fn metadata_slot(&self) -> Option<&MetadataSlot> {
        None
    }

    /// Descriptores declarados por el propio callable (equivalente a la
    /// reflexión de tipos de parámetros).
    fn reflected_param_types(&self) -> Option<ParamDescriptors> {
        None
    }
}

/// Callable que produce una instancia de `Instance`.
pub trait Constructor: ParamMetadata + Send + Sync {
    type Instance;

    fn construct(&self, args: Arguments) -> Result<Self::Instance, InjectError>;
}

/// Callable ordinario que devuelve `Output`.
pub trait Function: ParamMetadata + Send + Sync {
    type Output;

    fn call(&self, args: Arguments) -> Result<Self::Output, InjectError>;
}

/// `true` si ambos `Arc` apuntan al mismo callable.
pub fn same_callable<A: ?Sized, B: ?Sized>(a: &Arc<A>, b: &Arc<B>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
