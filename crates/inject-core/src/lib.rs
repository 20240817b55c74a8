//! inject-core: inyección de parámetros en constructores y funciones.
//!
//! Dado un callable y un `ParameterProvider`, produce un callable equivalente
//! donde cada argumento omitido (o `null`) se pide al provider según el
//! descriptor de tipo de su posición. Sin metadata, el callable original se
//! devuelve sin envolver.
pub mod callable;
pub mod errors;
pub mod injection;
pub mod macros;
pub mod metadata;
pub mod model;

#[doc(hidden)]
pub use serde_json as __serde_json;

pub use callable::{same_callable, CallableId, Class, Constructor, Function, NativeFn, ParamMetadata};
pub use errors::InjectError;
pub use injection::{inject_constructor, inject_function, provider_fn, resolve, ExtraArgs, Injector, InjectorConfig, ParameterProvider};
pub use metadata::{attach_descriptors, has_attached_descriptors, param_descriptors, AttachedMetadata, MetadataRegistry, MetadataSource};
pub use model::{Arguments, ParamDescriptors, ParamType};
