//! Macros utilitarias para construir argumentos y descriptores.
//!
//! Exportadas en la raíz del crate:
//!   use inject_core::{args, descriptors};

/// Construye un `Arguments` a partir de literales JSON. `_` marca una posición
/// ausente. Cada elemento debe ser un único token (usar paréntesis para
/// negativos: `(-5)`).
///
/// ```ignore
/// let a = args!["x", _, true]; // [Some("x"), None, Some(true)]
/// let empty = args![];
/// ```
#[macro_export]
macro_rules! args {
    (@item _) => { None };
    (@item $v:tt) => { Some($crate::__serde_json::json!($v)) };
    () => { $crate::model::Arguments::none() };
    ($($item:tt),+ $(,)?) => {
        $crate::model::Arguments::new(vec![$($crate::args!(@item $item)),+])
    };
}

/// Construye `ParamDescriptors`. `_` marca una posición sin descriptor.
///
/// ```ignore
/// let d = descriptors![_, ParamType::of::<ClassB>(), ParamType::Number];
/// ```
#[macro_export]
macro_rules! descriptors {
    (@acc [$($done:expr),*]) => { $crate::model::ParamDescriptors::new(vec![$($done),*]) };
    (@acc [$($done:expr),*] _ $(, $($rest:tt)*)?) => {
        $crate::descriptors!(@acc [$($done,)* None] $($($rest)*)?)
    };
    (@acc [$($done:expr),*] $head:expr $(, $($rest:tt)*)?) => {
        $crate::descriptors!(@acc [$($done,)* Some($head)] $($($rest)*)?)
    };
    () => { $crate::model::ParamDescriptors::default() };
    ($($item:tt)+) => { $crate::descriptors!(@acc [] $($item)+) };
}
