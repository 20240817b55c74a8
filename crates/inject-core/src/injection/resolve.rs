//! Motor de resolución de parámetros.
//!
//! Para cada posición descrita decide el valor final preguntando al provider
//! con el valor pasado (o su ausencia) y el descriptor. No guarda estado entre
//! llamadas y no origina errores propios: sólo propaga los del provider.

use log::trace;

use crate::errors::InjectError;
use crate::model::{Arguments, ParamDescriptors};

use super::config::ExtraArgs;
use super::provider::ParameterProvider;

/// Resuelve con la política por defecto (`ExtraArgs::Truncate`).
pub fn resolve(descriptors: &ParamDescriptors,
               args: &Arguments,
               provider: &dyn ParameterProvider)
               -> Result<Arguments, InjectError> {
    resolve_with(descriptors, args, provider, ExtraArgs::Truncate)
}

/// La salida tiene exactamente `descriptors.len()` posiciones, más los
/// argumentos sobrantes del caller cuando `extra == ExtraArgs::Forward`.
pub fn resolve_with(descriptors: &ParamDescriptors,
                    args: &Arguments,
                    provider: &dyn ParameterProvider,
                    extra: ExtraArgs)
                    -> Result<Arguments, InjectError> {
    let mut resolved = Arguments::none();
    for (index, descriptor) in descriptors.iter().enumerate() {
        let passed = args.take_passed(index);
        trace!("resolve[{index}]: passed={} descriptor={:?}", passed.is_some(), descriptor);
        resolved.push(Some(provider.provide(passed, descriptor)?));
    }
    if extra == ExtraArgs::Forward {
        for item in args.tail(descriptors.len()) {
            resolved.push(item.clone());
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::injection::provider::provider_fn;
    use crate::model::ParamType;
    use crate::{args, descriptors};
    use serde_json::{json, Value};

    #[test]
    fn provider_sees_descriptor_and_absence() {
        let p = provider_fn(|passed, d| Ok(passed.unwrap_or_else(|| json!(format!("fill:{}", d.map(|t| t.to_string()).unwrap_or_default())))));
        let d = descriptors![ParamType::String, _];
        let out = resolve(&d, &args![], p.as_ref()).unwrap();
        assert_eq!(out.get::<String>(0).unwrap(), "fill:String");
        assert_eq!(out.get::<String>(1).unwrap(), "fill:");
    }

    #[test]
    fn provider_may_return_nothing() {
        let p = provider_fn(|_, _| Ok(Value::Null));
        let out = resolve(&descriptors![ParamType::Number], &args![], p.as_ref()).unwrap();
        assert_eq!(out.len(), 1);
        assert!(!out.is_present(0));
    }
}
