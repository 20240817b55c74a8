//! Propiedades del motor de resolución.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use inject_core::injection::resolve_with;
use inject_core::{args, descriptors, provider_fn, resolve, Arguments, ExtraArgs, Function, InjectError, Injector,
                  InjectorConfig, NativeFn, ParamType, ParameterProvider};
use serde_json::{json, Value};

fn sentinel_provider() -> Arc<dyn ParameterProvider> {
    provider_fn(|passed, d| {
        if let Some(v) = passed {
            return Ok(v);
        }
        Ok(match d {
            Some(ParamType::String) => json!("S"),
            Some(ParamType::Number) => json!(10),
            Some(ParamType::Boolean) => json!(false),
            Some(other) => json!(format!("<{other}>")),
            None => Value::Null,
        })
    })
}

#[test]
fn output_length_follows_descriptors() {
    let d = descriptors![ParamType::String, ParamType::Number, ParamType::Boolean];
    let p = sentinel_provider();

    let short = resolve(&d, &args![], p.as_ref()).unwrap();
    assert_eq!(short.len(), 3);
    assert_eq!(short, args!["S", 10, false]);

    let long = resolve(&d, &args!["a", 1, true, "extra", 99], p.as_ref()).unwrap();
    assert_eq!(long, args!["a", 1, true]);
}

#[test]
fn partial_override_keeps_prefix_and_fills_suffix() {
    let d = descriptors![ParamType::String, ParamType::Number, ParamType::Boolean, ParamType::named("Db")];
    let p = sentinel_provider();
    for k in 0..=d.len() {
        let passed: Arguments = (0..k).map(|i| Some(json!(format!("p{i}")))).collect();
        let out = resolve(&d, &passed, p.as_ref()).unwrap();
        for i in 0..d.len() {
            let v = out.value(i).cloned();
            if i < k {
                assert_eq!(v, Some(json!(format!("p{i}"))));
            } else {
                assert_ne!(v, Some(json!(format!("p{i}"))));
            }
        }
    }
}

#[test]
fn forward_policy_appends_extra_arguments() {
    let d = descriptors![ParamType::Number];
    let out = resolve_with(&d, &args![_, "x", _, 3], sentinel_provider().as_ref(), ExtraArgs::Forward).unwrap();
    assert_eq!(out, args![10, "x", _, 3]);
}

#[test]
fn first_provider_error_stops_resolution() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let p = provider_fn(move |passed, d| {
        seen.fetch_add(1, Ordering::SeqCst);
        match (passed, d) {
            (Some(v), _) => Ok(v),
            (None, Some(ParamType::Named(n))) => Err(InjectError::UnknownDescriptor(n.clone())),
            (None, _) => Ok(Value::Null),
        }
    });
    let d = descriptors![ParamType::Number, ParamType::named("Missing"), ParamType::Boolean];
    let err = resolve(&d, &args![1], p.as_ref()).unwrap_err();
    assert_eq!(err, InjectError::UnknownDescriptor("Missing".into()));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn wrapper_forwards_extra_arguments_when_configured() {
    let f: Arc<dyn Function<Output = usize>> = NativeFn::new("count", |a: Arguments| Ok(a.len())).into_function();
    let truncating = Injector::new(sentinel_provider()).function(Arc::clone(&f), Some(descriptors![ParamType::Number]));
    assert_eq!(truncating.call(args![1, 2, 3]).unwrap(), 1);

    let forwarding = Injector::new(sentinel_provider()).with_config(InjectorConfig { extra_args: ExtraArgs::Forward })
                                                       .function(f, Some(descriptors![ParamType::Number]));
    assert_eq!(forwarding.call(args![1, 2, 3]).unwrap(), 3);
}

#[test]
fn wrappers_can_be_shared_across_threads() {
    let f: Arc<dyn Function<Output = String>> = NativeFn::new("greet", |a: Arguments| {
        Ok(format!("{}:{}", a.get::<String>(0)?, a.get::<i64>(1)?))
    }).into_function();
    let injected = Injector::new(sentinel_provider()).function(f, Some(descriptors![ParamType::String, ParamType::Number]));

    let handles: Vec<_> = (0..8).map(|i| {
                                    let injected = Arc::clone(&injected);
                                    thread::spawn(move || {
                                        let explicit = injected.call(args![_, i]).unwrap();
                                        let filled = injected.call(args![]).unwrap();
                                        (explicit, filled)
                                    })
                                })
                                .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let (explicit, filled) = h.join().unwrap();
        assert_eq!(explicit, format!("S:{i}"));
        assert_eq!(filled, "S:10");
    }
}
