use std::sync::Arc;

use paraminject_rust::config::config;
use paraminject_rust::errors::CoreError;
use paraminject_rust::{container_from_config, injector_from_config};

use inject_core::{args, descriptors, Arguments, Class, Constructor, Function, NativeFn, ParamType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Database {
    url: String,
}

#[derive(Debug)]
struct Repository {
    table: String,
    db: Database,
    read_only: bool,
}

fn main() {
    // Cargar variables de entorno desde .env si existe (antes de leer la configuración)
    let _ = dotenvy::dotenv();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CoreError> {
    let config = config()?;
    println!("config: extra_args={} strict_container={}", config.injector.extra_args, config.container.strict);

    let container = container_from_config(config);
    container.register_instance(&Database { url: "postgres://localhost/demo".into() })?;
    container.register_value(ParamType::String, serde_json::json!("users"));
    let injector = injector_from_config(config, Arc::new(container));

    // Constructor con tipos declarados: los parámetros omitidos salen del container
    let repository: Arc<dyn Constructor<Instance = Repository>> =
        Class::new("Repository", |a: Arguments| {
            Ok(Repository { table: a.get(0)?, db: a.get(1)?, read_only: a.get_opt(2)?.unwrap_or(false) })
        }).with_param_types(vec![ParamType::String, ParamType::of::<Database>(), ParamType::Boolean])
          .into_constructor();
    let repository = injector.constructor(repository);

    let from_container = repository.construct(args![])?;
    println!("Repository(): table={} db={} read_only={}",
             from_container.table, from_container.db.url, from_container.read_only);
    let explicit = repository.construct(args!["orders", {"url": "sqlite://memory"}, true])?;
    println!("Repository(\"orders\", ..): table={} db={} read_only={}", explicit.table, explicit.db.url, explicit.read_only);

    // Función: el primer parámetro no tiene descriptor y se pasa siempre
    let greet: Arc<dyn Function<Output = String>> = NativeFn::new("greet", |a: Arguments| {
                                                        let who: String = a.get(0)?;
                                                        let db: Database = a.get(1)?;
                                                        Ok(format!("hola {who} desde {}", db.url))
                                                    }).into_function();
    let greet = injector.function(greet, Some(descriptors![_, ParamType::of::<Database>()]));
    println!("{}", greet.call(args!["mundo"])?);

    Ok(())
}
