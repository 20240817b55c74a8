use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("no se pudo serializar la instancia de {descriptor}: {source}")]
    Serialize {
        descriptor: String,
        #[source]
        source: serde_json::Error,
    },
}
