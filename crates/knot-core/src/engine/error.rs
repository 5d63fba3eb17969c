use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested operation is reserved but has no specified behavior yet.
    #[error("'{feature}' is reserved but not implemented")]
    NotImplemented { feature: &'static str },
}
