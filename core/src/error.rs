use thiserror::Error;

/// Errors surfaced by the component layer before anything is rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A custom component has no renderer registered for its identifier.
    #[error("no renderer registered for custom component `{0}`")]
    UnregisteredCustomComponent(String),
}
