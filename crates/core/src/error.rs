/// Domain errors raised while interpreting a listing request.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `lang` named a code that is neither ISO 639 nor a known wiki variant.
    #[error("No such language: {0}")]
    InvalidLanguage(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
