use thiserror::Error;

/// Form-level validation failures. Always recoverable: the user edits and
/// resubmits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("As senhas não coincidem")]
    PasswordMismatch,

    #[error("A senha deve ter pelo menos {min} caracteres")]
    PasswordTooShort { min: usize },

    #[error("Selecione pelo menos uma permissão")]
    NoPermissions,

    #[error("Campo obrigatório: {0}")]
    MissingField(&'static str),

    #[error("Valor fora do intervalo: {0}")]
    OutOfRange(&'static str),
}
