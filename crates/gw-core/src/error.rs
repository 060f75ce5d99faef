use thiserror::Error;

pub type GwResult<T> = Result<T, GwError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GwError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
