use thiserror::Error;

pub type AqResult<T> = Result<T, AqError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AqError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative value for {what}: {value}")]
    Negative { what: &'static str, value: f64 },
}
