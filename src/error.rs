use crate::big_int_format::OutputFormat;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("digit index {index} is out of range for a number of {len} digits")]
    DigitIndexOutOfRange { index: usize, len: usize },
    #[error("output format `{0}` is not supported yet")]
    UnsupportedFormat(OutputFormat),
    #[error("unknown output format `{0}`")]
    InvalidOutputFormat(String),
    #[error("modulo by zero")]
    ModuloByZero,
}

pub type Result<T> = std::result::Result<T, Error>;
