pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("RFPI must be {expected} bytes, got {actual}")]
    RfpiLength { expected: usize, actual: usize },

    #[error("Invalid RFPI string: {0}")]
    RfpiParse(String),

    #[error("Unknown {kind} value: 0x{value:X}")]
    UnknownValue { kind: &'static str, value: u32 },
}
