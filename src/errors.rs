//! Custom error types used by this crate

/// Custom `Result` to prepopulate `Error` type
pub type Result<T> = std::result::Result<T, Error>;

/// A general error in parsing an NMEA/AIS message
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    Nmea { msg: String },
    Checksum { expected: u8, found: u8 },
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::Nmea { msg } => format!("error parsing NMEA content: {}", msg),
            Self::Checksum { expected, found } => {
                format!("checksum error; expected 0x{expected:x}, found 0x{found:x}")
            }
        };
        f.write_str(&msg)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Self::Nmea { msg: err.into() }
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Self::Nmea { msg: err }
    }
}

impl<T: std::fmt::Debug> From<nom::Err<nom::error::Error<T>>> for Error {
    fn from(err: nom::Err<nom::error::Error<T>>) -> Self {
        Self::Nmea {
            msg: format!("{:?}", err),
        }
    }
}
