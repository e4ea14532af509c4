//! `fbwire` error types.
use std::{backtrace::Backtrace, fmt};

use crate::{
    config::ParseError,
    firebird::{ProtocolError, UnsupportedType},
};

/// A specialized [`Result`] type for `fbwire` operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// All possible error from `fbwire` library.
pub struct Error {
    context: String,
    backtrace: Backtrace,
    kind: ErrorKind,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Prefix the error message with `context`.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}

/// All possible error kind from `fbwire` library.
pub enum ErrorKind {
    Config(ParseError),
    Protocol(ProtocolError),
    Unsupported(UnsupportedType),
}

macro_rules! from {
    (<$ty:ty>$pat:pat => $body:expr) => {
        impl From<$ty> for Error {
            fn from($pat: $ty) -> Self {
                let backtrace = std::backtrace::Backtrace::capture();
                Self { context: String::new(), backtrace, kind: $body }
            }
        }
    };
}

from!(<ErrorKind>e => e);
from!(<ParseError>e => ErrorKind::Config(e));
from!(<ProtocolError>e => ErrorKind::Protocol(e));
from!(<UnsupportedType>e => ErrorKind::Unsupported(e));

impl std::error::Error for Error { }

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.context.is_empty() {
            write!(f, "{}: ", self.context)?;
        }

        fmt::Display::fmt(&self.kind, f)?;

        if let std::backtrace::BacktraceStatus::Captured = self.backtrace.status() {
            let mut backtrace = self.backtrace.to_string();
            write!(f, "\n\n")?;
            writeln!(f, "Stack backtrace:")?;
            backtrace.truncate(backtrace.trim_end().len());
            write!(f, "{}", backtrace)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl std::error::Error for ErrorKind { }

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => fmt::Display::fmt(e, f),
            Self::Protocol(e) => fmt::Display::fmt(e, f),
            Self::Unsupported(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

#[cfg(test)]
mod test {
    use bytes::Bytes;

    use crate::{Config, XSqlVar, describe::calc_blr_strict, xdr};

    use super::*;

    fn parse() -> Result<Config> {
        Ok(Config::parse("user:pass@localhost:none/db")?)
    }

    fn describe() -> Result<Bytes> {
        Ok(calc_blr_strict(&[XSqlVar::from_code(1)])?)
    }

    fn read_user(mut frame: Bytes) -> Result<String> {
        Ok(xdr::decode_text(&mut frame)?.to_string())
    }

    #[test]
    fn convert() {
        let err = parse().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Config(_)));

        let err = describe().unwrap_err().context("describe");
        assert!(matches!(err.kind(), ErrorKind::Unsupported(e) if e.code() == 1));
        assert!(err.to_string().starts_with("describe: Unsupported sql type `1` at column 0"));

        let err = read_user(Bytes::from_static(&[0, 0, 0, 1, 0xff, 0, 0, 0])).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Protocol(ProtocolError::Utf8(_))));
        assert_eq!(read_user(Bytes::from_static(&[0, 0, 0, 1, b'a', 0, 0, 0])).unwrap(), "a");
    }
}
