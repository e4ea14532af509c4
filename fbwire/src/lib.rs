//! Firebird Wire Encoder
//!
//! Encode statement parameters and column descriptors into the BLR message
//! and XDR aligned data the Firebird wire protocol expects.
//!
//! # Examples
//!
//! Parameters:
//!
//! ```
//! use fbwire::{Params, ProtocolVersion};
//!
//! let params = Params::new()
//!     .bind(420)
//!     .bind("Foo")
//!     .bind(None::<i64>);
//!
//! let encoded = params.encode(ProtocolVersion::V13);
//!
//! // [version5, begin, message, 0, count * 2, 0]
//! assert_eq!(&encoded.blr[..6], &[5, 2, 4, 0, 6, 0]);
//! // [blr_end, blr_eoc]
//! assert_eq!(&encoded.blr[encoded.blr.len() - 2..], &[255, 76]);
//! ```
//!
//! Column descriptors:
//!
//! ```
//! use fbwire::{SqlType, XSqlVar};
//!
//! let xsqlda = [
//!     XSqlVar::new(SqlType::Varying).with_len(32),
//!     XSqlVar::new(SqlType::Int64).with_scale(-2),
//! ];
//!
//! let blr = fbwire::calc_blr(&xsqlda);
//!
//! assert_eq!(&blr[6..], &[37, 32, 0, 7, 0, 16, 254, 7, 0, 255, 76]);
//! ```
//!
//! Connection string:
//!
//! ```
//! use fbwire::Config;
//!
//! let config = Config::parse("sysdba:masterkey@localhost/employee").unwrap();
//! assert_eq!(config.addr(), "localhost:3050");
//! ```

pub mod common;
mod ext;

// Protocol
pub mod firebird;
pub mod endian;
pub mod xdr;

// Encoding
mod value;
pub mod types;
pub mod encode;

// Operation
pub mod params;
pub mod describe;

// Configuration
pub mod config;

mod error;


pub use value::Value;
pub use encode::{Encode, Fragment};
pub use params::{EncodedParams, NullBitmap, Params, params_to_blr, write_params};
pub use describe::{XSqlVar, calc_blr, calc_blr_strict};

pub use firebird::{ProtocolVersion, SqlType};
pub use config::Config;
pub use error::{Error, ErrorKind, Result};

#[cfg(feature = "json")]
pub use types::Json;
