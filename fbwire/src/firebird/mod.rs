//! Firebird Wire Protocol Constants
//!
//! Requests carry statement shapes in BLR, the Binary Language
//! Representation, paired with a value buffer aligned by xdr rules.
//!
//! ## BLR Message
//!
//! ```text
//! ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━┓
//! ┃            Envelope            ┃        per item (n times)    ┃   End    ┃
//! ┣━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━┫
//! ┃ 5 | 2 | 4 | 0 | lo(2n) | hi(2n)┃ fragment(1..3) | 7 | 0       ┃ 255 | 76 ┃
//! ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━┛
//! ```
//!
//! Each item is declared twice in the count because every value is followed
//! by a `short` null indicator slot.
pub mod blr;
mod sql_type;
mod version;
mod error;

pub use sql_type::SqlType;
pub use version::ProtocolVersion;
pub use error::{ProtocolError, UnsupportedType};
