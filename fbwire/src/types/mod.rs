//! Type integration with external types
//!
//! Calendar codec and [`Encode`][e] implementation for external types.
//!
//! Available for:
//!
//! - [`time`][::time]'s [`Date`][td], [`Time`][tt], [`PrimitiveDateTime`][tp],
//!   [`OffsetDateTime`][to], [`UtcDateTime`][tu]
//! - [`serde`]'s [`Serialize`][ss] via [`Json`], requires `json` feature
//!
//! [e]: crate::Encode
//! [ss]: serde::Serialize
//! [td]: ::time::Date
//! [tt]: ::time::Time
//! [tp]: ::time::PrimitiveDateTime
//! [to]: ::time::OffsetDateTime
//! [tu]: ::time::UtcDateTime

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "json")]
pub use json::Json;

pub mod time;
