//! External Data Representation framing.
//!
//! Opaque data is written as a big endian `u32` length, the bytes, then zero
//! padding up to the next multiple of 4.
use bytes::{Bytes, BytesMut};

use crate::{
    common::ByteStr,
    ext::{BufMutExt, BytesExt},
    firebird::ProtocolError,
};

/// Returns the number of zero bytes needed to align `len` to 4.
#[inline]
pub const fn pad_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Returns the total frame length of an opaque with `len` bytes.
#[inline]
pub const fn frame_len(len: usize) -> usize {
    4 + len + pad_len(len)
}

/// Encode bytes as xdr opaque.
pub fn encode_opaque(bytes: &[u8]) -> Bytes {
    let mut buf = BytesMut::with_capacity(frame_len(bytes.len()));
    buf.put_xdr_opaque(bytes);
    buf.freeze()
}

/// Encode string as xdr opaque of its utf8 bytes.
pub fn encode_text(string: &str) -> Bytes {
    encode_opaque(string.as_bytes())
}

/// Read one opaque frame from the front of `buf`.
pub fn decode_opaque(buf: &mut Bytes) -> Result<Bytes, ProtocolError> {
    buf.get_xdr_opaque()
}

/// Read one opaque frame from the front of `buf` as utf8 string.
///
/// The returned text shares the frame with `buf`.
pub fn decode_text(buf: &mut Bytes) -> Result<ByteStr, ProtocolError> {
    let bytes = buf.get_xdr_opaque()?;
    ByteStr::from_utf8(bytes).map_err(ProtocolError::utf8)
}
