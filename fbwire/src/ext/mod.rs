use bytes::{Buf, BufMut, Bytes};

use crate::{firebird::ProtocolError, xdr::pad_len};

/// Integer width conversion for protocol fields.
pub trait UsizeExt {
    /// Length is `usize` in rust, while xdr want `u32`,
    /// this will panic when overflow instead of wrapping.
    fn to_u32(self) -> u32;
    /// Truncate to the low 16 bits.
    ///
    /// BLR stores counts and text lengths as two bytes, and the server
    /// expects longer values to simply wrap.
    fn wrapping_u16(self) -> u16;
}

/// Xdr framing in [`BufMut`].
pub trait BufMutExt {
    /// Write zero bytes so that `len` becomes a multiple of 4.
    fn put_xdr_pad(&mut self, len: usize);

    /// Write bytes followed by zero padding, without length prefix.
    fn put_padded(&mut self, bytes: &[u8]);

    /// Write big endian length, bytes, and zero padding.
    fn put_xdr_opaque(&mut self, bytes: &[u8]);

    /// Write string as xdr opaque.
    fn put_xdr_str(&mut self, string: &str);
}

/// Xdr framing in [`Bytes`].
pub trait BytesExt {
    /// Try to read one xdr opaque frame, consuming its padding.
    fn get_xdr_opaque(&mut self) -> Result<Bytes, ProtocolError>;
}

impl UsizeExt for usize {
    fn to_u32(self) -> u32 {
        self.try_into().expect("message size too large for protocol")
    }

    fn wrapping_u16(self) -> u16 {
        self as u16
    }
}

impl<B: BufMut> BufMutExt for B {
    fn put_xdr_pad(&mut self, len: usize) {
        self.put_bytes(0, pad_len(len));
    }

    fn put_padded(&mut self, bytes: &[u8]) {
        self.put_slice(bytes);
        self.put_xdr_pad(bytes.len());
    }

    fn put_xdr_opaque(&mut self, bytes: &[u8]) {
        self.put_u32(bytes.len().to_u32());
        self.put_padded(bytes);
    }

    fn put_xdr_str(&mut self, string: &str) {
        self.put_xdr_opaque(string.as_bytes());
    }
}

impl BytesExt for Bytes {
    fn get_xdr_opaque(&mut self) -> Result<Bytes, ProtocolError> {
        if self.remaining() < 4 {
            return Err(ProtocolError::short("opaque length", 4, self.remaining()));
        }
        let len = self.get_u32() as usize;
        let framed = len + pad_len(len);
        if self.remaining() < framed {
            return Err(ProtocolError::short("opaque body", framed, self.remaining()));
        }
        let me = self.split_to(len);
        self.advance(framed - len);
        Ok(me)
    }
}
