//! Fixed width integer and byte conversion.
//!
//! XDR framed data is big endian, while BLR embeds some little endian counts
//! (text length) in its fragments. All functions here are total.
//!
//! Value data and fragments are written with the `*_to_*` functions, the
//! reverse ones read them back.

/// `i16` to little endian bytes.
pub const fn i16_to_le(value: i16) -> [u8; 2] {
    value.to_le_bytes()
}

/// `i32` to little endian bytes.
pub const fn i32_to_le(value: i32) -> [u8; 4] {
    value.to_le_bytes()
}

/// `i32` to big endian (network) bytes.
pub const fn i32_to_be(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Big endian bytes to `i16`.
pub const fn be_to_i16(bytes: [u8; 2]) -> i16 {
    i16::from_be_bytes(bytes)
}

/// Little endian bytes to `i16`.
pub const fn le_to_i16(bytes: [u8; 2]) -> i16 {
    i16::from_le_bytes(bytes)
}

/// Big endian bytes to `i32`.
pub const fn be_to_i32(bytes: [u8; 4]) -> i32 {
    i32::from_be_bytes(bytes)
}

/// Little endian bytes to `i32`.
pub const fn le_to_i32(bytes: [u8; 4]) -> i32 {
    i32::from_le_bytes(bytes)
}

/// Big endian bytes to `i64`.
pub const fn be_to_i64(bytes: [u8; 8]) -> i64 {
    i64::from_be_bytes(bytes)
}

/// Little endian bytes to `i64`.
pub const fn le_to_i64(bytes: [u8; 8]) -> i64 {
    i64::from_le_bytes(bytes)
}

#[cfg(test)]
mod test {
    use bytes::{Buf, BufMut};

    use super::*;

    #[test]
    fn byte_order() {
        assert_eq!(i32_to_be(0x0102_0304), [1, 2, 3, 4]);
        assert_eq!(i32_to_le(0x0102_0304), [4, 3, 2, 1]);
        assert_eq!(i16_to_le(0x0102), [2, 1]);
        assert_eq!(i32_to_be(-1), [0xff; 4]);
    }

    #[test]
    fn round_trip() {
        for n in [0, 1, -1, 42, i32::MIN, i32::MAX, -678_882] {
            assert_eq!(be_to_i32(i32_to_be(n)), n);
            assert_eq!(le_to_i32(i32_to_le(n)), n);
        }
        for n in [0, 1, -1, i16::MIN, i16::MAX] {
            assert_eq!(le_to_i16(i16_to_le(n)), n);
            assert_eq!(be_to_i16(n.to_be_bytes()), n);
        }
        assert_eq!(be_to_i64([0, 0, 0, 0, 0, 0, 1, 0]), 256);
        assert_eq!(le_to_i64([0, 1, 0, 0, 0, 0, 0, 0]), 256);
    }

    #[test]
    fn matches_buf_mut() {
        let mut buf = vec![];
        buf.put_i32(-2);
        buf.put_i32_le(-2);
        assert_eq!(buf[..4], i32_to_be(-2));
        assert_eq!(buf[4..], i32_to_le(-2));

        let mut read = &buf[..];
        assert_eq!(read.get_i32(), be_to_i32(i32_to_be(-2)));
    }
}
