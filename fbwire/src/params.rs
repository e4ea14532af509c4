//! Parameter list encoding.
//!
//! Encode bound statement parameters into a BLR message and its value data.
//!
//! ```
//! use fbwire::{Params, ProtocolVersion};
//!
//! let encoded = Params::new()
//!     .bind(42)
//!     .bind(None::<i32>)
//!     .bind("ab")
//!     .encode(ProtocolVersion::V13);
//!
//! assert_eq!(&encoded.values[..4], &[0b010, 0, 0, 0]);
//! ```
use bytes::{BufMut, Bytes, BytesMut};

use crate::{
    common::{span, verbose},
    encode::Encode,
    endian,
    firebird::{ProtocolVersion, blr},
    value::Value,
    xdr::pad_len,
};

/// Legacy null marker following every value before protocol 13.
const NULL_MARKER: i32 = -1;
const NOT_NULL_MARKER: i32 = 0;

/// Encoded parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedParams {
    /// BLR message describing the parameters.
    pub blr: Bytes,
    /// Parameter data.
    pub values: Bytes,
}

/// Null indicator bitmap, sent ahead of parameter data since protocol 13.
///
/// Bit `i % 8` of byte `i / 8` is set when parameter `i` is null. The first
/// parameter is never marked, servers rely on its inline value instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullBitmap {
    bytes: Vec<u8>,
}

impl NullBitmap {
    /// Returns the bitmap length for `count` parameters, aligned to 4.
    pub const fn len_for(count: usize) -> usize {
        let len = count.div_ceil(8);
        len + pad_len(len)
    }

    pub fn new(params: &[Value]) -> Self {
        let mut bytes = vec![0u8; Self::len_for(params.len())];
        for (i, _) in params.iter().enumerate().skip(1).filter(|(_, p)| p.is_null()) {
            bytes[i / 8] |= 1 << (i % 8);
        }
        Self { bytes }
    }

    /// Returns `true` if parameter at `index` is marked null.
    pub fn is_set(&self, index: usize) -> bool {
        self.bytes
            .get(index / 8)
            .is_some_and(|byte| byte & (1 << (index % 8)) != 0)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

/// Encode parameters into BLR message and value data.
pub fn params_to_blr(params: &[Value], version: ProtocolVersion) -> EncodedParams {
    let mut blr = BytesMut::new();
    let mut values = BytesMut::new();
    write_params(params, version, &mut blr, &mut values);
    EncodedParams { blr: blr.freeze(), values: values.freeze() }
}

/// Append encoded parameters to `blr` and `values`.
pub fn write_params(
    params: &[Value],
    version: ProtocolVersion,
    blr: &mut BytesMut,
    values: &mut BytesMut,
) {
    span!("write_params", count = params.len(), %version);

    let with_bitmap = version.has_null_bitmap();
    let size_hint = values_len(params, with_bitmap);

    blr.reserve(blr::ENVELOPE_LEN + params.len() * (3 + blr::SHORT_TAG.len()) + blr::END_MARKER.len());
    values.reserve(size_hint);
    let offset = values.len();

    blr.put_slice(&blr::envelope(params.len()));

    if with_bitmap {
        values.put_slice(NullBitmap::new(params).as_slice());
    }

    for param in params {
        let fragment = param.write_blr(values);
        if !with_bitmap {
            let marker = if param.is_null() { NULL_MARKER } else { NOT_NULL_MARKER };
            values.put_slice(&endian::i32_to_be(marker));
        }
        blr.put_slice(&fragment);
        blr.put_slice(&blr::SHORT_TAG);
        verbose!(?fragment, %param, "param");
    }

    blr.put_slice(&blr::END_MARKER);

    assert_eq!(
        values.len() - offset,
        size_hint,
        "Parameter data size not equal to size hint"
    );
}

/// Returns total value data length.
fn values_len(params: &[Value], with_bitmap: bool) -> usize {
    let data: usize = params.iter().map(Value::value_len).sum();
    match with_bitmap {
        true => NullBitmap::len_for(params.len()) + data,
        false => data + params.len() * 4,
    }
}

/// Builder for parameter list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params<'q> {
    values: Vec<Value<'q>>,
}

impl<'q> Params<'q> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { values: Vec::with_capacity(capacity) }
    }

    /// Bind a parameter value.
    pub fn bind<V: Encode<'q>>(mut self, value: V) -> Self {
        self.values.push(value.encode());
        self
    }

    /// Push a parameter value.
    pub fn push<V: Encode<'q>>(&mut self, value: V) {
        self.values.push(value.encode());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[Value<'q>] {
        &self.values
    }

    /// Encode all bound parameters.
    pub fn encode(&self, version: ProtocolVersion) -> EncodedParams {
        params_to_blr(&self.values, version)
    }
}

impl<'q, V: Encode<'q>> FromIterator<V> for Params<'q> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self { values: iter.into_iter().map(Encode::encode).collect() }
    }
}

impl<'q, V: Encode<'q>> Extend<V> for Params<'q> {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        self.values.extend(iter.into_iter().map(Encode::encode));
    }
}

#[cfg(test)]
mod test {
    use time::{PrimitiveDateTime, macros::*};

    use super::*;
    use crate::types::time::{fixed_to_time, julian_to_date};

    fn sample() -> Params<'static> {
        Params::new().bind(42).bind(()).bind("ab")
    }

    #[test]
    fn null_bitmap_protocol_13() {
        let encoded = sample().encode(ProtocolVersion::V13);

        assert_eq!(
            &encoded.blr[..],
            &[5, 2, 4, 0, 6, 0, 8, 0, 7, 0, 14, 0, 0, 7, 0, 14, 2, 0, 7, 0, 255, 76]
        );
        assert_eq!(
            &encoded.values[..],
            &[
                0b010, 0, 0, 0, // bitmap
                0, 0, 0, 42,
                b'a', b'b', 0, 0,
            ]
        );
    }

    #[test]
    fn null_marker_protocol_12() {
        let encoded = sample().encode(ProtocolVersion::V12);

        assert_eq!(
            &encoded.blr[..],
            &[5, 2, 4, 0, 6, 0, 8, 0, 7, 0, 14, 0, 0, 7, 0, 14, 2, 0, 7, 0, 255, 76]
        );
        assert_eq!(
            &encoded.values[..],
            &[
                0, 0, 0, 42, 0, 0, 0, 0,
                0xff, 0xff, 0xff, 0xff,
                b'a', b'b', 0, 0, 0, 0, 0, 0,
            ]
        );
    }

    #[test]
    fn first_null_never_marked() {
        let params = [Value::Null, Value::Integer(1), Value::Null];

        let bitmap = NullBitmap::new(&params);
        assert!(!bitmap.is_set(0));
        assert!(!bitmap.is_set(1));
        assert!(bitmap.is_set(2));
        assert_eq!(bitmap.as_slice(), &[0b100, 0, 0, 0]);

        let encoded = params_to_blr(&params[..2], ProtocolVersion::V13);
        assert_eq!(&encoded.values[..], &[0, 0, 0, 0, 0, 0, 0, 1]);

        // inline markers still flag the first parameter
        let encoded = params_to_blr(&params[..2], ProtocolVersion::V11);
        assert_eq!(&encoded.values[..], &[0xff, 0xff, 0xff, 0xff, 0, 0, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn bitmap_length() {
        assert_eq!(NullBitmap::len_for(0), 0);
        assert_eq!(NullBitmap::len_for(1), 4);
        assert_eq!(NullBitmap::len_for(8), 4);
        assert_eq!(NullBitmap::len_for(32), 4);
        assert_eq!(NullBitmap::len_for(33), 8);

        let mut params = vec![Value::Integer(0); 10];
        params[8] = Value::Null;
        params[9] = Value::Null;
        let bitmap = NullBitmap::new(&params);
        assert_eq!(bitmap.as_slice(), &[0, 0b11, 0, 0]);
        assert!(bitmap.is_set(9));
        assert!(!bitmap.is_set(64));
    }

    #[test]
    fn empty_params() {
        for version in [ProtocolVersion::V10, ProtocolVersion::V13] {
            let encoded = params_to_blr(&[], version);
            assert_eq!(&encoded.blr[..], &[5, 2, 4, 0, 0, 0, 255, 76]);
            assert!(encoded.values.is_empty());
        }
    }

    #[test]
    fn deterministic() {
        let params: Params = [Value::Text("x".into()), Value::Date(date!(2024-01-31)), Value::Null]
            .into_iter()
            .collect();
        let first = params.encode(ProtocolVersion::V13);
        let second = params.encode(ProtocolVersion::V13);
        assert_eq!(first, second);
    }

    #[test]
    fn append_to_existing_buffer() {
        let mut blr = BytesMut::from(&b"head"[..]);
        let mut values = BytesMut::from(&b"data"[..]);
        write_params(&[Value::Bool(true)], ProtocolVersion::V15, &mut blr, &mut values);
        assert_eq!(&blr[..], b"head\x05\x02\x04\x00\x02\x00\x17\x07\x00\xff\x4c");
        assert_eq!(&values[..], b"data\x00\x00\x00\x00\x01\x00\x00\x00");
    }

    #[test]
    fn timestamp_and_time() {
        let encoded = Params::new()
            .bind(datetime!(2000-01-01 0:00:01))
            .bind(time!(0:00:01))
            .encode(ProtocolVersion::V13);
        assert_eq!(&encoded.blr[6..], &[35, 7, 0, 13, 7, 0, 255, 76]);
        assert_eq!(
            &encoded.values[4..],
            &[0, 0, 0xc9, 0x58, 0, 0, 0x27, 0x10, 0, 0, 0x27, 0x10]
        );
    }

    #[test]
    fn read_back() {
        let ts = datetime!(2024-02-29 13:45:30.1234);
        let encoded = Params::new()
            .bind(-7)
            .bind("héllo")
            .bind(ts)
            .encode(ProtocolVersion::V13);
        let mut values = encoded.values.clone();

        let bitmap = values.split_to(NullBitmap::len_for(3));
        assert!(bitmap.iter().all(|&b| b == 0));

        let int = values.split_to(4);
        assert_eq!(endian::be_to_i32(int[..].try_into().unwrap()), -7);

        // text length lives in the blr fragment
        assert_eq!(encoded.blr[10], blr::TEXT);
        let len = endian::le_to_i16([encoded.blr[11], encoded.blr[12]]) as usize;
        let text = values.split_to(len + pad_len(len));
        assert_eq!(std::str::from_utf8(&text[..len]).unwrap(), "héllo");
        assert!(text[len..].iter().all(|&b| b == 0));

        let day = endian::be_to_i32(values.split_to(4)[..].try_into().unwrap());
        let fixed = endian::be_to_i32(values.split_to(4)[..].try_into().unwrap());
        let date = julian_to_date(day).unwrap();
        let time = fixed_to_time(fixed).unwrap();
        assert_eq!(PrimitiveDateTime::new(date, time), ts);

        assert!(values.is_empty());
    }

    #[test]
    fn concurrent_encoding() {
        let params = sample();
        let expect = params.encode(ProtocolVersion::V13);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| params.encode(ProtocolVersion::V13)))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expect);
            }
        });
    }
}
