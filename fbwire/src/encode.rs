//! Scalar value to BLR encoding.
//!
//! Every [`Value`] encodes to a [`Fragment`], the BLR type declaration, and
//! value bytes appended to the message data.
//!
//! | Value                       | Fragment             | Value bytes                       |
//! |-----------------------------|----------------------|-----------------------------------|
//! | text, other                 | `14, lo(n), hi(n)`   | utf8, zero padded to 4            |
//! | small int, integer, big int | `8, 0`               | big endian `i32`                  |
//! | bool                        | `23`                 | `1, 0, 0, 0` or `0, 0, 0, 0`      |
//! | date                        | `12`                 | julian day                        |
//! | time                        | `13`                 | ten thousandths of second         |
//! | timestamp                   | `35`                 | julian day, ten thousandths       |
//! | null                        | `14, 0, 0`           |                                   |
use std::{borrow::Cow, fmt, ops::Deref};

use bytes::{BufMut, Bytes, BytesMut};

use crate::{
    common::diagnostic,
    endian,
    ext::{BufMutExt, UsizeExt},
    firebird::blr,
    types::time::{date_to_julian, time_to_fixed},
    value::Value,
    xdr::pad_len,
};

/// Value that can be encoded to be bound to sql parameter.
///
/// Types without dedicated wire encoding, like floats and unsigned integers,
/// encode to their string rendering.
pub trait Encode<'q> {
    fn encode(self) -> Value<'q>;
}

/// BLR type declaration of a single value or column, at most 3 bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    len: u8,
    bytes: [u8; 3],
}

impl Fragment {
    pub const fn one(op: u8) -> Self {
        Self { len: 1, bytes: [op, 0, 0] }
    }

    pub const fn two(op: u8, arg: u8) -> Self {
        Self { len: 2, bytes: [op, arg, 0] }
    }

    pub const fn three(op: u8, arg1: u8, arg2: u8) -> Self {
        Self { len: 3, bytes: [op, arg1, arg2] }
    }

    /// Opcode with little endian 16 bit length.
    pub fn sized(op: u8, len: usize) -> Self {
        let [lo, hi] = endian::i16_to_le(len.wrapping_u16() as i16);
        Self::three(op, lo, hi)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

impl Deref for Fragment {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

const INT32: Fragment = Fragment::two(blr::LONG, 0);
const NULL: Fragment = Fragment::three(blr::TEXT, 0, 0);

impl Value<'_> {
    /// Returns the number of value bytes [`Value::write_blr`] will write.
    pub fn value_len(&self) -> usize {
        match self {
            Value::Text(text) => text.len() + pad_len(text.len()),
            Value::Other(text) => text.len() + pad_len(text.len()),
            Value::SmallInt(_) | Value::Integer(_) | Value::BigInt(_) => 4,
            Value::Bool(_) | Value::Date(_) | Value::Time(_) => 4,
            Value::Timestamp(_) => 8,
            Value::Null => 0,
        }
    }

    /// Write value bytes into `values`, returns its BLR fragment.
    pub fn write_blr(&self, values: &mut impl BufMut) -> Fragment {
        match self {
            Value::Text(text) => put_text(text, values),
            Value::Other(text) => put_text(text, values),
            Value::SmallInt(v) => put_int32(*v as i32, values),
            Value::Integer(v) => put_int32(*v, values),
            Value::BigInt(v) => {
                if i32::try_from(*v).is_err() {
                    diagnostic!("64 bit parameter {v} truncated to 32 bit");
                }
                put_int32(*v as i32, values)
            },
            Value::Bool(v) => {
                values.put_slice(&endian::i32_to_le(*v as i32));
                Fragment::one(blr::BOOL)
            },
            Value::Date(date) => {
                values.put_slice(&endian::i32_to_be(date_to_julian(*date)));
                Fragment::one(blr::SQL_DATE)
            },
            Value::Time(time) => {
                values.put_slice(&endian::i32_to_be(time_to_fixed(*time)));
                Fragment::one(blr::SQL_TIME)
            },
            Value::Timestamp(ts) => {
                values.put_slice(&endian::i32_to_be(date_to_julian(ts.date())));
                values.put_slice(&endian::i32_to_be(time_to_fixed(ts.time())));
                Fragment::one(blr::TIMESTAMP)
            },
            Value::Null => NULL,
        }
    }

    /// Encode into BLR fragment and value bytes.
    pub fn to_blr(&self) -> (Fragment, Bytes) {
        let mut values = BytesMut::with_capacity(self.value_len());
        let fragment = self.write_blr(&mut values);
        (fragment, values.freeze())
    }
}

fn put_text(text: &str, values: &mut impl BufMut) -> Fragment {
    values.put_padded(text.as_bytes());
    Fragment::sized(blr::TEXT, text.len())
}

fn put_int32(v: i32, values: &mut impl BufMut) -> Fragment {
    values.put_slice(&endian::i32_to_be(v));
    INT32
}

// ===== Encode implementations =====

macro_rules! encode {
    (itoa $($ty:ty),*) => {
        $(
            impl Encode<'static> for $ty {
                fn encode(self) -> Value<'static> {
                    Value::Other(itoa::Buffer::new().format(self).to_owned())
                }
            }
        )*
    };
    (display $($ty:ty),*) => {
        $(
            impl Encode<'static> for $ty {
                fn encode(self) -> Value<'static> {
                    Value::display(self)
                }
            }
        )*
    };
    ($ty:ty => $variant:ident) => {
        impl Encode<'static> for $ty {
            fn encode(self) -> Value<'static> {
                Value::$variant(self)
            }
        }
    };
}

encode!(i16 => SmallInt);
encode!(i32 => Integer);
encode!(i64 => BigInt);
encode!(bool => Bool);
encode!(itoa i8, u8, u16, u32, u64, usize, i128, u128);
encode!(display f32, f64, char);

impl Encode<'static> for isize {
    fn encode(self) -> Value<'static> {
        Value::BigInt(self as i64)
    }
}

impl Encode<'static> for () {
    fn encode(self) -> Value<'static> {
        Value::Null
    }
}

impl<'q> Encode<'q> for &'q str {
    fn encode(self) -> Value<'q> {
        Value::Text(Cow::Borrowed(self))
    }
}

impl<'q> Encode<'q> for &'q String {
    fn encode(self) -> Value<'q> {
        Value::Text(Cow::Borrowed(self.as_str()))
    }
}

impl Encode<'static> for String {
    fn encode(self) -> Value<'static> {
        Value::Text(Cow::Owned(self))
    }
}

impl<'q> Encode<'q> for Cow<'q, str> {
    fn encode(self) -> Value<'q> {
        Value::Text(self)
    }
}

impl<'q> Encode<'q> for Value<'q> {
    fn encode(self) -> Value<'q> {
        self
    }
}

impl<'q, T: Encode<'q>> Encode<'q> for Option<T> {
    fn encode(self) -> Value<'q> {
        match self {
            Some(value) => value.encode(),
            None => Value::Null,
        }
    }
}
