//! Column descriptor encoding.
//!
//! Describe the shape of statement input or output to the server as BLR
//! message, from the `XSQLVAR` list the server reported in prepare.
use bytes::{BufMut, Bytes, BytesMut};

use crate::{
    common::{diagnostic, span, verbose},
    encode::Fragment,
    endian,
    firebird::{SqlType, UnsupportedType, blr},
};

/// Column descriptor reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XSqlVar {
    /// Raw type code, lowest bit set when nullable.
    pub sqltype: u16,
    pub sqlsubtype: i16,
    /// Power of ten exponent of numeric types, zero or negative.
    pub sqlscale: i16,
    /// Declared length in bytes.
    pub sqllen: i32,
    pub field: String,
    pub relation: String,
    pub owner: String,
    pub alias: String,
}

impl XSqlVar {
    pub fn new(ty: SqlType) -> Self {
        Self { sqltype: ty.code(), ..Default::default() }
    }

    /// Create from raw type code.
    pub fn from_code(sqltype: u16) -> Self {
        Self { sqltype, ..Default::default() }
    }

    pub fn with_len(mut self, sqllen: i32) -> Self {
        self.sqllen = sqllen;
        self
    }

    pub fn with_scale(mut self, sqlscale: i16) -> Self {
        self.sqlscale = sqlscale;
        self
    }

    pub fn with_subtype(mut self, sqlsubtype: i16) -> Self {
        self.sqlsubtype = sqlsubtype;
        self
    }

    pub fn with_names(
        mut self,
        field: impl Into<String>,
        relation: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        self.field = field.into();
        self.relation = relation.into();
        self.alias = alias.into();
        self
    }

    /// Returns the sql type, [`None`] if the code is unknown.
    pub const fn sql_type(&self) -> Option<SqlType> {
        SqlType::from_code(self.sqltype)
    }

    /// Returns `true` if column accept `NULL`.
    pub const fn is_nullable(&self) -> bool {
        self.sqltype & 1 == 1
    }

    /// Scale as single byte, negative scale is biased by 256.
    pub const fn scale_byte(&self) -> u8 {
        let scale = if self.sqlscale < 0 { self.sqlscale + 256 } else { self.sqlscale };
        scale as u8
    }

    /// Returns BLR fragment of this column, [`None`] if the type is unknown.
    pub fn fragment(&self) -> Option<Fragment> {
        let [lo, hi] = endian::i16_to_le(self.sqllen as i16);
        let scale = self.scale_byte();
        let fragment = match self.sql_type()? {
            SqlType::Varying => Fragment::three(blr::VARYING, lo, hi),
            SqlType::Text => Fragment::three(blr::TEXT, lo, hi),
            SqlType::Long => Fragment::two(blr::LONG, scale),
            SqlType::Short => Fragment::two(blr::SHORT, scale),
            SqlType::Int64 => Fragment::two(blr::INT64, scale),
            SqlType::Quad => Fragment::two(blr::QUAD, scale),
            SqlType::Blob | SqlType::Array => Fragment::two(blr::QUAD, 0),
            SqlType::Double => Fragment::one(blr::DOUBLE),
            SqlType::Float => Fragment::one(blr::FLOAT),
            SqlType::DFloat => Fragment::one(blr::D_FLOAT),
            SqlType::Date => Fragment::one(blr::SQL_DATE),
            SqlType::Time => Fragment::one(blr::SQL_TIME),
            SqlType::Timestamp => Fragment::one(blr::TIMESTAMP),
            SqlType::Boolean => Fragment::one(blr::BOOL),
        };
        Some(fragment)
    }
}

/// Calculate BLR message from column descriptors.
///
/// Columns with unknown type contribute only their null indicator slot, and
/// are reported as diagnostic when `log` feature enabled.
pub fn calc_blr(xsqlda: &[XSqlVar]) -> Bytes {
    span!("calc_blr", count = xsqlda.len());
    let mut buf = BytesMut::with_capacity(blr_len_hint(xsqlda.len()));
    for _err in write_blr(xsqlda, &mut buf) {
        diagnostic!("{_err}");
    }
    verbose!(len = buf.len(), "blr");
    buf.freeze()
}

/// Same as [`calc_blr`], but fails on the first column with unknown type.
pub fn calc_blr_strict(xsqlda: &[XSqlVar]) -> Result<Bytes, UnsupportedType> {
    let mut buf = BytesMut::with_capacity(blr_len_hint(xsqlda.len()));
    let unsupported = write_blr(xsqlda, &mut buf);
    match unsupported.first() {
        Some(err) => Err(*err),
        None => Ok(buf.freeze()),
    }
}

/// Upper bound of BLR message length.
pub const fn blr_len_hint(count: usize) -> usize {
    blr::ENVELOPE_LEN + count * (3 + blr::SHORT_TAG.len()) + blr::END_MARKER.len()
}

/// Write BLR message into `buf`, returns columns with unknown type.
fn write_blr(xsqlda: &[XSqlVar], buf: &mut BytesMut) -> Vec<UnsupportedType> {
    let mut unsupported = Vec::new();
    buf.put_slice(&blr::envelope(xsqlda.len()));

    for (index, x) in xsqlda.iter().enumerate() {
        match x.fragment() {
            Some(fragment) => buf.put_slice(&fragment),
            None => unsupported.push(UnsupportedType { code: x.sqltype, index }),
        }
        buf.put_slice(&blr::SHORT_TAG);
    }

    buf.put_slice(&blr::END_MARKER);
    unsupported
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn message_length() {
        let xsqlda = [
            XSqlVar::new(SqlType::Text).with_len(10),
            XSqlVar::new(SqlType::Long).with_scale(-2),
            XSqlVar::new(SqlType::Double),
        ];
        let blr = calc_blr(&xsqlda);
        assert_eq!(blr.len(), 6 + (3 + 2) + (2 + 2) + (1 + 2) + 2);
        assert_eq!(blr[12], 254);
        assert_eq!(
            &blr[..],
            &[5, 2, 4, 0, 6, 0, 14, 10, 0, 7, 0, 8, 254, 7, 0, 27, 7, 0, 255, 76]
        );
    }

    #[test]
    fn every_type() {
        let cases: [(XSqlVar, &[u8]); 15] = [
            (XSqlVar::new(SqlType::Varying).with_len(300), &[37, 44, 1]),
            (XSqlVar::new(SqlType::Text).with_len(1), &[14, 1, 0]),
            (XSqlVar::new(SqlType::Long), &[8, 0]),
            (XSqlVar::new(SqlType::Short).with_scale(-1), &[7, 255]),
            (XSqlVar::new(SqlType::Int64).with_scale(-4), &[16, 252]),
            (XSqlVar::new(SqlType::Quad).with_scale(-3), &[9, 253]),
            (XSqlVar::new(SqlType::Blob).with_scale(-3).with_subtype(1), &[9, 0]),
            (XSqlVar::new(SqlType::Array), &[9, 0]),
            (XSqlVar::new(SqlType::Double), &[27]),
            (XSqlVar::new(SqlType::Float), &[10]),
            (XSqlVar::new(SqlType::DFloat), &[11]),
            (XSqlVar::new(SqlType::Date), &[12]),
            (XSqlVar::new(SqlType::Time), &[13]),
            (XSqlVar::new(SqlType::Timestamp), &[35]),
            (XSqlVar::new(SqlType::Boolean), &[23]),
        ];
        for (x, expect) in cases {
            let blr = calc_blr(std::slice::from_ref(&x));
            assert_eq!(&blr[6..blr.len() - 4], expect, "{:?}", x.sql_type());
            assert_eq!(&blr[blr.len() - 4..], &[7, 0, 255, 76]);
            assert!(blr.len() <= blr_len_hint(1));
        }
    }

    #[test]
    fn nullable_code() {
        let x = XSqlVar::from_code(SqlType::Varying.code() | 1).with_len(5);
        assert!(x.is_nullable());
        assert_eq!(x.sql_type(), Some(SqlType::Varying));
        assert_eq!(x.fragment().as_deref(), Some(&[37, 5, 0][..]));
    }

    #[test]
    fn unknown_type_skipped() {
        let xsqlda = [
            XSqlVar::from_code(32752).with_len(16),
            XSqlVar::new(SqlType::Boolean),
        ];
        let blr = calc_blr(&xsqlda);
        assert_eq!(&blr[..], &[5, 2, 4, 0, 4, 0, 7, 0, 23, 7, 0, 255, 76]);

        let err = calc_blr_strict(&xsqlda).unwrap_err();
        assert_eq!(err.code(), 32752);
        assert_eq!(err.index(), 0);

        assert!(calc_blr_strict(&xsqlda[1..]).is_ok());
    }

    #[test]
    fn empty_descriptors() {
        assert_eq!(&calc_blr(&[])[..], &[5, 2, 4, 0, 0, 0, 255, 76]);
    }
}
