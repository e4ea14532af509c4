use std::fmt;

/// Firebird sql data type, as reported in `XSQLVAR.sqltype`.
///
/// The server sets the lowest bit of the code when the column is nullable,
/// [`SqlType::from_code`] ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum SqlType {
    /// `VARCHAR(n)`
    Varying = 448,
    /// `CHAR(n)`
    Text = 452,
    /// `DOUBLE PRECISION`
    Double = 480,
    /// `FLOAT`
    Float = 482,
    /// `INTEGER`, or `NUMERIC` with scale
    Long = 496,
    /// `SMALLINT`, or `NUMERIC` with scale
    Short = 500,
    /// `TIMESTAMP`
    Timestamp = 510,
    /// `BLOB`
    Blob = 520,
    /// VAX `D_FLOAT`
    DFloat = 530,
    /// `ARRAY`
    Array = 540,
    /// `QUAD`
    Quad = 550,
    /// `TIME`
    Time = 560,
    /// `DATE`
    Date = 570,
    /// `BIGINT`, or `NUMERIC` with scale
    Int64 = 580,
    /// `BOOLEAN`
    Boolean = 32764,
}

impl SqlType {
    /// All known types.
    pub const ALL: [SqlType; 15] = [
        Self::Varying, Self::Text, Self::Double, Self::Float, Self::Long,
        Self::Short, Self::Timestamp, Self::Blob, Self::DFloat, Self::Array,
        Self::Quad, Self::Time, Self::Date, Self::Int64, Self::Boolean,
    ];

    /// Classify raw type code, returns [`None`] for unknown code.
    pub const fn from_code(code: u16) -> Option<SqlType> {
        let ty = match code & !1 {
            448 => Self::Varying,
            452 => Self::Text,
            480 => Self::Double,
            482 => Self::Float,
            496 => Self::Long,
            500 => Self::Short,
            510 => Self::Timestamp,
            520 => Self::Blob,
            530 => Self::DFloat,
            540 => Self::Array,
            550 => Self::Quad,
            560 => Self::Time,
            570 => Self::Date,
            580 => Self::Int64,
            32764 => Self::Boolean,
            _ => return None,
        };
        Some(ty)
    }

    /// Returns the raw type code, without nullable bit.
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Returns sql type name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varying => "VARCHAR",
            Self::Text => "CHAR",
            Self::Double => "DOUBLE PRECISION",
            Self::Float => "FLOAT",
            Self::Long => "INTEGER",
            Self::Short => "SMALLINT",
            Self::Timestamp => "TIMESTAMP",
            Self::Blob => "BLOB",
            Self::DFloat => "D_FLOAT",
            Self::Array => "ARRAY",
            Self::Quad => "QUAD",
            Self::Time => "TIME",
            Self::Date => "DATE",
            Self::Int64 => "BIGINT",
            Self::Boolean => "BOOLEAN",
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<SqlType> for u16 {
    fn from(value: SqlType) -> Self {
        value.code()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn code_round_trip() {
        for ty in SqlType::ALL {
            assert_eq!(SqlType::from_code(ty.code()), Some(ty));
        }
    }

    #[test]
    fn nullable_bit() {
        assert_eq!(SqlType::from_code(449), Some(SqlType::Varying));
        assert_eq!(SqlType::from_code(497), Some(SqlType::Long));
        assert_eq!(SqlType::from_code(32765), Some(SqlType::Boolean));
    }

    #[test]
    fn unknown_code() {
        assert_eq!(SqlType::from_code(0), None);
        // INT128
        assert_eq!(SqlType::from_code(32752), None);
    }
}
