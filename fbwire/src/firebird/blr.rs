//! BLR opcodes used when describing messages.
//!
//! <https://github.com/FirebirdSQL/firebird/blob/master/src/include/firebird/impl/blr.h>

pub const TEXT: u8 = 14;
pub const SHORT: u8 = 7;
pub const LONG: u8 = 8;
pub const QUAD: u8 = 9;
pub const FLOAT: u8 = 10;
pub const D_FLOAT: u8 = 11;
pub const SQL_DATE: u8 = 12;
pub const SQL_TIME: u8 = 13;
pub const INT64: u8 = 16;
pub const BOOL: u8 = 23;
pub const DOUBLE: u8 = 27;
pub const TIMESTAMP: u8 = 35;
pub const VARYING: u8 = 37;

pub const VERSION5: u8 = 5;
pub const BEGIN: u8 = 2;
pub const MESSAGE: u8 = 4;
pub const END: u8 = 255;
pub const EOC: u8 = 76;

/// Length of the message envelope.
pub const ENVELOPE_LEN: usize = 6;

/// `[blr_short, 0]`, the null indicator slot following every item.
pub const SHORT_TAG: [u8; 2] = [SHORT, 0];

/// `[blr_end, blr_eoc]`
pub const END_MARKER: [u8; 2] = [END, EOC];

/// Message envelope for `count` items, each item declaring two slots.
pub const fn envelope(count: usize) -> [u8; ENVELOPE_LEN] {
    let slots = (count * 2) as u16;
    let [lo, hi] = slots.to_le_bytes();
    [VERSION5, BEGIN, MESSAGE, 0, lo, hi]
}
