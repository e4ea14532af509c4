use std::fmt;

/// Bits the server sets on protocol version 11 and above.
const FB_PROTOCOL_FLAG: i32 = 0xFFFF_8000_u32 as i32;

/// Negotiated wire protocol version.
///
/// On the wire versions 11 and above carry the `0x8000` flag sign extended,
/// making them negative as `i32`. This type stores the plain version number so that
/// comparison follow release order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProtocolVersion(u16);

impl ProtocolVersion {
    pub const V10: ProtocolVersion = ProtocolVersion(10);
    pub const V11: ProtocolVersion = ProtocolVersion(11);
    pub const V12: ProtocolVersion = ProtocolVersion(12);
    /// Null indicator bitmap replaces inline null markers from this version.
    pub const V13: ProtocolVersion = ProtocolVersion(13);
    pub const V14: ProtocolVersion = ProtocolVersion(14);
    pub const V15: ProtocolVersion = ProtocolVersion(15);
    pub const V16: ProtocolVersion = ProtocolVersion(16);
    pub const V17: ProtocolVersion = ProtocolVersion(17);

    /// Create from plain version number.
    pub const fn new(version: u16) -> Self {
        Self(version)
    }

    /// Create from the `i32` version read from the wire.
    pub const fn from_wire(raw: i32) -> Self {
        Self((raw & 0x7FFF) as u16)
    }

    /// Returns the `i32` representation written on the wire.
    pub const fn to_wire(self) -> i32 {
        if self.0 >= 11 {
            FB_PROTOCOL_FLAG | self.0 as i32
        } else {
            self.0 as i32
        }
    }

    /// Returns plain version number.
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Returns `true` if parameter nulls are sent as a leading bitmap.
    pub const fn has_null_bitmap(self) -> bool {
        self.0 >= Self::V13.0
    }
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::V13
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
