use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use crate::Error;

/// Probe whose native byte layout reveals the host byte order.
const PROBE: u64 = 0x0011_2233_4455_6677;

/// Byte order of the host, resolved once at compile time.
///
/// `None` means the host uses neither little nor big endian layout; every
/// [`BitVec`] constructor fails with [`Error::UnsupportedArchitecture`] on
/// such a host.
///
/// [`BitVec`]: crate::BitVec
pub const NATIVE_ORDER: Option<BitOrder> = resolve_native_order(PROBE.to_ne_bytes());

/// Determines the byte order from the in-memory bytes of `0x0011223344556677`.
///
/// Only the two common layouts are recognized. Anything else (mixed or
/// middle endian) yields `None`.
///
/// # Examples
/// ```
/// use light_bitvec::{BitOrder, resolve_native_order};
///
/// let le = [0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11, 0x00];
/// assert_eq!(resolve_native_order(le), Some(BitOrder::Little));
/// let pdp = [0x55, 0x44, 0x77, 0x66, 0x11, 0x00, 0x33, 0x22];
/// assert_eq!(resolve_native_order(pdp), None);
/// ```
pub const fn resolve_native_order(bytes: [u8; 8]) -> Option<BitOrder> {
    match (bytes[0], bytes[7]) {
        (0x77, 0x00) => Some(BitOrder::Little),
        (0x00, 0x77) => Some(BitOrder::Big),
        _ => None,
    }
}

/// Numbering convention of the bits inside a byte buffer.
///
/// With [`Little`] the byte at the lowest address of each 8-byte word holds
/// bits `0..8` of that word. With [`Big`] it holds bits `56..64`. Within a
/// byte, bit 0 is always the least significant one.
///
/// Raw values round-trip through `u8` (`1` is little, `2` is big); `0` is
/// reserved as the unknown order and is rejected like any other value.
///
/// [`Little`]: BitOrder::Little
/// [`Big`]: BitOrder::Big
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BitOrder {
    /// Lowest address byte is the least significant byte of a word.
    Little = 1,
    /// Lowest address byte is the most significant byte of a word.
    Big = 2,
}

impl BitOrder {
    /// Returns the byte order of the running host.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedArchitecture`] if the host is neither
    /// little nor big endian.
    pub const fn native() -> Result<Self, Error> {
        match NATIVE_ORDER {
            Some(order) => Ok(order),
            None => Err(Error::UnsupportedArchitecture),
        }
    }
}

impl Display for BitOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BitOrder::Little => f.write_str("little endian"),
            BitOrder::Big => f.write_str("big endian"),
        }
    }
}

impl From<BitOrder> for u8 {
    fn from(order: BitOrder) -> Self {
        order as u8
    }
}

impl TryFrom<u8> for BitOrder {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(BitOrder::Little),
            2 => Ok(BitOrder::Big),
            _ => Err(Error::InvalidOrder),
        }
    }
}

/// Parses `little`, `le`, `little endian` and their big counterparts,
/// ignoring ASCII case.
impl FromStr for BitOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let is = |name: &str| s.eq_ignore_ascii_case(name);
        if is("little") || is("le") || is("little endian") || is("little-endian") {
            Ok(BitOrder::Little)
        } else if is("big") || is("be") || is("big endian") || is("big-endian") {
            Ok(BitOrder::Big)
        } else {
            Err(Error::InvalidOrder)
        }
    }
}
