//! Bit primitives on a fixed-width integer used as a bit vector.
//!
//! Bit index 0 is the least significant bit. The working width is [`u16`],
//! which comfortably holds the 9-bit [`Neighborhood`] encoding.
//!
//! [`Neighborhood`]: crate::Neighborhood
//!
//! # Examples
//!
//! ```
//! use lifelike_core::bits;
//!
//! let bits = bits::set_bit(0, 4, true);
//! assert_eq!(bits, 0b1_0000);
//! assert!(bits::get_bit(bits, 4));
//!
//! let bits = bits::shift_left(bits, 3);
//! assert_eq!(bits, 0b1000_0000);
//! assert_eq!(bits::clear_from_bit(bits, 6), 0);
//! ```

/// Number of bits in the working integer.
pub const WIDTH: u32 = u16::BITS;

/// Returns `bits` with the bit at `index` forced to `value`.
///
/// # Panics
///
/// Panics if `index` is not less than [`WIDTH`].
#[must_use]
#[inline]
pub const fn set_bit(bits: u16, index: u32, value: bool) -> u16 {
    assert!(index < WIDTH, "bit index out of range");
    let mask = 1 << index;
    if value { bits | mask } else { bits & !mask }
}

/// Returns whether the bit at `index` is set.
///
/// Any index may be queried; bits beyond [`WIDTH`] read as unset.
#[must_use]
#[inline]
pub const fn get_bit(bits: u16, index: u32) -> bool {
    match bits.checked_shr(index) {
        Some(shifted) => shifted & 1 != 0,
        None => false,
    }
}

/// Shifts `bits` left by `magnitude` positions.
///
/// Bits shifted past the most significant position are dropped; shifting by
/// [`WIDTH`] or more yields zero.
#[must_use]
#[inline]
pub const fn shift_left(bits: u16, magnitude: u32) -> u16 {
    match bits.checked_shl(magnitude) {
        Some(shifted) => shifted,
        None => 0,
    }
}

/// Clears every bit at position `start` or more significant.
///
/// Equivalent to `bits mod 2^start`. A `start` at or beyond [`WIDTH`] leaves
/// `bits` unchanged.
#[must_use]
#[inline]
pub const fn clear_from_bit(bits: u16, start: u32) -> u16 {
    if start >= WIDTH {
        return bits;
    }
    bits & ((1 << start) - 1)
}
