//! Explicit conversions between the signed and unsigned 256-bit words and
//! the narrower logical widths stored inside them.
//!
//! Every reinterpretation of two's-complement bits goes through one of these
//! named functions so the sign semantics stay visible at the call site.

use crate::U160_MAX;
use crate::error::MathError;
use alloy_primitives::{I256, U256};

/// Reinterprets `value` as a signed word, failing if the top bit is set
/// (the value would read back as negative).
#[inline]
pub fn cast_to_signed(value: U256) -> Result<I256, MathError> {
    if value.bit(255) {
        return Err(MathError::ExceedsInt256Max);
    }
    Ok(I256::from_raw(value))
}

/// Reinterprets the two's-complement bits of `value` as an unsigned word.
/// Never fails; negative values map to their 2^256 complement.
#[inline]
pub fn cast_to_unsigned(value: I256) -> U256 {
    value.into_raw()
}

/// Checks that `value` lies in the 160-bit sqrt-price domain and passes it
/// through unchanged.
#[inline]
pub fn check_fits_160(value: U256) -> Result<U256, MathError> {
    if value > U160_MAX {
        return Err(MathError::ExceedsUint160);
    }
    Ok(value)
}

/// Sign-extends a 128-bit signed value into a 256-bit word.
#[inline]
pub fn widen_i128(value: i128) -> I256 {
    // every i128 fits, so the conversion cannot fail
    I256::unchecked_from(value)
}
