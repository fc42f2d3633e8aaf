use crate::error::MathError;
use alloy_primitives::U256;

/// Shift widths probed from the top down when scanning for the most
/// significant bit.
const MSB_STEPS: [usize; 8] = [128, 64, 32, 16, 8, 4, 2, 1];

/// Returns the index (0–255) of the most significant set bit in a `U256`,
/// or `MathError::ZeroValue` if the input is zero.
///
/// The answer is defined by successive comparison against `2^128`, `2^64`,
/// ..., `2^1`, shifting the running value right whenever it is at least
/// that large. Tick math depends on this exact comparison ladder.
pub fn most_significant_bit(x: U256) -> Result<u8, MathError> {
    if x.is_zero() {
        return Err(MathError::ZeroValue);
    }

    let mut r = x;
    let mut msb: u8 = 0;
    for step in MSB_STEPS {
        if r >= U256::ONE << step {
            r >>= step;
            msb += step as u8;
        }
    }
    Ok(msb)
}

/// Returns the index (0–255) of the least significant set bit in a `U256`,
/// or `MathError::ZeroValue` if the input is zero.
///
/// This is used when scanning bitmap words from the right to find
/// the first initialized position.
pub fn least_significant_bit(x: U256) -> Result<u8, MathError> {
    if x.is_zero() {
        return Err(MathError::ZeroValue);
    }
    Ok(x.trailing_zeros() as u8)
}
