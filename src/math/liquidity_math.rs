use crate::error::MathError;

/// Adds a signed liquidity delta to an unsigned 128-bit liquidity value,
/// failing if the result leaves the `u128` range in either direction.
pub fn add_delta(x: u128, y: i128) -> Result<u128, MathError> {
    if y < 0 {
        x.checked_sub(y.unsigned_abs())
            .ok_or(MathError::LiquidityUnderflow)
    } else {
        x.checked_add(y as u128).ok_or(MathError::LiquidityOverflow)
    }
}
