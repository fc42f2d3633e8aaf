use crate::error::MathError;
use alloy_primitives::{U256, U512};

const U256_ONE: U256 = U256::ONE;
const U256_TWO: U256 = U256::from_limbs([2, 0, 0, 0]);
const U256_THREE: U256 = U256::from_limbs([3, 0, 0, 0]);

/// Computes `floor(a * b / denominator)` with full 512‑bit intermediate
/// precision, returning a `MathError` on overflow or division by zero.
///
/// This mirrors the Solidity `FullMath.mulDiv` behavior and underpins
/// many of the higher‑level swap and liquidity calculations.
///
/// The 512-bit product is rebuilt as `prod1 * 2^256 + prod0` from a mulmod
/// against `2^256 - 1` (Chinese remainder theorem). When `prod1` is zero the
/// result is a plain 256-bit division. Otherwise the remainder is subtracted
/// so the division is exact, the powers of two are factored out of the
/// denominator, and the quotient is the product times the modular inverse of
/// the odd part of the denominator modulo `2^256`.
#[inline(always)]
pub fn mul_div(a: U256, b: U256, mut denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let mm = a.mul_mod(b, U256::MAX);
    let mut prod0 = a.wrapping_mul(b);

    let (mut prod1, borrow1) = mm.overflowing_sub(prod0);
    if borrow1 {
        prod1 = prod1.wrapping_sub(U256_ONE);
    }

    if prod1.is_zero() {
        return Ok(prod0.wrapping_div(denominator));
    }

    // The quotient must fit in 256 bits.
    if denominator <= prod1 {
        return Err(MathError::Overflow);
    }

    let remainder = a.mul_mod(b, denominator);
    let (prod0_exact, borrow2) = prod0.overflowing_sub(remainder);
    prod0 = prod0_exact;
    if borrow2 {
        prod1 = prod1.wrapping_sub(U256_ONE);
    }

    // Largest power of two dividing the denominator.
    let twos = denominator & denominator.wrapping_neg();
    denominator = denominator.wrapping_div(twos);
    prod0 = prod0.wrapping_div(twos);

    // 2^256 / twos, computed without 257-bit arithmetic.
    let flip = twos
        .wrapping_neg()
        .wrapping_div(twos)
        .wrapping_add(U256_ONE);
    prod0 |= prod1.wrapping_mul(flip);

    // Seed correct to four bits: 3d ^ 2 inverts any odd d modulo 2^4.
    let mut inv = U256_THREE.wrapping_mul(denominator) ^ U256_TWO;

    // Each Newton-Raphson round doubles the number of correct bits:
    // 8, 16, 32, 64, 128, 256.
    for _ in 0..6 {
        inv = inv.wrapping_mul(U256_TWO.wrapping_sub(denominator.wrapping_mul(inv)));
    }

    Ok(prod0.wrapping_mul(inv))
}

/// Like [`mul_div`], but rounds the result up when there is a
/// non‑zero remainder, returning an overflow error if the result
/// would exceed `U256::MAX`.
#[inline(always)]
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    let mut result = mul_div(a, b, denominator)?;

    if a.mul_mod(b, denominator) > U256::ZERO {
        if result >= U256::MAX {
            return Err(MathError::Overflow);
        }
        result += U256::ONE;
    }
    Ok(result)
}

/// Divides `a` by `b`, rounding the result up to the next integer
/// when there is a non‑zero remainder.
#[inline(always)]
pub fn div_rounding_up(a: U256, b: U256) -> Result<U256, MathError> {
    if b.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let (quotient, remainder) = a.div_rem(b);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        // quotient < U256::MAX whenever b > 1, and b == 1 never leaves a remainder
        Ok(quotient + U256::ONE)
    }
}

/// Integer square root, rounded down.
///
/// Newton's method started from a power of two at or above the root; the
/// iterates decrease monotonically until they stop improving.
pub fn sqrt(value: U512) -> U512 {
    if value < U512::from(2u8) {
        return value;
    }
    let mut x = U512::ONE << value.bit_len().div_ceil(2);
    loop {
        let y = (x + value / x) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}
