use crate::math::full_math::{self, div_rounding_up, mul_div, mul_div_rounding_up};
use crate::math::safe_cast::{cast_to_signed, check_fits_160};
use crate::{
    Q96, RESOLUTION, U160_MAX,
    error::{Error, MathError, StateError},
};
use alloy_primitives::{I256, U256, U512};

/// Computes the next sqrt price after swapping token0, rounding the
/// resulting price up, given current price, liquidity, amount, and
/// whether the amount is added or removed.
///
/// This is the low‑level primitive used by higher‑level swap math.
pub fn get_next_sqrt_price_from_amount_0_rounding_up(
    sqrt_p_x96: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256, Error> {
    if amount.is_zero() {
        return Ok(sqrt_p_x96);
    }

    let numerator1: U256 = U256::from(liquidity) << RESOLUTION;
    let product: U256 = amount.wrapping_mul(sqrt_p_x96);

    if add {
        if product / amount == sqrt_p_x96 {
            let (denominator, _) = numerator1.overflowing_add(product);
            if denominator >= numerator1 {
                return Ok(check_fits_160(mul_div_rounding_up(
                    numerator1,
                    sqrt_p_x96,
                    denominator,
                )?)?);
            }
        }
        // product overflowed: fall back to L / (L / P + x), which is less precise
        let denominator = (numerator1 / sqrt_p_x96)
            .checked_add(amount)
            .ok_or(MathError::Overflow)?;
        Ok(check_fits_160(div_rounding_up(numerator1, denominator)?)?)
    } else {
        if product / amount != sqrt_p_x96 || numerator1 <= product {
            return Err(StateError::InsufficientReserves.into());
        }
        let denominator = numerator1 - product;
        Ok(check_fits_160(mul_div_rounding_up(
            numerator1,
            sqrt_p_x96,
            denominator,
        )?)?)
    }
}

/// Computes the next sqrt price after swapping token1, rounding the
/// resulting price down, given current price, liquidity, amount, and
/// direction (add/remove).
pub fn get_next_sqrt_price_from_amount_1_rounding_down(
    sqrt_p_x96: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256, Error> {
    let liquidity = U256::from(liquidity);
    if liquidity.is_zero() {
        return Err(MathError::DivisionByZero.into());
    }

    if add {
        let quotient: U256 = if amount <= U160_MAX {
            (amount << RESOLUTION) / liquidity
        } else {
            mul_div(amount, Q96, liquidity)?
        };

        let result = sqrt_p_x96
            .checked_add(quotient)
            .ok_or(MathError::Overflow)?;
        Ok(check_fits_160(result)?)
    } else {
        let quotient: U256 = if amount <= U160_MAX {
            div_rounding_up(amount << RESOLUTION, liquidity)?
        } else {
            mul_div_rounding_up(amount, Q96, liquidity)?
        };

        if sqrt_p_x96 <= quotient {
            return Err(StateError::InsufficientReserves.into());
        }
        Ok(check_fits_160(sqrt_p_x96 - quotient)?)
    }
}

/// Amount of token0 between two sqrt prices for a given liquidity,
/// `L * (1/sqrt_lower - 1/sqrt_upper)`, optionally rounding up.
///
/// The two prices may be passed in either order.
pub fn get_amount_0_delta(
    mut sqrt_ratio_a_x96: U256,
    mut sqrt_ratio_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, Error> {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    };

    if sqrt_ratio_a_x96.is_zero() {
        return Err(StateError::SqrtRatioIsZero.into());
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let numerator2 = sqrt_ratio_b_x96 - sqrt_ratio_a_x96;

    if round_up {
        Ok(div_rounding_up(
            mul_div_rounding_up(numerator1, numerator2, sqrt_ratio_b_x96)?,
            sqrt_ratio_a_x96,
        )?)
    } else {
        Ok(mul_div(numerator1, numerator2, sqrt_ratio_b_x96)? / sqrt_ratio_a_x96)
    }
}

/// Amount of token1 between two sqrt prices for a given liquidity,
/// `L * (sqrt_upper - sqrt_lower) / 2^96`, optionally rounding up.
pub fn get_amount_1_delta(
    mut sqrt_ratio_a_x96: U256,
    mut sqrt_ratio_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, MathError> {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    };
    let liquidity = U256::from(liquidity);

    if round_up {
        mul_div_rounding_up(liquidity, sqrt_ratio_b_x96 - sqrt_ratio_a_x96, Q96)
    } else {
        mul_div(liquidity, sqrt_ratio_b_x96 - sqrt_ratio_a_x96, Q96)
    }
}

/// Signed token0 delta for a signed liquidity change. Removing liquidity
/// rounds down and yields a negative amount; adding rounds up.
pub fn get_amount_0_delta_signed(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: i128,
) -> Result<I256, Error> {
    let round_up = liquidity >= 0;
    let amount = cast_to_signed(get_amount_0_delta(
        sqrt_ratio_a_x96,
        sqrt_ratio_b_x96,
        liquidity.unsigned_abs(),
        round_up,
    )?)?;
    Ok(if round_up { amount } else { -amount })
}

/// Signed token1 delta for a signed liquidity change. Removing liquidity
/// rounds down and yields a negative amount; adding rounds up.
pub fn get_amount_1_delta_signed(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: i128,
) -> Result<I256, Error> {
    let round_up = liquidity >= 0;
    let amount = cast_to_signed(get_amount_1_delta(
        sqrt_ratio_a_x96,
        sqrt_ratio_b_x96,
        liquidity.unsigned_abs(),
        round_up,
    )?)?;
    Ok(if round_up { amount } else { -amount })
}

/// Computes the next sqrt price when swapping *into* the pool
/// (`amount_in`), choosing the correct branch for token0/token1
/// depending on `zero_for_one`.
pub fn get_next_sqrt_price_from_input(
    sqrt_p_x96: U256,
    liquidity: u128,
    amount_in: U256,
    zero_for_one: bool,
) -> Result<U256, Error> {
    if sqrt_p_x96.is_zero() {
        return Err(StateError::SqrtPriceIsZero.into());
    }
    if liquidity == 0 {
        return Err(StateError::LiquidityIsZero.into());
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount_0_rounding_up(sqrt_p_x96, liquidity, amount_in, true)
    } else {
        get_next_sqrt_price_from_amount_1_rounding_down(sqrt_p_x96, liquidity, amount_in, true)
    }
}

/// Computes the next sqrt price when swapping *out of* the pool
/// (`amount_out`), choosing the correct branch for token0/token1
/// depending on `zero_for_one`.
pub fn get_next_sqrt_price_from_output(
    sqrt_p_x96: U256,
    liquidity: u128,
    amount_out: U256,
    zero_for_one: bool,
) -> Result<U256, Error> {
    if sqrt_p_x96.is_zero() {
        return Err(StateError::SqrtPriceIsZero.into());
    }
    if liquidity == 0 {
        return Err(StateError::LiquidityIsZero.into());
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount_1_rounding_down(sqrt_p_x96, liquidity, amount_out, false)
    } else {
        get_next_sqrt_price_from_amount_0_rounding_up(sqrt_p_x96, liquidity, amount_out, false)
    }
}

/// Returns `sqrt(amount1 / amount0)` as a Q64.96 value, rounded down.
///
/// Handy for building reference prices from a token ratio.
pub fn encode_sqrt_ratio_x96(amount1: u128, amount0: u128) -> Result<U256, MathError> {
    if amount0 == 0 {
        return Err(MathError::DivisionByZero);
    }
    let ratio_x192 = (U512::from(amount1) << 192) / U512::from(amount0);
    let root = full_math::sqrt(ratio_x192);
    if root.bit_len() > 160 {
        return Err(MathError::ExceedsUint160);
    }
    Ok(U256::from_limbs_slice(&root.as_limbs()[..4]))
}
