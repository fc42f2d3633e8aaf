use crate::U256_E6;
use crate::error::{Error, MathError, StateError};
use crate::fee::MAX_FEE_PIPS;
use crate::math::full_math::{mul_div, mul_div_rounding_up};
use crate::math::safe_cast::cast_to_unsigned;
use crate::math::sqrt_price_math::{
    get_amount_0_delta, get_amount_1_delta, get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
};
use alloy_primitives::{I256, U256};
use tracing::trace;

/// Result of a single swap step within one price range.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SwapStep {
    /// The price after swapping the amount in/out, not to exceed the price target
    pub sqrt_price_next_x96: U256,
    pub amount_in: U256,
    pub amount_out: U256,
    pub fee_amount: U256,
}

/// Computes the result of swapping some amount in, or amount out, given
/// the current price, the price target, the in-range liquidity, the signed
/// amount remaining and the fee in pips.
///
/// A non-negative `amount_remaining` is an exact-input request; a negative
/// one asks for exactly `|amount_remaining|` of the output token. The swap
/// direction follows from the two prices: moving down (`current >= target`)
/// sells token0.
pub fn compute_swap_step(
    sqrt_ratio_current_x96: U256,
    sqrt_ratio_target_x96: U256,
    liquidity: u128,
    amount_remaining: I256,
    fee_pips: u32,
) -> Result<SwapStep, Error> {
    if fee_pips > MAX_FEE_PIPS {
        return Err(StateError::FeeOutOfBounds.into());
    }

    let zero_for_one = sqrt_ratio_current_x96 >= sqrt_ratio_target_x96;
    let exact_in = !amount_remaining.is_negative();

    let amount_remaining_abs = if exact_in {
        cast_to_unsigned(amount_remaining)
    } else {
        cast_to_unsigned(amount_remaining).wrapping_neg()
    };
    let fee = U256::from(fee_pips);
    let max_fee_minus_fee_pips = U256_E6 - fee;

    let mut step = SwapStep::default();

    if exact_in {
        let amount_remaining_less_fee =
            mul_div(amount_remaining_abs, max_fee_minus_fee_pips, U256_E6)?;
        step.amount_in = if zero_for_one {
            get_amount_0_delta(sqrt_ratio_target_x96, sqrt_ratio_current_x96, liquidity, true)?
        } else {
            get_amount_1_delta(sqrt_ratio_current_x96, sqrt_ratio_target_x96, liquidity, true)?
        };
        step.sqrt_price_next_x96 = if amount_remaining_less_fee >= step.amount_in {
            sqrt_ratio_target_x96
        } else {
            get_next_sqrt_price_from_input(
                sqrt_ratio_current_x96,
                liquidity,
                amount_remaining_less_fee,
                zero_for_one,
            )?
        };
    } else {
        step.amount_out = if zero_for_one {
            get_amount_1_delta(sqrt_ratio_target_x96, sqrt_ratio_current_x96, liquidity, false)?
        } else {
            get_amount_0_delta(sqrt_ratio_current_x96, sqrt_ratio_target_x96, liquidity, false)?
        };
        step.sqrt_price_next_x96 = if amount_remaining_abs >= step.amount_out {
            sqrt_ratio_target_x96
        } else {
            get_next_sqrt_price_from_output(
                sqrt_ratio_current_x96,
                liquidity,
                amount_remaining_abs,
                zero_for_one,
            )?
        };
    }

    // whether we reached the target price for this step
    let max = sqrt_ratio_target_x96 == step.sqrt_price_next_x96;

    if zero_for_one {
        if !(max && exact_in) {
            step.amount_in = get_amount_0_delta(
                step.sqrt_price_next_x96,
                sqrt_ratio_current_x96,
                liquidity,
                true,
            )?;
        }
        if !(max && !exact_in) {
            step.amount_out = get_amount_1_delta(
                step.sqrt_price_next_x96,
                sqrt_ratio_current_x96,
                liquidity,
                false,
            )?;
        }
    } else {
        if !(max && exact_in) {
            step.amount_in = get_amount_1_delta(
                sqrt_ratio_current_x96,
                step.sqrt_price_next_x96,
                liquidity,
                true,
            )?;
        }
        if !(max && !exact_in) {
            step.amount_out = get_amount_0_delta(
                sqrt_ratio_current_x96,
                step.sqrt_price_next_x96,
                liquidity,
                false,
            )?;
        }
    }

    // cap the output amount to not exceed the remaining output amount
    if !exact_in && step.amount_out > amount_remaining_abs {
        step.amount_out = amount_remaining_abs;
    }

    step.fee_amount = if exact_in && step.sqrt_price_next_x96 != sqrt_ratio_target_x96 {
        // target not reached, the rest of the input is the fee
        amount_remaining_abs
            .checked_sub(step.amount_in)
            .ok_or(MathError::Underflow)?
    } else {
        mul_div_rounding_up(step.amount_in, fee, max_fee_minus_fee_pips)?
    };

    trace!(
        current = %sqrt_ratio_current_x96,
        target = %sqrt_ratio_target_x96,
        liquidity,
        exact_in,
        zero_for_one,
        next = %step.sqrt_price_next_x96,
        amount_in = %step.amount_in,
        amount_out = %step.amount_out,
        fee_amount = %step.fee_amount,
        "computed swap step"
    );

    Ok(step)
}
