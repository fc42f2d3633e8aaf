//! Sorted tick snapshots and the boundary searches a swap loop runs over
//! them.
//!
//! The free functions work on any `&[Tick]`. [`TickList`] owns a snapshot
//! that has already passed [`validate_list`].

use crate::error::TickListError;
use crate::math::safe_cast::widen_i128;
use crate::ticks::tick::Tick;
use alloy_primitives::I256;
use std::ops::Deref;
use tracing::debug;

/// Checks that a snapshot can be searched: positive spacing, every index a
/// multiple of it, net liquidity summing to zero and indices in
/// non-decreasing order. The checks run in that order.
pub fn validate_list(ticks: &[Tick], tick_spacing: i32) -> Result<(), TickListError> {
    if tick_spacing <= 0 {
        return Err(TickListError::ZeroTickSpacing);
    }

    if ticks.iter().any(|t| t.index % tick_spacing != 0) {
        return Err(TickListError::SpacingMismatch);
    }

    let net = ticks
        .iter()
        .fold(I256::ZERO, |sum, t| sum.wrapping_add(widen_i128(t.liquidity_net)));
    if !net.is_zero() {
        return Err(TickListError::NonZeroNetSum);
    }

    if !ticks.is_sorted_by_key(|t| t.index) {
        return Err(TickListError::NotSorted);
    }

    Ok(())
}

pub fn is_below_smallest(ticks: &[Tick], tick: i32) -> Result<bool, TickListError> {
    let first = ticks.first().ok_or(TickListError::EmptyList)?;
    Ok(tick < first.index)
}

pub fn is_at_or_above_largest(ticks: &[Tick], tick: i32) -> Result<bool, TickListError> {
    let last = ticks.last().ok_or(TickListError::EmptyList)?;
    Ok(tick >= last.index)
}

/// Position of the largest index `<= tick`.
fn binary_search(ticks: &[Tick], tick: i32) -> Result<usize, TickListError> {
    if is_below_smallest(ticks, tick)? {
        return Err(TickListError::BelowSmallest);
    }
    // the first tick is <= tick, so the partition point is at least one
    Ok(ticks.partition_point(|t| t.index <= tick) - 1)
}

/// Returns the tick stored at exactly `index`, the first one if the index
/// repeats.
pub fn get_tick(ticks: &[Tick], index: i32) -> Result<Tick, TickListError> {
    if ticks.is_empty() {
        return Err(TickListError::EmptyList);
    }
    let i = ticks.partition_point(|t| t.index < index);
    ticks
        .get(i)
        .filter(|t| t.index == index)
        .copied()
        .ok_or(TickListError::InvalidTickIndex)
}

/// Finds the tick at or before `tick` (`lte`) or strictly after it.
///
/// Searching down from below the first tick fails with `BelowSmallest`;
/// searching up from the last tick or beyond fails with `AtOrAboveLargest`.
/// Searching down from past the end returns the last tick, and searching up
/// from before the start returns the first one.
pub fn next_initialized_tick(ticks: &[Tick], tick: i32, lte: bool) -> Result<Tick, TickListError> {
    if lte {
        if is_below_smallest(ticks, tick)? {
            return Err(TickListError::BelowSmallest);
        }
        if is_at_or_above_largest(ticks, tick)? {
            return Ok(ticks[ticks.len() - 1]);
        }
        Ok(ticks[binary_search(ticks, tick)?])
    } else {
        if is_at_or_above_largest(ticks, tick)? {
            return Err(TickListError::AtOrAboveLargest);
        }
        if is_below_smallest(ticks, tick)? {
            return Ok(ticks[0]);
        }
        // tick < last index, so the successor exists
        Ok(ticks[binary_search(ticks, tick)? + 1])
    }
}

/// Compresses `tick` by the spacing, rounding toward negative infinity.
#[inline]
pub(crate) fn compress(tick: i32, tick_spacing: i32) -> i32 {
    tick.div_euclid(tick_spacing)
}

/// Bit position of a compressed tick inside its 256-wide word.
#[inline]
pub(crate) fn bit_position(compressed: i64) -> u8 {
    compressed.rem_euclid(256) as u8
}

/// Like [`next_initialized_tick`], but never looks past the bitmap word
/// that holds the compressed tick, returning the word edge instead.
///
/// The flag is `true` when the returned index is the tick actually found
/// and `false` when it is the word boundary.
///
/// Going down the boundary is the first tick of the word containing
/// `compressed`; going up it is the last tick of the word containing
/// `compressed + 1`.
pub fn next_initialized_tick_within_one_word(
    ticks: &[Tick],
    tick: i32,
    lte: bool,
    tick_spacing: i32,
) -> Result<(i32, bool), TickListError> {
    if tick_spacing <= 0 {
        return Err(TickListError::ZeroTickSpacing);
    }
    let spacing = i64::from(tick_spacing);
    let compressed = i64::from(compress(tick, tick_spacing));

    // The boundary always lies between `tick` and the found index, so
    // the chosen value fits back into an i32.
    if lte {
        let bit_pos = i64::from(bit_position(compressed));
        let minimum = (compressed - bit_pos) * spacing;

        let index = next_initialized_tick(ticks, tick, true)?.index;
        let next = minimum.max(i64::from(index)) as i32;
        Ok((next, next == index))
    } else {
        let next_compressed = compressed + 1;
        let bit_pos = i64::from(bit_position(next_compressed));
        let maximum = (next_compressed + (255 - bit_pos)) * spacing;

        let index = next_initialized_tick(ticks, tick, false)?.index;
        let next = maximum.min(i64::from(index)) as i32;
        Ok((next, next == index))
    }
}

/// Like [`next_initialized_tick`], returning the index and whether the
/// tick carries any gross liquidity.
pub fn next_initialized_tick_index(
    ticks: &[Tick],
    tick: i32,
    lte: bool,
) -> Result<(i32, bool), TickListError> {
    let next = next_initialized_tick(ticks, tick, lte)?;
    Ok((next.index, next.is_initialized()))
}

/// A tick snapshot that passed [`validate_list`] for its spacing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickList {
    ticks: Vec<Tick>,
    tick_spacing: i32,
}

impl TickList {
    /// Validates `ticks` once and takes ownership of them.
    pub fn new(ticks: Vec<Tick>, tick_spacing: i32) -> Result<Self, TickListError> {
        if let Err(err) = validate_list(&ticks, tick_spacing) {
            debug!(
                error = %err,
                tick_spacing,
                len = ticks.len(),
                "rejected tick list"
            );
            return Err(err);
        }
        Ok(Self {
            ticks,
            tick_spacing,
        })
    }

    #[inline]
    pub fn tick_spacing(&self) -> i32 {
        self.tick_spacing
    }

    #[inline]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn into_inner(self) -> Vec<Tick> {
        self.ticks
    }

    pub fn get_tick(&self, index: i32) -> Result<Tick, TickListError> {
        get_tick(&self.ticks, index)
    }

    pub fn next_initialized_tick(&self, tick: i32, lte: bool) -> Result<Tick, TickListError> {
        next_initialized_tick(&self.ticks, tick, lte)
    }

    pub fn next_initialized_tick_within_one_word(
        &self,
        tick: i32,
        lte: bool,
    ) -> Result<(i32, bool), TickListError> {
        next_initialized_tick_within_one_word(&self.ticks, tick, lte, self.tick_spacing)
    }

    pub fn next_initialized_tick_index(
        &self,
        tick: i32,
        lte: bool,
    ) -> Result<(i32, bool), TickListError> {
        next_initialized_tick_index(&self.ticks, tick, lte)
    }
}

impl Deref for TickList {
    type Target = [Tick];

    fn deref(&self) -> &[Tick] {
        &self.ticks
    }
}
