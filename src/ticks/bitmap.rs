use crate::FastMap;
use crate::error::TickListError;
use crate::math::bit_math::{least_significant_bit, most_significant_bit};
use crate::math::tick_math::{MAX_TICK, MIN_TICK};
use crate::ticks::provider::TickDataProvider;
use crate::ticks::tick::Tick;
use crate::ticks::tick_list::{self, TickList, bit_position, compress};
use alloy_primitives::U256;
use tracing::trace;

/// Maps a compressed tick to its bitmap word and the bit inside that word.
#[inline]
fn position(compressed: i64) -> (i64, u8) {
    (compressed.div_euclid(256), bit_position(compressed))
}

/// Tick provider backed by a sparse word-paged bitmap, the layout used by
/// the on-chain pool contract: one 256-bit word per 256 compressed ticks.
///
/// Every query answers exactly like [`crate::ticks::TickListProvider`] over
/// the same list. The bitmap locates indices; tick records are read back
/// from the list so repeated indices resolve to the same entry.
#[derive(Clone, Debug)]
pub struct TickBitmapProvider {
    tick_spacing: i32,
    bitmap: FastMap<i16, U256>,
    ticks: TickList,
}

impl TickBitmapProvider {
    /// Builds the bitmap for a validated list. Every index must lie in
    /// `[MIN_TICK, MAX_TICK]`.
    pub fn new(list: &TickList) -> Result<Self, TickListError> {
        let tick_spacing = list.tick_spacing();
        let mut bitmap: FastMap<i16, U256> = FastMap::default();

        for tick in list.iter() {
            if !(MIN_TICK..=MAX_TICK).contains(&tick.index) {
                return Err(TickListError::TickOutOfRange);
            }
            let (word_pos, bit_pos) = position(i64::from(compress(tick.index, tick_spacing)));
            let word_pos = i16::try_from(word_pos).map_err(|_| TickListError::TickOutOfRange)?;
            *bitmap.entry(word_pos).or_insert(U256::ZERO) |= U256::ONE << bit_pos;
        }

        trace!(
            ticks = list.len(),
            words = bitmap.len(),
            tick_spacing,
            "built tick bitmap"
        );

        Ok(Self {
            tick_spacing,
            bitmap,
            ticks: list.clone(),
        })
    }

    #[inline]
    pub fn tick_spacing(&self) -> i32 {
        self.tick_spacing
    }

    /// Returns the bitmap word at `word_pos`, or zero if absent.
    pub fn get_word(&self, word_pos: i16) -> U256 {
        self.bitmap.get(&word_pos).copied().unwrap_or(U256::ZERO)
    }

    fn word(&self, word_pos: i64) -> U256 {
        i16::try_from(word_pos)
            .map(|w| self.get_word(w))
            .unwrap_or(U256::ZERO)
    }

    /// Lowest and highest stored index.
    fn bounds(&self) -> Result<(i32, i32), TickListError> {
        self.ticks
            .first()
            .zip(self.ticks.last())
            .map(|(lo, hi)| (lo.index, hi.index))
            .ok_or(TickListError::EmptyList)
    }

    /// The record the list search returns for a found `index`: the last
    /// entry with that index going down, the first one going up.
    fn record(&self, index: i32, lte: bool) -> Option<&Tick> {
        if lte {
            let end = self.ticks.partition_point(|t| t.index <= index);
            end.checked_sub(1).and_then(|i| self.ticks.get(i))
        } else {
            let start = self.ticks.partition_point(|t| t.index < index);
            self.ticks.get(start)
        }
    }

    /// Same failures as the list search for a query that leaves the range.
    /// Returns the stored bounds on success.
    fn check_direction(&self, tick: i32, lte: bool) -> Result<(i32, i32), TickListError> {
        let (lowest, highest) = self.bounds()?;
        if lte && tick < lowest {
            return Err(TickListError::BelowSmallest);
        }
        if !lte && tick >= highest {
            return Err(TickListError::AtOrAboveLargest);
        }
        Ok((lowest, highest))
    }

    /// Scans the single word next to `compressed` and returns the compressed
    /// result plus whether a set bit was found.
    ///
    /// Going down the word of `compressed` is scanned from its bit down to
    /// bit 0; going up the word of `compressed + 1` is scanned from that bit
    /// up to bit 255.
    fn search_word(&self, compressed: i64, lte: bool) -> (i64, bool) {
        if lte {
            let (word_pos, bit_pos) = position(compressed);
            // all the 1s at or to the right of the current bit_pos
            let mask = (U256::ONE << bit_pos) - U256::ONE + (U256::ONE << bit_pos);
            let masked = self.word(word_pos) & mask;

            match most_significant_bit(masked) {
                Ok(msb) => (compressed - i64::from(bit_pos - msb), true),
                Err(_) => (compressed - i64::from(bit_pos), false),
            }
        } else {
            let compressed = compressed + 1;
            let (word_pos, bit_pos) = position(compressed);
            // all the 1s at or to the left of the bit_pos
            let mask = !((U256::ONE << bit_pos) - U256::ONE);
            let masked = self.word(word_pos) & mask;

            match least_significant_bit(masked) {
                Ok(lsb) => (compressed + i64::from(lsb - bit_pos), true),
                Err(_) => (compressed + i64::from(u8::MAX - bit_pos), false),
            }
        }
    }

    fn spacing_matches(&self, tick_spacing: i32) -> Result<(), TickListError> {
        if tick_spacing <= 0 {
            return Err(TickListError::ZeroTickSpacing);
        }
        if tick_spacing != self.tick_spacing {
            return Err(TickListError::SpacingMismatch);
        }
        Ok(())
    }

    #[inline]
    fn decompress(&self, compressed: i64) -> i32 {
        // results always lie between a queried tick and a stored one
        (compressed * i64::from(self.tick_spacing)) as i32
    }
}

impl TickDataProvider for TickBitmapProvider {
    fn get_tick(&self, tick: i32) -> Result<Tick, TickListError> {
        tick_list::get_tick(&self.ticks, tick)
    }

    fn next_initialized_tick_within_one_word(
        &self,
        tick: i32,
        lte: bool,
        tick_spacing: i32,
    ) -> Result<(i32, bool), TickListError> {
        self.spacing_matches(tick_spacing)?;
        self.check_direction(tick, lte)?;

        let (next, initialized) =
            self.search_word(i64::from(compress(tick, self.tick_spacing)), lte);
        Ok((self.decompress(next), initialized))
    }

    fn next_initialized_tick_index(
        &self,
        tick: i32,
        lte: bool,
    ) -> Result<(i32, bool), TickListError> {
        let (lowest, highest) = self.check_direction(tick, lte)?;

        // Start the walk inside the stored range; the direction check
        // guarantees a stored tick on this side.
        let compressed = i64::from(compress(tick, self.tick_spacing));
        let mut compressed = if lte {
            compressed.min(i64::from(compress(highest, self.tick_spacing)))
        } else {
            compressed.max(i64::from(compress(lowest, self.tick_spacing)) - 1)
        };
        let next = loop {
            let (next, initialized) = self.search_word(compressed, lte);
            if initialized {
                break next;
            }
            compressed = if lte { next - 1 } else { next };
        };

        let index = self.decompress(next);
        let initialized = self.record(index, lte).is_some_and(Tick::is_initialized);
        Ok((index, initialized))
    }
}
