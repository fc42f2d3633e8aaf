use crate::error::TickListError;
use crate::ticks::tick::Tick;
use crate::ticks::tick_list::TickList;

/// Read access to a pool's initialized ticks.
///
/// Implementations may store ticks however they like but must answer every
/// query exactly like the sorted-list search in [`crate::ticks::tick_list`].
pub trait TickDataProvider {
    /// Returns the tick stored at exactly `tick`.
    fn get_tick(&self, tick: i32) -> Result<Tick, TickListError>;

    /// Returns the next initialized tick without leaving the bitmap word
    /// of `tick`, or the word edge with `false` if there is none.
    ///
    /// `tick_spacing` must equal the spacing the ticks were validated with.
    fn next_initialized_tick_within_one_word(
        &self,
        tick: i32,
        lte: bool,
        tick_spacing: i32,
    ) -> Result<(i32, bool), TickListError>;

    /// Returns the next tick in the given direction and whether it carries
    /// gross liquidity.
    fn next_initialized_tick_index(&self, tick: i32, lte: bool)
    -> Result<(i32, bool), TickListError>;
}

/// Provider over a fully materialized, validated tick list.
#[derive(Clone, Debug)]
pub struct TickListProvider {
    ticks: TickList,
}

impl TickListProvider {
    pub fn new(ticks: TickList) -> Self {
        Self { ticks }
    }

    pub fn ticks(&self) -> &TickList {
        &self.ticks
    }
}

impl From<TickList> for TickListProvider {
    fn from(ticks: TickList) -> Self {
        Self::new(ticks)
    }
}

impl TickDataProvider for TickListProvider {
    fn get_tick(&self, tick: i32) -> Result<Tick, TickListError> {
        self.ticks.get_tick(tick)
    }

    fn next_initialized_tick_within_one_word(
        &self,
        tick: i32,
        lte: bool,
        tick_spacing: i32,
    ) -> Result<(i32, bool), TickListError> {
        if tick_spacing <= 0 {
            return Err(TickListError::ZeroTickSpacing);
        }
        if tick_spacing != self.ticks.tick_spacing() {
            return Err(TickListError::SpacingMismatch);
        }
        crate::ticks::tick_list::next_initialized_tick_within_one_word(
            &self.ticks,
            tick,
            lte,
            tick_spacing,
        )
    }

    fn next_initialized_tick_index(
        &self,
        tick: i32,
        lte: bool,
    ) -> Result<(i32, bool), TickListError> {
        self.ticks.next_initialized_tick_index(tick, lte)
    }
}
