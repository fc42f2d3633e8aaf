/// An initialized tick boundary as seen by an off-chain quoter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick {
    pub index: i32,
    /// Total liquidity of all positions that use this tick as a boundary.
    pub liquidity_gross: u128,
    /// Liquidity added when the price crosses this tick moving up.
    pub liquidity_net: i128,
}

impl Tick {
    #[inline]
    pub const fn new(index: i32, liquidity_gross: u128, liquidity_net: i128) -> Self {
        Self {
            index,
            liquidity_gross,
            liquidity_net,
        }
    }

    /// Whether any position references this tick.
    #[inline]
    pub const fn is_initialized(&self) -> bool {
        self.liquidity_gross != 0
    }
}
