use thiserror::Error;

/// Coarse classification of every error this crate can return.
///
/// Callers use it to tell caller bugs (`Invariant`) apart from expected
/// boundary conditions such as a swap running out of ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A result does not fit in its representable width.
    Overflow,
    /// A cast or logical bound was violated.
    Range,
    /// A degenerate operand was supplied.
    InvalidInput,
    /// A tick outside `[MIN_TICK, MAX_TICK]`.
    InvalidTick,
    /// A sqrt ratio outside `[MIN_SQRT_RATIO, MAX_SQRT_RATIO)`.
    InvalidSqrtRatio,
    /// A precondition the caller should have guaranteed did not hold.
    Invariant,
    /// A tick list validation or search failure.
    TickList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("Math error - overflow")]
    Overflow,
    #[error("Math error - underflow")]
    Underflow,
    #[error("Math error - division by zero")]
    DivisionByZero,
    #[error("BitMath error - zero input value")]
    ZeroValue,
    #[error("SafeCast error - value exceeds int256 max")]
    ExceedsInt256Max,
    #[error("SafeCast error - value exceeds uint160 max")]
    ExceedsUint160,
    #[error("LiquidityMath error - uint128 overflow")]
    LiquidityOverflow,
    #[error("LiquidityMath error - uint128 underflow")]
    LiquidityUnderflow,
}

impl MathError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MathError::Overflow => ErrorKind::Overflow,
            MathError::Underflow | MathError::DivisionByZero => ErrorKind::Invariant,
            MathError::ZeroValue => ErrorKind::InvalidInput,
            MathError::ExceedsInt256Max
            | MathError::ExceedsUint160
            | MathError::LiquidityOverflow
            | MathError::LiquidityUnderflow => ErrorKind::Range,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("State error - sqrtPrice out of bounds")]
    SqrtPriceOutOfBounds,
    #[error("State error - sqrtPrice is 0")]
    SqrtPriceIsZero,
    #[error("State error - sqrtRatio is 0")]
    SqrtRatioIsZero,

    #[error("State error - tick out of bounds")]
    TickOutOfBounds,

    #[error("State error - liquidity is 0")]
    LiquidityIsZero,

    #[error("State error - requested amount exceeds pool reserves")]
    InsufficientReserves,

    #[error("State error - fee exceeds 1_000_000 pips")]
    FeeOutOfBounds,
}

impl StateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StateError::SqrtPriceOutOfBounds => ErrorKind::InvalidSqrtRatio,
            StateError::TickOutOfBounds => ErrorKind::InvalidTick,
            StateError::SqrtPriceIsZero
            | StateError::LiquidityIsZero
            | StateError::FeeOutOfBounds => ErrorKind::Range,
            StateError::SqrtRatioIsZero | StateError::InsufficientReserves => {
                ErrorKind::Invariant
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TickListError {
    #[error("TickList error - tick spacing must be greater than 0")]
    ZeroTickSpacing,
    #[error("TickList error - tick index is not a multiple of the tick spacing")]
    SpacingMismatch,
    #[error("TickList error - liquidity net deltas do not sum to zero")]
    NonZeroNetSum,
    #[error("TickList error - ticks must be sorted by index")]
    NotSorted,
    #[error("TickList error - empty tick list")]
    EmptyList,
    #[error("TickList error - below smallest tick")]
    BelowSmallest,
    #[error("TickList error - at or above largest tick")]
    AtOrAboveLargest,
    #[error("TickList error - invalid tick index")]
    InvalidTickIndex,
    #[error("TickList error - tick index outside the legal tick range")]
    TickOutOfRange,
}

impl TickListError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::TickList
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    MathError(#[from] crate::error::MathError),

    #[error(transparent)]
    StateError(#[from] crate::error::StateError),

    #[error(transparent)]
    TickListError(#[from] crate::error::TickListError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MathError(e) => e.kind(),
            Error::StateError(e) => e.kind(),
            Error::TickListError(e) => e.kind(),
        }
    }
}
