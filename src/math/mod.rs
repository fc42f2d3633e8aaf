pub mod full_math;
pub mod safe_cast;
pub mod sqrt_price_math;
pub mod swap_math;
pub mod tick_math;

pub mod bit_math;

pub mod liquidity_math;
