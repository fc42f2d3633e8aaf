//! Bit-exact Uniswap V3–style concentrated-liquidity math in pure Rust.
//!
//! Off-chain services (quoters, routers, simulators) use this crate to
//! predict swap outcomes with the same integer semantics as the on-chain
//! contracts. There is no floating point anywhere.
//!
//! This crate exposes:
//! - Low‑level math primitives (`math::*`): full-precision mul-div, bit
//!   scans, tick ↔ sqrt-price conversion, sqrt-price deltas and the single
//!   swap step.
//! - Tick data (`ticks::*`): a validated, sorted tick list with boundary
//!   search, plus two `TickDataProvider` implementations.
//! - The fee tier table (`FeeAmount`).
//!
//! # Examples
//!
//! ## Pure math
//! ```
//! use clmm_quote_math::{math::tick_math, Q96, RESOLUTION, U256};
//!
//! let sqrt_price = tick_math::get_sqrt_ratio_at_tick(0).unwrap();
//! assert_eq!(sqrt_price, Q96);
//! assert_eq!(RESOLUTION, 96);
//! ```
//!
//! ## One swap step against the next initialized tick
//! ```
//! use clmm_quote_math::{
//!     math::{swap_math::compute_swap_step, tick_math::get_sqrt_ratio_at_tick},
//!     ticks::{Tick, TickDataProvider, TickList, TickListProvider},
//!     FeeAmount, I256, U256,
//! };
//!
//! let spacing = FeeAmount::Medium.tick_spacing();
//! let ticks = TickList::new(
//!     vec![
//!         Tick::new(-600, 1_000_000_000_000_000_000, 1_000_000_000_000_000_000),
//!         Tick::new(600, 1_000_000_000_000_000_000, -1_000_000_000_000_000_000),
//!     ],
//!     spacing,
//! )
//! .unwrap();
//! let provider = TickListProvider::new(ticks);
//!
//! let (next_tick, _initialized) = provider
//!     .next_initialized_tick_within_one_word(0, false, spacing)
//!     .unwrap();
//! let step = compute_swap_step(
//!     get_sqrt_ratio_at_tick(0).unwrap(),
//!     get_sqrt_ratio_at_tick(next_tick).unwrap(),
//!     1_000_000_000_000_000_000,
//!     I256::from_raw(U256::from(1_000_000u64)),
//!     FeeAmount::Medium.pips(),
//! )
//! .unwrap();
//! assert!(step.amount_in + step.fee_amount <= U256::from(1_000_000u64));
//! ```

pub use alloy_primitives::{I256, U256, U512};

pub mod error;
pub mod fee;
mod hash;
pub mod math;
pub mod ticks;

pub use error::{Error, ErrorKind};
pub use fee::{FeeAmount, MAX_FEE_PIPS};
pub use hash::FastMap;

/// Largest value of the 160-bit sqrt-price domain, `2^160 - 1`.
pub const U160_MAX: U256 = U256::from_limbs([u64::MAX, u64::MAX, u32::MAX as u64, 0]);
const U256_E6: U256 = U256::from_limbs([1000000, 0, 0, 0]);

/// Fractional bits of a Q64.96 sqrt price.
pub const RESOLUTION: u8 = 96;
pub const Q96: U256 = U256::from_limbs([0, 4294967296, 0, 0]);
