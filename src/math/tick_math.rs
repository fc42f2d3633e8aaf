use crate::error::{Error, StateError};
use crate::math::bit_math::most_significant_bit;
use alloy_primitives::{I256, U256};

pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = -MIN_TICK;

/// `get_sqrt_ratio_at_tick(MIN_TICK)`
pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4295128739, 0, 0, 0]);
/// `get_sqrt_ratio_at_tick(MAX_TICK)`
pub const MAX_SQRT_RATIO: U256 =
    U256::from_limbs([6743328256752651558, 17280870778742802505, 4294805859, 0]);

/// `log_sqrt(1.0001)(2)` scaled by 2^64; turns a log2 into a tick.
pub const SQRT_10001: I256 = I256::from_raw(U256::from_limbs([11745905768312294533, 13863, 0, 0]));
/// Error bound subtracted to get the low tick candidate.
pub const TICK_LOW: I256 = I256::from_raw(U256::from_limbs([
    6552757943157144234,
    184476617836266586,
    0,
    0,
]));
/// Error bound added to get the high tick candidate.
pub const TICK_HIGH: I256 = I256::from_raw(U256::from_limbs([
    4998474450511881007,
    15793544031827761793,
    0,
    0,
]));

/// Starting ratio (Q128.128) for odd ticks: `1 / sqrt(1.0001)`.
const RATIO_ODD_SEED: U256 = U256::from_limbs([12262481743371124737, 18445821805675392311, 0, 0]);
/// Starting ratio (Q128.128) for even ticks: exactly one.
const RATIO_EVEN_SEED: U256 = U256::from_limbs([0, 0, 1, 0]);

/// `1 / sqrt(1.0001)^(2^i)` in Q128.128 for tick bits 1 through 19.
static SQRT_RATIO_MULTIPLIERS: [U256; 19] = [
    U256::from_limbs([6459403834229662010, 18444899583751176498, 0, 0]),
    U256::from_limbs([17226890335427755468, 18443055278223354162, 0, 0]),
    U256::from_limbs([2032852871939366096, 18439367220385604838, 0, 0]),
    U256::from_limbs([14545316742740207172, 18431993317065449817, 0, 0]),
    U256::from_limbs([5129152022828963008, 18417254355718160513, 0, 0]),
    U256::from_limbs([4894419605888772193, 18387811781193591352, 0, 0]),
    U256::from_limbs([1280255884321894483, 18329067761203520168, 0, 0]),
    U256::from_limbs([15924666964335305636, 18212142134806087854, 0, 0]),
    U256::from_limbs([8010504389359918676, 17980523815641551639, 0, 0]),
    U256::from_limbs([10668036004952895731, 17526086738831147013, 0, 0]),
    U256::from_limbs([4878133418470705625, 16651378430235024244, 0, 0]),
    U256::from_limbs([9537173718739605541, 15030750278693429944, 0, 0]),
    U256::from_limbs([9972618978014552549, 12247334978882834399, 0, 0]),
    U256::from_limbs([10428997489610666743, 8131365268884726200, 0, 0]),
    U256::from_limbs([9305304367709015974, 3584323654723342297, 0, 0]),
    U256::from_limbs([14301143598189091785, 696457651847595233, 0, 0]),
    U256::from_limbs([7393154844743099908, 26294789957452057, 0, 0]),
    U256::from_limbs([2209338891292245656, 37481735321082, 0, 0]),
    U256::from_limbs([10518117631919034274, 76158723, 0, 0]),
];

const SHIFT_32: usize = 32;
const SHIFT_128: usize = 128;
const LOG2_FRACTION_BITS: usize = 14;

/// Returns the sqrt price (Q64.96 fixed‑point) at a given tick index,
/// i.e. `sqrt(1.0001^tick) * 2^96`, or `StateError::TickOutOfBounds` if the
/// tick is outside `[MIN_TICK, MAX_TICK]`.
///
/// Use this to convert from discrete ticks to the continuous price
/// representation used by the rest of the math.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U256, StateError> {
    let abs_tick = tick.unsigned_abs();

    if abs_tick > MAX_TICK as u32 {
        return Err(StateError::TickOutOfBounds);
    }

    let mut ratio = if abs_tick & 1 != 0 {
        RATIO_ODD_SEED
    } else {
        RATIO_EVEN_SEED
    };

    for (bit, multiplier) in SQRT_RATIO_MULTIPLIERS.iter().enumerate() {
        if abs_tick & (2 << bit) != 0 {
            ratio = ratio.wrapping_mul(*multiplier) >> SHIFT_128;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up so the result never understates the price
    let lower_32_bits = ratio.as_limbs()[0] & 0xFFFF_FFFF;
    Ok((ratio >> SHIFT_32) + U256::from((lower_32_bits != 0) as u64))
}

/// Computes the greatest tick whose sqrt ratio is at or below the given
/// sqrt price (Q64.96 fixed‑point).
///
/// The result satisfies
/// `get_sqrt_ratio_at_tick(tick) <= sqrt_price_x96 < get_sqrt_ratio_at_tick(tick + 1)`.
/// Prices outside `[MIN_SQRT_RATIO, MAX_SQRT_RATIO)` are rejected with
/// `StateError::SqrtPriceOutOfBounds`.
pub fn get_tick_at_sqrt_ratio(sqrt_price_x96: U256) -> Result<i32, Error> {
    if sqrt_price_x96 < MIN_SQRT_RATIO || sqrt_price_x96 >= MAX_SQRT_RATIO {
        return Err(StateError::SqrtPriceOutOfBounds.into());
    }

    let ratio = sqrt_price_x96 << SHIFT_32;
    let msb = most_significant_bit(ratio)? as usize;

    // 128-bit mantissa with the leading one at bit 127
    let mut r = if msb >= 128 {
        ratio >> (msb - 127)
    } else {
        ratio << (127 - msb)
    };

    let mut log_2: I256 =
        (I256::from_raw(U256::from(msb)) - I256::from_raw(U256::from(128u8))) << 64;

    // Squaring the mantissa doubles its log; an overflow past bit 127 is the
    // next fractional bit of log2.
    for i in 0..LOG2_FRACTION_BITS {
        r = r.wrapping_mul(r) >> 127;
        let f = r >> SHIFT_128;
        log_2 |= I256::from_raw(f << (63 - i));
        r >>= f.to::<usize>();
    }

    let log_sqrt10001 = log_2.wrapping_mul(SQRT_10001);
    let tick_low = (log_sqrt10001 - TICK_LOW).asr(SHIFT_128).low_i32();
    let tick_high = (log_sqrt10001 + TICK_HIGH).asr(SHIFT_128).low_i32();

    Ok(if tick_low == tick_high {
        tick_low
    } else if get_sqrt_ratio_at_tick(tick_high)? <= sqrt_price_x96 {
        tick_high
    } else {
        tick_low
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Q96;
    use proptest::prelude::*;

    use std::{ops::Sub, str::FromStr};

    #[test]
    fn test_get_sqrt_ratio_at_tick_bounds() {
        assert!(matches!(
            get_sqrt_ratio_at_tick(MIN_TICK - 1),
            Err(StateError::TickOutOfBounds)
        ));
        assert!(matches!(
            get_sqrt_ratio_at_tick(MAX_TICK + 1),
            Err(StateError::TickOutOfBounds)
        ));
        assert!(matches!(
            get_sqrt_ratio_at_tick(i32::MIN),
            Err(StateError::TickOutOfBounds)
        ));
    }

    #[test]
    fn test_get_sqrt_ratio_at_tick_values() {
        assert_eq!(
            get_sqrt_ratio_at_tick(MIN_TICK).unwrap(),
            U256::from(4295128739u64),
            "sqrt ratio at min incorrect"
        );
        assert_eq!(get_sqrt_ratio_at_tick(MIN_TICK).unwrap(), MIN_SQRT_RATIO);
        assert_eq!(
            get_sqrt_ratio_at_tick(MIN_TICK + 1).unwrap(),
            U256::from(4295343490u64),
            "sqrt ratio at min + 1 incorrect"
        );
        assert_eq!(get_sqrt_ratio_at_tick(0).unwrap(), Q96, "sqrt ratio at 0");
        assert_eq!(
            get_sqrt_ratio_at_tick(MAX_TICK - 1).unwrap(),
            U256::from_str("1461373636630004318706518188784493106690254656249").unwrap(),
            "sqrt ratio at max - 1 incorrect"
        );
        assert_eq!(
            get_sqrt_ratio_at_tick(MAX_TICK).unwrap(),
            U256::from_str("1461446703485210103287273052203988822378723970342").unwrap(),
            "sqrt ratio at max incorrect"
        );
        assert_eq!(get_sqrt_ratio_at_tick(MAX_TICK).unwrap(), MAX_SQRT_RATIO);

        // checking hard coded values against solidity results
        let cases: [(i32, &str); 14] = [
            (50, "79426470787362580746886972461"),
            (100, "79625275426524748796330556128"),
            (250, "80224679980005306637834519095"),
            (500, "81233731461783161732293370115"),
            (1000, "83290069058676223003182343270"),
            (2500, "89776708723587163891445672585"),
            (3000, "92049301871182272007977902845"),
            (4000, "96768528593268422080558758223"),
            (5000, "101729702841318637793976746270"),
            (50000, "965075977353221155028623082916"),
            (150000, "143194173941309278083010301478497"),
            (250000, "21246587762933397357449903968194344"),
            (500000, "5697689776495288729098254600827762987878"),
            (738203, "847134979253254120489401328389043031315994541"),
        ];
        for (tick, expected) in cases {
            assert_eq!(
                get_sqrt_ratio_at_tick(tick).unwrap(),
                U256::from_str(expected).unwrap(),
                "sqrt ratio at {tick} incorrect"
            );
        }
    }

    #[test]
    fn test_get_tick_at_sqrt_ratio() {
        //throws for too low
        let result = get_tick_at_sqrt_ratio(MIN_SQRT_RATIO.sub(U256::ONE));
        assert!(matches!(
            result,
            Err(Error::StateError(StateError::SqrtPriceOutOfBounds))
        ));

        //throws for too high
        let result = get_tick_at_sqrt_ratio(MAX_SQRT_RATIO);
        assert!(matches!(
            result,
            Err(Error::StateError(StateError::SqrtPriceOutOfBounds))
        ));

        //ratio of min tick
        assert_eq!(get_tick_at_sqrt_ratio(MIN_SQRT_RATIO).unwrap(), MIN_TICK);

        //ratio of min tick + 1
        let result = get_tick_at_sqrt_ratio(U256::from(4295343490u64)).unwrap();
        assert_eq!(result, MIN_TICK + 1);

        //ratio of max tick - 1
        let result = get_tick_at_sqrt_ratio(
            U256::from_str("1461373636630004318706518188784493106690254656249").unwrap(),
        )
        .unwrap();
        assert_eq!(result, MAX_TICK - 1);

        //ratio closest to max tick
        let result = get_tick_at_sqrt_ratio(MAX_SQRT_RATIO - U256::ONE).unwrap();
        assert_eq!(result, MAX_TICK - 1);

        assert_eq!(get_tick_at_sqrt_ratio(Q96).unwrap(), 0);
        assert_eq!(get_tick_at_sqrt_ratio(Q96 - U256::ONE).unwrap(), -1);
    }

    fn sqrt_price_in_domain() -> impl Strategy<Value = U256> {
        any::<[u64; 3]>().prop_map(|[l0, l1, l2]| {
            let raw = U256::from_limbs([l0, l1, l2, 0]);
            MIN_SQRT_RATIO + raw % (MAX_SQRT_RATIO - MIN_SQRT_RATIO)
        })
    }

    proptest! {
        #[test]
        fn tick_round_trips_through_sqrt_ratio(tick in MIN_TICK..MAX_TICK) {
            let sqrt_ratio = get_sqrt_ratio_at_tick(tick).unwrap();
            prop_assert_eq!(get_tick_at_sqrt_ratio(sqrt_ratio).unwrap(), tick);
        }

        #[test]
        fn sqrt_ratio_is_monotonic(tick in MIN_TICK..MAX_TICK) {
            prop_assert!(
                get_sqrt_ratio_at_tick(tick).unwrap() < get_sqrt_ratio_at_tick(tick + 1).unwrap()
            );
        }

        #[test]
        fn tick_brackets_the_price(sqrt_price in sqrt_price_in_domain()) {
            let tick = get_tick_at_sqrt_ratio(sqrt_price).unwrap();
            prop_assert!(get_sqrt_ratio_at_tick(tick).unwrap() <= sqrt_price);
            prop_assert!(sqrt_price < get_sqrt_ratio_at_tick(tick + 1).unwrap());
        }
    }
}
