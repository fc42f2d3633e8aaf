#![allow(dead_code)]

use clmm_quote_math::{
    I256, Q96, U256,
    math::{
        bit_math::most_significant_bit,
        full_math::{mul_div, mul_div_rounding_up},
        sqrt_price_math::{
            get_amount_0_delta, get_amount_1_delta, get_next_sqrt_price_from_input,
            get_next_sqrt_price_from_output,
        },
        swap_math::compute_swap_step,
        tick_math::{get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio},
    },
    ticks::{Tick, TickBitmapProvider, TickDataProvider, TickList, TickListProvider},
};
use criterion::{BenchmarkId, Criterion};
use std::hint::black_box;
use std::str::FromStr;

const LIQUIDITY: u128 = 1_000_000_000_000_000_000;

fn dec(s: &str) -> U256 {
    U256::from_str(s).unwrap()
}

pub fn bench_full_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_math");
    let small = (dec("1000000000000000000"), dec("3000"), dec("997000"));
    let wide = (U256::MAX - U256::ONE, Q96 << 60, Q96 << 61);

    for (name, (a, b, d)) in [("fits_256", small), ("needs_512", wide)] {
        group.bench_function(BenchmarkId::new("mul_div", name), |bench| {
            bench.iter(|| mul_div(black_box(a), black_box(b), black_box(d)))
        });
        group.bench_function(BenchmarkId::new("mul_div_rounding_up", name), |bench| {
            bench.iter(|| mul_div_rounding_up(black_box(a), black_box(b), black_box(d)))
        });
    }
    group.finish();
}

pub fn bench_bit_math(c: &mut Criterion) {
    let x = dec("1461446703485210103287273052203988822378723970342");
    c.bench_function("bit_math/most_significant_bit", |bench| {
        bench.iter(|| most_significant_bit(black_box(x)))
    });
}

pub fn bench_tick_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_math");
    for tick in [-887272, -50000, 0, 738203] {
        group.bench_with_input(
            BenchmarkId::new("get_sqrt_ratio_at_tick", tick),
            &tick,
            |bench, &tick| bench.iter(|| get_sqrt_ratio_at_tick(black_box(tick))),
        );
        let sqrt_price = get_sqrt_ratio_at_tick(tick).unwrap();
        group.bench_with_input(
            BenchmarkId::new("get_tick_at_sqrt_ratio", tick),
            &sqrt_price,
            |bench, &sqrt_price| bench.iter(|| get_tick_at_sqrt_ratio(black_box(sqrt_price))),
        );
    }
    group.finish();
}

pub fn bench_sqrt_price_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt_price_math");
    let upper = dec("87150978765690771352898345369");
    let amount = dec("100000000000000000");

    group.bench_function("get_amount_0_delta", |bench| {
        bench.iter(|| get_amount_0_delta(black_box(Q96), black_box(upper), LIQUIDITY, true))
    });
    group.bench_function("get_amount_1_delta", |bench| {
        bench.iter(|| get_amount_1_delta(black_box(Q96), black_box(upper), LIQUIDITY, true))
    });
    for zero_for_one in [true, false] {
        group.bench_with_input(
            BenchmarkId::new("get_next_sqrt_price_from_input", zero_for_one),
            &zero_for_one,
            |bench, &zero_for_one| {
                bench.iter(|| {
                    get_next_sqrt_price_from_input(
                        black_box(Q96),
                        LIQUIDITY,
                        black_box(amount),
                        zero_for_one,
                    )
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("get_next_sqrt_price_from_output", zero_for_one),
            &zero_for_one,
            |bench, &zero_for_one| {
                bench.iter(|| {
                    get_next_sqrt_price_from_output(
                        black_box(Q96),
                        LIQUIDITY,
                        black_box(amount),
                        zero_for_one,
                    )
                })
            },
        );
    }
    group.finish();
}

pub fn bench_swap_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_math");
    let target_reached = dec("79623317895830914510639640423");
    let target_far = dec("250541448375047931186413801569");
    let exact_in = I256::from_dec_str("1000000000000000000").unwrap();
    let exact_out = I256::from_dec_str("-1000000000000000000").unwrap();

    for (name, target, amount) in [
        ("exact_in_reaches_target", target_reached, exact_in),
        ("exact_in_partial", target_far, exact_in),
        ("exact_out_partial", target_far, exact_out),
    ] {
        group.bench_function(name, |bench| {
            bench.iter(|| {
                compute_swap_step(
                    black_box(Q96),
                    black_box(target),
                    2 * LIQUIDITY,
                    black_box(amount),
                    600,
                )
            })
        });
    }
    group.finish();
}

/// A valid snapshot with `count` ticks spread around tick zero.
pub fn sample_tick_list(count: i32, tick_spacing: i32) -> TickList {
    let ticks = (0..count)
        .map(|i| {
            let index = (i - count / 2) * tick_spacing * 7;
            let net = if i == 0 {
                LIQUIDITY as i128
            } else if i == count - 1 {
                -(LIQUIDITY as i128)
            } else {
                0
            };
            Tick::new(index, LIQUIDITY, net)
        })
        .collect();
    TickList::new(ticks, tick_spacing).unwrap()
}

pub fn bench_tick_providers(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_providers");
    let spacing = 60;

    for count in [16, 1024] {
        let list = sample_tick_list(count, spacing);
        let bitmap = TickBitmapProvider::new(&list).unwrap();
        let provider = TickListProvider::new(list);

        group.bench_with_input(
            BenchmarkId::new("list/within_one_word", count),
            &provider,
            |bench, provider| {
                bench.iter(|| provider.next_initialized_tick_within_one_word(black_box(13), false, spacing))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("bitmap/within_one_word", count),
            &bitmap,
            |bench, bitmap| {
                bench.iter(|| bitmap.next_initialized_tick_within_one_word(black_box(13), false, spacing))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("list/next_initialized_tick_index", count),
            &provider,
            |bench, provider| {
                bench.iter(|| provider.next_initialized_tick_index(black_box(-13), true))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("bitmap/next_initialized_tick_index", count),
            &bitmap,
            |bench, bitmap| bench.iter(|| bitmap.next_initialized_tick_index(black_box(-13), true)),
        );
    }
    group.finish();
}

pub fn bench_tick_list_validation(c: &mut Criterion) {
    let list = sample_tick_list(1024, 60);
    let ticks = list.into_inner();
    c.bench_function("tick_list/validate_1024", |bench| {
        bench.iter(|| TickList::new(black_box(ticks.clone()), 60))
    });
}
