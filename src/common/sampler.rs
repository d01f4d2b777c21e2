//! グリッド全体の発散判定と集計
//!
//! 行単位で Rayon に仕事を分配し、発散した点の数を数える。
//! 集計方法は2通り:
//!   - [`Strategy::Reduce`]: 各タスクが行ごとに局所カウントし、join 時に加算で合成
//!   - [`Strategy::Atomic`]: 共有の `AtomicU64` に発散ごとに `fetch_add`
//!
//! どちらも加算の結合則・交換則により、スレッド数や分割の仕方によらず同じ結果になる。

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;
use tracing::{debug, info};

use super::error::{ConfigError, SampleError};
use super::grid::GridParameters;
use super::mandelbrot::escapes;

/// 発散した格子点の数
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EscapeTally(u64);

impl EscapeTally {
    pub const ZERO: Self = Self(0);

    pub fn new(escaped: u64) -> Self {
        Self(escaped)
    }

    pub fn escaped(self) -> u64 {
        self.0
    }

    /// 2つの部分集計を合成
    pub fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    fn record(&mut self, escaped: bool) {
        self.0 += u64::from(escaped);
    }
}

impl Add for EscapeTally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs)
    }
}

impl AddAssign for EscapeTally {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.combine(rhs);
    }
}

impl Sum for EscapeTally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::combine)
    }
}

/// 並列集計の方式
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// タスクごとの局所カウントを join 時に合成
    #[default]
    Reduce,
    /// 共有カウンタへのアトミック加算
    Atomic,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Reduce => write!(f, "reduce"),
            Strategy::Atomic => write!(f, "atomic"),
        }
    }
}

/// 1行（実部インデックス `i` 固定）を逐次に数える
fn count_row(params: &GridParameters, i: usize) -> EscapeTally {
    let mut tally = EscapeTally::ZERO;
    for j in 0..params.npoints() {
        tally.record(escapes(params.point(i, j), params));
    }
    tally
}

/// 逐次版（比較用の基準値）
pub fn count_escaped_serial(params: &GridParameters) -> EscapeTally {
    (0..params.npoints()).map(|i| count_row(params, i)).sum()
}

/// 任意の格子点集合について数える
///
/// 部分集合ごとの結果を合計すれば、分割の仕方によらず全体の結果と一致する。
pub fn count_escaped_in<I>(params: &GridParameters, cells: I) -> EscapeTally
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let mut tally = EscapeTally::ZERO;
    for (i, j) in cells {
        tally.record(escapes(params.point(i, j), params));
    }
    tally
}

/// 現在の Rayon スレッドプール上で並列に数える
pub fn count_escaped(params: &GridParameters, strategy: Strategy) -> EscapeTally {
    let rows = 0..params.npoints();

    match strategy {
        Strategy::Reduce => rows
            .into_par_iter()
            .map(|i| count_row(params, i))
            .reduce(|| EscapeTally::ZERO, EscapeTally::combine),
        Strategy::Atomic => {
            let escaped = AtomicU64::new(0);
            rows.into_par_iter().for_each(|i| {
                for j in 0..params.npoints() {
                    if escapes(params.point(i, j), params) {
                        escaped.fetch_add(1, Ordering::Relaxed);
                    }
                }
            });
            EscapeTally(escaped.into_inner())
        }
    }
}

/// スレッド数を指定して並列に数える
///
/// `threads` が `None` なら Rayon のグローバルプール（既定のスレッド数）を使う。
pub fn count_escaped_with_threads(
    params: &GridParameters,
    strategy: Strategy,
    threads: Option<usize>,
) -> Result<EscapeTally, SampleError> {
    let tally = match threads {
        None => {
            info!(
                threads = rayon::current_num_threads(),
                %strategy,
                npoints = params.npoints(),
                "sampling on the global pool"
            );
            count_escaped(params, strategy)
        }
        Some(0) => return Err(ConfigError::ZeroThreads.into()),
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .thread_name(|i| format!("area-worker-{i}"))
                .build()?;
            info!(
                threads = n,
                %strategy,
                npoints = params.npoints(),
                "sampling on a dedicated pool"
            );
            pool.install(|| count_escaped(params, strategy))
        }
    };

    debug!(
        escaped = tally.escaped(),
        total = params.total_cells(),
        "sampling finished"
    );
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> GridParameters {
        GridParameters::builder()
            .npoints(64)
            .max_iter(200)
            .build()
            .unwrap()
    }

    #[test]
    fn tally_combine_is_addition() {
        let a = EscapeTally::new(3);
        let b = EscapeTally::new(7);
        assert_eq!(a + b, EscapeTally::new(10));
        assert_eq!(a.combine(b), b.combine(a));
        assert_eq!(a + EscapeTally::ZERO, a);

        let mut c = a;
        c += b;
        assert_eq!(c.escaped(), 10);

        let total: EscapeTally = [1, 2, 3].into_iter().map(EscapeTally::new).sum();
        assert_eq!(total.escaped(), 6);
    }

    #[test]
    fn parallel_strategies_match_serial() {
        let params = small_grid();
        let serial = count_escaped_serial(&params);
        assert_eq!(count_escaped(&params, Strategy::Reduce), serial);
        assert_eq!(count_escaped(&params, Strategy::Atomic), serial);
    }

    #[test]
    fn count_stays_within_grid() {
        let params = small_grid();
        let tally = count_escaped(&params, Strategy::Reduce);
        assert!(tally.escaped() > 0);
        assert!(tally.escaped() < params.total_cells());
    }

    #[test]
    fn cell_subset_counts_sum_to_whole() {
        let params = small_grid();
        let n = params.npoints();
        let even = count_escaped_in(
            &params,
            (0..n).flat_map(|i| (0..n).map(move |j| (i, j))).filter(|(i, j)| (i + j) % 2 == 0),
        );
        let odd = count_escaped_in(
            &params,
            (0..n).flat_map(|i| (0..n).map(move |j| (i, j))).filter(|(i, j)| (i + j) % 2 == 1),
        );
        assert_eq!(even + odd, count_escaped_serial(&params));
    }

    #[test]
    fn zero_threads_is_rejected() {
        let params = small_grid();
        let err = count_escaped_with_threads(&params, Strategy::Reduce, Some(0)).unwrap_err();
        assert!(matches!(err, SampleError::Config(ConfigError::ZeroThreads)));
    }

    #[test]
    fn dedicated_pool_matches_global_pool() {
        let params = small_grid();
        let global = count_escaped_with_threads(&params, Strategy::Reduce, None).unwrap();
        let pooled = count_escaped_with_threads(&params, Strategy::Atomic, Some(3)).unwrap();
        assert_eq!(global, pooled);
    }

    #[test]
    fn strategy_display() {
        assert_eq!(Strategy::Reduce.to_string(), "reduce");
        assert_eq!(Strategy::Atomic.to_string(), "atomic");
        assert_eq!(Strategy::default(), Strategy::Reduce);
    }
}
