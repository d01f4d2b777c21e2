//! マンデルブロ集合の面積推定
//!
//! 複素平面上の格子点ごとに発散判定を行い、Rayon で並列に集計して
//! 集合の面積を見積もる。

pub mod common;

pub use common::area::AreaEstimate;
pub use common::error::{ConfigError, SampleError};
pub use common::grid::{GridParameters, GridParametersBuilder};
pub use common::sampler::{EscapeTally, Strategy};

/// グリッド全体をサンプリングして面積を推定
pub fn estimate_area(
    params: &GridParameters,
    strategy: Strategy,
    threads: Option<usize>,
) -> Result<AreaEstimate, SampleError> {
    let tally = common::sampler::count_escaped_with_threads(params, strategy, threads)?;
    Ok(AreaEstimate::from_tally(params, tally))
}
