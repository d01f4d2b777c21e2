//! マンデルブロ集合の面積推定 (CLI)
//!
//! 使い方:
//!   mandelbrot-area              既定のスレッド数で実行
//!   mandelbrot-area 4            4スレッドで実行
//!   mandelbrot-area --strategy atomic --npoints 2000 8
//!
//! 結果は標準出力へ、ログは標準エラーへ出す（`RUST_LOG` で詳細度を変更可能）。

use std::process::ExitCode;
use std::time::Instant;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use mandelbrot_area::common::constants::{MAX_ITER, NPOINTS};
use mandelbrot_area::{estimate_area, GridParameters, SampleError, Strategy};
use tracing::info;

/// グリッドサンプリングでマンデルブロ集合の面積を推定する
#[derive(Parser, Debug)]
#[command(name = "mandelbrot-area", version, about, long_about = None)]
struct Cli {
    /// ワーカースレッド数（省略時は Rayon の既定値）
    #[arg(value_name = "NUM_THREADS", value_parser = positive_usize())]
    threads: Option<usize>,

    /// 発散数の集計方式
    #[arg(long, value_enum, default_value_t = Strategy::Reduce)]
    strategy: Strategy,

    /// グリッドの一辺の点数
    #[arg(long, default_value_t = NPOINTS, value_parser = positive_usize())]
    npoints: usize,

    /// 最大反復回数
    #[arg(long, default_value_t = MAX_ITER, value_parser = clap::value_parser!(u32).range(1..))]
    max_iter: u32,

    /// 実行時間を表示しない
    #[arg(long)]
    no_time: bool,
}

fn positive_usize() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(1..)
}

fn run(cli: &Cli) -> Result<(), SampleError> {
    let params = GridParameters::builder()
        .npoints(cli.npoints)
        .max_iter(cli.max_iter)
        .build()?;

    let start = Instant::now();
    let estimate = estimate_area(&params, cli.strategy, cli.threads)?;
    let elapsed = start.elapsed();

    info!(
        escaped = estimate.tally.escaped(),
        total = params.total_cells(),
        elapsed = ?elapsed,
        "estimate complete"
    );

    if !cli.no_time {
        println!("Time of execution: {:.6} seconds", elapsed.as_secs_f64());
    }
    println!("{}", estimate);
    Ok(())
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    // 引数エラーは clap が終了コード 2 で処理する
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
