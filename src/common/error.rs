//! エラー型

use thiserror::Error;

/// グリッドパラメータの検証エラー
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("npoints must be greater than zero")]
    ZeroPoints,

    #[error("max_iter must be greater than zero")]
    ZeroIterations,

    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("thread count must be greater than zero")]
    ZeroThreads,
}

/// サンプリング実行時のエラー
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("invalid grid parameters: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
