//! サンプリンググリッドの定義
//!
//! 複素平面上の長方形領域を N×N の格子に分割し、
//! 格子番号 `(i, j)` を複素数 `c` に対応付ける。

use num_complex::Complex;

use super::constants::*;
use super::error::ConfigError;

/// 1回の計算で固定されるパラメータ
///
/// [`GridParameters::builder`] で検証済みの値のみ生成できる。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParameters {
    npoints: usize,
    real_span: f64,
    real_offset: f64,
    imag_span: f64,
    imag_offset: f64,
    eps: f64,
    max_iter: u32,
    threshold: f64,
    symmetry: f64,
}

impl Default for GridParameters {
    fn default() -> Self {
        Self {
            npoints: NPOINTS,
            real_span: REAL_SPAN,
            real_offset: REAL_OFFSET,
            imag_span: IMAG_SPAN,
            imag_offset: IMAG_OFFSET,
            eps: EPS,
            max_iter: MAX_ITER,
            threshold: ESCAPE_THRESHOLD,
            symmetry: SYMMETRY_FACTOR,
        }
    }
}

impl GridParameters {
    pub fn builder() -> GridParametersBuilder {
        GridParametersBuilder {
            params: Self::default(),
        }
    }

    /// グリッドの一辺の点数 N
    pub fn npoints(&self) -> usize {
        self.npoints
    }

    /// 格子点の総数 N²
    pub fn total_cells(&self) -> u64 {
        let n = self.npoints as u64;
        n * n
    }

    pub fn real_span(&self) -> f64 {
        self.real_span
    }

    pub fn real_offset(&self) -> f64 {
        self.real_offset
    }

    pub fn imag_span(&self) -> f64 {
        self.imag_span
    }

    pub fn imag_offset(&self) -> f64 {
        self.imag_offset
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn symmetry(&self) -> f64 {
        self.symmetry
    }

    /// 格子番号 `(i, j)` を複素平面上の点に変換
    #[inline]
    pub fn point(&self, i: usize, j: usize) -> Complex<f64> {
        let n = self.npoints as f64;
        let re = self.real_offset + self.real_span * i as f64 / n + self.eps;
        let im = self.imag_offset + self.imag_span * j as f64 / n + self.eps;
        Complex::new(re, im)
    }
}

/// [`GridParameters`] のビルダー（未指定の項目は既定値）
#[derive(Debug, Clone)]
pub struct GridParametersBuilder {
    params: GridParameters,
}

impl GridParametersBuilder {
    pub fn npoints(mut self, npoints: usize) -> Self {
        self.params.npoints = npoints;
        self
    }

    pub fn max_iter(mut self, max_iter: u32) -> Self {
        self.params.max_iter = max_iter;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.params.threshold = threshold;
        self
    }

    /// 実軸方向の領域 `[offset, offset + span]`
    pub fn real_axis(mut self, offset: f64, span: f64) -> Self {
        self.params.real_offset = offset;
        self.params.real_span = span;
        self
    }

    /// 虚軸方向の領域 `[offset, offset + span]`
    pub fn imag_axis(mut self, offset: f64, span: f64) -> Self {
        self.params.imag_offset = offset;
        self.params.imag_span = span;
        self
    }

    pub fn eps(mut self, eps: f64) -> Self {
        self.params.eps = eps;
        self
    }

    pub fn symmetry(mut self, symmetry: f64) -> Self {
        self.params.symmetry = symmetry;
        self
    }

    pub fn build(self) -> Result<GridParameters, ConfigError> {
        let p = self.params;

        if p.npoints == 0 {
            return Err(ConfigError::ZeroPoints);
        }
        if p.max_iter == 0 {
            return Err(ConfigError::ZeroIterations);
        }

        for (name, value) in [
            ("threshold", p.threshold),
            ("real_span", p.real_span),
            ("imag_span", p.imag_span),
            ("symmetry", p.symmetry),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        for (name, value) in [
            ("real_offset", p.real_offset),
            ("imag_offset", p.imag_offset),
            ("eps", p.eps),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }

        Ok(p)
    }
}
