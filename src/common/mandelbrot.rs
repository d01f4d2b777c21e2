//! マンデルブロ集合の発散判定

use num_complex::Complex;

use super::grid::GridParameters;

/// `z = c` から `z ← z² + c` を反復し、発散したステップ数を返す
///
/// `|z|²` が `threshold` を超えた時点で打ち切り、そのステップ（1始まり）を返す。
/// `max_iter` 回の反復で一度も超えなければ集合の内側とみなして `None`。
#[inline]
pub fn escape_iter(c: Complex<f64>, max_iter: u32, threshold: f64) -> Option<u32> {
    let mut z = c;

    for step in 1..=max_iter {
        z = z * z + c;
        if z.norm_sqr() > threshold {
            return Some(step);
        }
    }
    None
}

/// グリッドパラメータの反復上限と閾値で発散判定
#[inline]
pub fn escapes(c: Complex<f64>, params: &GridParameters) -> bool {
    escape_iter(c, params.max_iter(), params.threshold()).is_some()
}
