//! 発散数から面積と誤差を求める

use std::fmt;

use super::constants::REFERENCE_AREA;
use super::grid::GridParameters;
use super::sampler::EscapeTally;

/// 面積の推定値
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaEstimate {
    pub area: f64,
    /// `area / N` による目安の誤差（統計的な信頼区間ではない）
    pub error: f64,
    pub tally: EscapeTally,
}

impl AreaEstimate {
    /// 集計結果から面積を計算
    ///
    /// `area = symmetry * real_span * imag_span * (N² - E) / N²`
    pub fn from_tally(params: &GridParameters, tally: EscapeTally) -> Self {
        let total = params.total_cells();
        let escaped = tally.escaped().min(total);
        let inside_fraction = (total - escaped) as f64 / total as f64;

        let area = params.symmetry() * params.real_span() * params.imag_span() * inside_fraction;
        let error = area / params.npoints() as f64;

        Self { area, error, tally }
    }
}

impl fmt::Display for AreaEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Area of Mandelbrot set = {:12.8} +/- {:12.8}",
            self.area, self.error
        )?;
        write!(f, "Correct answer should be around {}", REFERENCE_AREA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_escaped_covers_the_whole_region() {
        let params = GridParameters::default();
        let est = AreaEstimate::from_tally(&params, EscapeTally::ZERO);
        assert!((est.area - 2.0 * 2.5 * 1.125).abs() < 1e-12);
        assert_eq!(est.error, est.area / 1000.0);
    }

    #[test]
    fn everything_escaped_is_zero_area() {
        let params = GridParameters::builder().npoints(10).build().unwrap();
        let est = AreaEstimate::from_tally(&params, EscapeTally::new(100));
        assert_eq!(est.area, 0.0);
        assert_eq!(est.error, 0.0);
    }

    #[test]
    fn half_escaped_halves_the_area() {
        let params = GridParameters::builder()
            .npoints(4)
            .symmetry(1.0)
            .build()
            .unwrap();
        let est = AreaEstimate::from_tally(&params, EscapeTally::new(8));
        assert!((est.area - 2.5 * 1.125 / 2.0).abs() < 1e-12);
        assert!((est.error - est.area / 4.0).abs() < 1e-15);
    }

    #[test]
    fn report_format() {
        let est = AreaEstimate {
            area: 1.5066,
            error: 0.0015066,
            tally: EscapeTally::ZERO,
        };
        assert_eq!(
            est.to_string(),
            "Area of Mandelbrot set =   1.50660000 +/-   0.00150660\n\
             Correct answer should be around 1.510659"
        );
    }
}
