//! 共通定数

/// グリッドの一辺の点数
pub const NPOINTS: usize = 1000;

/// 最大反復回数
pub const MAX_ITER: u32 = 1000;

/// 発散判定の閾値（|z|² と比較、|z| > 2 に相当）
pub const ESCAPE_THRESHOLD: f64 = 4.0;

/// サンプリング領域: 実軸 [-2.0, 0.5]
pub const REAL_OFFSET: f64 = -2.0;
pub const REAL_SPAN: f64 = 2.5;

/// サンプリング領域: 虚軸 [0, 1.125]（上半平面のみ）
pub const IMAG_OFFSET: f64 = 0.0;
pub const IMAG_SPAN: f64 = 1.125;

/// 格子点が境界値にちょうど乗らないようにずらす量
pub const EPS: f64 = 1.0e-5;

/// 上半平面のみを数えるので、実軸に関する対称性で2倍する
pub const SYMMETRY_FACTOR: f64 = 2.0;

/// 参考値として表示する面積
pub const REFERENCE_AREA: &str = "1.510659";
