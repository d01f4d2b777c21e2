pub mod area;
pub mod constants;
pub mod error;
pub mod grid;
pub mod mandelbrot;
pub mod sampler;
