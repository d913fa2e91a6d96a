pub mod color;
pub mod markup;
pub mod spline;

pub use color::*;
pub use markup::*;
pub use spline::*;
