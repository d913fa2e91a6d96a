//! A noise-driven morphing blob logo.
//!
//! A ring of seven control points is wobbled by simplex noise and a closed
//! spline is fit through it every frame while the fill gradient's hue drifts
//! on a second, slower noise cursor. [`RuntimeLogo`] owns all of it and is
//! host agnostic: a window host calls [`RuntimeLogo::tick`] per refresh and
//! forwards pointer events, a page host uses [`RuntimeLogo::markup`].

pub mod core;
pub mod motion;
#[path = "core/prelude.rs"]
pub mod prelude;
pub mod render;
pub mod runtime;

pub use runtime::logo::RuntimeLogo;
