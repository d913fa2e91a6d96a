pub mod animation;
pub mod field;
pub mod ring;

pub use animation::*;
pub use field::*;
pub use ring::*;
