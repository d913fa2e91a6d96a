pub mod capability;
pub mod config;
pub mod events;
pub mod frame_clock;
pub mod logo;

pub use capability::*;
pub use config::*;
pub use events::*;
pub use frame_clock::*;
pub use logo::*;
