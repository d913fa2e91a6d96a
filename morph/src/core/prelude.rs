pub use crate::core::logging::init_logger;
pub use crate::core::logging::{debug, error, info, trace, warn};
pub use crate::core::util::TWO_PI;
pub use crate::core::util::constrain;
pub use crate::core::util::lerp;
pub use crate::core::util::map_range;
#[allow(unused_imports)]
pub use crate::motion::*;
#[allow(unused_imports)]
pub use crate::render::*;
#[allow(unused_imports)]
pub use crate::runtime::*;
