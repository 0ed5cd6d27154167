//! Configuration access.

mod memory;
mod settings;
mod traits;

pub use memory::MapConfig;
pub use settings::{keys, DiscourseSettings};
pub use traits::ConfigRepository;
