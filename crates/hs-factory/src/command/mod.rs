pub mod core;
pub mod types;
pub mod utils;

pub use self::core::*;
pub use types::*;
pub use utils::*;
