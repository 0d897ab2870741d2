pub mod chef;
pub mod pool_info;
pub mod user_info;

pub use chef::*;
pub use pool_info::*;
pub use user_info::*;
