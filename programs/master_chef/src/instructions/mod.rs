pub mod admin;
pub mod farm;
pub mod pool;

pub use admin::*;
pub use farm::*;
pub use pool::*;
