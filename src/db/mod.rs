pub mod postgres;
pub mod sentinel;

pub use postgres::create_pool;
pub use sentinel::{PoolSentinel, PoolStatus};
