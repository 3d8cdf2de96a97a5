//! User store implementations
//!
//! - **`postgres`** - sqlx/PostgreSQL, used when `DATABASE_URL` is set
//! - **`memory`** - in-process map, used otherwise and in tests

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;
