//! Document store backends.

mod json_file;
mod memory;

#[cfg(feature = "postgres")]
mod connection;
#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

#[cfg(feature = "postgres")]
pub use connection::{DatabaseConfig, connect};
#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;
