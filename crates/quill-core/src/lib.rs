//! # Quill Core
//!
//! The domain layer of the Quill blog backend: typed records, the array mutators
//! every collection is edited with, the ports infrastructure must implement, and
//! the services the HTTP layer calls.
//! This crate has no infrastructure dependencies.

pub mod collection;
pub mod domain;
pub mod error;
pub mod events;
pub mod ports;
pub mod records;
pub mod service;
pub mod validation;

pub use collection::Collection;
pub use error::{DomainError, FieldError, Missing, StoreError};
