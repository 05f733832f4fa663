//! Background work driven by the in-process job queue.

pub mod notifications;
