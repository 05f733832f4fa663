//! Image hosting backends.

mod local;

#[cfg(feature = "remote")]
mod cloudinary;

pub use local::LocalImageHost;

#[cfg(feature = "remote")]
pub use cloudinary::{CloudinaryConfig, CloudinaryImageHost};
