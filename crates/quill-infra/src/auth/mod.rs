//! Authentication implementations.

mod jwt;
mod password;

#[cfg(feature = "remote")]
mod google;

pub use jwt::{JwtConfig, JwtTokenService};
pub use password::Argon2PasswordService;

#[cfg(feature = "remote")]
pub use google::{GoogleConfig, GoogleIdentityProvider};
