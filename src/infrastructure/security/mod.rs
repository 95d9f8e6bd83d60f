// src/infrastructure/security/mod.rs
pub mod password;
pub mod session;

pub use password::Argon2PasswordHasher;
pub use session::HmacSessionCodec;
