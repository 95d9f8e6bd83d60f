// src/application/ports/mod.rs
pub mod render;
pub mod security;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type SessionCodecPort = dyn security::SessionCodec;
pub type ClockPort = dyn time::Clock;
pub type MarkdownRendererPort = dyn render::MarkdownRenderer;
