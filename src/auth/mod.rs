// src/auth/mod.rs
pub mod service;
pub mod tokens;

pub use service::{AuthService, LoginCredentials};
pub use tokens::TokenStore;
