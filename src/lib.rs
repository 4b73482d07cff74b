// src/lib.rs
//! Data-access layer for the Hellio recruiting dashboard.
//!
//! Layering, outermost first: [`store::DataStore`] (cached facade the UI
//! talks to) over the typed resource services in [`api`], over the
//! authenticated [`client::ApiClient`], which leans on [`auth`] for the
//! persisted bearer tokens. [`mappers`] turns wire records into the view
//! models in [`types::model`].

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod mappers;
pub mod store;
pub mod types;

pub use auth::{AuthService, LoginCredentials, TokenStore};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use store::{DataStore, Lookup};
