/// Authentication and session state
pub mod auth;
/// High-level service client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
