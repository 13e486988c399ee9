//! Shared support models used across the workspace

pub mod secret_string;

pub use secret_string::SecretString;
