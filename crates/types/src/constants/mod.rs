//! Shared numeric constants and limits

pub mod limits;
