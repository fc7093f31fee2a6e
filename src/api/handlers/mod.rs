//! API handlers for the gateway.

pub mod auth;
pub mod health;
pub mod root;
