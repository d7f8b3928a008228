//! HTTP handlers, one module per resource.

pub mod admin;
pub mod auth;
pub mod blog;
pub mod events;
pub mod members;
pub mod resources;
