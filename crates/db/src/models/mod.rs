//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - For translated kinds, a translation-fields struct and a `Localized*`
//!   read model composing both via `#[sqlx(flatten)]`
//! - `Deserialize` create/update DTOs for the API layer

pub mod blog_post;
pub mod event;
pub mod member;
pub mod resource;
pub mod session;
pub mod user;
