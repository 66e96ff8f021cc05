//! Settings schema and loading.
//!
//! The `Settings` tree in `config::schema` mirrors `config.toml`; the
//! loader in `config::load` fills it from the file and from `HARMONY__`
//! environment overrides.

mod load;
mod schema;

pub use schema::*;
