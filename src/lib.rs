//! slidebox (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so tools and tests can use
//! `slidebox::{core, engine, types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use slidebox_core as core;
pub use slidebox_engine as engine;
pub use slidebox_types as types;
