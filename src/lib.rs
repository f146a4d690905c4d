//! tetrisrun (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tetrisrun::{adapter,core,engine,input,term,types}`; the implementation lives in
//! dedicated crates under `crates/`.

pub use tetrisrun_adapter as adapter;
pub use tetrisrun_core as core;
pub use tetrisrun_engine as engine;
pub use tetrisrun_input as input;
pub use tetrisrun_term as term;
pub use tetrisrun_types as types;
