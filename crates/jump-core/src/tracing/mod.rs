//! Observability setup for jump.
//! `tracing` crate with `EnvFilter`, overridable through `JUMP_LOG`.

pub mod setup;

pub use setup::init_tracing;
