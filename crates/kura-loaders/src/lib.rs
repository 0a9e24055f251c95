//! # kura-loaders
//!
//! The content loading pipeline: one-shot batch scripts that read the
//! structure files and markdown under the content directory and persist
//! records through `kura-db`.
//!
//! Entry point is [`pipeline::run`] with a [`pipeline::LoadKind`]; every run
//! is wrapped in a single database transaction, so a validation error rolls
//! the whole load back. Records must be loaded in dependency order —
//! curriculum areas before the learning outcomes that reference them,
//! resources before the lessons that attach them, and so on — which
//! [`pipeline::LoadKind::All`] takes care of.

pub mod context;
pub mod error;
pub mod pipeline;

mod loaders;

pub use context::{LoadContext, LoadLog};
pub use error::LoadError;
pub use pipeline::{LoadKind, run};
