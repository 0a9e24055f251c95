//! # kura-core
//!
//! Core types for Kura, the curriculum content pipeline.
//!
//! This crate provides the foundational types shared across all Kura crates:
//! - Entity structs for the curriculum domain (topics, unit plans, lessons,
//!   programming challenges, resources, …) and their `New*` insert payloads
//! - Slug derivation and validation helpers
//!
//! Error types live with the crates that raise them (`ContentError` in
//! `kura-content`, `DatabaseError` in `kura-db`, …) and converge on `anyhow`
//! in `kura-cli`.

pub mod entities;
pub mod slug;
