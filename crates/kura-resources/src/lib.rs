//! # kura-resources
//!
//! Printable resource generators.
//!
//! A generator turns a resource record plus string options into an ordered
//! list of [`Page`]s (HTML or rasterized PNG) which the writer persists to
//! the output directory. Generators are looked up by slug through
//! [`registry::create_generator`]; the content loader uses the same registry
//! to validate `resources.yml`.
//!
//! The one shipped generator is the Pixel Painter: it partitions a small
//! pixel-art PNG into printable grid pages where every box carries the
//! binary label of its pixel, for students to colour in.

pub mod error;
pub mod generator;
pub mod options;
pub mod pixel_painter;
pub mod registry;
pub mod writer;

pub use error::ResourceError;
pub use generator::{GeneratorEnv, Page, PageFonts, ResourceGenerator};
pub use options::OptionSet;
