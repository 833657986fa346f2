//! crudgen library
//!
//! Generates the boilerplate for a create/read/update/delete resource from a
//! single entity name: a controller, a model, four view stubs, a table
//! migration, and a resource route.
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), crudgen::ScaffoldError> {
//! let report = crudgen::generate("Invoice", Path::new("."))?;
//! for result in report.failed() {
//!     eprintln!("{}: {:?}", result.kind, result.outcome);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod error;
pub mod generator;
pub mod layout;
pub mod naming;
pub mod observability;
pub mod paths;
pub mod render;
pub mod templates;
pub mod writer;

pub use error::ScaffoldError;
pub use generator::{generate, GenerationReport, GenerationResult, Outcome, ScaffoldGenerator};
pub use layout::{ConventionalLayout, LayoutConfig, LogicalRoot, ProjectLayout};
pub use naming::{EntityName, NameForms};
pub use paths::{OutputTarget, WriteMode};
pub use templates::ArtifactKind;
pub use writer::{ArtifactWriter, FsWriter};
