//! Output location and write mode for each artifact kind

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::layout::{LogicalRoot, ProjectLayout};
use crate::naming::NameForms;
use crate::templates::ArtifactKind;

/// Migration timestamp prefix (`2024_01_31_235959`), second granularity
pub const MIGRATION_TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// How rendered text is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Replace any existing file
    CreateOrOverwrite,
    /// Append to the end of the file
    AppendOnly,
    /// Create the containing directory, then create or overwrite the file
    CreateDirThenFiles,
}

/// Where and how one artifact is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputTarget {
    /// Absolute file path
    pub path: PathBuf,
    /// Write mode
    pub mode: WriteMode,
}

/// Resolve the output target for an artifact
///
/// `generated_at` only affects the migration file name. Two migrations for
/// the same entity generated within the same second resolve to the same path.
#[must_use]
pub fn resolve(
    kind: ArtifactKind,
    forms: &NameForms,
    layout: &dyn ProjectLayout,
    generated_at: DateTime<Utc>,
) -> OutputTarget {
    let ext = layout.extension();
    let class = &forms.class_name;

    let (path, mode) = match kind {
        ArtifactKind::Controller => (
            layout
                .root(LogicalRoot::App)
                .join("Http")
                .join("Controllers")
                .join(format!("{class}Controller.{ext}")),
            WriteMode::CreateOrOverwrite,
        ),
        ArtifactKind::Model => (
            layout
                .root(LogicalRoot::App)
                .join("Models")
                .join(format!("{class}.{ext}")),
            WriteMode::CreateOrOverwrite,
        ),
        ArtifactKind::ViewIndex
        | ArtifactKind::ViewCreate
        | ArtifactKind::ViewEdit
        | ArtifactKind::ViewShow => {
            let view = kind.view_name().unwrap_or_default();
            (
                layout
                    .root(LogicalRoot::Resources)
                    .join("views")
                    .join(class)
                    .join(format!("{view}.{}", layout.view_extension())),
                WriteMode::CreateDirThenFiles,
            )
        }
        ArtifactKind::Migration => {
            let timestamp = generated_at.format(MIGRATION_TIMESTAMP_FORMAT);
            (
                layout
                    .root(LogicalRoot::Database)
                    .join("migrations")
                    .join(format!("{timestamp}_create_{}_table.{ext}", forms.plural_lower)),
                WriteMode::CreateOrOverwrite,
            )
        }
        ArtifactKind::RouteEntry => (
            layout.root(LogicalRoot::Routes).join(format!("web.{ext}")),
            WriteMode::AppendOnly,
        ),
    };

    OutputTarget { path, mode }
}
