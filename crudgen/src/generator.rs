//! CRUD scaffold generator orchestrator
//!
//! This module coordinates the generation of all artifacts for a resource,
//! always in the same order:
//! 1. Controller (`app/Http/Controllers/{Name}Controller.php`)
//! 2. Model (`app/Models/{Name}.php`)
//! 3. Views (`resources/views/{Name}/{index,create,edit,show}.blade.php`)
//! 4. Migration (`database/migrations/{timestamp}_create_{plural}_table.php`)
//! 5. Route registration (appended to `routes/web.php`)
//!
//! Generation is best effort: a failed artifact is recorded in the
//! [`GenerationReport`] and the remaining artifacts are still written.
//! Nothing is rolled back.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::layout::{ConventionalLayout, ProjectLayout};
use crate::naming::{EntityName, NameForms};
use crate::paths::{self, OutputTarget, WriteMode};
use crate::templates::ArtifactKind;
use crate::writer::{ArtifactWriter, FsWriter};

/// CRUD scaffold generator
pub struct ScaffoldGenerator<L> {
    /// Entity name (e.g., "Post")
    entity: EntityName,
    /// Naming variants derived from the entity
    forms: NameForms,
    /// Where artifacts land
    layout: L,
}

impl<L: ProjectLayout> ScaffoldGenerator<L> {
    /// Create a new scaffold generator
    ///
    /// # Errors
    ///
    /// Returns an error if the entity name is empty.
    pub fn new(entity_name: &str, layout: L) -> Result<Self> {
        let entity = EntityName::parse(entity_name)?;
        let forms = NameForms::derive(&entity);

        Ok(Self {
            entity,
            forms,
            layout,
        })
    }

    /// The validated entity name
    #[must_use]
    pub const fn entity(&self) -> &EntityName {
        &self.entity
    }

    /// Derived naming variants
    #[must_use]
    pub const fn forms(&self) -> &NameForms {
        &self.forms
    }

    /// Resolve and render every artifact without touching the filesystem
    #[must_use]
    pub fn plan(&self, generated_at: DateTime<Utc>) -> Vec<GeneratedArtifact> {
        ArtifactKind::ALL
            .iter()
            .map(|&kind| {
                let target = paths::resolve(kind, &self.forms, &self.layout, generated_at);
                tracing::debug!(%kind, path = %target.path.display(), mode = ?target.mode, "resolved artifact");
                GeneratedArtifact {
                    kind,
                    target,
                    content: kind.render(&self.forms),
                }
            })
            .collect()
    }

    /// Generate all artifacts, timestamping the migration with the current time
    pub fn generate(&self, writer: &mut dyn ArtifactWriter) -> GenerationReport {
        self.generate_at(writer, Utc::now())
    }

    /// Generate all artifacts as of `generated_at`
    ///
    /// Every artifact is attempted even if an earlier one failed.
    pub fn generate_at(
        &self,
        writer: &mut dyn ArtifactWriter,
        generated_at: DateTime<Utc>,
    ) -> GenerationReport {
        let results = self
            .plan(generated_at)
            .into_iter()
            .map(|artifact| {
                let outcome = match writer.write(&artifact.target, &artifact.content) {
                    Ok(()) => {
                        tracing::info!(kind = %artifact.kind, path = %artifact.target.path.display(), "wrote artifact");
                        Outcome::Written
                    }
                    Err(e) => {
                        tracing::warn!(kind = %artifact.kind, error = %e, "failed to write artifact");
                        Outcome::Failed {
                            reason: e.to_string(),
                        }
                    }
                };

                GenerationResult {
                    kind: artifact.kind,
                    path: artifact.target.path,
                    mode: artifact.target.mode,
                    outcome,
                }
            })
            .collect();

        GenerationReport {
            entity: self.entity.to_string(),
            table: self.forms.plural_lower.clone(),
            results,
        }
    }
}

/// Scaffold `entity_name` into the project at `project_root`
///
/// Uses [`ConventionalLayout`] (honouring `crudgen.toml`) and writes to disk.
/// `project_root` is canonicalized first, so reported paths are absolute.
///
/// # Errors
///
/// Returns an error if the project root does not exist, the name is empty,
/// or the layout configuration is invalid. Per-artifact write failures are
/// reported in the returned [`GenerationReport`] instead.
pub fn generate(entity_name: &str, project_root: &Path) -> Result<GenerationReport> {
    let project_root =
        fs::canonicalize(project_root).map_err(|e| ScaffoldError::io(project_root, e))?;
    let layout = ConventionalLayout::load(project_root)?;
    let generator = ScaffoldGenerator::new(entity_name, layout)?;
    Ok(generator.generate(&mut FsWriter))
}

/// A resolved and rendered artifact, not yet written
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedArtifact {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Output location and write mode
    pub target: OutputTarget,
    /// Rendered content
    pub content: String,
}

/// Outcome of writing one artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Written successfully
    Written,
    /// Write failed
    Failed {
        /// Error message
        reason: String,
    },
}

/// Result for one artifact kind
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Output path
    pub path: PathBuf,
    /// Write mode used
    pub mode: WriteMode,
    /// Whether the write succeeded
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl GenerationResult {
    /// Whether this artifact was written
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Written)
    }
}

/// Per-artifact results of one generation run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Entity name the run was for
    pub entity: String,
    /// Table created by the migration
    pub table: String,
    /// One result per artifact, in generation order
    pub results: Vec<GenerationResult>,
}

impl GenerationReport {
    /// True when every artifact was written
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.results.iter().all(GenerationResult::is_success)
    }

    /// Results for artifacts that were written
    pub fn succeeded(&self) -> impl Iterator<Item = &GenerationResult> {
        self.results.iter().filter(|r| r.is_success())
    }

    /// Results for artifacts that failed
    pub fn failed(&self) -> impl Iterator<Item = &GenerationResult> {
        self.results.iter().filter(|r| !r.is_success())
    }
}
