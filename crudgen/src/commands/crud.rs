//! CRUD generation command
//!
//! Writes, for one model name:
//! - Controller
//! - Model
//! - Index, create, edit, and show views
//! - Table migration
//! - Resource route (appended)
//!
//! # Example
//!
//! ```bash
//! crudgen crud:generate Invoice
//! crudgen crud:generate Invoice --path ../shop --dry-run
//! ```

use anyhow::{Context, Result};
use chrono::Utc;
use console::{style, Emoji};
use crudgen::{ConventionalLayout, FsWriter, GenerationReport, Outcome, ScaffoldGenerator};
use std::fs;
use std::path::{Path, PathBuf};

static SUCCESS: Emoji<'static, 'static> = Emoji("✓", "√");
static FAILURE: Emoji<'static, 'static> = Emoji("✗", "x");

/// CRUD generation command
pub struct CrudCommand {
    /// Model name (e.g., `Post`)
    model: String,
    /// Project root
    path: PathBuf,
    /// Only print the plan
    dry_run: bool,
    /// Machine-readable output
    json: bool,
}

impl CrudCommand {
    /// Create a new `CrudCommand`
    #[must_use]
    pub const fn new(model: String, path: PathBuf, dry_run: bool, json: bool) -> Self {
        Self {
            model,
            path,
            dry_run,
            json,
        }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The project root does not exist
    /// - The model name is empty
    /// - The layout configuration is invalid
    /// - Any artifact failed to be written (after all were attempted)
    pub fn execute(&self) -> Result<()> {
        let project_root = fs::canonicalize(&self.path)
            .with_context(|| format!("Project root not found: {}", self.path.display()))?;

        let layout = ConventionalLayout::load(project_root.clone())
            .context("Failed to load project layout")?;
        let generator = ScaffoldGenerator::new(&self.model, layout)
            .context("Failed to create scaffold generator")?;

        if self.dry_run {
            return self.print_plan(&generator, &project_root);
        }

        if !self.json {
            println!(
                "\n{} {} {}",
                style("Generating CRUD for").cyan().bold(),
                style(&self.model).green().bold(),
                style("...").cyan().bold()
            );
        }

        let report = generator.generate(&mut FsWriter);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?
            );
        } else {
            Self::print_report(&report, &project_root);
        }

        let failed = report.failed().count();
        if failed > 0 {
            anyhow::bail!(
                "{failed} of {} artifacts for {} could not be written",
                report.results.len(),
                report.entity
            );
        }

        if !self.json {
            println!(
                "\n{} CRUD operations for {} generated successfully!",
                style("✨").green().bold(),
                style(&report.entity).green().bold()
            );
            println!("\n{}", style("Next steps:").cyan().bold());
            println!(
                "  1. Create the request class: {}",
                style(format!("php artisan make:request {}Request", report.entity)).yellow()
            );
            println!(
                "  2. Run the migration: {}",
                style("php artisan migrate").yellow()
            );
        }

        Ok(())
    }

    fn print_plan(
        &self,
        generator: &ScaffoldGenerator<ConventionalLayout>,
        project_root: &Path,
    ) -> Result<()> {
        let plan = generator.plan(Utc::now());

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?
            );
            return Ok(());
        }

        println!(
            "\n{} {} {}",
            style("Would generate").cyan().bold(),
            plan.len(),
            style("artifacts:").cyan().bold()
        );
        for artifact in &plan {
            println!(
                "  {} {} ({})",
                style(format!("{:?}", artifact.target.mode)).dim(),
                relative(&artifact.target.path, project_root).display(),
                style(artifact.kind).dim()
            );
        }

        Ok(())
    }

    fn print_report(report: &GenerationReport, project_root: &Path) {
        println!(
            "\n{} {} of {} artifacts:",
            style("Generated").green().bold(),
            report.succeeded().count(),
            report.results.len()
        );

        for result in &report.results {
            let path = relative(&result.path, project_root);
            match &result.outcome {
                Outcome::Written => println!(
                    "  {} {} ({})",
                    style(&SUCCESS).green(),
                    style(path.display()).dim(),
                    style(result.kind).dim()
                ),
                Outcome::Failed { reason } => println!(
                    "  {} {} ({}): {}",
                    style(&FAILURE).red(),
                    path.display(),
                    result.kind,
                    style(reason).red()
                ),
            }
        }
    }
}

fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn command(root: &Path, model: &str, dry_run: bool, json: bool) -> CrudCommand {
        CrudCommand::new(model.to_string(), root.to_path_buf(), dry_run, json)
    }

    #[test]
    fn test_execute_writes_all_artifacts() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();

        command(root, "Invoice", false, false).execute().unwrap();

        assert!(root.join("app/Http/Controllers/InvoiceController.php").exists());
        assert!(root.join("app/Models/Invoice.php").exists());
        assert_eq!(fs::read_dir(root.join("resources/views/Invoice")).unwrap().count(), 4);
        assert_eq!(fs::read_dir(root.join("database/migrations")).unwrap().count(), 1);
        assert_eq!(
            fs::read_to_string(root.join("routes/web.php")).unwrap(),
            "\nRoute::resource('Invoice', InvoiceController::class);"
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = tempdir().unwrap();

        command(temp_dir.path(), "Post", true, false).execute().unwrap();
        command(temp_dir.path(), "Post", true, true).execute().unwrap();

        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_json_output_still_writes() {
        let temp_dir = tempdir().unwrap();

        command(temp_dir.path(), "Post", false, true).execute().unwrap();

        assert!(temp_dir.path().join("app/Models/Post.php").exists());
        assert!(temp_dir.path().join("routes/web.php").exists());
    }

    #[test]
    fn test_partial_failure_returns_error_after_writing_the_rest() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("resources")).unwrap();
        fs::write(root.join("resources/views"), "").unwrap();

        let err = command(root, "Box", false, false).execute().unwrap_err();

        assert!(err.to_string().contains("4 of 8 artifacts for Box"), "{err}");
        assert!(root.join("app/Http/Controllers/BoxController.php").exists());
        assert!(root.join("app/Models/Box.php").exists());
        assert_eq!(fs::read_dir(root.join("database/migrations")).unwrap().count(), 1);
        assert!(fs::read_to_string(root.join("routes/web.php"))
            .unwrap()
            .contains("Route::resource('Box', BoxController::class);"));
    }

    #[test]
    fn test_missing_project_root_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("nope");

        let err = command(&missing, "Post", false, false).execute().unwrap_err();

        assert!(err.to_string().contains("Project root not found"), "{err}");
        assert!(!missing.exists());
    }

    #[test]
    fn test_empty_model_is_an_error() {
        let temp_dir = tempdir().unwrap();

        assert!(command(temp_dir.path(), "  ", false, false).execute().is_err());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
