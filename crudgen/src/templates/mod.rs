//! Artifact kinds and their fixed templates

use serde::Serialize;
use std::fmt;

use crate::naming::NameForms;
use crate::render;

pub mod files;
pub use files::*;

/// One kind of generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// `{ClassName}Controller`
    Controller,
    /// `{ClassName}` model
    Model,
    /// `index` view
    ViewIndex,
    /// `create` view
    ViewCreate,
    /// `edit` view
    ViewEdit,
    /// `show` view
    ViewShow,
    /// `create_{PluralLower}_table` migration
    Migration,
    /// Resource route registration
    RouteEntry,
}

impl ArtifactKind {
    /// Every kind, in generation order
    pub const ALL: [Self; 8] = [
        Self::Controller,
        Self::Model,
        Self::ViewIndex,
        Self::ViewCreate,
        Self::ViewEdit,
        Self::ViewShow,
        Self::Migration,
        Self::RouteEntry,
    ];

    /// The static template for this kind
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Controller => CONTROLLER,
            Self::Model => MODEL,
            Self::ViewIndex => VIEW_INDEX,
            Self::ViewCreate => VIEW_CREATE,
            Self::ViewEdit => VIEW_EDIT,
            Self::ViewShow => VIEW_SHOW,
            Self::Migration => MIGRATION,
            Self::RouteEntry => ROUTE_ENTRY,
        }
    }

    /// View file stem (`index`, `create`, ...) for view kinds
    #[must_use]
    pub const fn view_name(self) -> Option<&'static str> {
        match self {
            Self::ViewIndex => Some("index"),
            Self::ViewCreate => Some("create"),
            Self::ViewEdit => Some("edit"),
            Self::ViewShow => Some("show"),
            _ => None,
        }
    }

    /// Short human-readable description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Controller => "HTTP controller",
            Self::Model => "Eloquent model",
            Self::ViewIndex => "index view",
            Self::ViewCreate => "create view",
            Self::ViewEdit => "edit view",
            Self::ViewShow => "show view",
            Self::Migration => "table migration",
            Self::RouteEntry => "resource route",
        }
    }

    /// Render this kind's template for the given names
    #[must_use]
    pub fn render(self, forms: &NameForms) -> String {
        render::render(self.template(), &forms.context())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::EntityName;

    fn forms(name: &str) -> NameForms {
        NameForms::derive(&EntityName::parse(name).unwrap())
    }

    #[test]
    fn test_generation_order() {
        assert_eq!(ArtifactKind::ALL.first(), Some(&ArtifactKind::Controller));
        assert_eq!(ArtifactKind::ALL.last(), Some(&ArtifactKind::RouteEntry));
        assert_eq!(ArtifactKind::ALL.iter().filter(|k| k.view_name().is_some()).count(), 4);
    }

    #[test]
    fn test_controller_imports_request_type() {
        let content = ArtifactKind::Controller.render(&forms("Invoice"));
        assert!(content.contains(r"use App\Http\Requests\InvoiceRequest;"));
        assert!(content.contains("class InvoiceController extends Controller"));
        assert!(content.contains("Invoice::all()"));
        assert!(content.contains("view('Invoice.index'"));
        assert!(!content.contains("{{"));
    }

    #[test]
    fn test_model_has_empty_body() {
        let content = ArtifactKind::Model.render(&forms("Invoice"));
        assert!(content.contains("class Invoice extends Model"));
        assert!(!content.contains("protected"));
        assert!(!content.contains("function"));
    }

    #[test]
    fn test_view_stubs() {
        let forms = forms("Post");
        for kind in ArtifactKind::ALL {
            if let Some(view) = kind.view_name() {
                assert_eq!(kind.render(&forms), format!("<!-- {view} view for Post CRUD -->"));
            }
        }
    }

    #[test]
    fn test_migration_uses_plural_table() {
        let content = ArtifactKind::Migration.render(&forms("Category"));
        assert!(content.contains("Schema::create('categories'"));
        assert!(content.contains("Schema::dropIfExists('categories')"));
        assert!(content.contains("$table->id();"));
        assert!(content.contains("$table->timestamps();"));
        assert_eq!(content.matches("$table->").count(), 2);
    }

    #[test]
    fn test_route_entry_uses_singular_segment() {
        let content = ArtifactKind::RouteEntry.render(&forms("Category"));
        assert_eq!(content, "\nRoute::resource('Category', CategoryController::class);");
    }
}
