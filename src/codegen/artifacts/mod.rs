//! Artifact set for one feature module.
//!
//! Every feature module is the same fixed list of files. Each file is
//! rendered from the shared [`RenderContext`] only; no artifact reads
//! another's output, so the list order matters for reporting and for
//! creating directories before files, not for correctness.
//!
//! ## Layout
//!
//! ```text
//! <dash>/
//!   data/schema.ts
//!   data/data.ts
//!   components/<dash>-provider.tsx
//!   components/<dash>-columns.tsx
//!   components/<dash>-table.tsx
//!   components/data-table-row-actions.tsx
//!   components/data-table-bulk-actions.tsx
//!   components/<dash>-primary-buttons.tsx
//!   components/<dash>-dialogs.tsx
//!   index.tsx
//! ```

mod components;
mod data;
mod provider;
mod schema;

pub use data::status_style;
pub use provider::{context_hook_name, DIALOG_TYPES};
pub use schema::{list_schema_name, record_schema_name, status_schema_name, status_type_name};

use crate::codegen::document::TsModule;
use crate::codegen::fields::FieldPlan;
use crate::codegen::naming::ModuleName;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Subdirectories created before any file is written
pub const DIRECTORIES: [&str; 2] = ["data", "components"];

/// Role of a generated file within the feature module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ArtifactRole {
    Schema,
    Data,
    Provider,
    Columns,
    Table,
    RowActions,
    BulkActions,
    PrimaryButtons,
    Dialogs,
    Index,
}

impl ArtifactRole {
    /// Every role, in generation order
    pub const ALL: [ArtifactRole; 10] = [
        ArtifactRole::Schema,
        ArtifactRole::Data,
        ArtifactRole::Provider,
        ArtifactRole::Columns,
        ArtifactRole::Table,
        ArtifactRole::RowActions,
        ArtifactRole::BulkActions,
        ArtifactRole::PrimaryButtons,
        ArtifactRole::Dialogs,
        ArtifactRole::Index,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactRole::Schema => "schema",
            ArtifactRole::Data => "data",
            ArtifactRole::Provider => "provider",
            ArtifactRole::Columns => "columns",
            ArtifactRole::Table => "table",
            ArtifactRole::RowActions => "rowActions",
            ArtifactRole::BulkActions => "bulkActions",
            ArtifactRole::PrimaryButtons => "primaryButtons",
            ArtifactRole::Dialogs => "dialogs",
            ArtifactRole::Index => "index",
        }
    }

    /// Path of this role's file, relative to the module directory
    pub fn relative_path(&self, names: &ModuleName) -> PathBuf {
        let dash = &names.dash;
        match self {
            ArtifactRole::Schema => PathBuf::from("data/schema.ts"),
            ArtifactRole::Data => PathBuf::from("data/data.ts"),
            ArtifactRole::Provider => PathBuf::from(format!("components/{}-provider.tsx", dash)),
            ArtifactRole::Columns => PathBuf::from(format!("components/{}-columns.tsx", dash)),
            ArtifactRole::Table => PathBuf::from(format!("components/{}-table.tsx", dash)),
            ArtifactRole::RowActions => PathBuf::from("components/data-table-row-actions.tsx"),
            ArtifactRole::BulkActions => PathBuf::from("components/data-table-bulk-actions.tsx"),
            ArtifactRole::PrimaryButtons => {
                PathBuf::from(format!("components/{}-primary-buttons.tsx", dash))
            }
            ArtifactRole::Dialogs => PathBuf::from(format!("components/{}-dialogs.tsx", dash)),
            ArtifactRole::Index => PathBuf::from("index.tsx"),
        }
    }
}

impl fmt::Display for ArtifactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactRole {
    type Err = String;

    /// Accepts the camelCase tag as well as kebab-case (`row-actions`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace(['-', '_'], "").to_lowercase();
        ArtifactRole::ALL
            .into_iter()
            .find(|role| role.as_str().to_lowercase() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = ArtifactRole::ALL.iter().map(|r| r.as_str()).collect();
                format!("unknown artifact '{}'. Known artifacts: {}", s, known.join(", "))
            })
    }
}

/// Names and field policy shared by every artifact of one module
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub names: &'a ModuleName,
    pub fields: &'a FieldPlan,
}

impl<'a> RenderContext<'a> {
    pub fn new(names: &'a ModuleName, fields: &'a FieldPlan) -> Self {
        RenderContext { names, fields }
    }
}

/// One planned output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactDescriptor {
    pub role: ArtifactRole,
    pub path: PathBuf,
}

impl ArtifactDescriptor {
    /// Build the typed document for this artifact
    pub fn document(&self, ctx: RenderContext<'_>) -> TsModule {
        match self.role {
            ArtifactRole::Schema => schema::build(ctx),
            ArtifactRole::Data => data::build(ctx),
            ArtifactRole::Provider => provider::build(ctx),
            ArtifactRole::Columns => components::columns(ctx),
            ArtifactRole::Table => components::table(ctx),
            ArtifactRole::RowActions => components::row_actions(ctx),
            ArtifactRole::BulkActions => components::bulk_actions(ctx),
            ArtifactRole::PrimaryButtons => components::primary_buttons(ctx),
            ArtifactRole::Dialogs => components::dialogs(ctx),
            ArtifactRole::Index => components::index(ctx),
        }
    }

    pub fn render(&self, ctx: RenderContext<'_>) -> RenderedArtifact {
        RenderedArtifact {
            descriptor: self.clone(),
            contents: self.document(ctx).render(),
        }
    }
}

/// An artifact rendered in memory, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub descriptor: ArtifactDescriptor,
    pub contents: String,
}

/// Plan the full artifact set for a module, in generation order
pub fn plan_artifacts(names: &ModuleName) -> Vec<ArtifactDescriptor> {
    ArtifactRole::ALL
        .into_iter()
        .map(|role| ArtifactDescriptor {
            role,
            path: role.relative_path(names),
        })
        .collect()
}

/// Render every planned artifact
pub fn render_all(
    artifacts: &[ArtifactDescriptor],
    ctx: RenderContext<'_>,
) -> Vec<RenderedArtifact> {
    artifacts.iter().map(|a| a.render(ctx)).collect()
}
