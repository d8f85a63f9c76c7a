//! Code generation framework for feature modules.
//!
//! This module turns a module name and a field list into the files of a
//! list/detail admin feature: zod schema, static data, state provider,
//! table, columns, dialogs and the page entry point.

pub mod artifacts;
pub mod document;
pub mod fields;
pub mod fs_utils;
pub mod naming;
pub mod orchestration;
pub mod project_config;
pub mod utils;

// Re-export key types
pub use artifacts::{
    plan_artifacts, ArtifactDescriptor, ArtifactRole, RenderContext, RenderedArtifact,
};
pub use fields::{build_plan, parse_field_list, FieldKind, FieldPlan, FieldSpec, DEFAULT_FIELDS};
pub use fs_utils::{Filesystem, LocalFilesystem};
pub use naming::{to_camel, to_dash, to_pascal, ModuleName};
pub use orchestration::{generate, FeaturePlan, GenerationResult, Generator};
pub use project_config::{ProjectConfig, CONFIG_FILE_NAME};
