//! High-level orchestration API for feature generation.
//!
//! A run is one sequential call chain:
//! 1. Derive the module names and the field plan
//! 2. Refuse to continue if the target directory exists
//! 3. Stop after reporting when this is a dry run
//! 4. Render every artifact in memory
//! 5. Write the artifacts into a staging directory beside the target
//! 6. Rename the staging directory into place
//!
//! Nothing touches the filesystem before step 5, and a failure at any point
//! leaves nothing at the target path.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::codegen::artifacts::{
    plan_artifacts, render_all, ArtifactDescriptor, ArtifactRole, RenderContext, RenderedArtifact,
    DIRECTORIES,
};
use crate::codegen::fields::{build_plan, FieldPlan};
use crate::codegen::fs_utils::{Filesystem, LocalFilesystem};
use crate::codegen::naming::ModuleName;
use crate::codegen::project_config::ProjectConfig;
use crate::error::{ErrorKind, Result, ScaffoldError};

/// Outcome of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub success: bool,
    pub dry_run: bool,
    /// Module directory that was (or would be) created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_dir: Option<PathBuf>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
    /// Files written, or that would be written on a dry run
    pub artifacts: Vec<PathBuf>,
}

impl GenerationResult {
    fn failure(error: &ScaffoldError, dry_run: bool) -> Self {
        let target_dir = match error {
            ScaffoldError::AlreadyExists { path } => Some(path.clone()),
            _ => None,
        };

        GenerationResult {
            success: false,
            dry_run,
            target_dir,
            message: error.to_string(),
            error: Some(error.kind()),
            artifacts: Vec::new(),
        }
    }

    /// Process exit code: 0 on success, otherwise per error kind
    pub fn exit_code(&self) -> i32 {
        match self.error {
            None if self.success => 0,
            None => 1,
            Some(kind) => kind.exit_code(),
        }
    }
}

/// Everything known about a module before anything is written
#[derive(Debug, Clone)]
pub struct FeaturePlan {
    pub names: ModuleName,
    pub fields: FieldPlan,
    /// `<project_root>/<features_root>`
    pub features_dir: PathBuf,
    /// `<features_dir>/<dash>`
    pub target_dir: PathBuf,
    pub artifacts: Vec<ArtifactDescriptor>,
}

impl FeaturePlan {
    pub fn context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.names, &self.fields)
    }

    /// Render every artifact in memory
    pub fn render(&self) -> Vec<RenderedArtifact> {
        render_all(&self.artifacts, self.context())
    }

    /// Render a single artifact by role
    pub fn render_one(&self, role: ArtifactRole) -> Option<RenderedArtifact> {
        self.artifacts
            .iter()
            .find(|a| a.role == role)
            .map(|a| a.render(self.context()))
    }

    /// Absolute paths of every planned artifact
    pub fn artifact_paths(&self) -> Vec<PathBuf> {
        self.artifacts
            .iter()
            .map(|a| self.target_dir.join(&a.path))
            .collect()
    }
}

/// Feature module generator.
///
/// The generator is the only component that calls into its [`Filesystem`].
///
/// # Example
///
/// ```rust,no_run
/// use featgen::codegen::{Generator, ProjectConfig};
/// use std::path::Path;
///
/// let generator = Generator::new(ProjectConfig::default());
/// let fields = ["id", "name", "price", "status"];
/// let result = generator.generate("product-list", &fields, Path::new("."), false);
/// println!("{}", result.message);
/// ```
#[derive(Debug, Clone)]
pub struct Generator<F: Filesystem = LocalFilesystem> {
    config: ProjectConfig,
    fs: F,
}

impl Generator<LocalFilesystem> {
    pub fn new(config: ProjectConfig) -> Self {
        Self::with_filesystem(config, LocalFilesystem)
    }
}

impl<F: Filesystem> Generator<F> {
    pub fn with_filesystem(config: ProjectConfig, fs: F) -> Self {
        Generator { config, fs }
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Compute names, field plan, target and artifact list without touching
    /// the filesystem.
    pub fn plan<S: AsRef<str>>(
        &self,
        module_name_raw: &str,
        field_names_raw: &[S],
        project_root: &Path,
    ) -> Result<FeaturePlan> {
        let names = ModuleName::new(module_name_raw)?;
        let fields = build_plan(field_names_raw, &self.config.default_fields)?;
        let features_dir = project_root.join(&self.config.features_root);
        let target_dir = features_dir.join(&names.dash);
        let artifacts = plan_artifacts(&names);

        Ok(FeaturePlan {
            names,
            fields,
            features_dir,
            target_dir,
            artifacts,
        })
    }

    /// Render every artifact in memory. Does not check the target.
    pub fn preview<S: AsRef<str>>(
        &self,
        module_name_raw: &str,
        field_names_raw: &[S],
        project_root: &Path,
    ) -> Result<Vec<RenderedArtifact>> {
        Ok(self.plan(module_name_raw, field_names_raw, project_root)?.render())
    }

    /// Run a full generation and fold any error into the result
    pub fn generate<S: AsRef<str>>(
        &self,
        module_name_raw: &str,
        field_names_raw: &[S],
        project_root: &Path,
        dry_run: bool,
    ) -> GenerationResult {
        match self.try_generate(module_name_raw, field_names_raw, project_root, dry_run) {
            Ok(result) => result,
            Err(e) => {
                match e.kind() {
                    ErrorKind::AlreadyExists => tracing::warn!("{}", e),
                    _ => tracing::error!("Feature generation failed: {}", e),
                }
                GenerationResult::failure(&e, dry_run)
            }
        }
    }

    /// Run a full generation, returning the first error encountered
    pub fn try_generate<S: AsRef<str>>(
        &self,
        module_name_raw: &str,
        field_names_raw: &[S],
        project_root: &Path,
        dry_run: bool,
    ) -> Result<GenerationResult> {
        let plan = self.plan(module_name_raw, field_names_raw, project_root)?;

        tracing::info!(
            "Planned feature '{}' ({} fields, status: {})",
            plan.names.dash,
            plan.fields.len(),
            plan.fields.has_status_field
        );

        if self.fs.exists(&plan.target_dir) {
            return Err(ScaffoldError::AlreadyExists {
                path: plan.target_dir.clone(),
            });
        }

        if dry_run {
            tracing::info!("Dry run: nothing written for '{}'", plan.names.dash);
            return Ok(GenerationResult {
                success: true,
                dry_run: true,
                target_dir: Some(plan.target_dir.clone()),
                message: format!(
                    "Would create feature '{}' at: {}",
                    plan.names.dash,
                    plan.target_dir.display()
                ),
                error: None,
                artifacts: plan.artifact_paths(),
            });
        }

        let rendered = plan.render();
        self.write_staged(&plan, &rendered)?;

        tracing::info!(
            "Created feature '{}' with {} files at {}",
            plan.names.dash,
            rendered.len(),
            plan.target_dir.display()
        );

        Ok(GenerationResult {
            success: true,
            dry_run: false,
            target_dir: Some(plan.target_dir.clone()),
            message: format!(
                "Successfully created feature '{}' at {}",
                plan.names.dash,
                plan.target_dir.display()
            ),
            error: None,
            artifacts: plan.artifact_paths(),
        })
    }

    fn write_staged(&self, plan: &FeaturePlan, rendered: &[RenderedArtifact]) -> Result<()> {
        self.fs
            .create_dir_all(&plan.features_dir)
            .map_err(|e| ScaffoldError::filesystem(&plan.features_dir, e))?;

        let prefix = format!(".featgen-{}-", plan.names.dash);
        // dropping the guard removes the staging directory on every early return
        let staging = self
            .fs
            .create_staging_dir(&plan.features_dir, &prefix)
            .map_err(|e| ScaffoldError::filesystem(&plan.features_dir, e))?;

        for dir in DIRECTORIES {
            let path = staging.path().join(dir);
            self.fs
                .create_dir_all(&path)
                .map_err(|e| ScaffoldError::filesystem(plan.target_dir.join(dir), e))?;
        }

        for artifact in rendered {
            let relative = &artifact.descriptor.path;
            self.fs
                .write_file(&staging.path().join(relative), &artifact.contents)
                .map_err(|e| ScaffoldError::filesystem(plan.target_dir.join(relative), e))?;
            tracing::debug!("  ✓ {} ({})", relative.display(), artifact.descriptor.role);
        }

        if let Err(e) = self.fs.publish_dir(staging.path(), &plan.target_dir) {
            // someone else created the module after our existence check
            if self.fs.exists(&plan.target_dir) {
                return Err(ScaffoldError::AlreadyExists {
                    path: plan.target_dir.clone(),
                });
            }
            return Err(ScaffoldError::filesystem(&plan.target_dir, e));
        }

        Ok(())
    }
}

/// Generate a feature module under `project_root` using the real filesystem
/// and the project's `featgen.yaml`, if any.
pub fn generate<S: AsRef<str>>(
    module_name_raw: &str,
    field_names_raw: &[S],
    project_root: &Path,
    dry_run: bool,
) -> GenerationResult {
    match ProjectConfig::load_from_root(project_root) {
        Ok(config) => {
            Generator::new(config).generate(module_name_raw, field_names_raw, project_root, dry_run)
        }
        Err(e) => {
            tracing::error!("Feature generation failed: {}", e);
            GenerationResult::failure(&e, dry_run)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const NO_FIELDS: [&str; 0] = [];

    #[test]
    fn test_plan_targets_features_root() {
        let generator = Generator::new(ProjectConfig::default());
        let plan = generator
            .plan("ProductList", &NO_FIELDS, Path::new("/work/app"))
            .unwrap();

        assert_eq!(plan.features_dir, PathBuf::from("/work/app/src/features"));
        assert_eq!(plan.target_dir, PathBuf::from("/work/app/src/features/product-list"));
        assert_eq!(plan.artifacts.len(), ArtifactRole::ALL.len());
        assert_eq!(plan.fields.len(), 5);
        assert_eq!(
            plan.artifact_paths()[0],
            PathBuf::from("/work/app/src/features/product-list/data/schema.ts")
        );
    }

    #[test]
    fn test_plan_uses_configured_defaults() {
        let config = ProjectConfig {
            features_root: PathBuf::from("app/modules"),
            default_fields: vec!["id".to_string(), "title".to_string()],
        };
        let plan = Generator::new(config)
            .plan("tags", &NO_FIELDS, Path::new("/p"))
            .unwrap();

        assert_eq!(plan.target_dir, PathBuf::from("/p/app/modules/tags"));
        assert_eq!(plan.fields.names(), vec!["id", "title"]);
        assert!(!plan.fields.has_status_field);
    }

    #[test]
    fn test_render_one() {
        let plan = Generator::new(ProjectConfig::default())
            .plan("users", &NO_FIELDS, Path::new("."))
            .unwrap();

        let schema = plan.render_one(ArtifactRole::Schema).unwrap();
        assert_eq!(schema.descriptor.path, PathBuf::from("data/schema.ts"));
        assert!(schema.contents.contains("usersStatusSchema"));
    }

    #[test]
    fn test_preview_renders_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let rendered = Generator::new(ProjectConfig::default())
            .preview("tags", &["id", "label"], temp_dir.path())
            .unwrap();

        assert_eq!(rendered.len(), ArtifactRole::ALL.len());
        assert_eq!(rendered[9].descriptor.role, ArtifactRole::Index);
        assert!(rendered.iter().all(|a| !a.contents.is_empty()));
        assert!(!temp_dir.path().join("src").exists());
    }

    #[test]
    fn test_validation_failure_result() {
        let temp_dir = TempDir::new().unwrap();
        let result = Generator::new(ProjectConfig::default()).generate(
            "",
            &NO_FIELDS,
            temp_dir.path(),
            false,
        );

        assert!(!result.success);
        assert_eq!(result.error, Some(ErrorKind::Validation));
        assert_eq!(result.exit_code(), 2);
        assert!(result.target_dir.is_none());
        assert!(!temp_dir.path().join("src").exists());
    }

    #[test]
    fn test_free_generate_reads_project_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("featgen.yaml");
        std::fs::write(config_path, "features_root: web/features\n").unwrap();

        let result = generate("orders", &["id", "total"], temp_dir.path(), false);

        assert!(result.success, "{}", result.message);
        assert!(temp_dir.path().join("web/features/orders/index.tsx").is_file());
    }

    #[test]
    fn test_free_generate_reports_bad_config() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("featgen.yaml"), "features_root: [oops\n").unwrap();

        let result = generate("orders", &NO_FIELDS, temp_dir.path(), false);

        assert!(!result.success);
        assert_eq!(result.error, Some(ErrorKind::Config));
    }

    #[test]
    fn test_result_serializes() {
        let temp_dir = TempDir::new().unwrap();
        let result = Generator::new(ProjectConfig::default()).generate(
            "users",
            &NO_FIELDS,
            temp_dir.path(),
            true,
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], serde_json::json!(true));
        assert_eq!(json["dry_run"], serde_json::json!(true));
        assert!(json.get("error").is_none());
        assert_eq!(json["artifacts"].as_array().unwrap().len(), 10);
    }
}
