//! featgen CLI - scaffold list/detail feature modules
//!
//! This CLI tool generates the schema, data, provider, table and dialog files
//! of a feature module from a module name and a field list.

use clap::{Parser, Subcommand};
use featgen::codegen::{
    parse_field_list, ArtifactRole, GenerationResult, Generator, ProjectConfig, CONFIG_FILE_NAME,
};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "featgen")]
#[command(version, about = "Scaffold list/detail feature modules", long_about = None)]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new feature module
    Create {
        /// Name of the feature module (kebab-case, snake_case or PascalCase)
        module_name: String,

        /// Comma-separated list of fields, e.g. "id,name,price,status"
        #[arg(short, long)]
        fields: Option<String>,

        /// Project root directory (default: nearest directory with featgen.yaml or package.json)
        #[arg(short, long)]
        project_root: Option<PathBuf>,

        /// Show what would be created without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the planned files, or the rendered content of one of them
    Preview {
        /// Name of the feature module
        module_name: String,

        /// Comma-separated list of fields
        #[arg(short, long)]
        fields: Option<String>,

        /// Project root directory
        #[arg(short, long)]
        project_root: Option<PathBuf>,

        /// Artifact to render (schema, data, provider, columns, table,
        /// row-actions, bulk-actions, primary-buttons, dialogs, index)
        #[arg(short, long)]
        artifact: Option<ArtifactRole>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command {
        Commands::Create {
            module_name,
            fields,
            project_root,
            dry_run,
            json,
        } => {
            let result = create_feature(&module_name, fields.as_deref(), project_root, dry_run);
            match summary_line(&result, json) {
                Ok(line) => {
                    println!("{}", line);
                    result.exit_code()
                }
                Err(e) => {
                    eprintln!("Error: failed to serialize result: {}", e);
                    1
                }
            }
        }
        Commands::Preview {
            module_name,
            fields,
            project_root,
            artifact,
        } => match preview_feature(module_name, fields, project_root, artifact) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Error: {}", e);
                e.kind().exit_code()
            }
        },
    };

    process::exit(code);
}

/// Logs go to stderr so stdout carries only the result
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the project root: explicit flag first, then the nearest ancestor
/// with a featgen.yaml or package.json, then the current directory
fn resolve_project_root(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(root) = explicit {
        return root;
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_project_root(&cwd).unwrap_or(cwd)
}

fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE_NAME).is_file() || dir.join("package.json").is_file())
        .map(Path::to_path_buf)
}

fn load_generator(project_root: &Path) -> featgen::Result<Generator> {
    let config = ProjectConfig::load_from_root(project_root)?;
    Ok(Generator::new(config))
}

/// Create a feature module. Configuration errors are folded into the result
/// so stdout always carries exactly one summary.
fn create_feature(
    module_name: &str,
    fields: Option<&str>,
    project_root: Option<PathBuf>,
    dry_run: bool,
) -> GenerationResult {
    let project_root = resolve_project_root(project_root);
    let fields = fields.map(parse_field_list).unwrap_or_default();

    tracing::info!("Using project root {}", project_root.display());

    featgen::generate(module_name, &fields, &project_root, dry_run)
}

/// The single stdout line for a create run
fn summary_line(result: &GenerationResult, json: bool) -> serde_json::Result<String> {
    if json {
        return serde_json::to_string(result);
    }

    Ok(if result.success {
        result.message.clone()
    } else {
        format!("Error: {}", result.message)
    })
}

/// Print planned files, or one rendered artifact, without writing anything
fn preview_feature(
    module_name: String,
    fields: Option<String>,
    project_root: Option<PathBuf>,
    artifact: Option<ArtifactRole>,
) -> featgen::Result<()> {
    let project_root = resolve_project_root(project_root);
    let fields = fields.as_deref().map(parse_field_list).unwrap_or_default();
    let plan = load_generator(&project_root)?.plan(&module_name, &fields, &project_root)?;

    match artifact {
        Some(role) => {
            if let Some(rendered) = plan.render_one(role) {
                print!("{}", rendered.contents);
            }
        }
        None => {
            println!("Feature '{}' -> {}", plan.names.dash, plan.target_dir.display());
            println!(
                "  names: {} / {} / {}",
                plan.names.dash, plan.names.pascal, plan.names.camel
            );
            let fields: Vec<String> = plan
                .fields
                .iter()
                .map(|f| format!("{} ({:?})", f.name, f.kind))
                .collect();
            println!("  fields: {}", fields.join(", "));
            for artifact in &plan.artifacts {
                println!("  {:<15} {}", artifact.role.as_str(), artifact.path.display());
            }
        }
    }

    Ok(())
}
