//! # featgen: Feature Module Scaffolding
//!
//! featgen generates the files of a list/detail admin feature (shadcn-admin
//! layout: React, zod, TanStack Table) from a module name and an ordered
//! field list.
//!
//! ## Features
//!
//! - **Naming derivation**: one identifier becomes `product-list`, `ProductList` and `productList`
//! - **Field policies**: `id`, `status`, `createdAt` and `updatedAt` get dedicated schema types
//! - **Typed documents**: artifacts are built as declarations and rendered by one
//!   TypeScript renderer
//! - **Safe writes**: never overwrites an existing module, publishes all files or none
//!
//! ## Example
//!
//! ```rust,no_run
//! use featgen::codegen::{Generator, ProjectConfig};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let generator = Generator::new(ProjectConfig::load_from_root(root)?);
//! let fields = ["id", "name", "price", "status"];
//! let result = generator.generate("product-list", &fields, root, false);
//! assert!(result.success, "{}", result.message);
//! # Ok::<(), featgen::ScaffoldError>(())
//! ```
//!
//! Produces:
//!
//! ```text
//! src/features/product-list/
//!   data/schema.ts
//!   data/data.ts
//!   components/product-list-provider.tsx
//!   components/product-list-columns.tsx
//!   components/product-list-table.tsx
//!   components/data-table-row-actions.tsx
//!   components/data-table-bulk-actions.tsx
//!   components/product-list-primary-buttons.tsx
//!   components/product-list-dialogs.tsx
//!   index.tsx
//! ```

// Code generation framework
pub mod codegen;

pub mod error;

// Re-export key types
pub use codegen::{
    generate, ArtifactRole, FieldKind, FieldPlan, GenerationResult, Generator, ModuleName,
    ProjectConfig,
};
pub use error::{ErrorKind, Result, ScaffoldError};
