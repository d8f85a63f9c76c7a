//! Naming-convention derivation for feature modules.
//!
//! One user-supplied identifier fans out into the three spellings the
//! generated files need:
//!
//! - dash form (`product-list`) for directories and file names
//! - pascal form (`ProductList`) for types and exported components
//! - camel form (`productList`) for value identifiers

use crate::error::{Result, ScaffoldError};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

fn module_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("module name pattern is valid")
    })
}

/// Identifiers the generated files import or declare themselves. A module
/// whose PascalCase name is one of these would shadow it.
pub const RESERVED_COMPONENT_NAMES: &[&str] = &[
    // react, @tanstack/react-table
    "ReactNode",
    "ColumnDef",
    "ColumnFiltersState",
    "SortingState",
    "VisibilityState",
    "Row",
    "Table",
    // ui components
    "Badge",
    "Button",
    "Checkbox",
    "ConfirmDialog",
    "DataTableColumnHeader",
    "DataTablePagination",
    "DataTableToolbar",
    "Dialog",
    "DialogContent",
    "DialogDescription",
    "DialogFooter",
    "DialogHeader",
    "DialogTitle",
    "DropdownMenu",
    "DropdownMenuContent",
    "DropdownMenuItem",
    "DropdownMenuSeparator",
    "DropdownMenuTrigger",
    "Header",
    "Input",
    "Label",
    "Main",
    "TableBody",
    "TableCell",
    "TableHead",
    "TableHeader",
    "TableRow",
    // lucide-react
    "MoreHorizontal",
    "Pencil",
    "Plus",
    "Trash2",
    // declared by the generated files
    "DataTableBulkActions",
    "DataTableBulkActionsProps",
    "DataTableProps",
    "DataTableRowActions",
    "DataTableRowActionsProps",
    "DialogType",
    // globals the generated code calls
    "Date",
    "Error",
    "Map",
];

/// Convert kebab-case or snake_case to PascalCase.
///
/// Each `-`/`_` separated word gets its first character uppercased; the rest
/// of the word is kept as given, so `productList` stays one word and becomes
/// `ProductList`.
pub fn to_pascal(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize_first)
        .collect()
}

/// Convert kebab-case or snake_case to camelCase
pub fn to_camel(name: &str) -> String {
    let pascal = to_pascal(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert PascalCase or camelCase to kebab-case.
///
/// A hyphen goes in at every lower→upper, digit→upper and letter→digit
/// transition. An uppercase run followed by a lowercase letter splits before
/// its last capital, so `HTTPServer` becomes `http-server`. Existing `-` and
/// `_` separators collapse to a single `-`.
///
/// `to_dash(&to_pascal(s)) == s` holds when no two single-letter words are
/// adjacent in `s`: `a-b` pascalizes to the acronym `AB`, which reads back as
/// `ab`.
pub fn to_dash(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '-' || ch == '_' {
            push_separator(&mut result);
            continue;
        }

        if i > 0 && is_word_boundary(chars[i - 1], ch, chars.get(i + 1).copied()) {
            push_separator(&mut result);
        }

        result.extend(ch.to_lowercase());
    }

    while result.ends_with('-') {
        result.pop();
    }

    result
}

fn is_word_boundary(prev: char, current: char, next: Option<char>) -> bool {
    if current.is_uppercase() {
        if prev.is_lowercase() || prev.is_ascii_digit() {
            return true;
        }
        // end of an acronym run: "HTTPServer" splits before the "S"
        if prev.is_uppercase() {
            return next.is_some_and(|n| n.is_lowercase());
        }
        return false;
    }

    current.is_ascii_digit() && prev.is_alphabetic()
}

fn push_separator(result: &mut String) {
    if !result.is_empty() && !result.ends_with('-') {
        result.push('-');
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A feature name in all three spellings used by the generated files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleName {
    pub dash: String,
    pub pascal: String,
    pub camel: String,
}

impl ModuleName {
    /// Derive every spelling from raw user input.
    ///
    /// This is where raw input enters the engine, so empty or malformed
    /// names are rejected here rather than turned into empty identifiers.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ScaffoldError::InvalidModuleName {
                name: raw.to_string(),
                reason: "module name must not be empty".to_string(),
            });
        }

        if !module_name_pattern().is_match(trimmed) {
            return Err(ScaffoldError::InvalidModuleName {
                name: raw.to_string(),
                reason: "must start with a letter and contain only letters, digits, '-' or '_'"
                    .to_string(),
            });
        }

        let pascal = to_pascal(trimmed);
        if RESERVED_COMPONENT_NAMES.contains(&pascal.as_str()) {
            return Err(ScaffoldError::InvalidModuleName {
                name: raw.to_string(),
                reason: format!(
                    "'{}' clashes with an identifier the generated files already use",
                    pascal
                ),
            });
        }

        Ok(ModuleName {
            dash: to_dash(trimmed),
            camel: to_camel(trimmed),
            pascal,
        })
    }

    /// Words shared by all three spellings, lowercased
    pub fn words(&self) -> Vec<&str> {
        self.dash.split('-').collect()
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dash)
    }
}
