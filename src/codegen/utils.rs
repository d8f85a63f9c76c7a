//! Utility functions for code generation.

use convert_case::{Case, Casing};

/// Human-readable label for a field or literal, e.g. `createdAt` -> `Created At`
pub fn display_label(s: &str) -> String {
    s.to_case(Case::Title)
}

/// Lowercase prose form of a module name, e.g. `ProductList` -> `product list`
pub fn display_lower(s: &str) -> String {
    s.to_case(Case::Lower)
}

/// Escape a string for use inside single-quoted TypeScript literals or JSX text
pub fn escape_ts_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
}
