//! Typed TypeScript documents.
//!
//! Artifacts are built as a list of declarations and handed to a single
//! renderer, so naming and field policy never touch quoting or indentation.

use crate::codegen::utils::escape_ts_string;
use std::fmt::{self, Write};

const INDENT: &str = "  ";

/// One `import { ... } from '...'` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub names: Vec<String>,
    pub from: String,
}

impl Import {
    pub fn new<I, S>(names: I, from: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Import {
            names: names.into_iter().map(Into::into).collect(),
            from: from.into(),
        }
    }
}

/// Value expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Identifier or member path, e.g. `productListSchema` or `z.string()`
    Ident(String),
    /// Single-quoted string literal
    Str(String),
    Array(Vec<Expr>),
    Object(Vec<(String, Expr)>),
    Call { callee: String, args: Vec<Expr> },
    New {
        class: String,
        type_args: Vec<String>,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn call(callee: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: callee.into(),
            args,
        }
    }
}

/// Type expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Named(String),
    Literal(String),
    Null,
    Union(Vec<TypeExpr>),
    Object(Vec<(String, TypeExpr)>),
    Function {
        params: Vec<(String, TypeExpr)>,
        returns: Box<TypeExpr>,
    },
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }

    pub fn nullable(inner: TypeExpr) -> Self {
        TypeExpr::Union(vec![inner, TypeExpr::Null])
    }
}

/// Top-level module items, rendered in order with a blank line between them.
/// A comment is printed directly above the item that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Comment(String),
    Const {
        exported: bool,
        name: String,
        value: Expr,
    },
    TypeAlias {
        exported: bool,
        name: String,
        ty: TypeExpr,
    },
    /// Verbatim source, used for function and JSX bodies
    Raw(String),
}

impl Item {
    /// Build a raw item with `writeln!`; writing into a String cannot fail
    pub fn raw_with(write: impl FnOnce(&mut String) -> fmt::Result) -> Self {
        let mut source = String::new();
        let _ = write(&mut source);
        Item::Raw(source)
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Item::Const { name, .. } | Item::TypeAlias { name, .. } => Some(name.as_str()),
            Item::Comment(_) | Item::Raw(_) => None,
        }
    }
}

/// A whole source file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TsModule {
    pub imports: Vec<Import>,
    pub items: Vec<Item>,
}

impl TsModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Look up a const or type alias by name
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == Some(name))
    }

    pub fn declared_names(&self) -> Vec<&str> {
        self.items.iter().filter_map(Item::name).collect()
    }

    pub fn render(&self) -> String {
        let mut output = String::new();
        // writing into a String cannot fail
        let _ = self.write_to(&mut output);
        output
    }

    fn write_to(&self, output: &mut String) -> fmt::Result {
        for import in &self.imports {
            writeln!(output, "import {{ {} }} from '{}'", import.names.join(", "), import.from)?;
        }

        let mut previous: Option<&Item> = None;
        for item in &self.items {
            // comments stay attached to the declaration below them
            let separate = match previous {
                Some(Item::Comment(_)) => false,
                Some(_) => true,
                None => !self.imports.is_empty(),
            };
            if separate {
                writeln!(output)?;
            }
            write_item(output, item)?;
            previous = Some(item);
        }

        Ok(())
    }
}

fn write_item(output: &mut String, item: &Item) -> fmt::Result {
    match item {
        Item::Comment(text) => {
            for line in text.lines() {
                writeln!(output, "// {}", line)?;
            }
        }
        Item::Const {
            exported,
            name,
            value,
        } => {
            let export = if *exported { "export " } else { "" };
            writeln!(output, "{}const {} = {}", export, name, render_expr(value, 0, false))?;
        }
        Item::TypeAlias { exported, name, ty } => {
            let export = if *exported { "export " } else { "" };
            writeln!(output, "{}type {} = {}", export, name, render_type(ty, 0))?;
        }
        Item::Raw(source) => {
            output.push_str(source.trim_end());
            output.push('\n');
        }
    }
    Ok(())
}

/// Render an expression. Containers break across lines unless they sit
/// inside an array, which keeps option lists and map entries one per line.
fn render_expr(expr: &Expr, depth: usize, inline: bool) -> String {
    match expr {
        Expr::Ident(name) => name.clone(),
        Expr::Str(value) => format!("'{}'", escape_ts_string(value)),
        Expr::Array(elements) => {
            if elements.is_empty() {
                return "[]".to_string();
            }
            if inline {
                let parts: Vec<String> = elements
                    .iter()
                    .map(|e| render_expr(e, depth, true))
                    .collect();
                return format!("[{}]", parts.join(", "));
            }
            let pad = INDENT.repeat(depth + 1);
            let mut out = String::from("[\n");
            for element in elements {
                out.push_str(&format!("{}{},\n", pad, render_expr(element, depth + 1, true)));
            }
            out.push_str(&format!("{}]", INDENT.repeat(depth)));
            out
        }
        Expr::Object(entries) => {
            if entries.is_empty() {
                return "{}".to_string();
            }
            if inline {
                let parts: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, render_expr(value, depth, true)))
                    .collect();
                return format!("{{ {} }}", parts.join(", "));
            }
            let pad = INDENT.repeat(depth + 1);
            let mut out = String::from("{\n");
            for (key, value) in entries {
                let value = render_expr(value, depth + 1, false);
                out.push_str(&format!("{}{}: {},\n", pad, key, value));
            }
            out.push_str(&format!("{}}}", INDENT.repeat(depth)));
            out
        }
        Expr::Call { callee, args } => {
            format!("{}({})", callee, render_args(args, depth, inline))
        }
        Expr::New {
            class,
            type_args,
            args,
        } => {
            let generics = if type_args.is_empty() {
                String::new()
            } else {
                format!("<{}>", type_args.join(", "))
            };
            format!("new {}{}({})", class, generics, render_args(args, depth, inline))
        }
    }
}

fn render_args(args: &[Expr], depth: usize, inline: bool) -> String {
    args.iter()
        .map(|arg| render_expr(arg, depth, inline))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_type(ty: &TypeExpr, depth: usize) -> String {
    match ty {
        TypeExpr::Named(name) => name.clone(),
        TypeExpr::Literal(value) => format!("'{}'", escape_ts_string(value)),
        TypeExpr::Null => "null".to_string(),
        TypeExpr::Union(members) => members
            .iter()
            .map(|m| render_type(m, depth))
            .collect::<Vec<_>>()
            .join(" | "),
        TypeExpr::Object(entries) => {
            if entries.is_empty() {
                return "{}".to_string();
            }
            let pad = INDENT.repeat(depth + 1);
            let mut out = String::from("{\n");
            for (key, value) in entries {
                out.push_str(&format!("{}{}: {}\n", pad, key, render_type(value, depth + 1)));
            }
            out.push_str(&format!("{}}}", INDENT.repeat(depth)));
            out
        }
        TypeExpr::Function { params, returns } => {
            let params: Vec<String> = params
                .iter()
                .map(|(name, ty)| format!("{}: {}", name, render_type(ty, depth)))
                .collect();
            format!("({}) => {}", params.join(", "), render_type(returns, depth))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_imports_and_consts() {
        let module = TsModule::new()
            .import(Import::new(["z"], "zod"))
            .item(Item::Const {
                exported: true,
                name: "userListSchema".to_string(),
                value: Expr::call("z.array", vec![Expr::ident("userSchema")]),
            });

        assert_eq!(
            module.render(),
            "import { z } from 'zod'\n\nexport const userListSchema = z.array(userSchema)\n"
        );
    }

    #[test]
    fn test_object_argument_breaks_lines() {
        let value = Expr::call(
            "z.object",
            vec![Expr::Object(vec![
                ("id".to_string(), Expr::call("z.string", vec![])),
                ("createdAt".to_string(), Expr::call("z.coerce.date", vec![])),
            ])],
        );

        let module = TsModule::new().item(Item::Const {
            exported: false,
            name: "userSchema".to_string(),
            value,
        });

        assert_eq!(
            module.render(),
            "const userSchema = z.object({\n  id: z.string(),\n  createdAt: z.coerce.date(),\n})\n"
        );
    }

    #[test]
    fn test_array_elements_render_inline() {
        let value = Expr::Array(vec![Expr::Object(vec![
            ("label".to_string(), Expr::str("Active")),
            ("value".to_string(), Expr::str("active")),
        ])]);

        assert_eq!(
            render_expr(&value, 0, false),
            "[\n  { label: 'Active', value: 'active' },\n]"
        );
    }

    #[test]
    fn test_new_with_type_args() {
        let value = Expr::New {
            class: "Map".to_string(),
            type_args: vec!["string".to_string(), "string".to_string()],
            args: vec![Expr::Array(vec![Expr::Array(vec![Expr::str("a"), Expr::str("b")])])],
        };

        assert_eq!(
            render_expr(&value, 0, false),
            "new Map<string, string>([\n  ['a', 'b'],\n])"
        );
    }

    #[test]
    fn test_render_types() {
        let ty = TypeExpr::Union(vec![
            TypeExpr::Literal("add".to_string()),
            TypeExpr::Literal("multi-delete".to_string()),
            TypeExpr::Null,
        ]);
        assert_eq!(render_type(&ty, 0), "'add' | 'multi-delete' | null");

        let ctx = TypeExpr::Object(vec![
            ("open".to_string(), TypeExpr::named("DialogType")),
            (
                "setOpen".to_string(),
                TypeExpr::Function {
                    params: vec![("type".to_string(), TypeExpr::named("DialogType"))],
                    returns: Box::new(TypeExpr::named("void")),
                },
            ),
        ]);
        assert_eq!(
            render_type(&ctx, 0),
            "{\n  open: DialogType\n  setOpen: (type: DialogType) => void\n}"
        );
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(render_expr(&Expr::str("it's"), 0, false), "'it\\'s'");
    }

    #[test]
    fn test_find_declared_names() {
        let module = TsModule::new()
            .item(Item::Comment("header".to_string()))
            .item(Item::TypeAlias {
                exported: true,
                name: "User".to_string(),
                ty: TypeExpr::named("string"),
            });

        assert_eq!(module.declared_names(), vec!["User"]);
        assert!(module.find("User").is_some());
        assert!(module.find("Missing").is_none());
    }
}
