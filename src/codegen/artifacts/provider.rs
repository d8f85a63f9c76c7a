//! `components/<dash>-provider.tsx`: dialog and selection state for the feature.

use super::RenderContext;
use crate::codegen::document::{Expr, Import, Item, TsModule, TypeExpr};
use crate::codegen::naming::ModuleName;
use std::fmt::{self, Write};

/// Dialogs the provider can open; `null` means none is open
pub const DIALOG_TYPES: [&str; 4] = ["add", "edit", "delete", "multi-delete"];

pub fn context_hook_name(names: &ModuleName) -> String {
    format!("use{}Context", names.pascal)
}

pub(super) fn build(ctx: RenderContext<'_>) -> TsModule {
    let pascal = &ctx.names.pascal;
    let context_type = format!("{}ContextType", pascal);
    let context = format!("{}Context", pascal);
    let row = TypeExpr::nullable(TypeExpr::named(pascal.clone()));

    let mut dialog_types: Vec<TypeExpr> = DIALOG_TYPES
        .iter()
        .map(|t| TypeExpr::Literal(t.to_string()))
        .collect();
    dialog_types.push(TypeExpr::Null);

    let setter = |param: &str, ty: TypeExpr| TypeExpr::Function {
        params: vec![(param.to_string(), ty)],
        returns: Box::new(TypeExpr::named("void")),
    };

    TsModule::new()
        .import(Import::new(
            ["createContext", "useContext", "useState", "type ReactNode"],
            "react",
        ))
        .import(Import::new([format!("type {}", pascal)], "../data/schema"))
        .item(Item::TypeAlias {
            exported: false,
            name: "DialogType".to_string(),
            ty: TypeExpr::Union(dialog_types),
        })
        .item(Item::TypeAlias {
            exported: false,
            name: context_type.clone(),
            ty: TypeExpr::Object(vec![
                ("open".to_string(), TypeExpr::named("DialogType")),
                ("setOpen".to_string(), setter("type", TypeExpr::named("DialogType"))),
                ("currentRow".to_string(), row.clone()),
                ("setCurrentRow".to_string(), setter("row", row)),
            ]),
        })
        .item(Item::Const {
            exported: false,
            name: context.clone(),
            value: Expr::call(
                format!("createContext<{} | null>", context_type),
                vec![Expr::ident("null")],
            ),
        })
        .item(Item::raw_with(|out| provider_component(out, ctx.names, &context)))
        .item(Item::raw_with(|out| context_hook(out, ctx.names, &context)))
}

fn provider_component(output: &mut String, names: &ModuleName, context: &str) -> fmt::Result {
    let pascal = &names.pascal;

    writeln!(
        output,
        "export function {}Provider({{ children }}: {{ children: ReactNode }}) {{",
        pascal
    )?;
    writeln!(output, "  const [open, setOpen] = useState<DialogType>(null)")?;
    writeln!(
        output,
        "  const [currentRow, setCurrentRow] = useState<{} | null>(null)\n",
        pascal
    )?;
    writeln!(output, "  return (")?;
    writeln!(
        output,
        "    <{}.Provider value={{{{ open, setOpen, currentRow, setCurrentRow }}}}>",
        context
    )?;
    writeln!(output, "      {{children}}")?;
    writeln!(output, "    </{}.Provider>", context)?;
    writeln!(output, "  )")?;
    writeln!(output, "}}")
}

fn context_hook(output: &mut String, names: &ModuleName, context: &str) -> fmt::Result {
    let hook = context_hook_name(names);

    writeln!(output, "export function {}() {{", hook)?;
    writeln!(output, "  const context = useContext({})", context)?;
    writeln!(output, "  if (!context) {{")?;
    writeln!(
        output,
        "    throw new Error('{} must be used within {}Provider')",
        hook, names.pascal
    )?;
    writeln!(output, "  }}")?;
    writeln!(output, "  return context")?;
    writeln!(output, "}}")
}
