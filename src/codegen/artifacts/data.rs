//! `data/data.ts`: static lookups for badges and filters.

use super::RenderContext;
use crate::codegen::document::{Expr, Item, TsModule};
use crate::codegen::fields::STATUS_VALUES;
use crate::codegen::utils::display_label;

/// Badge classes for a status literal
pub fn status_style(status: &str) -> &'static str {
    match status {
        "active" => "bg-green-500/10 text-green-500 border-green-500/20",
        _ => "bg-gray-500/10 text-gray-500 border-gray-500/20",
    }
}

pub(super) fn build(ctx: RenderContext<'_>) -> TsModule {
    if !ctx.fields.has_status_field {
        return TsModule::new().item(Item::Comment("Add your data constants here".to_string()));
    }

    let colors = STATUS_VALUES
        .iter()
        .map(|status| Expr::Array(vec![Expr::str(*status), Expr::str(status_style(status))]))
        .collect();

    let options = STATUS_VALUES
        .iter()
        .map(|status| {
            Expr::Object(vec![
                ("label".to_string(), Expr::str(display_label(status))),
                ("value".to_string(), Expr::str(*status)),
            ])
        })
        .collect();

    TsModule::new()
        .item(Item::Comment("Status colors for badges".to_string()))
        .item(Item::Const {
            exported: true,
            name: "statusColors".to_string(),
            value: Expr::New {
                class: "Map".to_string(),
                type_args: vec!["string".to_string(), "string".to_string()],
                args: vec![Expr::Array(colors)],
            },
        })
        .item(Item::Comment("Status options for filters".to_string()))
        .item(Item::Const {
            exported: true,
            name: "statuses".to_string(),
            value: Expr::Array(options),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::fields::{build_plan, DEFAULT_FIELDS};
    use crate::codegen::naming::ModuleName;

    #[test]
    fn test_data_with_status() {
        let names = ModuleName::new("product-list").unwrap();
        let plan = build_plan(&["id", "name", "price", "status"], &DEFAULT_FIELDS).unwrap();
        let doc = build(RenderContext::new(&names, &plan));

        let Some(Item::Const {
            value: Expr::New { args, .. },
            ..
        }) = doc.find("statusColors")
        else {
            panic!("statusColors missing");
        };
        let Expr::Array(entries) = &args[0] else {
            panic!("statusColors has no entries");
        };
        assert_eq!(entries.len(), 2);

        assert_eq!(
            doc.render(),
            "// Status colors for badges\n\
             export const statusColors = new Map<string, string>([\n\
             \x20 ['active', 'bg-green-500/10 text-green-500 border-green-500/20'],\n\
             \x20 ['inactive', 'bg-gray-500/10 text-gray-500 border-gray-500/20'],\n\
             ])\n\
             \n\
             // Status options for filters\n\
             export const statuses = [\n\
             \x20 { label: 'Active', value: 'active' },\n\
             \x20 { label: 'Inactive', value: 'inactive' },\n\
             ]\n"
        );
    }

    #[test]
    fn test_data_without_status_is_placeholder() {
        let names = ModuleName::new("tags").unwrap();
        let plan = build_plan(&["id", "label"], &DEFAULT_FIELDS).unwrap();
        let doc = build(RenderContext::new(&names, &plan));

        assert!(doc.declared_names().is_empty());
        assert_eq!(doc.render(), "// Add your data constants here\n");
    }
}
