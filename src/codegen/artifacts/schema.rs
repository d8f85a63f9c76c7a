//! `data/schema.ts`: zod schema and inferred types for the record.

use super::RenderContext;
use crate::codegen::document::{Expr, Import, Item, TsModule, TypeExpr};
use crate::codegen::fields::{FieldKind, FieldSpec, STATUS_VALUES};
use crate::codegen::naming::ModuleName;

pub fn status_schema_name(names: &ModuleName) -> String {
    format!("{}StatusSchema", names.camel)
}

pub fn status_type_name(names: &ModuleName) -> String {
    format!("{}Status", names.pascal)
}

pub fn record_schema_name(names: &ModuleName) -> String {
    format!("{}Schema", names.camel)
}

pub fn list_schema_name(names: &ModuleName) -> String {
    format!("{}ListSchema", names.camel)
}

pub(super) fn build(ctx: RenderContext<'_>) -> TsModule {
    let names = ctx.names;
    let mut module = TsModule::new().import(Import::new(["z"], "zod"));

    // the enumeration must be declared before the record that references it
    if ctx.fields.has_status_field {
        let literals = STATUS_VALUES
            .iter()
            .map(|value| Expr::call("z.literal", vec![Expr::str(*value)]))
            .collect();

        module = module
            .item(Item::Const {
                exported: false,
                name: status_schema_name(names),
                value: Expr::call("z.union", vec![Expr::Array(literals)]),
            })
            .item(infer_alias(status_type_name(names), &status_schema_name(names)));
    }

    let entries = ctx
        .fields
        .iter()
        .map(|field| (field.name.clone(), field_schema(field, names)))
        .collect();

    module
        .item(Item::Const {
            exported: false,
            name: record_schema_name(names),
            value: Expr::call("z.object", vec![Expr::Object(entries)]),
        })
        .item(infer_alias(names.pascal.clone(), &record_schema_name(names)))
        .item(Item::Const {
            exported: true,
            name: list_schema_name(names),
            value: Expr::call("z.array", vec![Expr::ident(record_schema_name(names))]),
        })
}

fn field_schema(field: &FieldSpec, names: &ModuleName) -> Expr {
    match field.kind {
        FieldKind::Identifier | FieldKind::Generic => Expr::call("z.string", vec![]),
        FieldKind::Timestamp => Expr::call("z.coerce.date", vec![]),
        FieldKind::Status => Expr::ident(status_schema_name(names)),
    }
}

fn infer_alias(name: String, schema: &str) -> Item {
    Item::TypeAlias {
        exported: true,
        name,
        ty: TypeExpr::Named(format!("z.infer<typeof {}>", schema)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::fields::{build_plan, FieldPlan, DEFAULT_FIELDS};

    fn render(module: &str, fields: &[&str]) -> (ModuleName, FieldPlan, TsModule) {
        let names = ModuleName::new(module).unwrap();
        let plan = build_plan(fields, &DEFAULT_FIELDS).unwrap();
        let doc = build(RenderContext::new(&names, &plan));
        (names, plan, doc)
    }

    #[test]
    fn test_schema_with_status() {
        let (_, _, doc) = render("product-list", &["id", "name", "price", "status"]);

        assert_eq!(
            doc.declared_names(),
            vec![
                "productListStatusSchema",
                "ProductListStatus",
                "productListSchema",
                "ProductList",
                "productListListSchema",
            ]
        );

        let Some(Item::Const { value, .. }) = doc.find("productListSchema") else {
            panic!("record schema missing");
        };
        let Expr::Call { args, .. } = value else {
            panic!("record schema is not a call");
        };
        let Expr::Object(entries) = &args[0] else {
            panic!("record schema has no object argument");
        };

        assert_eq!(
            entries,
            &vec![
                ("id".to_string(), Expr::call("z.string", vec![])),
                ("name".to_string(), Expr::call("z.string", vec![])),
                ("price".to_string(), Expr::call("z.string", vec![])),
                ("status".to_string(), Expr::ident("productListStatusSchema")),
            ]
        );
    }

    #[test]
    fn test_status_union_has_two_literals() {
        let (_, _, doc) = render("users", &["id", "status"]);
        let text = doc.render();

        assert!(text.contains(
            "const usersStatusSchema = z.union([\n  z.literal('active'),\n  z.literal('inactive'),\n])"
        ));
        assert_eq!(text.matches("z.literal(").count(), 2);
    }

    #[test]
    fn test_schema_without_status() {
        let (_, _, doc) = render("tags", &["id", "label"]);

        assert!(doc.find("tagsStatusSchema").is_none());
        assert!(doc.find("TagsStatus").is_none());
        assert!(!doc.render().contains("z.union"));
    }

    #[test]
    fn test_timestamps_are_coerced() {
        let (_, _, doc) = render("users", &[]);
        let text = doc.render();

        assert!(text.contains("  createdAt: z.coerce.date(),\n"));
        assert!(text.contains("  updatedAt: z.coerce.date(),\n"));
        assert!(text.contains("export type Users = z.infer<typeof usersSchema>\n"));
        assert!(text.contains("export const usersListSchema = z.array(usersSchema)\n"));
    }
}
