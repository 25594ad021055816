use crate::{
    error::SchemaError,
    gen_model::{field_type, module_path, value_type},
    utils::{escape_ident, to_snake_case},
};
use centavo_schema::{Entity, Field};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Imports for a request file. References carry no import at all (they are
/// flattened to raw identifiers); inline enums import the declaration from
/// the sibling model package instead of re-declaring it.
fn request_imports(entity: &Entity, base_namespace: &str) -> BTreeSet<String> {
    let mut imports = BTreeSet::new();
    imports.insert("serde::{Deserialize, Serialize}".to_string());
    imports.insert("serde_with::skip_serializing_none".to_string());

    for field in &entity.fields {
        if field.is_reference {
            continue;
        }
        if field.is_enum() {
            imports.insert(format!(
                "{}::{}::model::{}",
                module_path(base_namespace),
                module_path(&entity.namespace),
                field.type_name
            ));
        } else if let Some(ns) = &field.type_namespace {
            imports.insert(format!("{}::{}", module_path(ns), field.type_name));
        } else if field.type_name == "Date" {
            imports.insert("chrono::NaiveDate".to_string());
        } else if field.type_name == "DateTime" {
            imports.insert("chrono::{DateTime, Utc}".to_string());
        } else if value_type(&field.type_name).is_none() && field.type_name != entity.name {
            imports.insert(format!(
                "{}::{}::model::{}",
                module_path(base_namespace),
                module_path(&entity.namespace),
                field.type_name
            ));
        }
    }

    imports
}

fn request_field(field: &Field) -> String {
    if field.is_reference {
        let suffix = if field.is_list { "_ids" } else { "_id" };
        let ident = escape_ident(&format!("{}{}", to_snake_case(&field.name), suffix));
        let base = if field.is_list { "Vec<i64>" } else { "i64" };
        let ty = if field.is_nullable {
            format!("Option<{}>", base)
        } else {
            base.to_string()
        };
        format!("    pub {}: {},\n", ident, ty)
    } else {
        format!(
            "    pub {}: {},\n",
            escape_ident(&to_snake_case(&field.name)),
            field_type(field)
        )
    }
}

/// Renders the create/update payload shape for one entity: same field order
/// as the model, but no identifier, no timestamps, and references reduced to
/// raw ids (`category` becomes `category_id`, a reference list `tags`
/// becomes `tags_ids`).
pub fn render_request(entity: &Entity, base_namespace: &str) -> String {
    let mut out = String::new();
    out.push_str("// @generated by centavo. Do not edit by hand.\n");
    out.push_str(&format!(
        "// Module: {}::{}::model::requests\n\n",
        module_path(base_namespace),
        module_path(&entity.namespace)
    ));

    for import in request_imports(entity, base_namespace) {
        out.push_str(&format!("use {};\n", import));
    }
    out.push('\n');

    out.push_str("#[skip_serializing_none]\n");
    out.push_str("#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]\n");
    out.push_str("#[serde(rename_all = \"camelCase\")]\n");
    out.push_str(&format!("pub struct {}Request {{\n", entity.name));
    for field in &entity.fields {
        out.push_str(&request_field(field));
    }
    out.push_str("}\n");
    out
}

/// Writes the request source to
/// `<output_root>/<namespace path>/model/requests/<EntityName>Request.rs`.
pub fn write_request(
    entity: &Entity,
    output_root: &Path,
    base_namespace: &str,
) -> Result<PathBuf, SchemaError> {
    let mut dir = output_root.to_path_buf();
    for segment in entity.namespace.split('.') {
        dir.push(segment);
    }
    dir.push("model");
    dir.push("requests");
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{}Request.rs", entity.name));
    fs::write(&path, render_request(entity, base_namespace))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile_document;

    const TRANSACTION: &str = "\
[budget.Transaction]
date = Date
amount = Long
type = {EXPENSE|INCOME}
description = String
notes = String?
tags = *budget.Tag[]
category = *budget.Category?
vendor = *budget.Vendor?
account = *budget.Account?
";

    #[test]
    fn test_request_flattens_references_to_ids() {
        let entities = compile_document(TRANSACTION).unwrap();
        let rendered = render_request(&entities[0], "app.generated");
        assert!(rendered.contains("pub struct TransactionRequest {\n"));
        assert!(rendered.contains("    pub tags_ids: Vec<i64>,\n"));
        assert!(rendered.contains("    pub category_id: Option<i64>,\n"));
        assert!(rendered.contains("    pub vendor_id: Option<i64>,\n"));
        assert!(rendered.contains("    pub account_id: Option<i64>,\n"));
        // No imports for flattened references.
        assert!(!rendered.contains("model::Tag;"));
        assert!(!rendered.contains("model::Category;"));
    }

    #[test]
    fn test_request_has_no_id_or_timestamps() {
        let entities = compile_document(TRANSACTION).unwrap();
        let rendered = render_request(&entities[0], "app.generated");
        assert!(!rendered.contains("pub id:"));
        assert!(!rendered.contains("created_at"));
        assert!(!rendered.contains("updated_at"));
    }

    #[test]
    fn test_request_imports_enum_from_model_package() {
        let entities = compile_document(TRANSACTION).unwrap();
        let rendered = render_request(&entities[0], "app.generated");
        assert!(rendered.contains("use app::generated::budget::model::Type;\n"));
        assert!(rendered.contains("    pub r#type: Type,\n"));
        // Enum declaration lives in the model file only.
        assert!(!rendered.contains("pub enum Type"));
    }

    #[test]
    fn test_request_keeps_value_fields() {
        let entities = compile_document(TRANSACTION).unwrap();
        let rendered = render_request(&entities[0], "app.generated");
        assert!(rendered.contains("use chrono::NaiveDate;\n"));
        assert!(rendered.contains("    pub date: NaiveDate,\n"));
        assert!(rendered.contains("    pub amount: i64,\n"));
        assert!(rendered.contains("    pub notes: Option<String>,\n"));
    }

    #[test]
    fn test_write_request_path() {
        let entities = compile_document("[budget.Vendor]\nname = String\n").unwrap();
        let out = tempfile::tempdir().unwrap();
        let path = write_request(&entities[0], out.path(), "app.generated").unwrap();
        assert_eq!(
            path,
            out.path()
                .join("budget")
                .join("model")
                .join("requests")
                .join("VendorRequest.rs")
        );
    }
}
