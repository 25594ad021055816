use crate::{
    error::SchemaError,
    utils::{escape_ident, to_pascal_case, to_snake_case},
};
use centavo_schema::{Entity, Field};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Maps well-known schema value types to Rust types. Returns `None` for
/// names that refer to generated or explicitly imported types.
pub(crate) fn value_type(type_name: &str) -> Option<&'static str> {
    match type_name {
        "String" => Some("String"),
        "Boolean" => Some("bool"),
        "Int" => Some("i32"),
        "Long" => Some("i64"),
        "Float" => Some("f32"),
        "Double" => Some("f64"),
        "Date" => Some("NaiveDate"),
        "DateTime" => Some("DateTime<Utc>"),
        _ => None,
    }
}

/// Renders a dotted namespace as a Rust module path.
pub(crate) fn module_path(dotted: &str) -> String {
    dotted.replace('.', "::")
}

/// Resolves a field's Rust type, applying list and nullable wrapping.
pub(crate) fn field_type(field: &Field) -> String {
    let base = if field.is_enum() {
        field.type_name.clone()
    } else {
        match value_type(&field.type_name) {
            Some(mapped) => mapped.to_string(),
            None => field.type_name.clone(),
        }
    };
    let base = if field.is_list {
        format!("Vec<{}>", base)
    } else {
        base
    };
    if field.is_nullable {
        format!("Option<{}>", base)
    } else {
        base
    }
}

/// One import path per distinct `(namespace, type)` pair needed by the
/// entity's fields, plus the timestamp and serde imports every model file
/// carries. Referenced types resolve against the generation root; explicit
/// namespaces on value fields import verbatim; unqualified non-value types
/// are same-namespace siblings re-exported by the model module.
fn model_imports(entity: &Entity, base_namespace: &str) -> BTreeSet<String> {
    let mut imports = BTreeSet::new();
    imports.insert("chrono::{DateTime, Utc}".to_string());
    imports.insert("serde::{Deserialize, Serialize}".to_string());
    imports.insert("serde_with::skip_serializing_none".to_string());

    for field in &entity.fields {
        if field.is_enum() {
            continue;
        }
        if field.is_reference {
            let ns = field.type_namespace.as_deref().unwrap_or(&entity.namespace);
            // A self-reference names the type declared in this very file.
            if ns == entity.namespace && field.type_name == entity.name {
                continue;
            }
            imports.insert(format!(
                "{}::{}::model::{}",
                module_path(base_namespace),
                module_path(ns),
                field.type_name
            ));
        } else if let Some(ns) = &field.type_namespace {
            imports.insert(format!("{}::{}", module_path(ns), field.type_name));
        } else if field.type_name == "Date" {
            imports.insert("chrono::NaiveDate".to_string());
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

/// Renders the declaration of one inline enumeration. The first literal is
/// the default, and each variant keeps its schema literal as the wire name.
pub(crate) fn render_enum(field: &Field) -> String {
    let mut out = String::new();
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]\n");
    out.push_str(&format!("pub enum {} {{\n", field.type_name));
    for (index, literal) in field.enum_values.as_deref().unwrap_or(&[]).iter().enumerate() {
        if index == 0 {
            out.push_str("    #[default]\n");
        }
        out.push_str(&format!("    #[serde(rename = \"{}\")]\n", literal));
        out.push_str(&format!("    {},\n", escape_ident(&to_pascal_case(literal))));
    }
    out.push_str("}\n");
    out
}

/// Renders the full model source for one entity: banner, imports, inline
/// enum declarations, then the struct with the mandatory identifier first
/// and the two trailing timestamps.
pub fn render_model(entity: &Entity, base_namespace: &str) -> String {
    let mut out = String::new();
    out.push_str("// @generated by centavo. Do not edit by hand.\n");
    out.push_str(&format!(
        "// Module: {}::{}::model\n\n",
        module_path(base_namespace),
        module_path(&entity.namespace)
    ));

    for import in model_imports(entity, base_namespace) {
        out.push_str(&format!("use {};\n", import));
    }
    out.push('\n');

    for field in &entity.fields {
        if field.is_enum() {
            out.push_str(&render_enum(field));
            out.push('\n');
        }
    }

    out.push_str("#[skip_serializing_none]\n");
    out.push_str("#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]\n");
    out.push_str("#[serde(rename_all = \"camelCase\")]\n");
    out.push_str(&format!("pub struct {} {{\n", entity.name));
    out.push_str("    pub id: i64,\n");
    for field in &entity.fields {
        out.push_str(&format!(
            "    pub {}: {},\n",
            escape_ident(&to_snake_case(&field.name)),
            field_type(field)
        ));
    }
    out.push_str("    pub created_at: Option<DateTime<Utc>>,\n");
    out.push_str("    pub updated_at: Option<DateTime<Utc>>,\n");
    out.push_str("}\n");
    out
}

/// Writes the model source to
/// `<output_root>/<namespace path>/model/<EntityName>.rs`, creating
/// directories as needed and overwriting any existing file.
pub fn write_model(
    entity: &Entity,
    output_root: &Path,
    base_namespace: &str,
) -> Result<PathBuf, SchemaError> {
    let mut dir = output_root.to_path_buf();
    for segment in entity.namespace.split('.') {
        dir.push(segment);
    }
    dir.push("model");
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{}.rs", entity.name));
    fs::write(&path, render_model(entity, base_namespace))?;
    Ok(path)
}
