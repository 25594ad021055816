use crate::{
    error::SchemaError,
    splitter::split_document,
    utils::{capitalize, quote},
};
use centavo_schema::{Entity, Field};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEADER: Regex =
        Regex::new(r"(?m)^\s*\[\s*(?P<pkg>[a-zA-Z.]+)\.(?P<name>[a-zA-Z]+)\s*\]\s*$").unwrap();
    static ref FIELD: Regex = Regex::new(
        r"(?m)^\s*(?P<name>[a-zA-Z]+)\s*=\s*(?P<reference>\*)?(?:(?P<package>.+)\.)?(?P<class>[a-zA-Z]*|\{\s*[a-zA-Z]+\s*(?:\|\s*[a-zA-Z]+\s*)*\})(?P<nullable>\?)?(?P<list>\[\])?\s*$"
    )
    .unwrap();
}

/// Parses a whole schema document into entity descriptors, one per bracketed
/// block, in document order.
pub fn parse_document(text: &str) -> Result<Vec<Entity>, SchemaError> {
    let mut entities = Vec::new();
    for piece in split_document(text) {
        entities.push(parse_entity(piece)?);
    }
    Ok(entities)
}

/// Parses one chunk: a `[namespace.Name]` header followed by field lines.
/// Lines that do not match the field grammar (blank lines, comments) are
/// ignored. A chunk without a well-formed header is fatal.
fn parse_entity(piece: &str) -> Result<Entity, SchemaError> {
    let header = HEADER.captures(piece).ok_or_else(|| {
        SchemaError::Format(format!("invalid schema header in piece {}", quote(piece)))
    })?;
    let namespace = header["pkg"].to_string();
    let name = header["name"].to_string();

    let mut fields = Vec::new();
    for caps in FIELD.captures_iter(piece) {
        let field_name = caps["name"].to_string();
        let is_reference = caps.name("reference").is_some();
        let type_namespace = caps.name("package").map(|m| m.as_str().to_string());
        let is_nullable = caps.name("nullable").is_some();
        let is_list = caps.name("list").is_some();

        let class = &caps["class"];
        let (type_name, enum_values) = if class.starts_with('{') {
            let literals = class
                .trim_start_matches('{')
                .trim_end_matches('}')
                .split('|')
                .map(|literal| literal.trim().to_string())
                .collect();
            (capitalize(&field_name), Some(literals))
        } else {
            (class.to_string(), None)
        };

        fields.push(Field {
            name: field_name,
            type_name,
            type_namespace,
            is_reference,
            is_nullable,
            is_list,
            enum_values,
        });
    }

    Ok(Entity {
        name,
        namespace,
        fields,
    })
}
