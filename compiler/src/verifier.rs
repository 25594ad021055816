use crate::{error::SchemaError, utils::quote};
use centavo_schema::Entity;
use std::collections::HashSet;

/// Unqualified schema type names the generator maps to plain Rust value
/// types. Anything else names a generated type or an explicit import.
pub const WELL_KNOWN_TYPES: [&str; 8] = [
    "String", "Boolean", "Int", "Long", "Float", "Double", "Date", "DateTime",
];

/// Returns `Ok(())` if the parsed document is emittable, or
/// `Err(SchemaError::Verify(_))` otherwise. The whole pass aborts on the
/// first failure; there is no partial-success mode.
pub fn verify_entities(entities: &[Entity]) -> Result<(), SchemaError> {
    let mut seen_entities = HashSet::new();

    for entity in entities {
        if WELL_KNOWN_TYPES.contains(&entity.name.as_str()) {
            return Err(SchemaError::Verify(format!(
                "The entity name {} is reserved",
                quote(&entity.name)
            )));
        }
        if !seen_entities.insert(entity.name.clone()) {
            return Err(SchemaError::Verify(format!(
                "The entity {} is defined twice",
                quote(&entity.name)
            )));
        }

        let mut seen_fields = HashSet::new();
        for field in &entity.fields {
            if !seen_fields.insert(field.name.as_str()) {
                return Err(SchemaError::Verify(format!(
                    "The field {} is defined twice in entity {}",
                    quote(&field.name),
                    quote(&entity.name)
                )));
            }
            if field.type_name.is_empty() {
                return Err(SchemaError::Verify(format!(
                    "The field {} in entity {} has no type",
                    quote(&field.name),
                    quote(&entity.name)
                )));
            }
        }
    }

    Ok(())
}
