use crate::{error::SchemaError, parser::parse_document, verifier::verify_entities};
use centavo_schema::Entity;

/// Compile a textual schema document into verified entity descriptors.
/// Returns `Err(SchemaError)` if splitting, parsing, or verification fails.
pub fn compile_document(text: &str) -> Result<Vec<Entity>, SchemaError> {
    let entities = parse_document(text)?;
    verify_entities(&entities)?;
    Ok(entities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_rejects_duplicate_fields() {
        let err = compile_document("[budget.Vendor]\nname = String\nname = String\n").unwrap_err();
        assert!(matches!(err, SchemaError::Verify(_)));
    }

    #[test]
    fn test_compile_ok() {
        let entities = compile_document("[budget.Vendor]\nname = String\n").unwrap();
        assert_eq!(entities.len(), 1);
    }
}
