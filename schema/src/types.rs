use serde::Serialize;

/// One parsed entity definition: the unit a single generated model file is
/// produced from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub name:      String,
    pub namespace: String,
    pub fields:    Vec<Field>,
}

/// One field of an entity.
///
/// `type_namespace` is `None` for well-known value types and for types living
/// in the entity's own namespace. For inline enumerations `type_name` is
/// synthesized from the capitalized field name and `enum_values` holds the
/// literals in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name:           String,
    pub type_name:      String,
    pub type_namespace: Option<String>,
    pub is_reference:   bool,
    pub is_nullable:    bool,
    pub is_list:        bool,
    pub enum_values:    Option<Vec<String>>,
}

impl Field {
    /// True when the field declares its allowed values inline (`{A|B|C}`).
    pub fn is_enum(&self) -> bool {
        self.enum_values.is_some()
    }
}
