//! Property declarations consumed by the type resolver.
//!
//! An owner type (a node class, a document schema) may declare the type of
//! each named attribute. The marshalling layer only reads these
//! declarations; it never creates or mutates them. Absence of a
//! declaration means "infer from the value".

use rustc_hash::FxHashMap;

use crate::model::TypeDescriptor;

/// The property-declaration capability an owner type exposes.
pub trait PropertyDeclarations {
    /// Returns the declared type for an attribute, or `None` when the
    /// attribute has no explicit type.
    fn declared_type(&self, attribute: &str) -> Option<TypeDescriptor>;
}

/// A plain attribute-name → type map implementing [`PropertyDeclarations`].
///
/// This is the in-crate stand-in for an owner type's metadata; hosts with
/// their own schema machinery implement the trait directly instead.
#[derive(Debug, Clone, Default)]
pub struct PropertySchema {
    properties: FxHashMap<String, TypeDescriptor>,
}

impl PropertySchema {
    /// Creates an empty schema.
    pub fn new() -> PropertySchema {
        PropertySchema::default()
    }

    /// Declares an attribute with an explicit type, replacing any earlier
    /// declaration for the same name.
    pub fn declare(&mut self, attribute: impl Into<String>, descriptor: TypeDescriptor) {
        self.properties.insert(attribute.into(), descriptor);
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertyDeclarations for PropertySchema {
    fn declared_type(&self, attribute: &str) -> Option<TypeDescriptor> {
        self.properties.get(attribute).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_and_lookup() {
        let mut schema = PropertySchema::new();
        schema.declare("born_on", TypeDescriptor::Date);
        schema.declare("last_seen", TypeDescriptor::Instant);

        assert_eq!(schema.declared_type("born_on"), Some(TypeDescriptor::Date));
        assert_eq!(
            schema.declared_type("last_seen"),
            Some(TypeDescriptor::Instant)
        );
        assert_eq!(schema.declared_type("nickname"), None);
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_redeclare_replaces() {
        let mut schema = PropertySchema::new();
        schema.declare("stamp", TypeDescriptor::Date);
        schema.declare("stamp", TypeDescriptor::DateTime);

        assert_eq!(schema.declared_type("stamp"), Some(TypeDescriptor::DateTime));
        assert_eq!(schema.len(), 1);
    }
}
