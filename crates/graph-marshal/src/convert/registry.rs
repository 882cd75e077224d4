//! Process-wide converter registry and type resolution.
//!
//! The registry holds one ordered converter list, initialized lazily on
//! first lookup and readable from any thread. Lookup probes the list in
//! registration order with each converter's applicability predicate; the
//! first match wins and `Identity` is the fallback when nothing matches
//! (or no type was declared at all).
//!
//! [`set_converters`] replaces the list wholesale. It exists for test
//! isolation; production code reaches the list only through the lazy
//! discovery path.

use std::sync::RwLock;

use lazy_static::lazy_static;

use crate::convert::Converter;
use crate::error::ConvertError;
use crate::model::{TypeDescriptor, Value};
use crate::schema::PropertyDeclarations;

lazy_static! {
    // None until first lookup (or an explicit override); the write lock
    // makes initialization happen at most once.
    static ref CONVERTERS: RwLock<Option<Vec<Converter>>> = RwLock::new(None);
}

fn first_match(list: &[Converter], descriptor: &TypeDescriptor) -> Converter {
    list.iter()
        .copied()
        .find(|converter| converter.applies(descriptor))
        .unwrap_or(Converter::Identity)
}

/// Returns the converter governing `declared`, or [`Converter::Identity`]
/// when no type was declared or no predicate matches.
///
/// The first call installs [`Converter::discoverable`] as the registry
/// list; concurrent first calls observe a single, fully-formed list.
pub fn converter(declared: Option<&TypeDescriptor>) -> Converter {
    let Some(descriptor) = declared else {
        return Converter::Identity;
    };

    {
        let guard = CONVERTERS.read().expect("converter registry poisoned");
        if let Some(list) = guard.as_ref() {
            return first_match(list, descriptor);
        }
    }

    let mut guard = CONVERTERS.write().expect("converter registry poisoned");
    let list = guard.get_or_insert_with(|| {
        tracing::debug!("installing default converter list");
        Converter::discoverable()
    });
    first_match(list, descriptor)
}

/// Atomically replaces the registry's converter list.
///
/// Test setup/teardown hook; entries cannot be added or removed
/// incrementally. Registration order is significant: lookups return the
/// first converter whose predicate matches.
pub fn set_converters(converters: Vec<Converter>) {
    tracing::debug!(count = converters.len(), "replacing converter registry");
    *CONVERTERS.write().expect("converter registry poisoned") = Some(converters);
}

/// Determines the type descriptor governing a conversion.
///
/// The declared type always wins when `attribute` and `owner` are both
/// present and the owner declares the attribute; a caller may deliberately
/// store a value whose runtime type differs from the declaration, and the
/// declaration still governs. Only in the absence of a declaration is the
/// value's own runtime descriptor used.
pub fn resolve_type(
    value: &Value,
    attribute: Option<&str>,
    owner: Option<&dyn PropertyDeclarations>,
) -> TypeDescriptor {
    if let (Some(attribute), Some(owner)) = (attribute, owner) {
        if let Some(declared) = owner.declared_type(attribute) {
            return declared;
        }
    }
    value.type_descriptor()
}

/// Converts an application value to its storage representation.
///
/// The governing type comes from [`resolve_type`]: the owner's declaration
/// for `attribute` when available, the value's runtime type otherwise.
pub fn convert_to_storage(
    value: &Value,
    attribute: Option<&str>,
    owner: Option<&dyn PropertyDeclarations>,
) -> Result<Value, ConvertError> {
    let descriptor = resolve_type(value, attribute, owner);
    converter(Some(&descriptor)).to_storage(value)
}

/// Converts a storage value back to its application representation.
///
/// Inbound conversion is asymmetric by necessity: a storage integer
/// carries no type information of its own, so only the owner's declaration
/// for `attribute` is consulted. Undeclared attributes pass through the
/// identity conversion unchanged.
pub fn convert_from_storage(
    owner: &dyn PropertyDeclarations,
    attribute: &str,
    stored: &Value,
) -> Result<Value, ConvertError> {
    converter(owner.declared_type(attribute).as_ref()).to_application(stored)
}
