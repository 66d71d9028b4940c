//! Reserved names and defaults shared by every catalog implementation.
//!
//! The reflection keys below are part of the resolve protocol. They are
//! checked before ordinary bindings, so a user-chosen binding name never
//! shadows them.

/// Diagnostic query listing every name a catalog exposes.
pub const VALUE_NAMES: &str = "ValueNames";

/// Prefix of the query returning a reference to the queried object itself.
pub const THIS_POINTER_PREFIX: &str = "ThisPointer:";

/// Prefix of the query returning a full copy of the queried object.
pub const THIS_OBJECT_PREFIX: &str = "ThisObject:";

/// Terminator appended after every entry of a `ValueNames` listing.
pub const VALUE_NAME_SEPARATOR: char = ';';

/// Default fail-fast policy for [`make_parameters`](crate::make_parameters).
pub const DEFAULT_THROW_IF_UNUSED: bool = true;

/// Returns `true` if `name` is one of the reflection keys above.
pub fn is_reserved_name(name: &str) -> bool {
    name == VALUE_NAMES
        || name.starts_with(THIS_POINTER_PREFIX)
        || name.starts_with(THIS_OBJECT_PREFIX)
}

/// Builds the `ThisPointer:<tag>` key for a type tag.
pub fn this_pointer_key(tag: &str) -> String {
    format!("{THIS_POINTER_PREFIX}{tag}")
}

/// Builds the `ThisObject:<tag>` key for a type tag.
pub fn this_object_key(tag: &str) -> String {
    format!("{THIS_OBJECT_PREFIX}{tag}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_names_are_detected() {
        assert!(is_reserved_name("ValueNames"));
        assert!(is_reserved_name(&this_pointer_key("my::Key")));
        assert!(is_reserved_name(&this_object_key("my::Key")));
        assert!(!is_reserved_name("KeySize"));
        assert!(!is_reserved_name("ThisPointer"));
    }
}
