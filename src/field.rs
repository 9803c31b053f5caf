//! Field presence checks for content entities.

/// Read-only view of an entity's named fields.
///
/// Implemented by the host framework's entity wrapper. Emptiness is only
/// queried for fields that exist.
pub trait FieldBearer {
    /// Whether the entity defines a field with this name.
    fn has_field(&self, name: &str) -> bool;

    /// Whether the named field holds no values.
    fn field_is_empty(&self, name: &str) -> bool;
}

/// Conversion into an ordered list of field names.
///
/// Lets [`field_check`] take either a single name or a sequence of names.
pub trait IntoFieldNames<'a> {
    fn into_field_names(self) -> Vec<&'a str>;
}

impl<'a> IntoFieldNames<'a> for &'a str {
    fn into_field_names(self) -> Vec<&'a str> {
        vec![self]
    }
}

impl<'a> IntoFieldNames<'a> for &'a String {
    fn into_field_names(self) -> Vec<&'a str> {
        vec![self.as_str()]
    }
}

impl<'a, const N: usize> IntoFieldNames<'a> for [&'a str; N] {
    fn into_field_names(self) -> Vec<&'a str> {
        self.to_vec()
    }
}

impl<'a> IntoFieldNames<'a> for &'a [&'a str] {
    fn into_field_names(self) -> Vec<&'a str> {
        self.to_vec()
    }
}

impl<'a> IntoFieldNames<'a> for Vec<&'a str> {
    fn into_field_names(self) -> Vec<&'a str> {
        self
    }
}

/// Check that every named field exists on the entity and is non-empty.
///
/// Names are checked in order and the first missing or empty field decides
/// the result. An empty name list is vacuously `true`. A missing field is a
/// normal `false`, not an error.
///
/// # Example
/// ```ignore
/// if field_check(node, ["field_title", "field_hero"]) {
///     // both fields are present and populated
/// }
/// ```
pub fn field_check<'a, E>(entity: &E, names: impl IntoFieldNames<'a>) -> bool
where
    E: FieldBearer + ?Sized,
{
    names
        .into_field_names()
        .into_iter()
        .all(|name| entity.has_field(name) && !entity.field_is_empty(name))
}
