use std::{any::type_name, fmt};

use serde_json::Value;

use crate::error::DefinitionError;

/// A record whose named members are the alternative shapes of one field.
///
/// The member table is declared once, in the order decoding should try the
/// members. Use `#[derive(Candidates)]` on a struct with named fields rather
/// than writing the table by hand:
///
/// ```
/// use genson::{AnyOf, Candidates};
///
/// #[derive(Candidates, Default)]
/// struct IdOrName {
///     #[candidate(rename = "Int")]
///     id: i64,
///     #[candidate(rename = "Str")]
///     name: String,
/// }
///
/// let mut slot = AnyOf::<IdOrName>::default();
/// slot.decode_json(b"\"towel\"").unwrap();
/// assert_eq!(slot.selected(), Some("Str"));
/// ```
///
/// Only structs with named fields can be records:
///
/// ```compile_fail
/// #[derive(genson::Candidates)]
/// enum IdOrName {
///     Int(i64),
///     Str(String),
/// }
/// ```
///
/// ```compile_fail
/// #[derive(genson::Candidates)]
/// struct IdOrName(i64, String);
/// ```
///
/// ```compile_fail
/// #[derive(genson::Candidates)]
/// struct IdOrName;
/// ```
///
/// Member names must be unique:
///
/// ```compile_fail
/// #[derive(genson::Candidates)]
/// struct IdOrName {
///     #[candidate(rename = "Value")]
///     id: i64,
///     #[candidate(rename = "Value")]
///     name: String,
/// }
/// ```
///
/// A record needs at least one member:
///
/// ```compile_fail
/// #[derive(genson::Candidates)]
/// struct IdOrName {
///     #[candidate(skip)]
///     id: i64,
///     #[candidate(skip)]
///     name: String,
/// }
/// ```
///
/// Integers wider than 64 bits are not members; a JSON value holds at most 64 bits:
///
/// ```compile_fail
/// #[derive(genson::Candidates)]
/// struct Wide {
///     big: u128,
///     text: String,
/// }
/// ```
pub trait Candidates: Sized + 'static {
    const MEMBERS: &'static [Member<Self>];
}

/// Descriptor of a single member of a [`Candidates`] record.
pub struct Member<R> {
    /// Name used for the selection marker.
    pub name: &'static str,
    /// Whether the member currently holds its type's empty value.
    pub is_zero: fn(&R) -> bool,
    /// Serializes the member's current value.
    pub encode: fn(&R) -> serde_json::Result<Value>,
    /// Deserializes the input into the member's storage.
    pub decode: fn(&mut R, &Value) -> serde_json::Result<()>,
}

impl<R> Clone for Member<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Member<R> {}

impl<R> fmt::Debug for Member<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Returns the member table of `R` after checking that it describes a usable record.
pub(crate) fn members<R: Candidates>() -> Result<&'static [Member<R>], DefinitionError> {
    let members = R::MEMBERS;
    let record = type_name::<R>();

    if members.is_empty() {
        return Err(DefinitionError::NoMembers { record });
    }

    for (idx, member) in members.iter().enumerate() {
        if members[..idx].iter().any(|other| other.name == member.name) {
            return Err(DefinitionError::DuplicateMember {
                record,
                member: member.name,
            });
        }
    }

    Ok(members)
}

/// Names of the members of `R`, in the order decoding tries them.
pub fn member_names<R: Candidates>() -> impl Iterator<Item = &'static str> {
    R::MEMBERS.iter().map(|member| member.name)
}
