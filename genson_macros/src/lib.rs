mod candidates;
mod is_zero;

use candidates::candidates_impl;
use is_zero::is_zero_impl;
use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput, Error};

/// Derive macro implementing `genson::Candidates` for a record whose named
/// fields are the alternative shapes of a single JSON field.
///
/// The member table follows field declaration order, which is also the order
/// `AnyOf` tries the members when decoding, so the first member able to hold
/// an input wins. A `serde_json::Value` member accepts any input and shadows
/// every member declared after it.
///
/// Every member type must implement `genson::IsZero`, `serde::Serialize` and
/// `serde::de::DeserializeOwned`.
///
/// Field attributes:
/// - `#[candidate(rename = "Name")]` uses `Name` as the member name instead of the field name.
/// - `#[candidate(skip)]` leaves the field out of the member table.
///
/// Deriving on anything but a struct with named fields, leaving no members,
/// or giving two members the same name fails to compile.
///
/// ``` ignore
/// use genson::{AnyOf, Candidates};
///
/// #[derive(Candidates, Default)]
/// struct Amount {
///     #[candidate(rename = "Int")]
///     whole: i64,
///     #[candidate(rename = "Str")]
///     text: String,
/// }
///
/// let slot = AnyOf::new(Amount { whole: 42, ..Default::default() });
/// assert_eq!(slot.to_string(), "42");
/// ```
#[proc_macro_derive(Candidates, attributes(candidate))]
pub fn candidates(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    candidates_impl(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

/// Derive macro implementing `genson::IsZero` for a struct.
///
/// The struct is zero when every field is zero. Unit structs are always zero.
#[proc_macro_derive(IsZero)]
pub fn is_zero(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    is_zero_impl(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}
