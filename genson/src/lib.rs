//! Encode and decode a single JSON field into one of several candidate shapes.
//!
//! Some APIs put a number in a field one time and a string or an object the
//! next, with nothing on the wire saying which. [`AnyOf`] wraps a record whose
//! members are the possible shapes and sniffs its way to the right one:
//! decoding tries the members in declaration order, encoding emits the
//! selected member, the first non-empty one, or `null`.
//!
//! Records implement [`Candidates`], normally through `#[derive(Candidates)]`
//! (enabled by the default `derive` feature).

extern crate self as genson;

mod any_of;
mod candidates;
pub mod error;
mod is_zero;

pub use any_of::AnyOf;
pub use candidates::{member_names, Candidates, Member};
pub use error::{DefinitionError, GensonError, GensonResult, MemberFailure, NoCandidateMatched};
#[cfg(feature = "derive")]
pub use genson_macros::{Candidates, IsZero};
pub use is_zero::IsZero;

/// Items used by the code `#[derive(Candidates)]` expands to.
#[doc(hidden)]
pub mod __private {
    use serde::Deserialize;
    pub use serde::{de::DeserializeOwned, Serialize};
    pub use serde_json::Value;

    pub fn encode_member<F>(field: &F) -> serde_json::Result<Value>
    where
        F: Serialize + ?Sized,
    {
        serde_json::to_value(field)
    }

    pub fn decode_member<F>(field: &mut F, value: &Value) -> serde_json::Result<()>
    where
        F: DeserializeOwned,
    {
        *field = <F as Deserialize>::deserialize(value)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use std::collections::HashMap;

    use crate::{
        Candidates, IsZero, Member,
        __private::{decode_member, encode_member, Value},
    };

    pub fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// `Int` then `Str`, the two-member record used across the unit tests.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Pair {
        pub int: i64,
        pub str: String,
    }

    impl Candidates for Pair {
        const MEMBERS: &'static [Member<Self>] = &[
            Member {
                name: "Int",
                is_zero: |record: &Self| record.int.is_zero(),
                encode: |record: &Self| encode_member(&record.int),
                decode: |record: &mut Self, value: &Value| decode_member(&mut record.int, value),
            },
            Member {
                name: "Str",
                is_zero: |record: &Self| record.str.is_zero(),
                encode: |record: &Self| encode_member(&record.str),
                decode: |record: &mut Self, value: &Value| decode_member(&mut record.str, value),
            },
        ];
    }

    impl IsZero for Pair {
        fn is_zero(&self) -> bool {
            self.int.is_zero() && self.str.is_zero()
        }
    }

    /// First member never serializes: JSON object keys must be strings.
    #[derive(Debug, Default)]
    pub struct Fallible {
        pub map: HashMap<Vec<u8>, u8>,
        pub text: String,
    }

    impl Candidates for Fallible {
        const MEMBERS: &'static [Member<Self>] = &[
            Member {
                name: "map",
                is_zero: |record: &Self| record.map.is_zero(),
                encode: |record: &Self| encode_member(&record.map),
                decode: |record: &mut Self, value: &Value| decode_member(&mut record.map, value),
            },
            Member {
                name: "text",
                is_zero: |record: &Self| record.text.is_zero(),
                encode: |record: &Self| encode_member(&record.text),
                decode: |record: &mut Self, value: &Value| decode_member(&mut record.text, value),
            },
        ];
    }

    #[derive(Debug, Default)]
    pub struct Bare;

    impl Candidates for Bare {
        const MEMBERS: &'static [Member<Self>] = &[];
    }
}
