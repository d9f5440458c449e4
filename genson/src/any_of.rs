use std::{any::type_name, fmt};

use log::{debug, trace};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{
    candidates::{members, Candidates, Member},
    error::{GensonError, GensonResult, MemberFailure, NoCandidateMatched},
    is_zero::IsZero,
};

/// A field that holds exactly one of the members of `T` on the wire.
///
/// `payload` keeps one storage slot per candidate shape and `selected` names
/// the one that counts. Decoding tries the members of `T` in declaration order
/// and selects the first that accepts the input. Encoding emits the selected
/// member, or the first non-empty member when nothing is selected, or `null`.
///
/// Parent types should mark the field `#[serde(default)]` so a missing key
/// leaves the slot unselected:
///
/// ``` ignore
/// #[derive(Serialize, Deserialize)]
/// struct Response {
///     #[serde(default)]
///     value: AnyOf<IdOrName>,
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnyOf<T> {
    /// Name of the member that is encoded, set by [`AnyOf::decode`] or the caller.
    pub selected: Option<String>,
    /// One storage slot per candidate member.
    pub payload: T,
}

impl<T> AnyOf<T> {
    pub fn new(payload: T) -> Self {
        Self {
            selected: None,
            payload,
        }
    }

    /// The selected member, if any. An empty name counts as no selection.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref().filter(|name| !name.is_empty())
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<T: Default> AnyOf<T> {
    /// Drops the selection and every member value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<T: Candidates> AnyOf<T> {
    /// Selects `name` after checking it is a member of `T`.
    pub fn select(&mut self, name: &str) -> GensonResult<()> {
        let members = members::<T>()?;

        if !members.iter().any(|member| member.name == name) {
            return Err(GensonError::UnknownMember {
                record: type_name::<T>(),
                member: name.to_owned(),
            });
        }

        self.selected = Some(name.to_owned());
        Ok(())
    }

    /// Encodes the active member, or `null` when no member produced output.
    ///
    /// An explicit selection is final: if it names no member, or its member
    /// fails to serialize, the result is `null` and no other member is tried.
    pub fn encode(&self) -> GensonResult<Value> {
        let members = members::<T>()?;

        let encoded = match self.selected() {
            Some(name) => self.encode_selected(members, name),
            None => self.encode_first_set(members),
        };

        Ok(encoded.unwrap_or(Value::Null))
    }

    pub fn encode_json(&self) -> GensonResult<Vec<u8>> {
        let value = self.encode()?;
        Ok(serde_json::to_vec(&value)?)
    }

    fn encode_selected(&self, members: &[Member<T>], name: &str) -> Option<Value> {
        let Some(member) = members.iter().find(|member| member.name == name) else {
            debug!("`{name}` is not a member of `{}`, encoding null", type_name::<T>());
            return None;
        };

        match (member.encode)(&self.payload) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(
                    "selected member `{name}` of `{}` failed to serialize, encoding null: {err}",
                    type_name::<T>()
                );
                None
            }
        }
    }

    fn encode_first_set(&self, members: &[Member<T>]) -> Option<Value> {
        for member in members {
            if (member.is_zero)(&self.payload) {
                trace!("skipping empty member `{}`", member.name);
                continue;
            }

            match (member.encode)(&self.payload) {
                Ok(value) => return Some(value),
                Err(err) => trace!("skipping member `{}`: {err}", member.name),
            }
        }

        debug!("no member of `{}` is set, encoding null", type_name::<T>());
        None
    }

    /// Decodes `value` into the first member of `T` that accepts it and selects that member.
    ///
    /// Members are tried in declaration order and each attempt may overwrite
    /// that member's storage; only the selected member is meaningful afterwards.
    /// A `null` no member accepts leaves the slot unselected. Any other input
    /// no member accepts fails with every member's reason, keeping the
    /// previous selection.
    pub fn decode(&mut self, value: &Value) -> GensonResult<()> {
        let members = members::<T>()?;
        let mut failures = Vec::with_capacity(members.len());

        for member in members {
            match (member.decode)(&mut self.payload, value) {
                Ok(()) => {
                    trace!("decoded into member `{}`", member.name);
                    self.selected = Some(member.name.to_owned());
                    return Ok(());
                }
                Err(err) => {
                    trace!("member `{}` rejected input: {err}", member.name);
                    failures.push(MemberFailure::new(member.name, err));
                }
            }
        }

        if value.is_null() {
            self.selected = None;
            return Ok(());
        }

        let err = NoCandidateMatched::new(type_name::<T>(), failures);
        debug!("{err}");
        Err(err.into())
    }

    pub fn decode_json(&mut self, data: &[u8]) -> GensonResult<()> {
        members::<T>()?;
        let value: Value = serde_json::from_slice(data)?;
        self.decode(&value)
    }
}

impl<T: Candidates> Serialize for AnyOf<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error;

        self.encode().map_err(S::Error::custom)?.serialize(serializer)
    }
}

/// Buffers a single value, whatever the input format, and decodes it with
/// [`AnyOf::decode`] into a fresh slot.
impl<'de, T> Deserialize<'de> for AnyOf<T>
where
    T: Candidates + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let value = Value::deserialize(deserializer)?;
        let mut slot = Self::default();
        slot.decode(&value).map_err(D::Error::custom)?;

        Ok(slot)
    }
}

impl<T: Candidates> fmt::Display for AnyOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encode() {
            Ok(json) => write!(f, "{json}"),
            Err(e) => write!(f, "Error serializing {}: {}", type_name::<Self>(), e),
        }
    }
}

impl<T: IsZero> IsZero for AnyOf<T> {
    fn is_zero(&self) -> bool {
        self.selected().is_none() && self.payload.is_zero()
    }
}
