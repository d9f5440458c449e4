use std::fmt;

use thiserror::Error;

pub type GensonResult<T> = Result<T, GensonError>;

#[derive(Debug, Error)]
pub enum GensonError {
    #[error("invalid candidate record: {0}")]
    Definition(#[from] DefinitionError),
    #[error(transparent)]
    NoCandidateMatched(#[from] NoCandidateMatched),
    #[error("`{member}` is not a member of `{record}`")]
    UnknownMember { record: &'static str, member: String },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// The member table of a record cannot be used to pick a shape.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("`{record}` declares no members")]
    NoMembers { record: &'static str },
    #[error("`{record}` declares member `{member}` more than once")]
    DuplicateMember { record: &'static str, member: &'static str },
}

/// Returned when decoding exhausted every member of a record.
///
/// Holds one failure per member, in declaration order.
#[derive(Debug, Error)]
pub struct NoCandidateMatched {
    record: &'static str,
    failures: Vec<MemberFailure>,
}

impl NoCandidateMatched {
    pub(crate) fn new(record: &'static str, failures: Vec<MemberFailure>) -> Self {
        Self { record, failures }
    }

    pub fn record(&self) -> &'static str {
        self.record
    }

    pub fn failures(&self) -> &[MemberFailure] {
        &self.failures
    }
}

impl fmt::Display for NoCandidateMatched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut failures = self.failures.iter();

        match failures.next() {
            Some(first) => write!(f, "{first}")?,
            None => return write!(f, "no member of `{}` accepted the input", self.record),
        }

        for failure in failures {
            write!(f, "\n{failure}")?;
        }

        Ok(())
    }
}

/// Why a single member rejected the input.
#[derive(Debug, Error)]
#[error("error decoding into {member}: {source}")]
pub struct MemberFailure {
    member: &'static str,
    #[source]
    source: serde_json::Error,
}

impl MemberFailure {
    pub(crate) fn new(member: &'static str, source: serde_json::Error) -> Self {
        Self { member, source }
    }

    pub fn member(&self) -> &'static str {
        self.member
    }
}
