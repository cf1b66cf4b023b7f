//! Error types for the secrecy vocabulary

use thiserror::Error;

/// Error returned by the strict tag parser ([`str::parse`] on
/// [`SecrecyTag`](crate::SecrecyTag)).
///
/// The classifier never produces this: unrecognized descriptors fold into
/// the secret classification instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown secrecy tag: {0:?}")]
pub struct ParseTagError(pub String);
