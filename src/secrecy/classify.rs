//! Non-secret catalog and the fail-closed classifier
//!
//! Secrecy is defined by absence: [`NON_SECRET`] enumerates the only tags
//! exempt from confidential treatment, and [`is_secret`] answers `true` for
//! everything outside it. The catalog is closed - no registration of new
//! tags exists, and it never contains a `Secret*` tag.

use super::tags::{ScalarKind, Secrecy, SecrecyTag};

/// A type descriptor as it reaches the classifier.
///
/// Type hints cross the translation boundary either as live tag values or
/// as plain text (when the host reads hints back as strings), so the
/// classifier dispatches on the representation rather than inspecting
/// runtime types. Anything that is neither shape is [`Other`].
///
/// [`Other`]: TypeDescriptor::Other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDescriptor<'a> {
    /// A live tag value
    Tag(SecrecyTag),
    /// The textual name of a tag
    Name(&'a str),
    /// Anything else: absent annotation, caller-defined type, a value
    /// where a type was expected
    Other,
}

impl From<SecrecyTag> for TypeDescriptor<'static> {
    fn from(tag: SecrecyTag) -> Self {
        Self::Tag(tag)
    }
}

impl<'a> From<&'a str> for TypeDescriptor<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl From<Option<SecrecyTag>> for TypeDescriptor<'static> {
    fn from(tag: Option<SecrecyTag>) -> Self {
        match tag {
            Some(t) => Self::Tag(t),
            None => Self::Other,
        }
    }
}

/// The closed set of tags exempt from confidential treatment: the bare
/// `NonSecret` marker plus every `NonSecret*` scalar and vector tag.
///
/// Membership in this catalog is the sole source of truth for
/// classification; nothing is inferred from tag names beyond exact matching
/// against the members' canonical names.
pub const NON_SECRET: [SecrecyTag; 13] = [
    SecrecyTag::Generic(Secrecy::NonSecret),
    SecrecyTag::Scalar(Secrecy::NonSecret, ScalarKind::Int),
    SecrecyTag::Scalar(Secrecy::NonSecret, ScalarKind::Float),
    SecrecyTag::Scalar(Secrecy::NonSecret, ScalarKind::Double),
    SecrecyTag::Scalar(Secrecy::NonSecret, ScalarKind::Bool),
    SecrecyTag::Scalar(Secrecy::NonSecret, ScalarKind::String),
    SecrecyTag::Scalar(Secrecy::NonSecret, ScalarKind::Char),
    SecrecyTag::Vector(Secrecy::NonSecret, ScalarKind::Int),
    SecrecyTag::Vector(Secrecy::NonSecret, ScalarKind::Float),
    SecrecyTag::Vector(Secrecy::NonSecret, ScalarKind::Double),
    SecrecyTag::Vector(Secrecy::NonSecret, ScalarKind::Bool),
    SecrecyTag::Vector(Secrecy::NonSecret, ScalarKind::String),
    SecrecyTag::Vector(Secrecy::NonSecret, ScalarKind::Char),
];

/// Decide whether values described by `descriptor` must be treated as
/// secret.
///
/// Total and pure: every input gets a definite boolean, and any descriptor
/// that cannot be positively matched against the non-secret catalog
/// classifies as secret. No allocation, no panics.
pub fn is_secret(descriptor: TypeDescriptor<'_>) -> bool {
    match descriptor {
        // Case 1: textual name, exact match against canonical catalog names
        TypeDescriptor::Name(s) => !NON_SECRET.iter().any(|t| t.name() == s),
        // Case 2: live tag value, compare against catalog members
        TypeDescriptor::Tag(t) => !NON_SECRET.contains(&t),
        // Case 3: everything else is secret
        TypeDescriptor::Other => true,
    }
}

/// Classify a textual tag name directly.
pub fn is_secret_name(name: &str) -> bool {
    is_secret(TypeDescriptor::Name(name))
}

impl SecrecyTag {
    /// Classify this tag by catalog membership.
    pub fn is_secret(self) -> bool {
        is_secret(TypeDescriptor::Tag(self))
    }
}
