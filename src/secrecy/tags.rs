//! Secrecy tag definitions
//!
//! The tag vocabulary is `{Secret, NonSecret} x {Int, Float, Double, Bool,
//! String, Char}`, each in a scalar and a `Vector` (sequence-of) form, plus
//! the two bare `Secret` / `NonSecret` markers. Canonical names are the wire
//! format between this crate and the translator: callers annotate variables
//! with either a tag value or its exact name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseTagError;

/// Secrecy axis - 2 variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Secrecy {
    /// Values must be handled under encryption / secret sharing
    Secret = 0,
    /// Values may be processed in plaintext
    NonSecret = 1,
}

impl Secrecy {
    /// Canonical name prefix (`"Secret"` / `"NonSecret"`)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Secret => "Secret",
            Self::NonSecret => "NonSecret",
        }
    }

    /// Check if this is the non-secret axis
    pub const fn is_non_secret(self) -> bool {
        matches!(self, Self::NonSecret)
    }
}

/// Scalar value kinds carried by non-generic tags - 6 variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ScalarKind {
    Int = 0,
    Float = 1,
    Double = 2,
    Bool = 3,
    String = 4,
    Char = 5,
}

impl ScalarKind {
    /// All scalar kinds, in canonical declaration order
    pub const ALL: [Self; 6] = [
        Self::Int,
        Self::Float,
        Self::Double,
        Self::Bool,
        Self::String,
        Self::Char,
    ];

    /// Canonical name segment as it appears inside a tag name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Bool => "Bool",
            Self::String => "String",
            Self::Char => "Char",
        }
    }
}

/// A secrecy tag: a value category crossed with the secrecy and arity axes.
///
/// Tags are immutable, globally defined constants. The full vocabulary is
/// enumerable via [`SecrecyTag::ALL`]; the non-secret subset lives in
/// [`NON_SECRET`](super::NON_SECRET).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecrecyTag {
    /// Bare `Secret` / `NonSecret` marker with no value kind
    Generic(Secrecy),
    /// Scalar of the given kind, e.g. `SecretInt`
    Scalar(Secrecy, ScalarKind),
    /// Sequence of the given kind, e.g. `SecretIntVector`
    Vector(Secrecy, ScalarKind),
}

impl SecrecyTag {
    /// The full 26-tag vocabulary, in canonical declaration order
    pub const ALL: [Self; 26] = [
        Self::Generic(Secrecy::Secret),
        Self::Generic(Secrecy::NonSecret),
        Self::Scalar(Secrecy::Secret, ScalarKind::Int),
        Self::Scalar(Secrecy::Secret, ScalarKind::Float),
        Self::Scalar(Secrecy::Secret, ScalarKind::Double),
        Self::Scalar(Secrecy::Secret, ScalarKind::Bool),
        Self::Scalar(Secrecy::Secret, ScalarKind::String),
        Self::Scalar(Secrecy::Secret, ScalarKind::Char),
        Self::Vector(Secrecy::Secret, ScalarKind::Int),
        Self::Vector(Secrecy::Secret, ScalarKind::Float),
        Self::Vector(Secrecy::Secret, ScalarKind::Double),
        Self::Vector(Secrecy::Secret, ScalarKind::Bool),
        Self::Vector(Secrecy::Secret, ScalarKind::String),
        Self::Vector(Secrecy::Secret, ScalarKind::Char),
        Self::Scalar(Secrecy::NonSecret, ScalarKind::Int),
        Self::Scalar(Secrecy::NonSecret, ScalarKind::Float),
        Self::Scalar(Secrecy::NonSecret, ScalarKind::Double),
        Self::Scalar(Secrecy::NonSecret, ScalarKind::Bool),
        Self::Scalar(Secrecy::NonSecret, ScalarKind::String),
        Self::Scalar(Secrecy::NonSecret, ScalarKind::Char),
        Self::Vector(Secrecy::NonSecret, ScalarKind::Int),
        Self::Vector(Secrecy::NonSecret, ScalarKind::Float),
        Self::Vector(Secrecy::NonSecret, ScalarKind::Double),
        Self::Vector(Secrecy::NonSecret, ScalarKind::Bool),
        Self::Vector(Secrecy::NonSecret, ScalarKind::String),
        Self::Vector(Secrecy::NonSecret, ScalarKind::Char),
    ];

    /// Canonical name, exactly as the translator's type-hint vocabulary
    /// spells it
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generic(Secrecy::Secret) => "Secret",
            Self::Generic(Secrecy::NonSecret) => "NonSecret",
            Self::Scalar(Secrecy::Secret, ScalarKind::Int) => "SecretInt",
            Self::Scalar(Secrecy::Secret, ScalarKind::Float) => "SecretFloat",
            Self::Scalar(Secrecy::Secret, ScalarKind::Double) => "SecretDouble",
            Self::Scalar(Secrecy::Secret, ScalarKind::Bool) => "SecretBool",
            Self::Scalar(Secrecy::Secret, ScalarKind::String) => "SecretString",
            Self::Scalar(Secrecy::Secret, ScalarKind::Char) => "SecretChar",
            Self::Vector(Secrecy::Secret, ScalarKind::Int) => "SecretIntVector",
            Self::Vector(Secrecy::Secret, ScalarKind::Float) => "SecretFloatVector",
            Self::Vector(Secrecy::Secret, ScalarKind::Double) => "SecretDoubleVector",
            Self::Vector(Secrecy::Secret, ScalarKind::Bool) => "SecretBoolVector",
            Self::Vector(Secrecy::Secret, ScalarKind::String) => "SecretStringVector",
            Self::Vector(Secrecy::Secret, ScalarKind::Char) => "SecretCharVector",
            Self::Scalar(Secrecy::NonSecret, ScalarKind::Int) => "NonSecretInt",
            Self::Scalar(Secrecy::NonSecret, ScalarKind::Float) => "NonSecretFloat",
            Self::Scalar(Secrecy::NonSecret, ScalarKind::Double) => "NonSecretDouble",
            Self::Scalar(Secrecy::NonSecret, ScalarKind::Bool) => "NonSecretBool",
            Self::Scalar(Secrecy::NonSecret, ScalarKind::String) => "NonSecretString",
            Self::Scalar(Secrecy::NonSecret, ScalarKind::Char) => "NonSecretChar",
            Self::Vector(Secrecy::NonSecret, ScalarKind::Int) => "NonSecretIntVector",
            Self::Vector(Secrecy::NonSecret, ScalarKind::Float) => "NonSecretFloatVector",
            Self::Vector(Secrecy::NonSecret, ScalarKind::Double) => "NonSecretDoubleVector",
            Self::Vector(Secrecy::NonSecret, ScalarKind::Bool) => "NonSecretBoolVector",
            Self::Vector(Secrecy::NonSecret, ScalarKind::String) => "NonSecretStringVector",
            Self::Vector(Secrecy::NonSecret, ScalarKind::Char) => "NonSecretCharVector",
        }
    }

    /// Parse from a canonical name. Exact match only: no case folding,
    /// trimming, or partial matching.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "Secret" => Some(Self::Generic(Secrecy::Secret)),
            "NonSecret" => Some(Self::Generic(Secrecy::NonSecret)),
            "SecretInt" => Some(Self::Scalar(Secrecy::Secret, ScalarKind::Int)),
            "SecretFloat" => Some(Self::Scalar(Secrecy::Secret, ScalarKind::Float)),
            "SecretDouble" => Some(Self::Scalar(Secrecy::Secret, ScalarKind::Double)),
            "SecretBool" => Some(Self::Scalar(Secrecy::Secret, ScalarKind::Bool)),
            "SecretString" => Some(Self::Scalar(Secrecy::Secret, ScalarKind::String)),
            "SecretChar" => Some(Self::Scalar(Secrecy::Secret, ScalarKind::Char)),
            "SecretIntVector" => Some(Self::Vector(Secrecy::Secret, ScalarKind::Int)),
            "SecretFloatVector" => Some(Self::Vector(Secrecy::Secret, ScalarKind::Float)),
            "SecretDoubleVector" => Some(Self::Vector(Secrecy::Secret, ScalarKind::Double)),
            "SecretBoolVector" => Some(Self::Vector(Secrecy::Secret, ScalarKind::Bool)),
            "SecretStringVector" => Some(Self::Vector(Secrecy::Secret, ScalarKind::String)),
            "SecretCharVector" => Some(Self::Vector(Secrecy::Secret, ScalarKind::Char)),
            "NonSecretInt" => Some(Self::Scalar(Secrecy::NonSecret, ScalarKind::Int)),
            "NonSecretFloat" => Some(Self::Scalar(Secrecy::NonSecret, ScalarKind::Float)),
            "NonSecretDouble" => Some(Self::Scalar(Secrecy::NonSecret, ScalarKind::Double)),
            "NonSecretBool" => Some(Self::Scalar(Secrecy::NonSecret, ScalarKind::Bool)),
            "NonSecretString" => Some(Self::Scalar(Secrecy::NonSecret, ScalarKind::String)),
            "NonSecretChar" => Some(Self::Scalar(Secrecy::NonSecret, ScalarKind::Char)),
            "NonSecretIntVector" => Some(Self::Vector(Secrecy::NonSecret, ScalarKind::Int)),
            "NonSecretFloatVector" => Some(Self::Vector(Secrecy::NonSecret, ScalarKind::Float)),
            "NonSecretDoubleVector" => Some(Self::Vector(Secrecy::NonSecret, ScalarKind::Double)),
            "NonSecretBoolVector" => Some(Self::Vector(Secrecy::NonSecret, ScalarKind::Bool)),
            "NonSecretStringVector" => Some(Self::Vector(Secrecy::NonSecret, ScalarKind::String)),
            "NonSecretCharVector" => Some(Self::Vector(Secrecy::NonSecret, ScalarKind::Char)),
            _ => None,
        }
    }

    /// Secrecy axis of this tag
    pub const fn secrecy(self) -> Secrecy {
        match self {
            Self::Generic(s) | Self::Scalar(s, _) | Self::Vector(s, _) => s,
        }
    }

    /// Scalar kind, if any (the bare markers carry none)
    pub const fn kind(self) -> Option<ScalarKind> {
        match self {
            Self::Generic(_) => None,
            Self::Scalar(_, k) | Self::Vector(_, k) => Some(k),
        }
    }

    /// Check if this is a sequence-of tag
    pub const fn is_vector(self) -> bool {
        matches!(self, Self::Vector(..))
    }
}

impl fmt::Display for SecrecyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SecrecyTag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseTagError(s.to_string()))
    }
}
