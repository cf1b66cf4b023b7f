//! Secrecy-tagged type vocabulary for the ABC translation pipeline
//!
//! The translator decides, per variable or parameter, whether to emit
//! encrypted (secret-shared) operations or plaintext operations. This crate
//! owns the vocabulary it consults for that decision: the `Secret*` /
//! `NonSecret*` tags and the [`is_secret`] classifier over them.
//!
//! # Fail-closed classification
//!
//! Secrecy is defined by *absence* from the non-secret catalog: any
//! descriptor that does not exactly match a cataloged non-secret tag
//! classifies as secret. The classifier is total - it answers every input
//! with a boolean and never errors.
//!
//! # Example
//!
//! ```
//! use abc_types::{is_secret, TypeDescriptor};
//!
//! // Annotated plaintext parameter
//! assert!(!is_secret(TypeDescriptor::Name("NonSecretInt")));
//!
//! // Unannotated parameter defaults to secret
//! assert!(is_secret(TypeDescriptor::Other));
//! ```

pub mod secrecy;
mod error;

#[cfg(test)]
mod tests;

pub use error::ParseTagError;
pub use secrecy::{
    is_secret, is_secret_name, ScalarKind, Secrecy, SecrecyTag, TypeDescriptor, NON_SECRET,
};
