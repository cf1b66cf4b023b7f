//! Secrecy type system for the translation boundary
//!
//! # Overview
//!
//! This module provides the tag vocabulary and classification predicate the
//! translator consults when lowering a program:
//!
//! - **Tags**: `{Secret, NonSecret} x {Int, Float, Double, Bool, String,
//!   Char}`, each as a scalar and a `Vector` form, plus the two bare markers
//! - **Catalog**: the fixed non-secret subset ([`NON_SECRET`])
//! - **Classifier**: [`is_secret`], a total predicate over type descriptors
//!
//! # Dispatch order
//!
//! A descriptor arrives in one of three shapes, checked in this order:
//!
//! 1. Textual name - exact match against catalog names
//! 2. Tag value - equality against catalog members
//! 3. Anything else - secret
//!
//! The default is secure: a descriptor classifies as non-secret only on an
//! exact catalog match, so absent, malformed, and unknown annotations all
//! resolve to secret without erroring.

mod classify;
mod tags;

pub use classify::{is_secret, is_secret_name, TypeDescriptor, NON_SECRET};
pub use tags::{ScalarKind, Secrecy, SecrecyTag};
