//! Integration tests for the abc-types crate
//!
//! Tests classification the way the translator drives it: annotations read
//! back as text, live tag values, and missing or foreign annotations.

mod integration;
