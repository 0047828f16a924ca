//! Domains module containing business logic organized by bounded contexts.
//!
//! The bridge has a single domain: tools backed by the controller API.

pub mod tools;
