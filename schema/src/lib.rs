//! Structural descriptors for parsed entity schemas.
//!
//! A schema document declares one or more entities, each introduced by a
//! `[namespace.Name]` header and followed by field lines:
//!
//! ```text
//! [budget.Vendor]
//! name = String
//! link = String?
//! ```
//!
//! The compiler turns each entity block into an [`Entity`] holding its
//! [`Field`]s in source order. These values are build-time artifacts: they
//! are created fresh from each schema file during a generation pass and are
//! never mutated afterwards.

pub mod types;

pub use types::*;
