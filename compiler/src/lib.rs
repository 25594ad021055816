//! centavo-compiler
//!
//! This crate implements:
//!  1) A splitter + parser for entity schema documents,
//!  2) A schema verifier (duplicate entities, duplicate fields, reserved
//!     names, missing types),
//!  3) Model-source generation (`render_model` / `write_model`),
//!  4) Request-source generation (`render_request` / `write_request`),
//!  5) A generation driver (`generate_all`) for whole input directories,
//!  6) Error types (`SchemaError`).

pub mod compiler;
pub mod driver;
pub mod error;
pub mod gen_model;
pub mod gen_request;
pub mod parser;
pub mod splitter;
pub mod utils;
pub mod verifier;

pub use compiler::compile_document;
pub use driver::{generate_all, GenerateConfig, GenerateReport};
pub use error::SchemaError;
pub use gen_model::{render_model, write_model};
pub use gen_request::{render_request, write_request};
