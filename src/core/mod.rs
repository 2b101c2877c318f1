//! Core library components.
//!
//! Profile storage, credential encryption, import/export, and the pure views
//! and handoff helpers the CLI and other surfaces build on.

pub mod cipher;
pub mod config;
pub mod console;
pub mod constants;
pub mod document;
pub mod domain;
pub mod encoding;
pub mod message;
pub mod session;
pub mod store;
pub mod tokenize;
pub mod transfer;
pub mod types;
pub mod validation;
pub mod vault;
pub mod view;
