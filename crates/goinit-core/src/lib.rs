//! Core library for `go-init` — a Go project scaffolder.
//!
//! Resolves the module identity, lays out the directory tree for the
//! standard or REST API mode, renders the file templates, and drives the
//! external `go` and `git` tooling through the [`toolchain::Toolchain`] seam.

pub mod config;
pub mod error;
pub mod identity;
pub mod layout;
pub mod prompt;
pub mod request;
pub mod scaffold;
pub mod summary;
pub mod templates;
pub mod toolchain;
