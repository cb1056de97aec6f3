//! Skeleton installer library.
//!
//! This crate implements the one-time interactive installer that
//! personalizes the middleware package skeleton: it collects namespaces,
//! package name, and author details from the operator, rewrites the
//! `composer.json` manifest, and replaces the namespace declaration at
//! the top of every file directly under `src/` and `tests/`. It is used
//! by the `skeleton-installer` binary and can be driven programmatically
//! for testing.
//!
//! # Modules
//!
//! - [`answers`] - The immutable answer set and its derived values
//! - [`cli`] - Command-line argument definitions
//! - [`collect`] - Questionnaire, summary, and confirmation loop
//! - [`console`] - Terminal prompt and narration primitives
//! - [`error`] - Semantic error types
//! - [`install`] - Flow orchestration and outcomes
//! - [`manifest`] - Manifest loading, mutation, and storage
//! - [`rewrite`] - Per-directory namespace rewrite with outcome reports
//! - [`syntax`] - Injected parser/serializer capability

pub mod answers;
pub mod cli;
pub mod collect;
pub mod console;
pub mod error;
pub mod install;
pub mod manifest;
pub mod rewrite;
pub mod syntax;
