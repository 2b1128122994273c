//! Ambience CLI library.
//!
//! This crate provides the commands behind the `ambience` binary: rendering
//! the ambient loop catalog to disk and listing what would be rendered.

pub mod commands;
pub mod output;
