// saringan/src/lib.rs
//! # Saringan CLI
//!
//! Command-line front end for `saringan-core`: filter text, scan it for blocked terms,
//! and inspect the lexicon.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
