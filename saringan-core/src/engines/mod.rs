//! Concrete implementations of the `FilterEngine` trait.
//!
//! `lexicon_engine` runs one literal, case-insensitive search per term. A multi-pattern
//! automaton would satisfy the same trait for much larger lexicons.

pub mod lexicon_engine;
