//! Domain layer - Pure computational logic
//!
//! This module contains pure, stateless transform functions without I/O
//! dependencies. Each submodule is an independent leaf; none calls
//! another.

pub mod family;
pub mod letters;
pub mod sequence;
