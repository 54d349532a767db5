//! Use-case layer above the command and repository modules.
//!
//! # Responsibility
//! - Drive one input line through parse, execute and persist.
//! - Keep front ends decoupled from storage details.

pub mod logic;
