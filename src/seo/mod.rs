//! Search engine and social preview metadata.

pub mod og;
