//! Filesystem resources: destination probing and link/copy/remove primitives.
pub mod fs;
pub mod probe;
