//! Library surface of the reclink CLI.
//!
//! Only the logging setup lives here so the binary and tests can share it;
//! the commands themselves are private to the binary.

pub mod logging;
