//! A VPI plugin that gives simulated hardware designs raw keyboard input.
//!
//! When a simulator loads this library it walks `vlog_startup_routines`,
//! which registers the `$read_char` system function plus start- and
//! end-of-simulation callbacks. While simulation runs the terminal is in raw
//! (non-canonical, non-echoing) mode and `$read_char` hands pending
//! keystrokes to the design one byte at a time, returning -1 when nothing
//! has been typed. The terminal is put back in its original mode when
//! simulation ends.

pub mod console;
pub mod session;

// The registration glue calls host-provided vpi_* symbols, which only
// resolve inside a simulator process. Test binaries have no host, so the
// glue is compiled out of test builds.
#[cfg(not(test))]
mod registration;
#[cfg(not(test))]
pub use registration::*;
