//! Console control the plugin needs from the OS.
//!
//! The capability set is described by [`ConsoleTrait`]. Each platform's
//! implementation is in its own file; [`Console`] is the implementation for
//! the platform being built.

/// Terminal capabilities used by a [`Session`](crate::session::Session).
pub trait ConsoleTrait {
    /// Switch the console between raw (unbuffered, unechoed) input and the
    /// mode it was in before the first enable.
    ///
    /// Enabling captures the current attributes and clears the canonical and
    /// echo flags. Disabling re-applies the captured attributes; disabling
    /// without a prior enable does nothing.
    fn set_raw_mode(&mut self, enabled: bool);

    /// Check for one pending input byte without blocking. Returns `None`
    /// when nothing has been typed.
    fn poll_byte(&mut self) -> Option<u8>;
}

#[cfg(target_family = "unix")]
mod unix;
#[cfg(target_family = "unix")]
pub use unix::Console;

#[cfg(target_family = "windows")]
mod windows;
#[cfg(target_family = "windows")]
pub use windows::Console;
