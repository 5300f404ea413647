//! The two-state terminal session driven by the simulation lifecycle.

use crate::console::ConsoleTrait;

/// What `$read_char` returns when no byte is pending.
pub const NO_INPUT: i32 = -1;

/// The process-wide terminal mode the session believes the console is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Line-buffered, echoing input. Where the terminal starts and where it
    /// must be back by process exit.
    Normal,
    /// Unbuffered, unechoed input, active while simulation runs.
    Raw,
}

/// Owns a [`ConsoleTrait`] implementation and the `Normal`/`Raw` state
/// machine around it. The only transitions are `Normal -> Raw` at start of
/// simulation and `Raw -> Normal` at end of simulation; polling never
/// transitions.
pub struct Session<C> {
    console: C,
    mode: Mode,
}

impl<C: ConsoleTrait> Session<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            mode: Mode::Normal,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// `Normal -> Raw`. Runs at start of simulation; entering twice is a
    /// no-op.
    pub fn enter_raw(&mut self) {
        if self.mode == Mode::Raw {
            return;
        }

        self.console.set_raw_mode(true);
        self.mode = Mode::Raw;
    }

    /// `Raw -> Normal`. Runs at end of simulation; harmless without a prior
    /// [`Session::enter_raw`].
    pub fn restore(&mut self) {
        if self.mode == Mode::Normal {
            return;
        }

        self.console.set_raw_mode(false);
        self.mode = Mode::Normal;
    }

    /// The value for `$read_char`: a pending byte (0-255), or [`NO_INPUT`].
    /// Never blocks.
    pub fn poll_key(&mut self) -> i32 {
        match self.console.poll_byte() {
            Some(byte) => i32::from(byte),
            None => NO_INPUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::collections::VecDeque};

    /// A scripted console standing in for the real terminal.
    #[derive(Default)]
    struct FakeConsole {
        pending: VecDeque<u8>,
        raw_enables: u32,
        raw_disables: u32,
    }

    impl ConsoleTrait for FakeConsole {
        fn set_raw_mode(&mut self, enabled: bool) {
            if enabled {
                self.raw_enables += 1;
            } else {
                self.raw_disables += 1;
            }
        }

        fn poll_byte(&mut self) -> Option<u8> {
            self.pending.pop_front()
        }
    }

    fn session_with_pending(bytes: &[u8]) -> Session<FakeConsole> {
        Session::new(FakeConsole {
            pending: bytes.iter().copied().collect(),
            ..FakeConsole::default()
        })
    }

    #[test]
    fn poll_with_no_input_returns_the_sentinel() {
        let mut session = session_with_pending(&[]);

        assert_eq!(session.poll_key(), NO_INPUT);
        assert_eq!(session.poll_key(), NO_INPUT);
    }

    #[test]
    fn pending_byte_is_returned_exactly_once() {
        let mut session = session_with_pending(b"x");

        assert_eq!(session.poll_key(), i32::from(b'x'));
        assert_eq!(session.poll_key(), NO_INPUT);
    }

    #[test]
    fn bytes_come_back_in_arrival_order() {
        let mut session = session_with_pending(&[0, b'a', 255]);

        assert_eq!(session.poll_key(), 0);
        assert_eq!(session.poll_key(), i32::from(b'a'));
        assert_eq!(session.poll_key(), 255);
        assert_eq!(session.poll_key(), NO_INPUT);
    }

    #[test]
    fn polling_never_changes_state() {
        let mut session = session_with_pending(b"ab");

        session.poll_key();
        assert_eq!(session.mode(), Mode::Normal);

        session.enter_raw();
        session.poll_key();
        assert_eq!(session.mode(), Mode::Raw);
    }

    #[test]
    fn enter_and_restore_reach_the_console_once_per_transition() {
        let mut session = session_with_pending(&[]);

        session.enter_raw();
        session.enter_raw();
        assert_eq!(session.console.raw_enables, 1);
        assert_eq!(session.mode(), Mode::Raw);

        session.restore();
        session.restore();
        assert_eq!(session.console.raw_disables, 1);
        assert_eq!(session.mode(), Mode::Normal);
    }

    #[test]
    fn restore_without_enter_is_harmless() {
        let mut session = session_with_pending(&[]);

        session.restore();

        assert_eq!(session.mode(), Mode::Normal);
        assert_eq!(session.console.raw_disables, 0);
    }
}
