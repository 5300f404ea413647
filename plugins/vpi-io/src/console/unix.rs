use {
    super::ConsoleTrait,
    libc::termios as Termios,
    std::{
        io::stdin,
        mem::MaybeUninit,
        os::fd::{AsRawFd, RawFd},
    },
};

/// Console control through termios on the simulator's stdin.
pub struct Console {
    /// The termios from before raw mode was enabled, so the terminal can be
    /// reset to its original settings afterwards. `None` until the first
    /// enable, and again after every restore.
    original_termios: Option<Termios>,
    /// The file descriptor for stdin.
    stdin: RawFd,
}

impl Default for Console {
    fn default() -> Self {
        Self {
            original_termios: None,
            stdin: stdin().as_raw_fd(),
        }
    }
}

impl ConsoleTrait for Console {
    fn set_raw_mode(&mut self, enabled: bool) {
        if enabled {
            let mut termios = MaybeUninit::uninit();
            let res = unsafe { libc::tcgetattr(self.stdin, termios.as_mut_ptr()) };
            if res != 0 {
                log::warn!("vpi-io: tcgetattr failed; leaving the terminal untouched");
                return;
            }
            let mut termios = unsafe { termios.assume_init() };

            self.original_termios = Some(termios);

            termios.c_lflag &= !(libc::ICANON | libc::ECHO);
            let res = unsafe { libc::tcsetattr(self.stdin, libc::TCSANOW, &termios) };
            if res != 0 {
                log::warn!("vpi-io: tcsetattr failed to enable raw mode");
                self.original_termios = None;
            }
        } else if let Some(termios) = self.original_termios.take() {
            let res = unsafe { libc::tcsetattr(self.stdin, libc::TCSANOW, &termios) };
            if res != 0 {
                log::warn!("vpi-io: tcsetattr failed to restore the terminal");
            }
        }
    }

    fn poll_byte(&mut self) -> Option<u8> {
        let mut pending: libc::c_int = 0;
        let res = unsafe { libc::ioctl(self.stdin, libc::FIONREAD, &mut pending) };
        if res != 0 {
            log::warn!("vpi-io: FIONREAD ioctl on stdin failed");
            return None;
        }
        if pending <= 0 {
            return None;
        }

        // A byte is waiting, so this read returns immediately.
        let mut byte = 0u8;
        let read = unsafe { libc::read(self.stdin, (&mut byte as *mut u8).cast(), 1) };
        (read == 1).then_some(byte)
    }
}
