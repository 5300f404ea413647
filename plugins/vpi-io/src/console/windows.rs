use {super::ConsoleTrait, std::mem::MaybeUninit};

#[path = "windows/ffi.rs"]
mod ffi;
use ffi::*;

/// Console control through the Windows console APIs on the simulator's stdin.
pub struct Console {
    /// The console mode from before raw mode was enabled, so the console can
    /// be reset to its original mode afterwards. `None` until the first
    /// enable, and again after every restore.
    original_mode: Option<ConsoleModes>,
    /// A handle for stdin.
    stdin_handle: Handle,
}

impl Default for Console {
    fn default() -> Self {
        Self {
            original_mode: None,
            stdin_handle: unsafe { GetStdHandle(StdHandle::Input) },
        }
    }
}

impl ConsoleTrait for Console {
    fn set_raw_mode(&mut self, enabled: bool) {
        if enabled {
            let mut mode = MaybeUninit::uninit();
            let res = unsafe { GetConsoleMode(self.stdin_handle, mode.as_mut_ptr()) };
            if !res.as_bool() {
                log::warn!(
                    "vpi-io: GetConsoleMode failed; leaving the console untouched. Error code: {}",
                    unsafe { GetLastError() }
                );
                return;
            }
            let mode = unsafe { mode.assume_init() };

            self.original_mode = Some(mode);

            let raw_mode = mode & !(LINE_INPUT | ECHO_INPUT);
            let res = unsafe { SetConsoleMode(self.stdin_handle, raw_mode) };
            if !res.as_bool() {
                log::warn!(
                    "vpi-io: SetConsoleMode failed to enable raw mode. Error code: {}",
                    unsafe { GetLastError() }
                );
                self.original_mode = None;
            }
        } else if let Some(mode) = self.original_mode.take() {
            let res = unsafe { SetConsoleMode(self.stdin_handle, mode) };
            if !res.as_bool() {
                log::warn!(
                    "vpi-io: SetConsoleMode failed to restore the console. Error code: {}",
                    unsafe { GetLastError() }
                );
            }
        }
    }

    fn poll_byte(&mut self) -> Option<u8> {
        // Drain queued records one at a time until a key-down carrying a
        // byte-sized character shows up or the queue runs dry. Bounded by
        // the queue length, so this never waits.
        loop {
            let mut num_events = 0u32;
            let res =
                unsafe { GetNumberOfConsoleInputEvents(self.stdin_handle, &mut num_events) };
            if !res.as_bool() {
                log::warn!(
                    "vpi-io: GetNumberOfConsoleInputEvents failed. Error code: {}",
                    unsafe { GetLastError() }
                );
                return None;
            }
            if num_events == 0 {
                return None;
            }

            let mut record = MaybeUninit::uninit();
            let mut records_read = 0u32;
            let res = unsafe {
                ReadConsoleInputW(self.stdin_handle, record.as_mut_ptr(), 1, &mut records_read)
            };
            if !res.as_bool() || records_read == 0 {
                log::warn!("vpi-io: ReadConsoleInput failed. Error code: {}", unsafe {
                    GetLastError()
                });
                return None;
            }
            let record = unsafe { record.assume_init() };

            if record.event_type != EventType::Key {
                continue;
            }

            let key = unsafe { record.event.key_event };
            if !key.key_down.as_bool() {
                continue;
            }

            let char = unsafe { key.char.unicode_char };
            if (1..=255).contains(&char) {
                return Some(char as u8);
            }
        }
    }
}
