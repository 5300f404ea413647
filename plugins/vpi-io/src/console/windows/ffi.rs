use std::ffi::c_void;

/// A stdin console-mode bitset for `GetConsoleMode`/`SetConsoleMode`.
pub type ConsoleModes = u32;

pub const ECHO_INPUT: ConsoleModes = 0x0004;
pub const LINE_INPUT: ConsoleModes = 0x0002;

#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Handle(*mut c_void);

#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Bool(i32);
impl Bool {
    pub fn as_bool(self) -> bool {
        self.0 != 0
    }
}

#[repr(u32)]
pub enum StdHandle {
    Input = -10i32 as u32,
}

#[derive(Clone, Copy)]
#[repr(C)]
pub union UChar {
    pub unicode_char: u16,
    pub ascii_char: u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct Coord {
    pub x: i16,
    pub y: i16,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct KeyEventRecord {
    pub key_down: Bool,
    pub repeat_count: u16,
    pub virtual_key_code: u16,
    pub virtual_scan_code: u16,
    pub char: UChar,
    pub control_key_state: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct MouseEventRecord {
    pub mouse_position: Coord,
    pub button_state: u32,
    pub control_key_state: u32,
    pub event_flags: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct WindowBufferSizeRecord {
    pub size: Coord,
}

/// The event union inside an `INPUT_RECORD`. Only key events are read; the
/// other members keep the union ABI-sized.
#[derive(Clone, Copy)]
#[repr(C)]
pub union Event {
    pub key_event: KeyEventRecord,
    pub mouse_event: MouseEventRecord,
    pub window_buffer_size: WindowBufferSizeRecord,
}

#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventType {
    Focus = 0x0010,
    Key = 0x0001,
    Menu = 0x0008,
    Mouse = 0x0002,
    WindowBufferSize = 0x0004,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct InputRecord {
    pub event_type: EventType,
    pub event: Event,
}

#[link(name = "kernel32")]
extern "C" {
    pub fn GetConsoleMode(hConsoleHandle: Handle, lpMode: *mut ConsoleModes) -> Bool;
    pub fn SetConsoleMode(hConsoleHandle: Handle, dwMode: ConsoleModes) -> Bool;
    pub fn GetLastError() -> u32;
    pub fn GetStdHandle(nStdHandle: StdHandle) -> Handle;
    pub fn GetNumberOfConsoleInputEvents(
        hConsoleInput: Handle,
        lpcNumberOfEvents: *mut u32,
    ) -> Bool;
    pub fn ReadConsoleInputW(
        hConsoleInput: Handle,
        lpBuffer: *mut InputRecord,
        nLength: u32,
        lpNumberOfEventsRead: *mut u32,
    ) -> Bool;
}
