//! Registration of the plugin's capabilities with the VPI host.

use {
    crate::{
        console::Console,
        session::Session,
    },
    std::{cell::RefCell, ptr},
    vpi_sys::{
        vpi_handle, vpi_put_value, vpi_register_cb, vpi_register_systf, CbData, CbReason,
        DelayMode, Handle, ObjectType, PliByte8, PliInt32, StartupRoutine, SysFuncType,
        SystfData, TfType, Value, ValueFormat, ValueUnion,
    },
};

thread_local! {
    // The host invokes startup routines and callbacks sequentially on the
    // simulation thread, so the session lives in a thread-local.
    static SESSION: RefCell<Option<Session<Console>>> = const { RefCell::new(None) };
}

fn with_session<R>(f: impl FnOnce(&mut Session<Console>) -> R) -> R {
    SESSION.with(|session| {
        let mut session = session.borrow_mut();
        f(session.get_or_insert_with(|| Session::new(Console::default())))
    })
}

/// calltf for `$read_char`: writes the pending byte, or -1, into the call's
/// return value.
extern "C" fn read_char_calltf(_user_data: *mut PliByte8) -> PliInt32 {
    let call = unsafe { vpi_handle(ObjectType::SysTfCall, Handle::NULL) };
    if call.is_null() {
        log::warn!("vpi-io: $read_char calltf could not get its call handle");
        return 0;
    }

    let mut value = Value {
        format: ValueFormat::Int,
        value: ValueUnion {
            integer: with_session(|session| session.poll_key()),
        },
    };

    unsafe {
        vpi_put_value(call, &mut value, ptr::null_mut(), DelayMode::NoDelay);
    }

    0
}

extern "C" fn on_start_calltf(_cb_data: *mut CbData) -> PliInt32 {
    with_session(|session| session.enter_raw());
    0
}

extern "C" fn on_end_calltf(_cb_data: *mut CbData) -> PliInt32 {
    with_session(|session| session.restore());
    0
}

/// Registers `$read_char` as an integer system function with no arguments.
///
/// This is the first startup routine the host runs, so the log backend is
/// initialized here as well (`RUST_LOG` selects plugin diagnostics).
pub extern "C" fn register_read_char() {
    let _ = env_logger::try_init();

    let mut data = SystfData {
        kind: TfType::SysFunc,
        sysfunctype: SysFuncType::IntFunc,
        tfname: c"$read_char".as_ptr(),
        calltf: Some(read_char_calltf as _),
        compiletf: None,
        sizetf: None,
        user_data: ptr::null_mut(),
    };

    unsafe {
        vpi_register_systf(&mut data);
    }

    log::debug!("vpi-io: registered $read_char");
}

/// Registers the start-of-simulation callback that puts the terminal in raw
/// mode.
pub extern "C" fn register_on_start() {
    let mut cb = CbData {
        reason: CbReason::StartOfSimulation,
        cb_rtn: Some(on_start_calltf as _),
        obj: Handle::NULL,
        time: ptr::null_mut(),
        value: ptr::null_mut(),
        index: 0,
        user_data: ptr::null_mut(),
    };

    unsafe {
        vpi_register_cb(&mut cb);
    }

    log::debug!("vpi-io: registered start-of-simulation callback");
}

/// Registers the end-of-simulation callback that restores the terminal.
pub extern "C" fn register_on_end() {
    let mut cb = CbData {
        reason: CbReason::EndOfSimulation,
        cb_rtn: Some(on_end_calltf as _),
        obj: Handle::NULL,
        time: ptr::null_mut(),
        value: ptr::null_mut(),
        index: 0,
        user_data: ptr::null_mut(),
    };

    unsafe {
        vpi_register_cb(&mut cb);
    }

    log::debug!("vpi-io: registered end-of-simulation callback");
}

/// The table the host walks at load time, calling each routine until the
/// terminating null entry.
#[no_mangle]
#[allow(non_upper_case_globals)]
pub static vlog_startup_routines: [Option<StartupRoutine>; 4] = [
    Some(register_read_char as StartupRoutine),
    Some(register_on_start as StartupRoutine),
    Some(register_on_end as StartupRoutine),
    None,
];
