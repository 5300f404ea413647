//! Hand-written bindings for the slice of the IEEE 1364 VPI ABI used by this
//! workspace's plugins.
//!
//! The simulator that loads a plugin exports every function declared here, so
//! a plugin built as a cdylib leaves them undefined and the host's loader
//! resolves them at load time. Only the types, constants, and routines the
//! plugins actually touch are bound; this isn't a general-purpose VPI crate.

use std::{
    ffi::{c_double, c_int, c_uint, c_void},
    ptr,
};

pub type PliInt32 = c_int;
pub type PliUInt32 = c_uint;
pub type PliByte8 = std::ffi::c_char;

/// An opaque reference to a simulation object. Owned by the simulator; a
/// plugin only ever passes these back to VPI routines.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Handle(*mut c_void);
impl Handle {
    pub const NULL: Self = Self(ptr::null_mut());

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

/// `s_vpi_systf_data.type`: whether a registration is a system task or a
/// system function.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TfType {
    SysTask = 1,
    SysFunc = 2,
}

/// `s_vpi_systf_data.sysfunctype`: the return type of a system function.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SysFuncType {
    IntFunc = 1,
    RealFunc = 2,
    TimeFunc = 3,
    SizedFunc = 4,
    SizedSignedFunc = 5,
}

/// Object type codes accepted by [`vpi_handle`].
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectType {
    /// The system task/function call currently being serviced by a calltf.
    SysTfCall = 85,
    /// An argument of a task/function call.
    Argument = 89,
}

/// `s_vpi_value.format`: which member of the value union is live.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueFormat {
    BinStr = 1,
    OctStr = 2,
    DecStr = 3,
    HexStr = 4,
    Scalar = 5,
    Int = 6,
    Real = 7,
    String = 8,
    Vector = 9,
    Strength = 10,
    Time = 11,
    ObjType = 12,
    Suppress = 13,
}

/// Delay handling for [`vpi_put_value`].
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DelayMode {
    NoDelay = 1,
    InertialDelay = 2,
    TransportDelay = 3,
    PureTransportDelay = 4,
    ForceFlag = 5,
    ReleaseFlag = 6,
    CancelEvent = 7,
}

/// `s_vpi_time.type`: how a time value is expressed.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeType {
    ScaledRealTime = 1,
    SimTime = 2,
    SuppressTime = 3,
}

/// `s_cb_data.reason`: the simulation event a callback fires on.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CbReason {
    ValueChange = 1,
    Stmt = 2,
    Force = 3,
    Release = 4,
    AtStartOfSimTime = 5,
    ReadWriteSynch = 6,
    ReadOnlySynch = 7,
    NextSimTime = 8,
    AfterDelay = 9,
    EndOfCompile = 10,
    StartOfSimulation = 11,
    EndOfSimulation = 12,
    Error = 13,
}

/// `s_vpi_time`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Time {
    pub kind: TimeType,
    pub high: PliUInt32,
    pub low: PliUInt32,
    pub real: c_double,
}

/// The union inside `s_vpi_value`. The live member is named by the
/// [`ValueFormat`] stored next to it.
#[repr(C)]
#[derive(Clone, Copy)]
pub union ValueUnion {
    pub str: *mut PliByte8,
    pub scalar: PliInt32,
    pub integer: PliInt32,
    pub real: c_double,
    pub time: *mut Time,
    // p_vpi_vecval and p_vpi_strengthval, left opaque.
    pub vector: *mut c_void,
    pub strength: *mut c_void,
    pub misc: *mut PliByte8,
}

/// `s_vpi_value`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Value {
    pub format: ValueFormat,
    pub value: ValueUnion,
}

/// A calltf/compiletf/sizetf routine. The argument is the `user_data` string
/// given at registration.
pub type TfRoutine = unsafe extern "C" fn(user_data: *mut PliByte8) -> PliInt32;

/// `s_vpi_systf_data`: passed to [`vpi_register_systf`] to register a system
/// task or function.
#[repr(C)]
pub struct SystfData {
    pub kind: TfType,
    pub sysfunctype: SysFuncType,
    /// The `$name` the routine is invoked by. Must be NUL-terminated and
    /// outlive the registration.
    pub tfname: *const PliByte8,
    pub calltf: Option<TfRoutine>,
    pub compiletf: Option<TfRoutine>,
    pub sizetf: Option<TfRoutine>,
    pub user_data: *mut PliByte8,
}

/// A simulation-event callback routine.
pub type CbRoutine = unsafe extern "C" fn(cb_data: *mut CbData) -> PliInt32;

/// `s_cb_data`: passed to [`vpi_register_cb`] to hook a simulation event.
#[repr(C)]
pub struct CbData {
    pub reason: CbReason,
    pub cb_rtn: Option<CbRoutine>,
    pub obj: Handle,
    pub time: *mut Time,
    pub value: *mut Value,
    pub index: PliInt32,
    pub user_data: *mut PliByte8,
}

/// An entry of the `vlog_startup_routines` table the host walks at load time.
/// The table ends with a `None`.
pub type StartupRoutine = unsafe extern "C" fn();

extern "C" {
    pub fn vpi_register_systf(systf_data_p: *mut SystfData) -> Handle;
    pub fn vpi_register_cb(cb_data_p: *mut CbData) -> Handle;
    pub fn vpi_handle(kind: ObjectType, reference: Handle) -> Handle;
    pub fn vpi_put_value(
        object: Handle,
        value_p: *mut Value,
        time_p: *mut Time,
        flags: DelayMode,
    ) -> Handle;
    /// Prints through the simulator's own log stream.
    pub fn vpi_printf(format: *const PliByte8, ...) -> PliInt32;
}

#[cfg(test)]
mod tests {
    use {super::*, std::mem::size_of};

    // The simulator compiles these structs from vpi_user.h; the Rust side has
    // to agree byte for byte.
    #[test]
    #[cfg(target_pointer_width = "64")]
    fn struct_layouts_match_the_c_abi() {
        assert_eq!(size_of::<Time>(), 24);
        assert_eq!(size_of::<Value>(), 16);
        assert_eq!(size_of::<SystfData>(), 48);
        assert_eq!(size_of::<CbData>(), 56);
    }

    #[test]
    fn null_handle_is_null() {
        assert!(Handle::NULL.is_null());
    }

    #[test]
    fn int_value_carries_the_stored_integer() {
        let value = Value {
            format: ValueFormat::Int,
            value: ValueUnion { integer: -1 },
        };

        assert_eq!(value.format, ValueFormat::Int);
        assert_eq!(unsafe { value.value.integer }, -1);
    }
}
