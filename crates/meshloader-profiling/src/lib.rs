pub use puffin;

/// Turns collection of profiling scopes on or off. Scopes are off until this is called.
pub fn set_enabled(enabled: bool) {
    puffin::set_scopes_on(enabled);
}

pub fn is_enabled() -> bool {
    puffin::are_scopes_on()
}

/// Closes the current profiler frame, making all scopes recorded so far available to sinks.
pub fn finish_frame() {
    if is_enabled() {
        puffin::GlobalProfiler::lock().new_frame();
    }
}

#[macro_export]
macro_rules! profile_function {
    () => {
        $crate::puffin::profile_function!();
    };
    ($data:expr) => {
        $crate::puffin::profile_function!($data);
    };
}
