//! Tracing wrappers that tag walker events with the `walk` target.

/// Emit a walker debug event.
macro_rules! walk_debug {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "walk", $($arg)*)
    };
}

/// Emit a per-entry walker trace.
macro_rules! walk_trace {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "walk", $($arg)*)
    };
}

/// Emit a walker failure.
macro_rules! walk_error {
    ($($arg:tt)*) => {
        ::tracing::error!(target: "walk", $($arg)*)
    };
}
