//! Stack growth guard for recursive copying.
//!
//! Tree depth follows source nesting, so adversarial input could exhaust a
//! fixed thread stack. Each recursive step runs inside `stacker::maybe_grow`,
//! which switches to a freshly allocated segment when the red zone is hit.
//! WASM manages its own stack and calls through directly.

use crate::StackConfig;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(config: StackConfig, f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(config.red_zone, config.growth, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(config: StackConfig, f: impl FnOnce() -> R) -> R {
    let _ = config;
    f()
}
