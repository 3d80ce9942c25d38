use crate::ports::LoggerPort;
use once_cell::sync::Lazy;

#[cfg(target_arch = "wasm32")]
use crate::adapters::wasm::ConsoleLogger;
#[cfg(not(target_arch = "wasm32"))]
use crate::adapters::native::ConsoleLogger;

static LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

/// Logger for code that runs outside a [`Platform`](crate::platform::Platform),
/// such as adapters and detached JS callbacks. Console on wasm, stdio natively.
#[inline]
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}
