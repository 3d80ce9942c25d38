/// Host bindings for the ports: `chrome.*` and page globals on wasm, an
/// in-memory browser everywhere else.

pub mod global_logger;
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use native::ConsoleLogger;
#[cfg(target_arch = "wasm32")]
pub use wasm::ConsoleLogger;

pub use global_logger::logger;
