/// Ports module - the interfaces (traits) between the messaging domain and the host.
///
/// Every browser API and page-global collaborator the domain touches sits behind
/// one of these traits, so the same logic runs against `chrome.*` in the browser
/// and against the in-memory host natively.

pub mod action;
pub mod delivery;
pub mod logger;
pub mod prefs;
pub mod runtime;
pub mod spawner;
pub mod styles;
pub mod tabs;
pub mod windows;

pub use action::{ActionPort, IconSet};
pub use delivery::{ListenerKind, LocalDeliveryPort};
pub use logger::LoggerPort;
pub use prefs::PrefsPort;
pub use runtime::RuntimePort;
pub use spawner::{SpawnerPort, Task};
pub use styles::StyleStorePort;
pub use tabs::TabsPort;
pub use windows::WindowsPort;
