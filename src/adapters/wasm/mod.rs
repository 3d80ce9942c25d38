/// WASM adapters - implementations using the extension APIs of the browser.

pub mod chrome;
pub mod console_logger;
pub mod converters;
pub mod error_conversions;
pub mod page_globals;
pub mod spawner;

pub use chrome::ChromeHost;
pub use console_logger::ConsoleLogger;
pub use page_globals::{PageListener, PagePrefs, PageStyleStore};
pub use spawner::EventLoopSpawner;

use crate::domain::messaging::error::MessagingError;
use crate::platform::Platform;
use std::rc::Rc;

/// Platform wired to `chrome.*` and the page globals of the calling context.
pub fn browser_platform() -> Result<Platform, MessagingError> {
    let mut builder = Platform::builder()
        .host(Rc::new(ChromeHost::new()))
        .styles(Rc::new(PageStyleStore::new()))
        .prefs(Rc::new(PagePrefs::new()))
        .spawner(Rc::new(EventLoopSpawner::new()));

    if let Some(listener) = PageListener::detect() {
        builder = builder.local_delivery(Rc::new(listener));
    }

    builder.build()
}
