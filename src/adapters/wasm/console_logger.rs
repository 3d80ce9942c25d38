use crate::ports::LoggerPort;
use wasm_bindgen::prelude::*;

const PREFIX: &str = "[stylesync]";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(prefix: &str, message: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(prefix: &str, message: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(prefix: &str, message: &str);

    #[wasm_bindgen(js_namespace = console, js_name = time)]
    fn console_time(label: &str);

    #[wasm_bindgen(js_namespace = console, js_name = timeEnd)]
    fn console_time_end(label: &str);
}

/// Browser console logger. Timer labels share the prefix so they do not
/// clash with the page's own `console.time` calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

fn timer_label(label: &str) -> String {
    format!("{PREFIX} {label}")
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        console_log(PREFIX, message);
    }

    fn error(&self, message: &str) {
        console_error(PREFIX, message);
    }

    fn warn(&self, message: &str) {
        console_warn(PREFIX, message);
    }

    fn time(&self, label: &str) {
        console_time(&timer_label(label));
    }

    fn time_end(&self, label: &str) {
        console_time_end(&timer_label(label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_timer_round_trip() {
        let logger = ConsoleLogger::new();
        logger.time("refreshAllTabs");
        logger.log("refreshing");
        logger.time_end("refreshAllTabs");
        assert_eq!(timer_label("x"), "[stylesync] x");
    }
}
