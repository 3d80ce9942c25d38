use crate::ports::LoggerPort;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

const PREFIX: &str = "[stylesync]";

/// stdout/stderr logger with `console.time`-style labelled timers.
#[derive(Debug, Default)]
pub struct ConsoleLogger {
    timers: Mutex<HashMap<String, Instant>>,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("{PREFIX} {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{PREFIX} error: {message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("{PREFIX} warning: {message}");
    }

    fn time(&self, label: &str) {
        if let Ok(mut timers) = self.timers.lock() {
            timers.insert(label.to_string(), Instant::now());
        }
    }

    fn time_end(&self, label: &str) {
        let started = self
            .timers
            .lock()
            .ok()
            .and_then(|mut timers| timers.remove(label));
        match started {
            Some(started) => println!(
                "{PREFIX} {label}: {:.3}ms",
                started.elapsed().as_secs_f64() * 1000.0
            ),
            None => eprintln!("{PREFIX} warning: no timer named '{label}'"),
        }
    }
}
