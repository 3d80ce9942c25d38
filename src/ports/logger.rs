/// Logging sink for the messaging layer.
///
/// Broadcast and icon work is fire-and-forget, so host failures end up here
/// rather than in a return value. Implementations write to the browser console
/// on wasm and to stdout/stderr natively.
pub trait LoggerPort {
    fn log(&self, message: &str);

    fn error(&self, message: &str);

    /// Recoverable host failures: closed tabs, rejected badge calls.
    fn warn(&self, message: &str);

    /// Start a labelled timer, as `console.time` does.
    fn time(&self, label: &str);

    /// Stop the timer started under `label` and log the elapsed time.
    fn time_end(&self, label: &str);
}
