use crate::ports::{SpawnerPort, Task};

/// Runs tasks on the browser's microtask queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventLoopSpawner;

impl EventLoopSpawner {
    pub fn new() -> Self {
        Self
    }
}

impl SpawnerPort for EventLoopSpawner {
    fn spawn(&self, task: Task) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
