use crate::ports::{SpawnerPort, Task};
use futures::executor::LocalSpawner;
use futures::task::LocalSpawnExt;

/// Tasks run when the owning `LocalPool` is driven.
impl SpawnerPort for LocalSpawner {
    fn spawn(&self, task: Task) {
        if let Err(e) = self.spawn_local(task) {
            crate::adapters::logger().error(&format!("Failed to spawn task: {e}"));
        }
    }
}
