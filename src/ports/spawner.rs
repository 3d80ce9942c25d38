use futures::future::LocalBoxFuture;

pub type Task = LocalBoxFuture<'static, ()>;

/// Starts detached work on the host's event loop.
pub trait SpawnerPort {
    fn spawn(&self, task: Task);
}
