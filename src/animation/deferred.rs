/// Handle to a registered one-shot task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// Boxed one-shot task.
pub type Task<T> = Box<dyn FnOnce(&mut T)>;

/// One-shot tasks that run once when an event fires (e.g. layout completes) and are then
/// forgotten. Cancelled tasks never run.
pub struct DeferredQueue<T> {
    next_id: u64,
    tasks: Vec<(TaskId, Task<T>)>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            tasks: Vec::new(),
        }
    }
}

impl<T> std::fmt::Debug for DeferredQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredQueue")
            .field("pending", &self.tasks.len())
            .finish()
    }
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, task: impl FnOnce(&mut T) + 'static) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.tasks.push((id, Box::new(task)));
        id
    }

    /// Remove a pending task. Returns `false` when it already ran or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|(tid, _)| *tid != id);
        self.tasks.len() != before
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|(tid, _)| *tid == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Take every pending task in registration order. Tasks registered while the returned ones
    /// run are queued for the next event.
    pub fn take_all(&mut self) -> Vec<Task<T>> {
        std::mem::take(&mut self.tasks)
            .into_iter()
            .map(|(_, task)| task)
            .collect()
    }

    /// Run every pending task against `target`.
    pub fn fire(&mut self, target: &mut T) -> usize {
        let tasks = self.take_all();
        let n = tasks.len();
        for task in tasks {
            task(target);
        }
        n
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/deferred.rs"]
mod tests;
