use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug)]
pub struct TaskCompleted<R> {
    pub id: TaskId,
    pub result: R,
}

/// Task lifecycle state (stored in the controller, mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    active: Option<TaskId>,
    cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<TaskId> {
        self.active
    }

    pub fn on_started(&mut self, id: TaskId, cancel: CancellationToken) {
        self.active = Some(id);
        self.cancel = Some(cancel);
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.clear();
        }
        ok
    }

    /// Forgets the active task and hands back its token for cancellation.
    pub fn take_cancel(&mut self) -> Option<CancellationToken> {
        self.active = None;
        self.cancel.take()
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
    }
}
