use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::{Runtime, ScopeId, Task, current_scope_id};
use dioxus::prelude::*;
use services::{Scheduler, TimerId};
use tracing::warn;

struct Inner<E: 'static> {
    next_id: u64,
    tasks: HashMap<TimerId, Task>,
    handler: Option<Callback<E>>,
}

/// [`Scheduler`] backed by spawned tasks sleeping on the tokio timer.
///
/// Fired events are handed to the callback given to
/// [`bind`](TaskScheduler::bind). Clones share the same pending set, so a
/// handler can schedule follow-up events through its own clone.
///
/// Timers belong to the component that created the scheduler, whichever
/// component schedules them: they survive the caller unmounting and are
/// dropped together with the owner.
pub struct TaskScheduler<E: 'static> {
    inner: Rc<RefCell<Inner<E>>>,
    owner: ScopeId,
}

impl<E: 'static> Clone for TaskScheduler<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            owner: self.owner,
        }
    }
}

impl<E: 'static> TaskScheduler<E> {
    /// A scheduler owned by the component currently rendering. Create it
    /// inside `use_hook`.
    #[must_use]
    pub fn new() -> Self {
        Self::owned_by(current_scope_id())
    }

    #[must_use]
    pub fn owned_by(owner: ScopeId) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                next_id: 1,
                tasks: HashMap::new(),
                handler: None,
            })),
            owner,
        }
    }

    /// Sets the receiver of fired events. Rebinding replaces the previous one.
    pub fn bind(&self, handler: Callback<E>) {
        self.inner.borrow_mut().handler = Some(handler);
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().tasks.len()
    }
}

impl<E: 'static> Scheduler<E> for TaskScheduler<E> {
    fn schedule(&mut self, delay: Duration, event: E) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        let id = TimerId::new(inner.next_id);
        inner.next_id += 1;
        let Some(handler) = inner.handler else {
            warn!(timer = id.value(), "timer scheduled before a handler was bound");
            return id;
        };
        let state = Rc::clone(&self.inner);
        let task = Runtime::current().in_scope(self.owner, || {
            spawn(async move {
                tokio::time::sleep(delay).await;
                state.borrow_mut().tasks.remove(&id);
                handler.call(event);
            })
        });
        inner.tasks.insert(id, task);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        let task = self.inner.borrow_mut().tasks.remove(&id);
        if let Some(task) = task {
            task.cancel();
        }
    }
}
