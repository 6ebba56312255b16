//! Trailing-edge debounce over an injected timer source.
//!
//! The browser build schedules through `window.setTimeout`; tests drive a
//! virtual clock. Only the most recent call's arguments survive a burst.

use std::cell::RefCell;
use std::rc::Rc;

/// One-shot timer source.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    type Handle = S::Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        (**self).schedule(delay_ms, task)
    }

    fn cancel(&self, handle: Self::Handle) {
        (**self).cancel(handle)
    }
}

/// Debounced wrapper around `callback`. Clones share the pending timer.
pub struct Debounced<S: Scheduler, A> {
    scheduler: Rc<S>,
    wait_ms: u32,
    pending: Rc<RefCell<Option<S::Handle>>>,
    callback: Rc<RefCell<dyn FnMut(A)>>,
}

impl<S: Scheduler, A> Clone for Debounced<S, A> {
    fn clone(&self) -> Self {
        Self {
            scheduler: Rc::clone(&self.scheduler),
            wait_ms: self.wait_ms,
            pending: Rc::clone(&self.pending),
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<S, A> Debounced<S, A>
where
    S: Scheduler + 'static,
    S::Handle: 'static,
    A: 'static,
{
    pub fn new(scheduler: S, wait_ms: u32, callback: impl FnMut(A) + 'static) -> Self {
        Self {
            scheduler: Rc::new(scheduler),
            wait_ms,
            pending: Rc::new(RefCell::new(None)),
            callback: Rc::new(RefCell::new(callback)),
        }
    }

    /// Cancel any pending run and schedule `callback(args)` after the wait.
    pub fn call(&self, args: A) {
        self.cancel();

        let pending = Rc::clone(&self.pending);
        let callback = Rc::clone(&self.callback);
        let handle = self.scheduler.schedule(
            self.wait_ms,
            Box::new(move || {
                // The fired handle is released only after the callback returns.
                let fired = pending.borrow_mut().take();
                (&mut *callback.borrow_mut())(args);
                drop(fired);
            }),
        );
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending run, if any.
    pub fn cancel(&self) {
        let handle = self.pending.borrow_mut().take();
        if let Some(handle) = handle {
            self.scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type Task = (u64, u64, Box<dyn FnOnce()>);

    #[derive(Default)]
    struct VirtualClock {
        now: Cell<u64>,
        next_id: Cell<u64>,
        cancelled: Cell<u32>,
        tasks: RefCell<Vec<Task>>,
    }

    impl VirtualClock {
        fn advance_to(&self, target: u64) {
            loop {
                let next = {
                    let mut tasks = self.tasks.borrow_mut();
                    let due = tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, (_, at, _))| *at <= target)
                        .min_by_key(|(_, (id, at, _))| (*at, *id))
                        .map(|(idx, _)| idx);
                    due.map(|idx| tasks.remove(idx))
                };
                match next {
                    Some((_, at, task)) => {
                        self.now.set(at);
                        task();
                    }
                    None => break,
                }
            }
            self.now.set(target);
        }

        fn pending(&self) -> usize {
            self.tasks.borrow().len()
        }
    }

    impl Scheduler for VirtualClock {
        type Handle = u64;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> u64 {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let at = self.now.get() + u64::from(delay_ms);
            self.tasks.borrow_mut().push((id, at, task));
            id
        }

        fn cancel(&self, handle: u64) {
            self.cancelled.set(self.cancelled.get() + 1);
            self.tasks.borrow_mut().retain(|(id, _, _)| *id != handle);
        }
    }

    type Calls = Rc<RefCell<Vec<(u64, &'static str)>>>;

    fn recorder(clock: &Rc<VirtualClock>) -> (Calls, impl FnMut(&'static str) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let clock = Rc::clone(clock);
        (calls, move |arg| sink.borrow_mut().push((clock.now.get(), arg)))
    }

    #[test]
    fn burst_collapses_to_last_call() {
        let clock = Rc::new(VirtualClock::default());
        let (calls, cb) = recorder(&clock);
        let debounced = Debounced::new(Rc::clone(&clock), 300, cb);

        debounced.call("a");
        clock.advance_to(100);
        debounced.call("ab");
        clock.advance_to(200);
        debounced.call("abc");

        clock.advance_to(499);
        assert!(calls.borrow().is_empty());
        assert_eq!(clock.pending(), 1);

        clock.advance_to(1_000);
        assert_eq!(*calls.borrow(), vec![(500, "abc")]);
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.cancelled.get(), 2);
    }

    #[test]
    fn quiet_periods_fire_separately() {
        let clock = Rc::new(VirtualClock::default());
        let (calls, cb) = recorder(&clock);
        let debounced = Debounced::new(Rc::clone(&clock), 300, cb);

        debounced.call("first");
        clock.advance_to(400);
        debounced.call("second");
        clock.advance_to(800);

        assert_eq!(*calls.borrow(), vec![(300, "first"), (700, "second")]);
    }

    #[test]
    fn no_leading_call() {
        let clock = Rc::new(VirtualClock::default());
        let (calls, cb) = recorder(&clock);
        let debounced = Debounced::new(Rc::clone(&clock), 300, cb);

        debounced.call("x");
        assert!(calls.borrow().is_empty());
        clock.advance_to(299);
        assert!(calls.borrow().is_empty());
        clock.advance_to(300);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn cancel_drops_pending_run() {
        let clock = Rc::new(VirtualClock::default());
        let (calls, cb) = recorder(&clock);
        let debounced = Debounced::new(Rc::clone(&clock), 300, cb);
        let shared = debounced.clone();

        debounced.call("typed");
        shared.cancel();
        clock.advance_to(1_000);

        assert!(calls.borrow().is_empty());
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.cancelled.get(), 1);
    }

    #[test]
    fn clones_share_one_timer() {
        let clock = Rc::new(VirtualClock::default());
        let (calls, cb) = recorder(&clock);
        let debounced = Debounced::new(Rc::clone(&clock), 300, cb);
        let other = debounced.clone();

        debounced.call("one");
        clock.advance_to(50);
        other.call("two");
        clock.advance_to(1_000);

        assert_eq!(*calls.borrow(), vec![(350, "two")]);
    }

    type Log = Rc<RefCell<Vec<&'static str>>>;

    struct Token(Log);

    impl Drop for Token {
        fn drop(&mut self) {
            self.0.borrow_mut().push("released");
        }
    }

    #[derive(Default)]
    struct ManualTimers {
        log: Log,
        queued: RefCell<Vec<Box<dyn FnOnce()>>>,
    }

    impl Scheduler for ManualTimers {
        type Handle = Token;

        fn schedule(&self, _delay_ms: u32, task: Box<dyn FnOnce()>) -> Token {
            self.queued.borrow_mut().push(task);
            Token(Rc::clone(&self.log))
        }

        fn cancel(&self, handle: Token) {
            drop(handle);
        }
    }

    #[test]
    fn fired_handle_outlives_the_callback() {
        let timers = Rc::new(ManualTimers::default());
        let log = Rc::clone(&timers.log);
        let debounced = Debounced::new(Rc::clone(&timers), 300, move |_: ()| {
            log.borrow_mut().push("ran")
        });

        debounced.call(());
        let task = timers.queued.borrow_mut().pop().unwrap();
        task();
        assert_eq!(*timers.log.borrow(), vec!["ran", "released"]);
    }

    #[test]
    fn superseded_handles_are_released_immediately() {
        let timers = Rc::new(ManualTimers::default());
        let debounced = Debounced::new(Rc::clone(&timers), 300, |_: ()| {});

        debounced.call(());
        debounced.call(());
        assert_eq!(*timers.log.borrow(), vec!["released"]);
        debounced.cancel();
        assert_eq!(*timers.log.borrow(), vec!["released", "released"]);
    }
}
