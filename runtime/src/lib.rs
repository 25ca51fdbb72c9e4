//! # Souq Runtime
//!
//! Store runtime for the Souq storefront state layer.
//!
//! The [`store::Store`] owns the single current state value, serializes
//! dispatch, and notifies subscribed observers synchronously after every
//! transition. It is an explicitly constructed object - never a hidden
//! process-wide singleton - so multiple independent stores can coexist,
//! one per test or per application root.
//!
//! ## Core Components
//!
//! - **Store**: holds state behind a lock and applies the reducer on dispatch
//! - **Subscription**: unsubscribe handle returned by [`store::Store::subscribe`]
//!
//! ## Example
//!
//! ```ignore
//! use souq_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer);
//!
//! let sub = store.subscribe(|state| println!("{state:?}"));
//! store.dispatch(Action::DoSomething);
//!
//! let value = store.state(|s| s.some_field.clone());
//! sub.unsubscribe();
//! ```

use souq_core::reducer::Reducer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

/// Store module - the runtime for reducers
///
/// The Store manages:
/// 1. State (behind an `RwLock`; one write per dispatch)
/// 2. Reducer (transition logic)
/// 3. Observer notification (synchronous, after each transition)
pub mod store {
    use super::{Arc, AtomicU64, Mutex, Ordering, PoisonError, Reducer, RwLock, Weak};

    /// The Store - owner of the current state and the sole mutation gateway
    ///
    /// Dispatch calls are strictly serialized: one action is fully applied
    /// and all observers notified before the next dispatch can begin. All
    /// readers receive snapshots or shared borrows of the state; nothing
    /// outside the reducer ever mutates it.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `R`: Reducer implementation (fixes the action type via `R::Action`)
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(AppState::seeded(demo_seed())?, StorefrontReducer);
    ///
    /// store.dispatch(AppAction::SetLanguage(Language::Ar));
    /// assert_eq!(store.state(|s| s.language), Language::Ar);
    /// ```
    pub struct Store<S, R>
    where
        R: Reducer<State = S>,
    {
        state: RwLock<S>,
        reducer: R,
        subscribers: Arc<SubscriberRegistry<S>>,
        next_subscriber_id: AtomicU64,
    }

    impl<S, R> Store<S, R>
    where
        R: Reducer<State = S>,
        S: Clone,
    {
        /// Create a new store with an initial state and a reducer
        ///
        /// The initial state is supplied by the caller in full; the store
        /// performs no seeding of its own.
        #[must_use]
        pub fn new(initial_state: S, reducer: R) -> Self {
            Self {
                state: RwLock::new(initial_state),
                reducer,
                subscribers: Arc::new(SubscriberRegistry::default()),
                next_subscriber_id: AtomicU64::new(0),
            }
        }

        /// Read the current state through a closure, without cloning
        ///
        /// Holds a read lock for the duration of the closure. Do not call
        /// [`Store::dispatch`] from inside it.
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            f(&state)
        }

        /// Return a cloned snapshot of the current state
        #[must_use]
        pub fn snapshot(&self) -> S {
            self.state(Clone::clone)
        }

        /// Dispatch an action to the store
        ///
        /// Applies the reducer under the state write lock, then notifies
        /// every subscriber exactly once with a snapshot of the new state.
        /// Notification happens after the lock is released, so observers may
        /// freely read back through [`Store::state`] or [`Store::snapshot`].
        ///
        /// Dispatch never fails: actions that target nothing leave the
        /// state unchanged and still notify observers.
        #[tracing::instrument(skip(self, action), name = "store_dispatch")]
        pub fn dispatch(&self, action: R::Action) {
            let after = {
                let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
                self.reducer.reduce(&mut state, action);
                state.clone()
            };

            let notified = self.subscribers.notify(&after);
            tracing::trace!(subscribers = notified, "state transition applied");
        }

        /// Register an observer invoked after every dispatch
        ///
        /// The observer receives a shared borrow of the post-transition
        /// snapshot. Ordering between observers is unspecified, but each is
        /// invoked exactly once per dispatch. Observers must not subscribe
        /// or unsubscribe from within a notification.
        ///
        /// Returns a [`Subscription`] handle; dropping the handle does NOT
        /// unsubscribe - call [`Subscription::unsubscribe`] explicitly.
        pub fn subscribe<F>(&self, observer: F) -> Subscription<S>
        where
            F: Fn(&S) + Send + Sync + 'static,
        {
            let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
            self.subscribers.insert(id, Box::new(observer));

            Subscription {
                id,
                registry: Arc::downgrade(&self.subscribers),
            }
        }

        /// Number of currently registered observers
        #[must_use]
        pub fn subscriber_count(&self) -> usize {
            self.subscribers.len()
        }
    }

    impl<S, R> std::fmt::Debug for Store<S, R>
    where
        R: Reducer<State = S>,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("subscribers", &self.subscribers.len())
                .finish_non_exhaustive()
        }
    }

    /// Handle for releasing a store subscription
    ///
    /// Holds a weak reference to the subscriber registry: once the store is
    /// gone there is nothing left to notify and unsubscribing becomes a
    /// no-op.
    pub struct Subscription<S> {
        id: u64,
        registry: Weak<SubscriberRegistry<S>>,
    }

    impl<S> Subscription<S> {
        /// Remove the observer this handle was returned for
        ///
        /// After this call the observer is never invoked again. Calling it
        /// after the store has been dropped is a no-op.
        pub fn unsubscribe(self) {
            if let Some(registry) = self.registry.upgrade() {
                registry.remove(self.id);
            }
        }

        /// Whether the store backing this subscription is still alive
        #[must_use]
        pub fn is_attached(&self) -> bool {
            self.registry.strong_count() > 0
        }
    }

    impl<S> std::fmt::Debug for Subscription<S> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Subscription")
                .field("id", &self.id)
                .field("attached", &self.is_attached())
                .finish()
        }
    }

    /// Internal: observer callback storage
    type Observer<S> = Box<dyn Fn(&S) + Send + Sync>;

    /// Internal: the set of registered observers, keyed by subscription id
    pub(super) struct SubscriberRegistry<S> {
        entries: Mutex<Vec<(u64, Observer<S>)>>,
    }

    impl<S> Default for SubscriberRegistry<S> {
        fn default() -> Self {
            Self {
                entries: Mutex::new(Vec::new()),
            }
        }
    }

    impl<S> SubscriberRegistry<S> {
        fn insert(&self, id: u64, observer: Observer<S>) {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push((id, observer));
        }

        fn remove(&self, id: u64) {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .retain(|(entry_id, _)| *entry_id != id);
        }

        fn len(&self) -> usize {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }

        /// Invoke every observer once with the given snapshot
        ///
        /// Returns the number of observers notified.
        fn notify(&self, snapshot: &S) -> usize {
            let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            for (_, observer) in entries.iter() {
                observer(snapshot);
            }
            entries.len()
        }
    }
}

pub use store::{Store, Subscription};

#[cfg(test)]
#[allow(clippy::expect_used)] // Test code can use expect
mod tests {
    use super::Store;
    use souq_core::reducer::Reducer;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    struct CounterState {
        count: i64,
    }

    #[derive(Clone, Debug)]
    enum CounterAction {
        Increment,
        Add(i64),
        Noop,
    }

    #[derive(Clone, Debug)]
    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = CounterState;
        type Action = CounterAction;

        fn reduce(&self, state: &mut CounterState, action: CounterAction) {
            match action {
                CounterAction::Increment => state.count += 1,
                CounterAction::Add(n) => state.count += n,
                CounterAction::Noop => {}
            }
        }
    }

    fn counter_store() -> Store<CounterState, CounterReducer> {
        Store::new(CounterState::default(), CounterReducer)
    }

    #[test]
    fn snapshot_returns_initial_state_before_any_dispatch() {
        let store = counter_store();
        assert_eq!(store.snapshot(), CounterState { count: 0 });
    }

    #[test]
    fn dispatch_applies_reducer() {
        let store = counter_store();
        store.dispatch(CounterAction::Increment);
        store.dispatch(CounterAction::Add(9));
        assert_eq!(store.state(|s| s.count), 10);
    }

    #[test]
    fn noop_dispatch_leaves_state_unchanged() {
        let store = counter_store();
        store.dispatch(CounterAction::Add(3));
        let before = store.snapshot();
        store.dispatch(CounterAction::Noop);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn observer_is_notified_once_per_dispatch_with_new_snapshot() {
        let store = counter_store();
        let seen: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |state| {
            sink.lock().expect("observer sink").push(state.count);
        });

        store.dispatch(CounterAction::Increment);
        store.dispatch(CounterAction::Add(4));
        store.dispatch(CounterAction::Noop);

        assert_eq!(*seen.lock().expect("observer sink"), vec![1, 5, 5]);
    }

    #[test]
    fn multiple_observers_each_see_every_dispatch() {
        let store = counter_store();
        let first: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));
        let second: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&first);
        let _a = store.subscribe(move |state| sink.lock().expect("sink").push(state.count));
        let sink = Arc::clone(&second);
        let _b = store.subscribe(move |state| sink.lock().expect("sink").push(state.count));

        assert_eq!(store.subscriber_count(), 2);

        store.dispatch(CounterAction::Increment);

        assert_eq!(*first.lock().expect("sink"), vec![1]);
        assert_eq!(*second.lock().expect("sink"), vec![1]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = counter_store();
        let seen: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let sub = store.subscribe(move |state| {
            sink.lock().expect("observer sink").push(state.count);
        });

        store.dispatch(CounterAction::Increment);
        sub.unsubscribe();
        store.dispatch(CounterAction::Increment);

        assert_eq!(*seen.lock().expect("observer sink"), vec![1]);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn unsubscribe_after_store_drop_is_noop() {
        let store = counter_store();
        let sub = store.subscribe(|_| {});
        assert!(sub.is_attached());

        drop(store);

        assert!(!sub.is_attached());
        sub.unsubscribe();
    }

    #[test]
    fn independent_stores_do_not_share_state_or_observers() {
        let a = counter_store();
        let b = counter_store();

        let seen: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = a.subscribe(move |state| sink.lock().expect("sink").push(state.count));

        a.dispatch(CounterAction::Add(2));
        b.dispatch(CounterAction::Add(40));

        assert_eq!(a.state(|s| s.count), 2);
        assert_eq!(b.state(|s| s.count), 40);
        assert_eq!(b.subscriber_count(), 0);
        assert_eq!(*seen.lock().expect("sink"), vec![2]);
    }
}
