//! # Souq Testing
//!
//! Testing utilities for the Souq storefront state layer.
//!
//! This crate provides:
//! - [`ReducerTest`]: a fluent Given/When/Then harness for reducers
//! - [`observers::RecordingObserver`]: a snapshot recorder for store
//!   notification tests
//!
//! ## Example
//!
//! ```ignore
//! use souq_testing::ReducerTest;
//!
//! ReducerTest::new(StorefrontReducer)
//!     .given_state(AppState::seeded(demo_seed())?)
//!     .when_action(AppAction::SetLanguage(Language::Ar))
//!     .then_state(|state| {
//!         assert_eq!(state.language, Language::Ar);
//!     })
//!     .run();
//! ```


/// Observer helpers for store notification tests
pub mod observers {
    use std::sync::{Arc, Mutex, PoisonError};

    /// Records every snapshot an observer is notified with
    ///
    /// Clone-able; all clones share the same recording. Hand
    /// [`RecordingObserver::callback`] to `Store::subscribe` and assert on
    /// [`RecordingObserver::snapshots`] afterwards.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let recorder = RecordingObserver::new();
    /// let _sub = store.subscribe(recorder.callback());
    ///
    /// store.dispatch(AppAction::SetLoading(true));
    ///
    /// assert_eq!(recorder.notification_count(), 1);
    /// assert!(recorder.last().is_some_and(|s| s.is_loading));
    /// ```
    pub struct RecordingObserver<S> {
        snapshots: Arc<Mutex<Vec<S>>>,
    }

    impl<S> RecordingObserver<S> {
        /// Create a recorder with an empty history
        #[must_use]
        pub fn new() -> Self {
            Self {
                snapshots: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Build the closure to pass to `Store::subscribe`
        #[must_use]
        pub fn callback(&self) -> impl Fn(&S) + Send + Sync + 'static
        where
            S: Clone + Send + 'static,
        {
            let sink = Arc::clone(&self.snapshots);
            move |state: &S| {
                sink.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(state.clone());
            }
        }

        /// All snapshots recorded so far, in notification order
        #[must_use]
        pub fn snapshots(&self) -> Vec<S>
        where
            S: Clone,
        {
            self.snapshots
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// The most recent snapshot, if any notification happened
        #[must_use]
        pub fn last(&self) -> Option<S>
        where
            S: Clone,
        {
            self.snapshots
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .last()
                .cloned()
        }

        /// Number of notifications received
        #[must_use]
        pub fn notification_count(&self) -> usize {
            self.snapshots
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }
    }

    impl<S> Default for RecordingObserver<S> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<S> Clone for RecordingObserver<S> {
        fn clone(&self) -> Self {
            Self {
                snapshots: Arc::clone(&self.snapshots),
            }
        }
    }
}

// Re-export commonly used items
pub use observers::RecordingObserver;
pub use reducer_test::ReducerTest;
