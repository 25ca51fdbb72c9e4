//! # Souq Core
//!
//! Core abstraction for the Souq storefront state layer.
//!
//! The whole logic layer of the storefront is two cooperating pieces: a
//! [`reducer::Reducer`] (a pure function computing the next state from the
//! current state and an action) and a `Store` (in `souq-runtime`) that owns
//! the single current state value and notifies observers after each
//! transition. This crate defines the reducer side of that contract so that
//! domain crates can implement transitions with zero runtime present.
//!
//! ## Core Concepts
//!
//! - **State**: the aggregate value a feature owns (owned data, `Clone`)
//! - **Action**: a tagged request to change state, with an optional payload
//! - **Reducer**: pure function `(State, Action) → State`, expressed as
//!   in-place mutation of an exclusively borrowed state value
//!
//! ## Example
//!
//! ```
//! use souq_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default, PartialEq, Eq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction) {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!             CounterAction::Decrement => state.count -= 1,
//!         }
//!     }
//! }
//! ```

// Re-export commonly used derives
pub use serde::{Deserialize, Serialize};

/// Reducer module - the core trait for state transitions
///
/// Reducers contain all transition logic and are deterministic and testable
/// without any store present.
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// A reducer is a pure, total function from `(State, Action)` to the
    /// next state. Mutating through an exclusive borrow is the Rust
    /// rendition of "replace the state wholesale, carrying over untouched
    /// fields": everything the reducer does not write is carried over
    /// unchanged by construction.
    ///
    /// # Contract
    ///
    /// - Every action must succeed: no variant may panic or partially apply.
    /// - No I/O, no timers, no interior mutability - state in, state out.
    /// - An action that targets no field leaves the state value identical.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Apply one action to the state
        ///
        /// # Arguments
        ///
        /// - `state`: Exclusive borrow of the current state
        /// - `action`: The action to process
        fn reduce(&self, state: &mut Self::State, action: Self::Action);
    }
}
