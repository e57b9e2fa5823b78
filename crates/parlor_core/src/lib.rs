//! Parlor Core Primitives
//!
//! Foundational reactive primitives for the Parlor client state layer:
//!
//! - **Reactive values**: containers whose subscribers are notified
//!   synchronously on every mutation
//! - **Subscriptions**: every callback registration returns a disposer,
//!   released on drop
//!
//! # Example
//!
//! ```rust
//! use parlor_core::ReactiveValue;
//!
//! let code = ReactiveValue::new(String::new());
//!
//! // Fires immediately with the current value, then on every change.
//! let sub = code.subscribe(|value: &String| {
//!     println!("game code is now {value:?}");
//! });
//!
//! code.set("QUARTZ".to_string());
//! drop(sub); // no further deliveries
//! code.set("AMBER".to_string());
//! ```

pub mod reactive;

pub use reactive::{ReactiveValue, Subscription};
