// smartrider-rs/smartrider/src/poller/mod.rs

//! Block-level card access abstraction.
//!
//! The radio/authentication protocol lives in the host; this crate only
//! consumes its block primitives through [`ClassicPoller`].

pub mod mock;
pub mod traits;

pub use mock::MockPoller;
pub use traits::ClassicPoller;
