//! Infrastructure for running external programs.
//!
//! Commands never spawn processes themselves; they build argument vectors and
//! hand them to an `Invoker` injected at construction time.

pub mod runner;

pub use runner::{Invoker, MockInvoker, ProcessInvoker};
