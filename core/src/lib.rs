//! simchain core — simulation and summary scripts as composable commands.
//!
//! Every command implements [`command::Command`]: it takes a read-only
//! [`Options`](types::options::Options) bag and returns captured output text.
//! Leaf commands build one argument vector and hand it to an injected
//! [`Invoker`](infrastructure::Invoker); composite commands chain leaf commands
//! built on demand by a [`StepFactory`](command::StepFactory).

pub mod cli;
pub mod command;
pub mod data;
pub mod error;
pub mod help;
pub mod infrastructure;
pub mod invocation;
pub mod request;
pub mod sys;
pub mod types;
