//! Build a single Zig source file of a fixed project and file away its artifacts.
//!
//! The crate resolves a user-supplied file name to `<project>/src/<name>.zig`,
//! runs `zig build-exe` on it and, if the build succeeds, moves the produced
//! executable and object file into `zig-out/bin/` and `zig-out/shared/`.
//!
//! The main entry point is [`Invoker`]. The pieces it is made of are public so
//! that a different [`command::Compiler`] or project [`env::Layout`] can be
//! plugged in.

pub mod command;
pub mod env;
pub mod error;
pub mod external;
mod invoker;
pub mod relocate;
pub mod resolve;

/// Just a convenient re-export of the build driver.
///
/// See [`Invoker`] for the high-level API.
pub use invoker::Invoker;
