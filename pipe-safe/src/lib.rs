//! Safe, high-level wrappers around the POSIX primitives a pipe test needs.
//!
//! The crate wraps `pipe(2)`, `read(2)`, `write(2)`, `fork(2)` and
//! `waitpid(2)` in resource-owning Rust types. [`PipeReader`] and
//! [`PipeWriter`] own one end of a pipe each and close it on drop, while
//! [`fork`] hands back a [`Child`] handle that can be waited on exactly once.
//!
//! # Highlights
//!
//! - every descriptor is an [`std::os::fd::OwnedFd`], so no end is leaked
//! - reads and writes issue exactly one system call and report short
//!   transfers instead of hiding them
//! - child termination is reported as a standard [`std::process::ExitStatus`]
//!
//! # Example
//!
//! ```rust
//! use std::io::{Read, Write};
//!
//! let (mut reader, mut writer) = pipe_safe::pipe()?;
//! assert_eq!(writer.write(b"ping")?, 4);
//!
//! let mut buf = [0_u8; 4];
//! assert_eq!(reader.read(&mut buf)?, 4);
//! assert_eq!(&buf, b"ping");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod pipe;
pub mod process;

mod error;
mod ffi;

pub use error::{Error, Result};
pub use pipe::{pipe, PipeReader, PipeWriter};
pub use process::{exit_child, fork, Child, Fork};
