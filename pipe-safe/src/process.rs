//! Process creation and reaping for multi-process pipe tests.

use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

use crate::error::{Error, Result};
use crate::ffi;

/// Outcome of a successful [`fork`], seen from either side.
#[derive(Debug)]
pub enum Fork {
    /// Running in the original process; holds the handle of the new child.
    Parent(Child),
    /// Running in the newly created child process.
    Child,
}

/// Handle to a forked child process that has not been reaped yet.
///
/// The handle is consumed by [`Child::wait`], so a child can be reaped at
/// most once.
#[derive(Debug)]
#[must_use = "a forked child must be waited on to avoid leaving a zombie"]
pub struct Child {
    pid: libc::pid_t,
}

impl Child {
    /// Returns the OS process id of the child.
    pub fn id(&self) -> i32 {
        self.pid
    }

    /// Block until the child terminates.
    ///
    /// There is no timeout: a child that never exits blocks the caller
    /// indefinitely. Interrupted waits are retried.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Wait`] if `waitpid(2)` fails for a reason other than
    /// `EINTR`.
    pub fn wait(self) -> Result<ExitStatus> {
        let status = ffi::waitpid(self.pid).map_err(|source| Error::Wait {
            pid: self.pid,
            source,
        })?;
        Ok(ExitStatus::from_raw(status))
    }
}

/// Create a child process sharing all open descriptors with the caller.
///
/// # Errors
///
/// Returns [`Error::Fork`] if the child could not be created.
///
/// # Safety
///
/// Only the calling thread is duplicated into the child. In a
/// multi-threaded parent, locks held by other threads (including the
/// allocator's) stay locked forever in the child, so the child must
/// restrict itself to operations that cannot touch such state and leave
/// through [`exit_child`].
pub unsafe fn fork() -> Result<Fork> {
    match ffi::fork().map_err(Error::Fork)? {
        0 => Ok(Fork::Child),
        pid => Ok(Fork::Parent(Child { pid })),
    }
}

/// Terminate a forked child immediately with `code`.
///
/// Skips atexit handlers and does not flush stdio buffers inherited from
/// the parent, so output the parent had buffered is not printed twice.
/// Flush anything the child wrote itself before calling this.
pub fn exit_child(code: i32) -> ! {
    ffi::exit_now(code)
}
