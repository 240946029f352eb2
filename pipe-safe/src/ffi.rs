//! Thin wrappers around the libc calls used by the safe API.

use std::io;
use std::os::fd::{AsRawFd, BorrowedFd, FromRawFd, OwnedFd};

/// Call `pipe(2)` and take ownership of both descriptors.
///
/// The first descriptor is the read end, the second the write end.
pub(crate) fn pipe() -> io::Result<(OwnedFd, OwnedFd)> {
    let mut fds: [libc::c_int; 2] = [-1; 2];

    // SAFETY: `fds` is a valid, writable array of two descriptors.
    let ret = unsafe { libc::pipe(fds.as_mut_ptr()) };
    if ret == -1 {
        return Err(io::Error::last_os_error());
    }

    // SAFETY: `pipe` succeeded, so both descriptors are open and owned by nobody else.
    let pair = unsafe { (OwnedFd::from_raw_fd(fds[0]), OwnedFd::from_raw_fd(fds[1])) };
    Ok(pair)
}

/// Issue a single `read(2)` into `buf`.
pub(crate) fn read(fd: BorrowedFd<'_>, buf: &mut [u8]) -> io::Result<usize> {
    // SAFETY: `buf` is valid for writes of `buf.len()` bytes and `fd` is open.
    let ret = unsafe { libc::read(fd.as_raw_fd(), buf.as_mut_ptr().cast(), buf.len()) };
    usize::try_from(ret).map_err(|_| io::Error::last_os_error())
}

/// Issue a single `write(2)` from `buf`.
pub(crate) fn write(fd: BorrowedFd<'_>, buf: &[u8]) -> io::Result<usize> {
    // SAFETY: `buf` is valid for reads of `buf.len()` bytes and `fd` is open.
    let ret = unsafe { libc::write(fd.as_raw_fd(), buf.as_ptr().cast(), buf.len()) };
    usize::try_from(ret).map_err(|_| io::Error::last_os_error())
}

/// Call `fork(2)`, returning the child pid in the parent and `0` in the child.
///
/// # Safety
///
/// See [`crate::process::fork`].
pub(crate) unsafe fn fork() -> io::Result<libc::pid_t> {
    let pid = libc::fork();
    if pid == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(pid)
    }
}

/// Block in `waitpid(2)` until `pid` terminates, retrying on `EINTR`.
///
/// Returns the raw wait status.
pub(crate) fn waitpid(pid: libc::pid_t) -> io::Result<libc::c_int> {
    let mut status: libc::c_int = 0;
    loop {
        // SAFETY: `status` is a valid, writable integer.
        let ret = unsafe { libc::waitpid(pid, &mut status, 0) };
        if ret != -1 {
            return Ok(status);
        }

        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(err);
        }
    }
}

/// Terminate the calling process immediately via `_exit(2)`.
pub(crate) fn exit_now(code: i32) -> ! {
    // SAFETY: `_exit` is async-signal-safe and never returns.
    unsafe { libc::_exit(code) }
}
