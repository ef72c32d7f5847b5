//! Process detachment.

use std::fs::OpenOptions;
use std::os::fd::IntoRawFd;

use anyhow::Context;
use nix::unistd::{ForkResult, chdir, close, dup2, fork, setsid};

/// Detaches the process from its controlling terminal.
///
/// Standard input, output, and error are pointed at /dev/null, the process
/// forks once with the parent exiting 0, and the surviving child starts a
/// new session. Must run before the async runtime is built: fork(2) and
/// threads do not mix.
pub fn become_daemon() -> anyhow::Result<()> {
    chdir("/").context("chdir(2) failed")?;

    let null_fd = OpenOptions::new()
        .read(true)
        .write(true)
        .open("/dev/null")
        .context("failed to open /dev/null")?
        .into_raw_fd();
    for fd in 0..=2 {
        dup2(null_fd, fd).context("failed to redirect stdio to /dev/null")?;
    }
    if null_fd > 2 {
        let _ = close(null_fd);
    }

    match unsafe { fork() }.context("fork(2) failed")? {
        ForkResult::Parent { .. } => std::process::exit(0),
        ForkResult::Child => {}
    }

    setsid().context("setsid(2) failed")?;
    Ok(())
}
