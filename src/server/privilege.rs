//! Chroot jail setup and privilege drop.

use std::ffi::CString;

use anyhow::{Context, anyhow};
use nix::unistd::{Group, User, chroot, initgroups, setgid, setuid};

/// Confines the process to `root` and drops to `user`/`group`.
///
/// Both identities are resolved and validated by name before the root
/// directory changes. The group identity and supplementary groups are
/// applied first, then the chroot, and the user identity last. After this
/// returns, the served root is the jail root.
pub fn setup_env(root: &str, user: &str, group: &str) -> anyhow::Result<()> {
    let group = Group::from_name(group)
        .context("getgrnam(3) failed")?
        .ok_or_else(|| anyhow!("no such group: {}", group))?;
    let user = User::from_name(user)
        .context("getpwnam(3) failed")?
        .ok_or_else(|| anyhow!("no such user: {}", user))?;

    setgid(group.gid).context("setgid(2) failed")?;
    let user_name = CString::new(user.name.as_str()).context("user name contains NUL")?;
    initgroups(&user_name, group.gid).context("initgroups(3) failed")?;

    chroot(root).with_context(|| format!("failed to chroot to {}", root))?;

    setuid(user.uid).context("setuid(2) failed")?;
    Ok(())
}
