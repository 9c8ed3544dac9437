//! Process lifecycle management for the listing command
//!
//! The package manager query is spawned in its own process group with a
//! parent-death signal, so if pkgroulette is killed (for example by a
//! scheduler timeout) the query does not keep running as an orphan.

use nix::libc;
use nix::unistd::Pid;

/// Extension trait for std::process::Command to set up process groups
pub trait CommandProcessGroup {
    /// Configure the command to run in its own process group
    /// and to receive SIGTERM when the parent exits
    fn in_new_process_group(&mut self) -> &mut Self;
}

impl CommandProcessGroup for std::process::Command {
    fn in_new_process_group(&mut self) -> &mut Self {
        use std::os::unix::process::CommandExt;
        // SAFETY: only async-signal-safe calls (setpgid, prctl) run between fork and exec
        unsafe {
            self.pre_exec(|| {
                // PGID = child PID
                nix::unistd::setpgid(Pid::from_raw(0), Pid::from_raw(0))
                    .map_err(std::io::Error::other)?;

                if libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM) == -1 {
                    return Err(std::io::Error::last_os_error());
                }

                Ok(())
            });
        }
        self
    }
}
