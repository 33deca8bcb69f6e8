use std::io;
use std::process::{Command, ExitStatus};
use tracing::debug;

/// How an external command ended.
#[derive(Debug)]
pub enum ProcessOutcome {
    NormalExit(i32),
    KilledBySignal(i32),
    LaunchFailed(io::Error),
}

/// Runs an external program to completion. Implementations must reap the
/// child before returning.
pub trait Launcher {
    fn launch(&mut self, args: &[String]) -> ProcessOutcome;
}

#[cfg(unix)]
pub type SystemLauncher = ForkExecLauncher;
#[cfg(not(unix))]
pub type SystemLauncher = SpawnLauncher;

fn empty_command() -> ProcessOutcome {
    ProcessOutcome::LaunchFailed(io::Error::new(io::ErrorKind::InvalidInput, "empty command"))
}

#[cfg(unix)]
pub use fork_exec::ForkExecLauncher;

#[cfg(unix)]
mod fork_exec {
    use std::ffi::{CStr, CString};
    use std::io;
    use nix::errno::Errno;
    use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
    use nix::unistd::{execvp, fork, ForkResult, Pid};
    use tracing::debug;
    use super::{empty_command, Launcher, ProcessOutcome};

    /// Status the child exits with when the program cannot be executed.
    pub const EXEC_FAILURE: i32 = 127;

    /// fork + execvp + waitpid. The program is looked up on `PATH` by `execvp`.
    #[derive(Debug, Default)]
    pub struct ForkExecLauncher;

    impl Launcher for ForkExecLauncher {
        fn launch(&mut self, args: &[String]) -> ProcessOutcome {
            // Everything the child needs is allocated before forking.
            let argv = match to_c_strings(args) {
                Ok(argv) => argv,
                Err(e) => return ProcessOutcome::LaunchFailed(e),
            };
            let Some(program) = argv.first() else {
                return empty_command();
            };

            match unsafe { fork() } {
                Ok(ForkResult::Child) => exec_child(program, &argv),
                Ok(ForkResult::Parent { child }) => {
                    debug!(pid = child.as_raw(), program = %args[0], "spawned child");
                    wait_for(child)
                }
                Err(errno) => ProcessOutcome::LaunchFailed(io::Error::from(errno)),
            }
        }
    }

    fn to_c_strings(args: &[String]) -> io::Result<Vec<CString>> {
        args.iter()
            .map(|arg| {
                CString::new(arg.as_str())
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
            })
            .collect()
    }

    // Runs in the child. Never returns into shell code.
    fn exec_child(program: &CStr, argv: &[CString]) -> ! {
        let errno = match execvp(program, argv) {
            Ok(never) => match never {},
            Err(errno) => errno,
        };
        write_stderr(b"shell: ");
        write_stderr(errno.desc().as_bytes());
        write_stderr(b"\n");
        unsafe { libc::_exit(EXEC_FAILURE) }
    }

    // Raw write(2): the child must not take std's stderr lock.
    fn write_stderr(buf: &[u8]) {
        unsafe {
            libc::write(libc::STDERR_FILENO, buf.as_ptr().cast(), buf.len());
        }
    }

    fn wait_for(child: Pid) -> ProcessOutcome {
        loop {
            match waitpid(child, Some(WaitPidFlag::WUNTRACED)) {
                Ok(WaitStatus::Exited(_, code)) => return ProcessOutcome::NormalExit(code),
                Ok(WaitStatus::Signaled(_, signal, _)) => {
                    return ProcessOutcome::KilledBySignal(signal as i32);
                }
                Ok(status) => debug!(?status, "child not terminated, waiting again"),
                Err(Errno::EINTR) => continue,
                Err(errno) => return ProcessOutcome::LaunchFailed(io::Error::from(errno)),
            }
        }
    }

}

/// Spawn-and-wait through `std::process::Command`, for targets without fork.
#[derive(Debug, Default)]
pub struct SpawnLauncher;

impl Launcher for SpawnLauncher {
    fn launch(&mut self, args: &[String]) -> ProcessOutcome {
        let Some((program, rest)) = args.split_first() else {
            return empty_command();
        };
        match Command::new(program).args(rest).status() {
            Ok(status) => classify(status),
            Err(e) => ProcessOutcome::LaunchFailed(e),
        }
    }
}

fn classify(status: ExitStatus) -> ProcessOutcome {
    if let Some(code) = status.code() {
        return ProcessOutcome::NormalExit(code);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return ProcessOutcome::KilledBySignal(signal);
        }
    }
    debug!(?status, "unclassified exit status");
    ProcessOutcome::LaunchFailed(io::Error::other(format!("unrecognized exit status: {}", status)))
}
