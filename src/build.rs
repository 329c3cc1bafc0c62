//! External build tool invocation for Forge.
//! The build tool is an opaque collaborator with filesystem side effects;
//! it is modeled behind a narrow trait so the pipeline can be exercised
//! with a fake in tests.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Trait for invoking the external build tool.
///
/// Implementations must wait for the tool to complete; the pipeline never
/// proceeds to a dependent stage while a build is in flight, and never
/// assumes an invocation is idempotent.
pub trait BuildInvoker {
    /// Runs the named task against a working artifact.
    ///
    /// # Arguments
    /// * `artifact` - Path to the artifact the task operates on
    ///   (e.g. the service descriptor)
    /// * `task` - Task name to run
    fn invoke(&self, artifact: &Path, task: &str) -> Result<()>;
}

/// Invokes Gradle as a subprocess in the current working directory.
pub struct GradleInvoker {
    /// Abort the subprocess after this long, if set
    timeout: Option<Duration>,
}

impl GradleInvoker {
    /// Creates a new GradleInvoker instance.
    ///
    /// # Arguments
    /// * `timeout` - Maximum time to wait for the build; `None` waits
    ///   indefinitely
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl BuildInvoker for GradleInvoker {
    /// Runs `gradle <task>` against the module containing the artifact.
    ///
    /// # Errors
    /// * `Error::BuildToolError` if the process cannot be spawned or exits
    ///   unsuccessfully
    /// * `Error::BuildTimeoutError` if the configured timeout expires; the
    ///   subprocess is killed before returning
    fn invoke(&self, artifact: &Path, task: &str) -> Result<()> {
        debug!("Running 'gradle {}' against {}", task, artifact.display());

        let mut command = Command::new("gradle");
        command.arg(task).stdout(Stdio::inherit()).stderr(Stdio::inherit());

        // The artifact lives inside the module the task should build.
        if let Some(module_dir) = artifact.parent() {
            command.arg("-p").arg(module_dir);
        }

        let mut child = command.spawn().map_err(|e| Error::BuildToolError {
            task: task.to_string(),
            detail: e.to_string(),
        })?;

        let started = Instant::now();
        let status = loop {
            match child.try_wait().map_err(Error::IoError)? {
                Some(status) => break status,
                None => {
                    if let Some(timeout) = self.timeout {
                        if started.elapsed() > timeout {
                            child.kill().map_err(Error::IoError)?;
                            child.wait().map_err(Error::IoError)?;
                            return Err(Error::BuildTimeoutError {
                                task: task.to_string(),
                                seconds: timeout.as_secs(),
                            });
                        }
                    }
                    std::thread::sleep(Duration::from_millis(100));
                }
            }
        };

        if !status.success() {
            return Err(Error::BuildToolError {
                task: task.to_string(),
                detail: format!("exited with {}", status),
            });
        }

        Ok(())
    }
}
