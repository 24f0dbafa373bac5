//! External trainer invocation
//!
//! Runs the training script as a child process with the trainer checkout
//! as its working directory, capturing stdout, stderr, and the exit
//! status in full. The orchestrator waits synchronously; with a
//! configured time limit the child is killed on expiry.

use crate::error::{Error, Result};
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Captured result of one trainer invocation
#[derive(Debug, Clone)]
pub struct TrainerOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Build the trainer command line.
///
/// Argument order follows the YOLOv5 `train.py` interface; `--cache`
/// keeps images in memory between epochs.
pub fn trainer_args(
    img_size: u32,
    batch_size: usize,
    epochs: usize,
    data: &Path,
    cfg: &Path,
    weights: &str,
    run_name: &str,
) -> Vec<String> {
    vec![
        "--img".to_string(),
        img_size.to_string(),
        "--batch".to_string(),
        batch_size.to_string(),
        "--epochs".to_string(),
        epochs.to_string(),
        "--data".to_string(),
        data.display().to_string(),
        "--cfg".to_string(),
        cfg.display().to_string(),
        "--weights".to_string(),
        weights.to_string(),
        "--name".to_string(),
        run_name.to_string(),
        "--cache".to_string(),
    ]
}

/// Run the trainer to completion and capture its output.
pub fn run_trainer(
    program: &str,
    script: &str,
    workdir: &Path,
    args: &[String],
    timeout: Option<Duration>,
) -> Result<TrainerOutput> {
    let mut cmd = Command::new(program);
    cmd.arg(script).args(args).current_dir(workdir);

    match timeout {
        None => {
            let output = cmd.output()?;
            Ok(TrainerOutput {
                success: output.status.success(),
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
        Some(limit) => run_with_deadline(cmd, limit),
    }
}

/// Spawn the child, drain its pipes on background threads, and poll for
/// exit until the deadline. The reader threads prevent the child from
/// blocking on a full pipe while we wait.
fn run_with_deadline(mut cmd: Command, limit: Duration) -> Result<TrainerOutput> {
    cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    let mut child = cmd.spawn()?;

    let stdout_handle = drain(child.stdout.take());
    let stderr_handle = drain(child.stderr.take());

    let deadline = Instant::now() + limit;
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if Instant::now() >= deadline {
            // best effort: the child may have exited between try_wait and kill
            let _ = child.kill();
            let _ = child.wait();
            return Err(Error::Timeout {
                limit_secs: limit.as_secs(),
            });
        }
        thread::sleep(POLL_INTERVAL);
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();

    Ok(TrainerOutput {
        success: status.success(),
        code: status.code(),
        stdout,
        stderr,
    })
}

fn drain(pipe: Option<impl Read + Send + 'static>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_string(&mut buf);
        }
        buf
    })
}
