//! Move source backed by an external bot executable.
//!
//! The bot is started once per move. It receives a `BotInput` document on
//! stdin and must print a `BotReply` on stdout before the timeout. A
//! non-zero exit status is only logged; what counts is the reply.

use std::io::{self, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::core::Move;
use crate::error::SourceError;

use super::wire::{BotInput, BotReply};
use super::{MoveRequest, MoveSource};

const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Runs a bot program for every move.
#[derive(Clone, Debug)]
pub struct ProcessSource {
    name: String,
    program: PathBuf,
    args: Vec<String>,
    timeout: Duration,
}

impl ProcessSource {
    /// A bot at `program`, named after its path.
    pub fn new(program: impl AsRef<Path>, timeout: Duration) -> Self {
        let program = program.as_ref().to_path_buf();
        Self {
            name: program.display().to_string(),
            program,
            args: Vec::new(),
            timeout,
        }
    }

    /// Extra command-line arguments passed on every run.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Override the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn spawn(&self) -> Result<Child, SourceError> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SourceError::Spawn {
                program: self.name.clone(),
                source,
            })
    }

    fn timed_out(&self) -> SourceError {
        SourceError::Timeout {
            program: self.name.clone(),
            millis: self.timeout.as_millis() as u64,
        }
    }

    /// Wait for exit, killing the bot once `deadline` passes.
    fn wait(&self, child: &mut Child, deadline: Instant) -> Result<ExitStatus, SourceError> {
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                // Already-exited children make kill fail; the wait reaps either way.
                let _ = child.kill();
                let _ = child.wait();
                return Err(self.timed_out());
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    /// Read a drained pipe, giving up at `deadline`.
    ///
    /// A bot can exit while a process it spawned still holds the pipe open;
    /// the read only finishes once every writer is gone.
    fn collect(&self, pipe: Receiver<io::Result<Vec<u8>>>, deadline: Instant) -> Result<Vec<u8>, SourceError> {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match pipe.recv_timeout(remaining) {
            Ok(bytes) => Ok(bytes?),
            Err(RecvTimeoutError::Timeout) => Err(self.timed_out()),
            Err(RecvTimeoutError::Disconnected) => {
                Err(io::Error::new(ErrorKind::Other, "pipe reader stopped without a result").into())
            }
        }
    }
}

/// Read a pipe to the end on a background thread.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<io::Result<Vec<u8>>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let result = match pipe {
            Some(mut pipe) => pipe.read_to_end(&mut buf).map(|_| buf),
            None => Ok(buf),
        };
        // The receiver is gone once the deadline has passed.
        let _ = tx.send(result);
    });
    rx
}

impl MoveSource for ProcessSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, request: &MoveRequest<'_>) -> Result<Move, SourceError> {
        let input = serde_json::to_vec(&BotInput::from_request(request))
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;

        let deadline = Instant::now() + self.timeout;
        let mut child = self.spawn()?;
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(&input) {
                // A bot may answer without reading its input.
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                other => other?,
            }
        }

        let status = self.wait(&mut child, deadline)?;
        let stdout = self.collect(stdout, deadline)?;
        let stderr = self.collect(stderr, deadline)?;

        if !status.success() {
            warn!(bot = %self.name, %status, "Bot exited unsuccessfully; this could indicate a problem with the bot");
        }
        if !stderr.is_empty() {
            debug!(bot = %self.name, stderr = %String::from_utf8_lossy(&stderr), "Bot stderr");
        }

        let reply: BotReply = serde_json::from_slice(&stdout).map_err(|source| SourceError::Malformed {
            output: String::from_utf8_lossy(&stdout).into_owned(),
            source,
        })?;
        let mv = reply.into_move(request.player());
        debug!(bot = %self.name, %mv, "Bot replied");
        Ok(mv)
    }
}
