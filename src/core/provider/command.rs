//! Subprocess decryption provider.
//!
//! Runs `age`, `sops`, or a configured program against the encrypted file
//! and captures its stdout as plaintext.
//!
//! ## Requirements
//!
//! - The provider CLI must be on `PATH` (or configured by absolute path)
//! - `age` needs a key file (`HUSH_KEY_FILE`)
//!
//! ## Usage
//!
//! ```toml
//! # ~/.config/hush/config.toml
//! provider = "command"
//! program = "gpg"
//! args = ["--quiet", "--batch", "--decrypt", "{file}"]
//! ```

use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};
use zeroize::Zeroizing;

use super::Decrypt;
use crate::core::config::{Provider, Settings};
use crate::core::constants;
use crate::core::domain::DecryptionRequest;
use crate::error::{DecryptError, Error, Result};

/// Interval between exit checks while waiting on the provider.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Environment variable sops reads its age identities from.
const SOPS_AGE_KEY_FILE: &str = "SOPS_AGE_KEY_FILE";

type Reader = JoinHandle<std::io::Result<Zeroizing<Vec<u8>>>>;

/// External program provider
#[derive(Debug, Clone)]
pub struct CommandProvider {
    kind: Provider,
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandProvider {
    /// Provider for `kind` with its default program name
    pub fn new(kind: Provider, timeout: Duration) -> Self {
        let program = match kind {
            Provider::Age => "age",
            Provider::Sops => "sops",
            Provider::Command => "",
        };
        Self {
            kind,
            program: program.to_string(),
            args: Vec::new(),
            timeout,
        }
    }

    /// Build from resolved settings
    pub fn from_settings(settings: &Settings) -> Self {
        let mut provider = Self::new(settings.provider, settings.timeout);
        if let Some(program) = &settings.program {
            provider.program = program.clone();
        }
        provider.args = settings.args.clone();
        provider
    }

    /// Custom program with `{file}`/`{key}` placeholders in `args`
    pub fn custom(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            kind: Provider::Command,
            program: program.into(),
            args,
            timeout,
        }
    }

    /// Arguments and extra environment for one request
    fn invocation(
        &self,
        request: &DecryptionRequest<'_>,
    ) -> Result<(Vec<OsString>, Vec<(&'static str, PathBuf)>)> {
        let file = request.file.path().as_os_str().to_os_string();

        match self.kind {
            Provider::Age => {
                let key = request.key_ref.ok_or_else(|| self.missing_key())?;
                Ok((
                    vec![
                        "--decrypt".into(),
                        "--identity".into(),
                        key.as_os_str().to_os_string(),
                        file,
                    ],
                    Vec::new(),
                ))
            }
            Provider::Sops => {
                let args = ["--decrypt", "--input-type", "dotenv", "--output-type", "dotenv"]
                    .into_iter()
                    .map(OsString::from)
                    .chain(std::iter::once(file))
                    .collect();
                let env = request
                    .key_ref
                    .map(|key| vec![(SOPS_AGE_KEY_FILE, key.to_path_buf())])
                    .unwrap_or_default();
                Ok((args, env))
            }
            Provider::Command => {
                if self.args.is_empty() {
                    return Ok((vec![file], Vec::new()));
                }
                let mut args = Vec::with_capacity(self.args.len());
                for arg in &self.args {
                    if arg == constants::ARG_FILE {
                        args.push(file.clone());
                    } else if arg == constants::ARG_KEY {
                        let key = request.key_ref.ok_or_else(|| self.missing_key())?;
                        args.push(key.as_os_str().to_os_string());
                    } else {
                        args.push(arg.into());
                    }
                }
                Ok((args, Vec::new()))
            }
        }
    }

    fn missing_key(&self) -> Error {
        DecryptError::MissingKey {
            provider: self.kind.to_string(),
        }
        .into()
    }

    /// Wait for exit, killing the child once the deadline passes
    fn wait(&self, child: &mut Child) -> Result<ExitStatus> {
        let deadline = Instant::now() + self.timeout;

        loop {
            if let Some(status) = child.try_wait().map_err(DecryptError::Spawn)? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                warn!(
                    program = %self.program,
                    timeout_secs = self.timeout.as_secs(),
                    "provider timed out, killing"
                );
                let _ = child.kill();
                let _ = child.wait();
                return Err(DecryptError::Timeout {
                    secs: self.timeout.as_secs(),
                }
                .into());
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl Decrypt for CommandProvider {
    fn name(&self) -> &str {
        &self.program
    }

    fn decrypt(&self, request: &DecryptionRequest<'_>) -> Result<Zeroizing<Vec<u8>>> {
        let (args, env) = self.invocation(request)?;

        let program = which::which(&self.program).map_err(|_| DecryptError::NotInstalled {
            program: self.program.clone(),
        })?;

        debug!(
            program = %program.display(),
            provider = %self.kind,
            file = %request.file.path().display(),
            "invoking decryption provider"
        );

        let mut cmd = Command::new(&program);
        cmd.args(&args)
            .envs(env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(DecryptError::Spawn)?;

        // Drain both pipes while waiting so a chatty provider can't block on
        // a full pipe buffer.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let status = self.wait(&mut child)?;

        let plaintext = collect(stdout)?;
        let diagnostics = collect(stderr)?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&diagnostics).trim().to_string();
            debug!(status = %status, "provider failed");
            return Err(DecryptError::Failed {
                status: status.to_string(),
                stderr,
            }
            .into());
        }

        trace!(plaintext_len = plaintext.len(), "decrypted");
        Ok(plaintext)
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> Reader {
    thread::spawn(move || -> std::io::Result<Zeroizing<Vec<u8>>> {
        let mut buf = Zeroizing::new(Vec::new());
        pipe.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn collect(reader: Option<Reader>) -> Result<Zeroizing<Vec<u8>>> {
    match reader {
        Some(handle) => {
            let bytes = handle
                .join()
                .map_err(|_| Error::Other("provider output reader panicked".to_string()))?
                .map_err(DecryptError::Spawn)?;
            Ok(bytes)
        }
        None => Ok(Zeroizing::new(Vec::new())),
    }
}
