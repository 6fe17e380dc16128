//! Interactive prompts
//!
//! All prompts write to stderr so stdout stays clean for response bodies.
//! The method selector is generic over its reader/writer so it can be
//! exercised without a TTY.

use std::io::{self, BufRead, Write};

use dialoguer::Input;

use crate::auth::{AuthMethod, Credentials};
use crate::errors::{PvwaError, Result};

/// Present the numbered method menu and read a selection.
///
/// Re-prompts on anything that is not a digit in range; returns an error
/// only when the input stream ends.
pub fn select_method<R: BufRead, W: Write>(mut input: R, mut out: W) -> io::Result<AuthMethod> {
    writeln!(out, "Select authentication method:")?;
    for (idx, method) in AuthMethod::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", idx + 1, method)?;
    }

    loop {
        write!(out, "Enter choice (1-{}): ", AuthMethod::ALL.len())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no selection made",
            ));
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=AuthMethod::ALL.len()).contains(&n) => {
                return Ok(AuthMethod::ALL[n - 1]);
            }
            _ => writeln!(out, "Invalid selection.")?,
        }
    }
}

/// Interactive method selection on stdin/stderr
pub async fn select_method_interactive() -> Result<AuthMethod> {
    spawn_prompt(|| {
        let stdin = io::stdin();
        select_method(stdin.lock(), io::stderr())
    })
    .await?
    .map_err(Into::into)
}

/// Collect a username (visible) and password (masked)
pub async fn read_credentials() -> Result<Credentials> {
    spawn_prompt(|| {
        let username: String = Input::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(|e| PvwaError::Prompt(e.to_string()))?;

        eprint!("Password: ");
        io::stderr().flush().ok();
        let password = rpassword::read_password()?;

        Ok(Credentials { username, password })
    })
    .await?
}

/// Block until the operator presses ENTER
pub async fn enter_gate(message: &str) -> Result<()> {
    let message = message.to_string();
    spawn_prompt(move || {
        eprint!("{} ", message);
        io::stderr().flush().ok();
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(())
    })
    .await?
}

/// Console reads are blocking; keep them off the async runtime's workers.
async fn spawn_prompt<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| PvwaError::Prompt(format!("input task failed: {}", e)))
}
