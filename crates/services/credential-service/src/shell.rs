//! Line-oriented shell over a credential directory.
//!
//! One command per line, whitespace separated. The token `""` stands for
//! the empty string so empty-input cases can be typed.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::service::CredentialService;
use common::{AppError, AppResult};

const EMPTY_TOKEN: &str = "\"\"";

const HELP: &str = "\
commands:
  register <email> <password>   store a new user, prints true/false
  login <email> <password>      prints 1 ok, -1 unknown_email or -2 bad_password
  count                         number of stored users
  users                         stored users as JSON (email, created_at)
  help                          this text
  quit | exit                   leave the shell
use \"\" for an empty value";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register { email: String, password: String },
    Login { email: String, password: String },
    Count,
    Users,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<String> = tokens.map(unquote).collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "register" => {
                let (email, password) = credentials(name, args)?;
                Command::Register { email, password }
            }
            "login" => {
                let (email, password) = credentials(name, args)?;
                Command::Login { email, password }
            }
            "count" => no_args(Command::Count, name, &args)?,
            "users" => no_args(Command::Users, name, &args)?,
            "help" => no_args(Command::Help, name, &args)?,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(AppError::invalid_command(format!(
                    "unknown command '{}', try 'help'",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

fn unquote(token: &str) -> String {
    if token == EMPTY_TOKEN {
        String::new()
    } else {
        token.to_string()
    }
}

fn credentials(name: &str, args: Vec<String>) -> AppResult<(String, String)> {
    let [email, password]: [String; 2] = args
        .try_into()
        .map_err(|_| AppError::invalid_command(format!("usage: {} <email> <password>", name)))?;
    Ok((email, password))
}

fn no_args(command: Command, name: &str, args: &[String]) -> AppResult<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(AppError::invalid_command(format!("'{}' takes no arguments", name)))
    }
}

/// Run a single command and render its output line.
pub fn execute(directory: &dyn CredentialService, command: &Command, explain: bool) -> String {
    match command {
        Command::Register { email, password } => match directory.try_register(email, password) {
            Ok(_) => "true".to_string(),
            Err(e) if explain => format!("false ({})", AppError::from(e).user_message()),
            Err(_) => "false".to_string(),
        },
        Command::Login { email, password } => directory.login(email, password).to_string(),
        Command::Count => directory.len().to_string(),
        Command::Users => match serde_json::to_string(&directory.records()) {
            Ok(json) => json,
            Err(e) => format!("error: {}", AppError::internal(e.to_string()).user_message()),
        },
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    }
}

/// Interactive shell bound to one directory.
pub struct Shell<S: CredentialService + 'static> {
    directory: Arc<S>,
    explain: bool,
}

impl<S: CredentialService + 'static> Shell<S> {
    pub fn new(directory: Arc<S>) -> Self {
        Self {
            directory,
            explain: false,
        }
    }

    /// Print the refusal reason after a failed `register`
    pub fn explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Malformed lines produce an `error:` line; only I/O failures end the
    /// session early.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let output = match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.dispatch(command).await?,
                Err(e) => format!("error: {}", e.user_message()),
            };

            writer.write_all(output.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        debug!("Shell input closed");
        Ok(())
    }

    // Hashing is CPU-bound, keep it off the async worker threads
    async fn dispatch(&self, command: Command) -> AppResult<String> {
        let directory = Arc::clone(&self.directory);
        let explain = self.explain;

        tokio::task::spawn_blocking(move || execute(directory.as_ref(), &command, explain))
            .await
            .map_err(|e| AppError::internal(format!("Shell task failed: {}", e)))
    }
}
