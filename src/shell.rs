//! Terminal shell — stdin/stdout REPL around a `DraftSession`.
//!
//! Plain lines build up the email body; `/commands` drive the session.
//! Drafts go to stdout, prompts and logs to stderr.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::DrafterConfig;
use crate::drafter::types::EmailDraftRequest;
use crate::error::Result;
use crate::session::{Draft, DraftSession};

const HELP: &str = "\
Type or paste the email body, then:
  /from <sender>     set the sender (optional)
  /subject <text>    set the subject (optional)
  /generate          draft a reply
  /edit              rewrite the draft; finish with a line containing only '.'
  /show              show the current draft
  /json              show the current draft as JSON
  /approve           approve the draft (simulated, nothing is sent)
  /reset             clear the email and the draft
  /history           list processed emails, newest first
  /help              show this help
  /quit              exit
Start a body line with // to keep a leading / that would read as a command.";

/// Line that ends `/edit` mode.
const EDIT_TERMINATOR: &str = ".";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    From(String),
    Subject(String),
    Generate,
    Edit,
    Show,
    Json,
    Approve,
    Reset,
    History,
    Help,
    Quit,
    /// Not a command: part of the email body.
    Text(String),
}

impl ShellCommand {
    /// Parse one input line.
    ///
    /// A line is a command only when it names one of the commands above.
    /// Any other line, including `/var/log...`, is body text; `//` at the
    /// start escapes a line that would otherwise read as a command.
    pub fn parse(line: &str) -> Self {
        let text = line.trim_end();
        let trimmed = text.trim_start();
        if trimmed.starts_with("//") {
            return Self::Text(text.replacen('/', "", 1));
        }
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Self::Text(text.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "from" => Self::From(arg.to_string()),
            "subject" => Self::Subject(arg.to_string()),
            "generate" | "gen" => Self::Generate,
            "edit" => Self::Edit,
            "show" => Self::Show,
            "json" => Self::Json,
            "approve" => Self::Approve,
            "reset" | "cancel" => Self::Reset,
            "history" => Self::History,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Text(text.to_string()),
        }
    }
}

/// Whether the REPL should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// REPL state: the email form being typed, edit buffer, and session.
pub struct Shell<W: Write> {
    session: DraftSession,
    form: EmailDraftRequest,
    edit_buffer: Option<Vec<String>>,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(session: DraftSession, out: W) -> Self {
        Self {
            session,
            form: EmailDraftRequest::default(),
            edit_buffer: None,
            out,
        }
    }

    pub fn session(&self) -> &DraftSession {
        &self.session
    }

    /// Email as typed so far.
    pub fn form(&self) -> &EmailDraftRequest {
        &self.form
    }

    /// True while `/edit` is collecting replacement text.
    pub fn is_editing(&self) -> bool {
        self.edit_buffer.is_some()
    }

    /// Consume the shell and return its writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Print usage.
    pub fn greet(&mut self) -> Result<()> {
        writeln!(self.out, "{HELP}\n")?;
        Ok(())
    }

    /// Handle one line of input.
    pub async fn handle_line(&mut self, line: &str) -> Result<Flow> {
        if let Some(buffer) = self.edit_buffer.as_mut() {
            if line.trim() == EDIT_TERMINATOR {
                let text = buffer.join("\n");
                self.edit_buffer = None;
                match self.session.edit(text) {
                    Ok(draft) => render_draft(&mut self.out, draft)?,
                    Err(e) => writeln!(self.out, "❌ {e}")?,
                }
            } else {
                buffer.push(line.trim_end().to_string());
            }
            return Ok(Flow::Continue);
        }

        match ShellCommand::parse(line) {
            ShellCommand::Text(text) => {
                // Blank lines only matter once the body has started.
                if !(text.is_empty() && self.form.body.is_empty()) {
                    if !self.form.body.is_empty() {
                        self.form.body.push('\n');
                    }
                    self.form.body.push_str(&text);
                }
            }
            ShellCommand::From(sender) => {
                self.form.sender = (!sender.is_empty()).then_some(sender);
            }
            ShellCommand::Subject(subject) => {
                self.form.subject = subject;
            }
            ShellCommand::Generate => {
                let request = self.form.clone();
                match self.session.generate(request).await {
                    Ok(draft) => render_draft(&mut self.out, draft)?,
                    Err(e) => writeln!(self.out, "❌ {e}")?,
                }
            }
            ShellCommand::Edit => {
                if self.session.current().is_some() {
                    self.edit_buffer = Some(Vec::new());
                    writeln!(
                        self.out,
                        "Enter the new reply. Finish with a line containing only '{EDIT_TERMINATOR}'."
                    )?;
                } else {
                    writeln!(self.out, "❌ {}", crate::error::DraftError::NoDraft)?;
                }
            }
            ShellCommand::Show => match self.session.current() {
                Some(draft) => render_draft(&mut self.out, draft)?,
                None => writeln!(self.out, "No draft yet.")?,
            },
            ShellCommand::Json => match self.session.current() {
                Some(draft) => {
                    let json = serde_json::to_string_pretty(draft).map_err(std::io::Error::other)?;
                    writeln!(self.out, "{json}")?;
                }
                None => writeln!(self.out, "No draft yet.")?,
            },
            ShellCommand::Approve => match self.session.approve() {
                Ok(approved) => {
                    self.form = EmailDraftRequest::default();
                    writeln!(
                        self.out,
                        "✅ Reply approved: \"{}\". Nothing was sent; a full version would hand it to your email client.",
                        approved.subject
                    )?;
                }
                Err(e) => writeln!(self.out, "❌ {e}")?,
            },
            ShellCommand::Reset => {
                self.session.reset();
                self.form = EmailDraftRequest::default();
                writeln!(self.out, "Cleared.")?;
            }
            ShellCommand::History => {
                let history = self.session.history();
                if history.is_empty() {
                    writeln!(self.out, "No emails processed yet.")?;
                }
                for entry in history.iter() {
                    writeln!(
                        self.out,
                        "{}  [{}]  {}  (from {})",
                        entry.created_at.with_timezone(&chrono::Local).format("%H:%M"),
                        entry.category,
                        entry.subject,
                        entry.sender
                    )?;
                }
            }
            ShellCommand::Help => writeln!(self.out, "{HELP}")?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}

fn render_draft<W: Write>(out: &mut W, draft: &Draft) -> std::io::Result<()> {
    let reply = &draft.reply;
    writeln!(out)?;
    writeln!(out, "Subject:  {}", reply.subject)?;
    writeln!(out, "Category: {}", reply.category)?;
    writeln!(out, "Tone:     {}", reply.tone)?;
    writeln!(out)?;
    writeln!(out, "{}", draft.text)?;
    writeln!(out)?;
    writeln!(out, "Remarks:  {}", reply.remarks)?;
    if draft.is_edited() {
        writeln!(out, "(edited)")?;
    }
    writeln!(out)
}

/// Run the REPL on stdin/stdout until `/quit` or EOF.
pub async fn run(config: &DrafterConfig) -> Result<()> {
    let mut shell = Shell::new(DraftSession::new(config), std::io::stdout());
    shell.greet()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    eprint!("> ");

    while let Some(line) = lines.next_line().await? {
        if shell.handle_line(&line).await? == Flow::Quit {
            break;
        }
        shell.out.flush()?;
        if !shell.is_editing() {
            eprint!("> ");
        }
    }

    tracing::info!(
        processed = shell.session().history().len(),
        "Session ended"
    );
    Ok(())
}
