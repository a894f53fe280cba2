//! Interactive chat REPL with streaming output and persistent history.

use crate::{
    config::{HISTORY_FILE, global_config_dir},
    terminal::stream_to_terminal,
};
use anyhow::Result;
use chrono::Utc;
use llm::LLM;
use rustyline::error::ReadlineError;
use session::{SessionManager, SessionState};
use std::path::PathBuf;

/// Interactive mission chat, generic over the backend.
pub struct ChatRepl<P: LLM> {
    manager: SessionManager<P>,
    state: SessionState,
    editor: rustyline::DefaultEditor,
    history_path: Option<PathBuf>,
    stream: bool,
}

impl<P: LLM> ChatRepl<P> {
    /// Create a new REPL over an active session.
    pub fn new(manager: SessionManager<P>, state: SessionState, stream: bool) -> Result<Self> {
        let mut editor = rustyline::DefaultEditor::new()?;
        let history_path = Some(global_config_dir().join(HISTORY_FILE));
        if let Some(ref path) = history_path {
            let _ = editor.load_history(path);
        }
        Ok(Self {
            manager,
            state,
            editor,
            history_path,
            stream,
        })
    }

    /// Run the interactive REPL loop.
    pub async fn run(&mut self) -> Result<()> {
        println!("Orion is online. Send a trigger, /reroll, /report, /reset or /quit (Ctrl+D).");
        println!("---");

        loop {
            match self.editor.readline("> ") {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(&line);
                    match line.as_str() {
                        "/quit" | "/exit" => break,
                        "/reset" => {
                            self.manager.reset(&mut self.state)?;
                            println!("Mission ended. Start a new one with `orion start`.");
                            break;
                        }
                        _ => run_turn(&self.manager, &mut self.state, &line, self.stream).await?,
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        self.save_history();
        Ok(())
    }

    /// Save readline history to disk.
    fn save_history(&mut self) {
        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = self.editor.save_history(path);
        }
    }
}

/// Run one turn: route the input, print the reply, record and persist it.
///
/// Backend failures are shown and recorded in the history; only session file
/// errors are returned.
pub async fn run_turn<P: LLM>(
    manager: &SessionManager<P>,
    state: &mut SessionState,
    input: &str,
    stream: bool,
) -> Result<()> {
    let outgoing = manager.prepare(state, input, Utc::now())?;
    let reply = if stream {
        stream_to_terminal(manager.reply_stream(&outgoing)).await
    } else {
        manager.reply(&outgoing).await
    };

    let answered = reply.as_ref().is_ok_and(|text| !text.is_empty());
    let recorded = manager.complete(state, outgoing, reply, Utc::now())?;
    if !answered {
        eprintln!("{recorded}");
    } else if !stream {
        println!("{recorded}");
    }
    println!();
    Ok(())
}
