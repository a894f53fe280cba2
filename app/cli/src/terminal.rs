//! Terminal output utilities for replies and history.

use anyhow::Result;
use chrono::Local;
use futures_core::Stream;
use futures_util::StreamExt;
use session::{Message, Role};
use std::{io::Write, pin::pin};

/// Consume a stream of reply fragments, printing them to stdout as they
/// arrive, and return the full reply.
///
/// The first failing fragment aborts the reply; text printed so far is not
/// part of the result.
pub async fn stream_to_terminal(stream: impl Stream<Item = Result<String>>) -> Result<String> {
    let mut stream = pin!(stream);
    let mut reply = String::new();

    while let Some(fragment) = stream.next().await {
        match fragment {
            Ok(text) => {
                print!("{text}");
                std::io::stdout().flush().ok();
                reply.push_str(&text);
            }
            Err(e) => {
                println!();
                return Err(e);
            }
        }
    }

    println!();
    Ok(reply)
}

/// Render one history message as `[HH:MM] role: content`.
pub fn render_message(message: &Message) -> String {
    let speaker = match message.role {
        Role::User => "you",
        Role::Assistant => "orion",
    };
    match message.timestamp {
        Some(at) => format!(
            "[{}] {speaker}: {}",
            at.with_timezone(&Local).format("%H:%M"),
            message.content
        ),
        None => format!("{speaker}: {}", message.content),
    }
}

/// Print a whole history, one message per paragraph.
pub fn print_history(history: &[Message]) {
    for message in history {
        println!("{}\n", render_message(message));
    }
}
