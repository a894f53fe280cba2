//! Scripted LLM provider.
//!
//! Replays a queue of canned replies (or failures) and records every
//! conversation it was asked to continue. Lets the session layer be
//! exercised end to end without network access.

use crate::{General, LLM, Message, Response, StreamChunk};
use anyhow::{Result, anyhow};
use futures_core::Stream;
use parking_lot::Mutex;
use std::{collections::VecDeque, sync::Arc};

/// A provider that answers from a fixed script.
///
/// Clones share the same script and request log.
#[derive(Clone, Default)]
pub struct Scripted {
    inner: Arc<Mutex<Script>>,
}

#[derive(Default)]
struct Script {
    replies: VecDeque<Entry>,
    requests: Vec<Vec<Message>>,
}

/// One scripted answer.
enum Entry {
    Reply(String),
    /// Streams `fragments` words of `text`, then fails with `error`.
    /// Whole-message requests fail outright.
    Broken {
        text: String,
        fragments: usize,
        error: String,
    },
}

impl Scripted {
    /// Create an empty script. Every call fails until replies are queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.inner.lock().replies.push_back(Entry::Reply(text.into()));
        self
    }

    /// Queue a failure with the given message.
    pub fn fail(self, error: impl Into<String>) -> Self {
        self.fail_after("", 0, error)
    }

    /// Queue a reply that breaks off: a stream yields the first `fragments`
    /// words of `text` before failing with `error`.
    pub fn fail_after(
        self,
        text: impl Into<String>,
        fragments: usize,
        error: impl Into<String>,
    ) -> Self {
        self.inner.lock().replies.push_back(Entry::Broken {
            text: text.into(),
            fragments,
            error: error.into(),
        });
        self
    }

    /// Conversations received so far, in call order.
    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.inner.lock().requests.clone()
    }

    fn next(&self, messages: &[Message]) -> Entry {
        let mut script = self.inner.lock();
        script.requests.push(messages.to_vec());
        script.replies.pop_front().unwrap_or_else(|| Entry::Broken {
            text: String::new(),
            fragments: 0,
            error: "script exhausted".into(),
        })
    }
}

impl LLM for Scripted {
    async fn send(&self, _config: &General, messages: &[Message]) -> Result<Response> {
        match self.next(messages) {
            Entry::Reply(text) => Ok(Response::with_text(text)),
            Entry::Broken { error, .. } => Err(anyhow!(error)),
        }
    }

    fn stream(
        &self,
        _config: General,
        messages: &[Message],
    ) -> impl Stream<Item = Result<StreamChunk>> + Send {
        let (text, cut) = match self.next(messages) {
            Entry::Reply(text) => (text, None),
            Entry::Broken {
                text,
                fragments,
                error,
            } => (text, Some((fragments, error))),
        };
        async_stream::try_stream! {
            let limit = cut.as_ref().map_or(usize::MAX, |(fragments, _)| *fragments);
            for fragment in text.split_inclusive(' ').take(limit) {
                yield StreamChunk::text(fragment);
            }
            if let Some((_, error)) = cut {
                Err::<(), _>(anyhow!(error))?;
            }
        }
    }
}
