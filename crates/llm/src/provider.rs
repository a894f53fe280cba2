//! Provider abstractions for the conversational backend

use crate::{General, Message, Response, StreamChunk};
use anyhow::Result;
use futures_core::Stream;

/// A trait for conversational backends.
///
/// `messages` is the full ordered context, ending with the outgoing turn.
pub trait LLM: Clone {
    /// Send the conversation and wait for the whole reply
    fn send(
        &self,
        config: &General,
        messages: &[Message],
    ) -> impl Future<Output = Result<Response>> + Send;

    /// Send the conversation and receive the reply as incremental fragments
    fn stream(
        &self,
        config: General,
        messages: &[Message],
    ) -> impl Stream<Item = Result<StreamChunk>> + Send;
}
