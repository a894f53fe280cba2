//! Conversational backend interface for Orion.
//!
//! This crate provides the shared types used to talk to the remote model:
//! `Message`, `Role`, `Response`, `StreamChunk`, `General`, and the `LLM`
//! trait. Also provides `HttpProvider` for the Gemini REST transport, the
//! `Gemini` provider built on top of it, and `Scripted`, an in-process
//! provider that replays canned replies.

pub use config::General;
pub use gemini::{BASE_URL, Gemini};
pub use http::HttpProvider;
pub use message::{Message, Role};
pub use provider::LLM;
pub use request::{GenerationConfig, Request};
pub use reqwest::{self, Client};
pub use response::{ApiError, ApiErrorBody, Candidate, Content, Part, Response, Usage};
pub use scripted::Scripted;
pub use stream::StreamChunk;

mod config;
mod gemini;
mod http;
mod message;
mod provider;
mod request;
mod response;
mod scripted;
mod stream;
