//! Session lifecycle: start, turns, persistence, restore and reset.

use crate::{
    Error, MissionParameters, Restore, Result, Role, SessionState, SessionStore, router,
};
use chrono::{DateTime, Utc};
use futures_core::Stream;
use futures_util::StreamExt;
use llm::{General, LLM};

/// Drives a [`SessionState`] against a backend and a session file.
pub struct SessionManager<P: LLM> {
    provider: P,
    config: General,
    store: SessionStore,
}

/// A turn that has been recorded but not yet answered.
#[derive(Debug, Clone)]
pub struct Outgoing {
    /// Routed text sent to the backend.
    pub text: String,
    /// Full backend context, ending with `text`.
    pub messages: Vec<llm::Message>,
}

impl<P: LLM> SessionManager<P> {
    /// Create a manager.
    pub fn new(provider: P, config: General, store: SessionStore) -> Self {
        Self {
            provider,
            config,
            store,
        }
    }

    /// The session file store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Start a mission.
    ///
    /// Sends the briefing as the first turn and records the backend's
    /// acknowledgment as the first message. Any failure is an
    /// [`Error::Initialization`] and leaves nothing behind, on disk or in
    /// memory. The new state is persisted before it is returned.
    pub async fn start(
        &self,
        params: MissionParameters,
        now: DateTime<Utc>,
    ) -> Result<SessionState> {
        params.validate()?;
        let briefing = llm::Message::user(params.system_prompt(now));
        let response = self
            .provider
            .send(&self.config, std::slice::from_ref(&briefing))
            .await
            .map_err(|err| Error::Initialization(format!("{err:#}")))?;
        let ack = response.content().ok_or_else(|| {
            Error::Initialization("the model returned an empty acknowledgment".into())
        })?;

        let mut state = SessionState {
            session_started: true,
            start_time: Some(now),
            history: Vec::new(),
            mission: Some(params),
            conversation: vec![briefing, llm::Message::model(&ack)],
        };
        state.append(Role::Assistant, ack, now);
        self.persist(&state)?;
        tracing::info!("mission started at {now}");
        Ok(state)
    }

    /// Write the state to the session file.
    pub fn persist(&self, state: &SessionState) -> Result<()> {
        self.store.save(&state.to_file())
    }

    /// Load the session file; see [`SessionStore::restore`].
    pub fn restore(&self) -> Result<Restore> {
        self.store.restore()
    }

    /// End the session: delete the file and clear `state`.
    pub fn reset(&self, state: &mut SessionState) -> Result<()> {
        self.store.remove()?;
        *state = SessionState::default();
        tracing::info!("session reset");
        Ok(())
    }

    /// Record `input` and route it into the text for the backend.
    pub fn prepare(
        &self,
        state: &mut SessionState,
        input: &str,
        now: DateTime<Utc>,
    ) -> Result<Outgoing> {
        if !state.is_active() {
            return Err(Error::Inactive);
        }

        let input = input.trim();
        let text = router::route(input, &state.history, state.start_time, now);
        state.append(Role::User, input, now);

        let mut messages = state.conversation.clone();
        messages.push(llm::Message::user(&text));
        Ok(Outgoing { text, messages })
    }

    /// Record the backend's answer to `outgoing` and persist.
    ///
    /// A failed call is recorded as the assistant's reply (`Error: ...`) and
    /// persisted all the same. Returns the recorded reply text.
    pub fn complete(
        &self,
        state: &mut SessionState,
        outgoing: Outgoing,
        reply: anyhow::Result<String>,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let reply = reply.and_then(|text| {
            if text.is_empty() {
                anyhow::bail!("the model returned an empty reply");
            }
            Ok(text)
        });

        let recorded = match reply {
            Ok(text) => {
                state.conversation.push(llm::Message::user(outgoing.text));
                state.conversation.push(llm::Message::model(&text));
                text
            }
            Err(err) => {
                tracing::warn!("turn failed: {err:#}");
                Error::Turn(format!("{err:#}")).to_string()
            }
        };

        state.append(Role::Assistant, recorded.clone(), now);
        self.persist(state)?;
        Ok(recorded)
    }

    /// Ask for the whole reply to `outgoing` at once.
    pub async fn reply(&self, outgoing: &Outgoing) -> anyhow::Result<String> {
        let response = self.provider.send(&self.config, &outgoing.messages).await?;
        Ok(response.content().unwrap_or_default())
    }

    /// Stream the reply to `outgoing` as text fragments.
    pub fn reply_stream<'a>(
        &'a self,
        outgoing: &'a Outgoing,
    ) -> impl Stream<Item = anyhow::Result<String>> + Send + 'a {
        self.provider
            .stream(self.config.clone(), &outgoing.messages)
            .filter_map(|chunk| async move {
                match chunk {
                    Ok(chunk) => chunk.content().map(Ok),
                    Err(err) => Some(Err(err)),
                }
            })
    }

    /// Run one whole-message turn: route, send, record, persist.
    pub async fn send(
        &self,
        state: &mut SessionState,
        input: &str,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let outgoing = self.prepare(state, input, now)?;
        let reply = self.reply(&outgoing).await;
        self.complete(state, outgoing, reply, now)
    }
}
