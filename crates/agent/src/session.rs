//! Room-join entrypoint.
//!
//! The real-time platform owns rooms, transport, speech and the model; it calls
//! [`ShoppingAgent::handle_room_join`] once per room it dispatches to this agent.
//! The session is configured and started before the room connection is made,
//! so the audio policy is in place before any participant audio flows.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use siza_core::config::{AppConfig, ModelConfig};
use siza_core::{select_audio_policy, AudioPolicyVariant, ParticipantKind};
use tracing::{debug, info, info_span, Instrument};

use crate::persona::AgentPersona;
use crate::tools::ToolRegistry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantInfo {
    pub identity: String,
    pub kind: ParticipantKind,
}

pub type NoiseCancellationSelector = fn(&ParticipantInfo) -> AudioPolicyVariant;

/// Audio input settings. The platform calls the selector for each participant
/// whose audio it subscribes to.
#[derive(Clone, Copy, Debug)]
pub struct AudioInputOptions {
    pub noise_cancellation: NoiseCancellationSelector,
}

impl Default for AudioInputOptions {
    fn default() -> Self {
        Self { noise_cancellation: per_participant_noise_cancellation }
    }
}

impl AudioInputOptions {
    pub fn resolve(&self, participant: &ParticipantInfo) -> AudioPolicyVariant {
        let variant = (self.noise_cancellation)(participant);
        debug!(
            event_name = "agent.audio.policy_selected",
            participant = %participant.identity,
            kind = ?participant.kind,
            variant = %variant,
            processor = variant.processor_name(),
            "audio input policy selected"
        );
        variant
    }
}

fn per_participant_noise_cancellation(participant: &ParticipantInfo) -> AudioPolicyVariant {
    select_audio_policy(participant.kind)
}

#[derive(Clone, Debug, PartialEq)]
pub struct RealtimeModelOptions {
    pub voice: String,
    pub temperature: f32,
    pub instructions: String,
}

impl From<&ModelConfig> for RealtimeModelOptions {
    fn from(model: &ModelConfig) -> Self {
        Self {
            voice: model.voice.clone(),
            temperature: model.temperature,
            instructions: model.instructions.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionOptions {
    pub model: RealtimeModelOptions,
    /// Agent-level system instruction (persona and shopping workflow).
    pub instructions: String,
    pub audio_input: AudioInputOptions,
    pub tools: Arc<ToolRegistry>,
}

/// The platform's per-room job.
#[async_trait]
pub trait RoomJob: Send {
    fn room_name(&self) -> &str;
    async fn start_session(&mut self, options: SessionOptions) -> Result<()>;
    async fn connect(&mut self) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct ShoppingAgent {
    name: String,
    model: RealtimeModelOptions,
    persona: AgentPersona,
    tools: Arc<ToolRegistry>,
}

impl ShoppingAgent {
    pub fn new(config: &AppConfig, tools: Arc<ToolRegistry>) -> Self {
        Self {
            name: config.agent.name.clone(),
            model: RealtimeModelOptions::from(&config.model),
            persona: AgentPersona::default(),
            tools,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tools(&self) -> &Arc<ToolRegistry> {
        &self.tools
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            model: self.model.clone(),
            instructions: self.persona.instructions.clone(),
            audio_input: AudioInputOptions::default(),
            tools: Arc::clone(&self.tools),
        }
    }

    pub async fn handle_room_join<J>(&self, job: &mut J) -> Result<()>
    where
        J: RoomJob + ?Sized,
    {
        let room = job.room_name().to_string();
        let span = info_span!("room_job", room = %room, agent = %self.name);

        async move {
            info!(
                event_name = "agent.session.starting",
                voice = %self.model.voice,
                temperature = self.model.temperature,
                "starting session"
            );
            job.start_session(self.session_options())
                .await
                .with_context(|| format!("failed to start session for room `{room}`"))?;

            job.connect().await.with_context(|| format!("failed to join room `{room}`"))?;
            info!(event_name = "agent.session.connected", "joined room");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use siza_core::config::AppConfig;
    use siza_core::{AudioPolicyVariant, ParticipantKind};

    use super::{ParticipantInfo, RoomJob, SessionOptions, ShoppingAgent};
    use crate::tools::ToolRegistry;

    #[derive(Default)]
    struct RecordingJob {
        events: Vec<&'static str>,
        options: Option<SessionOptions>,
        fail_start: bool,
    }

    #[async_trait]
    impl RoomJob for RecordingJob {
        fn room_name(&self) -> &str {
            "room-123"
        }

        async fn start_session(&mut self, options: SessionOptions) -> Result<()> {
            self.events.push("start_session");
            if self.fail_start {
                return Err(anyhow!("model unavailable"));
            }
            self.options = Some(options);
            Ok(())
        }

        async fn connect(&mut self) -> Result<()> {
            self.events.push("connect");
            Ok(())
        }
    }

    fn agent() -> ShoppingAgent {
        ShoppingAgent::new(&AppConfig::default(), Arc::new(ToolRegistry::default()))
    }

    #[tokio::test]
    async fn session_starts_before_room_connect() {
        let mut job = RecordingJob::default();
        agent().handle_room_join(&mut job).await.expect("room join should succeed");

        assert_eq!(job.events, vec!["start_session", "connect"]);
        let options = job.options.expect("options recorded");
        assert_eq!(options.model.voice, "Puck");
        assert!(options.instructions.starts_with("You are Siza"));
    }

    #[tokio::test]
    async fn failed_session_start_never_connects() {
        let mut job = RecordingJob { fail_start: true, ..RecordingJob::default() };
        let error = agent().handle_room_join(&mut job).await.expect_err("start failure");

        assert_eq!(job.events, vec!["start_session"]);
        assert!(error.to_string().contains("room-123"));
    }

    #[test]
    fn audio_selector_is_evaluated_per_participant() {
        let options = agent().session_options();
        let phone = ParticipantInfo { identity: "caller".into(), kind: ParticipantKind::Sip };
        let browser = ParticipantInfo { identity: "web".into(), kind: ParticipantKind::Standard };

        assert_eq!(options.audio_input.resolve(&phone), AudioPolicyVariant::Telephony);
        assert_eq!(options.audio_input.resolve(&browser), AudioPolicyVariant::General);
    }
}
