//! HTTP bridge the real-time platform adapter uses to reach the agent: tool
//! definitions and calls, room jobs, the session descriptor, and the audio
//! policy lookup.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use siza_agent::{ToolCall, ToolDefinition};
use siza_core::config::PlatformConfig;
use siza_core::{select_audio_policy, AudioPolicyVariant, InterfaceError, ParticipantKind};
use tracing::{info, warn};
use uuid::Uuid;

use crate::http::AppState;
use crate::rooms::{BridgeRoomJob, RoomError, RoomRecord};

pub const CALL_ID_HEADER: &str = "x-call-id";
pub const PLATFORM_KEY_HEADER: &str = "x-platform-key";
pub const PLATFORM_SECRET_HEADER: &str = "x-platform-secret";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApiFailure {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    pub message: String,
    pub user_message: String,
    pub correlation_id: String,
}

impl ApiFailure {
    fn new(
        status: StatusCode,
        error: &str,
        message: impl Into<String>,
        user_message: &str,
        correlation_id: impl Into<String>,
    ) -> Self {
        Self {
            status,
            error: error.to_string(),
            message: message.into(),
            user_message: user_message.to_string(),
            correlation_id: correlation_id.into(),
        }
    }
}

impl From<&InterfaceError> for ApiFailure {
    fn from(error: &InterfaceError) -> Self {
        let status = match error {
            InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            InterfaceError::NotFound { .. } => StatusCode::NOT_FOUND,
            InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(
            status,
            error.error_class(),
            error.message(),
            error.user_message(),
            error.correlation_id(),
        )
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModelDescriptor {
    pub voice: String,
    pub temperature: f32,
    pub instructions: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionDescriptor {
    pub agent_name: String,
    pub instructions: String,
    pub model: ModelDescriptor,
    pub tools: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JoinResponse {
    pub platform_url: String,
    pub session: SessionDescriptor,
    pub room: RoomRecord,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AudioPolicyQuery {
    pub kind: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AudioPolicyResponse {
    pub kind: ParticipantKind,
    pub variant: AudioPolicyVariant,
    pub processor: &'static str,
}

pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolDefinition>> {
    Json(state.agent.tools().definitions())
}

pub async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiFailure> {
    let call_id = correlation_id(&headers);

    let arguments = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        match serde_json::from_slice(&body) {
            Ok(arguments) => arguments,
            Err(error) => {
                let failure = InterfaceError::BadRequest {
                    message: format!("request body is not valid JSON: {error}"),
                    correlation_id: call_id,
                };
                warn!(
                    event_name = "agent.tool.failed",
                    correlation_id = %failure.correlation_id(),
                    tool = %name,
                    outcome = failure.error_class(),
                    error = %failure,
                    "tool call failed"
                );
                return Err(ApiFailure::from(&failure));
            }
        }
    };

    state
        .agent
        .tools()
        .call(ToolCall::new(call_id, name, arguments))
        .await
        .map(Json)
        .map_err(|error| ApiFailure::from(&error))
}

pub async fn session(State(state): State<AppState>) -> Json<SessionDescriptor> {
    Json(session_descriptor(&state))
}

fn session_descriptor(state: &AppState) -> SessionDescriptor {
    let options = state.agent.session_options();
    SessionDescriptor {
        agent_name: state.agent.name().to_string(),
        instructions: options.instructions,
        model: ModelDescriptor {
            voice: options.model.voice,
            temperature: options.model.temperature,
            instructions: options.model.instructions,
        },
        tools: options.tools.names().into_iter().map(str::to_string).collect(),
    }
}

/// Runs the room-join entrypoint for a room the platform dispatched to us.
pub async fn join_room(
    State(state): State<AppState>,
    Path(room): Path<String>,
    headers: HeaderMap,
) -> Result<Json<JoinResponse>, ApiFailure> {
    let correlation_id = correlation_id(&headers);
    authorize(&state.platform, &headers, &correlation_id)?;

    let mut job = BridgeRoomJob::new(room.clone(), Arc::clone(&state.rooms));
    if let Err(error) = state.agent.handle_room_join(&mut job).await {
        warn!(
            event_name = "agent.room.join_failed",
            correlation_id = %correlation_id,
            room = %room,
            error = %format!("{error:#}"),
            "room join failed"
        );
        // A session that started but never connected is not left behind.
        if !matches!(error.downcast_ref::<RoomError>(), Some(RoomError::AlreadyActive(_))) {
            state.rooms.leave(&room).await;
        }
        return Err(room_failure(&error, correlation_id));
    }

    let record = state.rooms.get(&room).await.ok_or_else(|| {
        ApiFailure::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal",
            format!("room `{room}` left before the join completed"),
            "An unexpected internal error occurred.",
            correlation_id.clone(),
        )
    })?;
    info!(
        event_name = "agent.room.joined",
        correlation_id = %correlation_id,
        room = %room,
        "room joined"
    );

    Ok(Json(JoinResponse {
        platform_url: state.platform.url.clone(),
        session: session_descriptor(&state),
        room: record,
    }))
}

pub async fn leave_room(
    State(state): State<AppState>,
    Path(room): Path<String>,
    headers: HeaderMap,
) -> Result<Json<RoomRecord>, ApiFailure> {
    let correlation_id = correlation_id(&headers);
    authorize(&state.platform, &headers, &correlation_id)?;

    match state.rooms.leave(&room).await {
        Some(record) => {
            info!(
                event_name = "agent.room.left",
                correlation_id = %correlation_id,
                room = %room,
                "room left"
            );
            Ok(Json(record))
        }
        None => Err(ApiFailure::new(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("room `{room}` has no active session"),
            "The requested room is not active.",
            correlation_id,
        )),
    }
}

pub async fn list_rooms(State(state): State<AppState>) -> Json<Vec<RoomRecord>> {
    Json(state.rooms.list().await)
}

pub async fn audio_policy(Query(query): Query<AudioPolicyQuery>) -> Json<AudioPolicyResponse> {
    let kind = query
        .kind
        .as_deref()
        .map(|raw| raw.parse::<ParticipantKind>().unwrap_or_default())
        .unwrap_or_default();
    let variant = select_audio_policy(kind);
    Json(AudioPolicyResponse { kind, variant, processor: variant.processor_name() })
}

fn correlation_id(headers: &HeaderMap) -> String {
    headers
        .get(CALL_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Room jobs are only accepted from the platform once credentials are
/// configured; without them the worker runs in open development mode.
fn authorize(
    platform: &PlatformConfig,
    headers: &HeaderMap,
    correlation_id: &str,
) -> Result<(), ApiFailure> {
    let (Some(key), Some(secret)) = (&platform.api_key, &platform.api_secret) else {
        return Ok(());
    };

    let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());
    let key_matches = header(PLATFORM_KEY_HEADER) == Some(key.expose_secret());
    let secret_matches = header(PLATFORM_SECRET_HEADER) == Some(secret.expose_secret());
    if key_matches && secret_matches {
        return Ok(());
    }

    Err(ApiFailure::new(
        StatusCode::UNAUTHORIZED,
        "unauthorized",
        "platform credentials are missing or do not match",
        "The caller is not allowed to dispatch room jobs.",
        correlation_id,
    ))
}

fn room_failure(error: &anyhow::Error, correlation_id: String) -> ApiFailure {
    match error.downcast_ref::<RoomError>() {
        Some(RoomError::AlreadyActive(_)) => ApiFailure::new(
            StatusCode::CONFLICT,
            "conflict",
            format!("{error:#}"),
            "The room already has an active shopping session.",
            correlation_id,
        ),
        _ => ApiFailure::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal",
            format!("{error:#}"),
            "An unexpected internal error occurred.",
            correlation_id,
        ),
    }
}
