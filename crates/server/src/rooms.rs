//! Room jobs dispatched to this worker over HTTP.
//!
//! The platform adapter posts a join for each room it assigns to the agent. A
//! [`BridgeRoomJob`] records the session options it is started with, then marks
//! the room joined; [`ShoppingAgent::handle_room_join`] drives the order.

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use siza_agent::{RoomJob, SessionOptions};
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomState {
    SessionStarted,
    Connected,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoomRecord {
    pub room: String,
    pub state: RoomState,
    pub voice: String,
    pub temperature: f32,
    pub tools: Vec<String>,
    /// Lifecycle steps in the order they happened.
    pub events: Vec<&'static str>,
    pub started_at: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomError {
    #[error("room `{0}` already has an active session")]
    AlreadyActive(String),
    #[error("room `{0}` has no started session")]
    NotStarted(String),
}

#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: Mutex<BTreeMap<String, RoomRecord>>,
}

impl RoomRegistry {
    pub async fn start(&self, room: &str, options: &SessionOptions) -> Result<(), RoomError> {
        let mut rooms = self.rooms.lock().await;
        if rooms.contains_key(room) {
            return Err(RoomError::AlreadyActive(room.to_string()));
        }

        rooms.insert(
            room.to_string(),
            RoomRecord {
                room: room.to_string(),
                state: RoomState::SessionStarted,
                voice: options.model.voice.clone(),
                temperature: options.model.temperature,
                tools: options.tools.names().into_iter().map(str::to_string).collect(),
                events: vec!["session_started"],
                started_at: Utc::now().to_rfc3339(),
            },
        );
        Ok(())
    }

    pub async fn connect(&self, room: &str) -> Result<(), RoomError> {
        let mut rooms = self.rooms.lock().await;
        let record = rooms.get_mut(room).ok_or_else(|| RoomError::NotStarted(room.to_string()))?;
        record.state = RoomState::Connected;
        record.events.push("room_connected");
        Ok(())
    }

    pub async fn leave(&self, room: &str) -> Option<RoomRecord> {
        self.rooms.lock().await.remove(room)
    }

    pub async fn get(&self, room: &str) -> Option<RoomRecord> {
        self.rooms.lock().await.get(room).cloned()
    }

    pub async fn list(&self) -> Vec<RoomRecord> {
        self.rooms.lock().await.values().cloned().collect()
    }
}

pub struct BridgeRoomJob {
    room: String,
    rooms: Arc<RoomRegistry>,
}

impl BridgeRoomJob {
    pub fn new(room: impl Into<String>, rooms: Arc<RoomRegistry>) -> Self {
        Self { room: room.into(), rooms }
    }
}

#[async_trait]
impl RoomJob for BridgeRoomJob {
    fn room_name(&self) -> &str {
        &self.room
    }

    async fn start_session(&mut self, options: SessionOptions) -> Result<()> {
        self.rooms.start(&self.room, &options).await?;
        Ok(())
    }

    async fn connect(&mut self) -> Result<()> {
        self.rooms.connect(&self.room).await?;
        Ok(())
    }
}
