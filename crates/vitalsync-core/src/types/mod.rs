//! Domain vocabulary shared across the vitalsync services.
//!
//! This module provides the data structures exchanged over the HTTP surface
//! and persisted by the backing services.
//!
//! # Overview
//!
//! The types module includes:
//!
//! - **Missions**: Daily health mission goals and completion tracking
//! - **Users**: Member records, status, and occupation lookups
//! - **Messaging**: Chat messages and notification classification
//! - **Events**: Event sourcing records and runtime settings

mod event;
mod message;
mod mission;
mod user;

pub use event::{EventKind, EventRecord, SystemSetting};
pub use message::{
    ChatMessage, EncouragementLevel, MessageKind, MessageRole, NotificationKind, SenderKind,
};
pub use mission::{
    DifficultyLevel, GoalType, MissionCategory, MissionCompletion, MissionGoal, MissionStatus,
};
pub use user::{Occupation, User, UserStatus};
