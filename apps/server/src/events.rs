use hearth_core::events::{DomainEvent, DomainEventSink};
use serde_json::{json, Value};
use tokio::sync::broadcast;

/// Canonical event names pushed over the SSE stream.
pub const ACTIVITY_LOGGED: &str = "activity-logged";
pub const ACTIVITY_UPDATED: &str = "activity-updated";
pub const ACTIVITY_DELETED: &str = "activity-deleted";
pub const STREAK_UPDATED: &str = "streak-updated";
pub const BADGE_EARNED: &str = "badge-earned";
pub const REMINDER: &str = "reminder";

/// Serializable envelope that carries event names and optional payloads.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    pub name: &'static str,
    pub payload: Option<Value>,
}

impl ServerEvent {
    pub fn with_payload(name: &'static str, payload: Value) -> Self {
        Self {
            name,
            payload: Some(payload),
        }
    }
}

/// Lightweight broadcast bus that fans out events to any connected clients.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ServerEvent) {
        // Lagging listeners are ignored to avoid blocking producers.
        let _ = self.sender.send(event);
    }
}

/// Bridges core domain events onto the SSE bus.
///
/// Publishing is fire-and-forget; events are dropped when nobody is
/// subscribed.
pub struct SseEventSink {
    bus: EventBus,
}

impl SseEventSink {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl DomainEventSink for SseEventSink {
    fn emit(&self, event: DomainEvent) {
        let server_event = match event {
            DomainEvent::ActivityLogged {
                activity_id,
                user_id,
                date,
            } => ServerEvent::with_payload(
                ACTIVITY_LOGGED,
                json!({ "activityId": activity_id, "userId": user_id, "date": date }),
            ),
            DomainEvent::ActivityUpdated {
                activity_id,
                user_id,
                date,
            } => ServerEvent::with_payload(
                ACTIVITY_UPDATED,
                json!({ "activityId": activity_id, "userId": user_id, "date": date }),
            ),
            DomainEvent::ActivityDeleted {
                activity_id,
                user_id,
                date,
            } => ServerEvent::with_payload(
                ACTIVITY_DELETED,
                json!({ "activityId": activity_id, "userId": user_id, "date": date }),
            ),
            DomainEvent::StreakUpdated {
                user_id,
                current_streak,
                longest_streak,
            } => ServerEvent::with_payload(
                STREAK_UPDATED,
                json!({
                    "userId": user_id,
                    "currentStreak": current_streak,
                    "longestStreak": longest_streak,
                }),
            ),
            DomainEvent::BadgeEarned {
                user_id,
                badge_type,
            } => ServerEvent::with_payload(
                BADGE_EARNED,
                json!({ "userId": user_id, "badgeType": badge_type }),
            ),
        };
        self.bus.publish(server_event);
    }
}
