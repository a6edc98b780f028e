//! Seed data for `--demo` runs.

use chrono::{Duration, Utc};
use roomboard_client::{MemoryBackend, MessageRecord, RoomRecord};

/// In-memory backend with a couple of rooms to look at.
pub fn backend() -> MemoryBackend {
    let now = Utc::now();
    let welcome = RoomRecord {
        id: "demo-room-1".into(),
        name: "Sala Teste".into(),
        created_at: now - Duration::days(2),
        user_id: "demo-user-0001".into(),
        messages: vec![
            MessageRecord {
                id: "demo-msg-1".into(),
                content: "Bem-vindos! Deixem aqui o seu feedback.".into(),
                user_id: "demo-user-0001".into(),
                created_at: now - Duration::days(2),
                room_id: Some("demo-room-1".into()),
            },
            MessageRecord {
                id: "demo-msg-2".into(),
                content: "O modo escuro ficou ótimo.".into(),
                user_id: "demo-user-0002".into(),
                created_at: now - Duration::minutes(5),
                room_id: Some("demo-room-1".into()),
            },
        ],
    };
    let empty = RoomRecord {
        id: "demo-room-2".into(),
        name: "Ideias".into(),
        created_at: now - Duration::hours(3),
        user_id: "demo-user-0002".into(),
        messages: Vec::new(),
    };

    MemoryBackend::with_rooms(vec![welcome, empty])
}
