//! Property-based tests for validation and the App state machine.
//!
//! Tests verify that invariants hold under arbitrary event sequences.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use roomboard_app::{
    App, AppAction, AppEvent, KeyInput, Room, Screen, SessionStatus, ThreadRefresh,
    format_relative, is_valid_comment, is_valid_room_name,
};

fn room(id: usize, name: &str) -> Room {
    Room {
        id: format!("r{id}"),
        name: name.into(),
        created_at: Utc.timestamp_opt(0, 0).single().unwrap(),
        user_id: "user123".into(),
        messages: Vec::new(),
    }
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ \t]{0,3}",
        "[ ]{0,2}[a-zA-ZçãéÁ ]{1,12}[ ]{0,2}",
    ]
}

fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        4 => "[a-zA-Z ]".prop_map(|s| KeyInput::Char(s.chars().next().unwrap_or('a'))),
        1 => Just(KeyInput::Enter),
        1 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Tab),
        1 => Just(KeyInput::Esc),
        1 => Just(KeyInput::Up),
        1 => Just(KeyInput::Down),
        1 => Just(KeyInput::F(2)),
        1 => Just(KeyInput::F(5)),
    ]
}

fn session_strategy() -> impl Strategy<Value = SessionStatus> {
    prop_oneof![
        Just(SessionStatus::Loading),
        Just(SessionStatus::Unauthenticated),
        Just(SessionStatus::Authenticated { user_id: "user123".into(), access_token: None }),
    ]
}

/// Generate random app events.
fn event_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        1 => Just(AppEvent::Tick),
        1 => (1u16..200, 1u16..100).prop_map(|(c, r)| AppEvent::Resize(c, r)),
        8 => key_strategy().prop_map(AppEvent::Key),
        1 => session_strategy().prop_map(AppEvent::SessionResolved),
        2 => prop::collection::vec(name_strategy(), 0..4).prop_map(|names| AppEvent::RoomsLoaded {
            rooms: names.iter().enumerate().map(|(i, n)| room(i, n)).collect(),
        }),
        1 => Just(AppEvent::RoomsFailed { message: "Network down".into() }),
        1 => prop::option::of("[a-z0-9]{4}").prop_map(|room_id| AppEvent::RoomCreated { room_id }),
        1 => Just(AppEvent::RoomCreateFailed { message: "timeout".into() }),
        1 => prop::option::of("[a-z0-9]{4}")
            .prop_map(|message_id| AppEvent::CommentAdded { message_id }),
        1 => Just(AppEvent::CommentFailed { message: "timeout".into() }),
    ]
}

proptest! {
    #[test]
    fn prop_room_name_validity(
        name in name_strategy(),
        existing in prop::collection::vec(name_strategy(), 0..4),
    ) {
        let rooms: Vec<Room> = existing.iter().enumerate().map(|(i, n)| room(i, n)).collect();
        let trimmed = name.trim();
        let expected = !trimmed.is_empty()
            && !rooms.iter().any(|r| r.name.to_lowercase() == trimmed.to_lowercase());

        prop_assert_eq!(is_valid_room_name(&name, &rooms), expected);
    }

    #[test]
    fn prop_existing_name_is_always_duplicate(name in "[a-zA-Z]{1,10}", upper in any::<bool>()) {
        let rooms = [room(0, &name)];
        let attempt = if upper { name.to_uppercase() } else { name.to_lowercase() };
        prop_assert!(!is_valid_room_name(&attempt, &rooms));
    }

    #[test]
    fn prop_comment_validity(text in name_strategy(), has_room in any::<bool>()) {
        let open = room(0, "Sala");
        let selected = has_room.then_some(&open);
        let expected = !text.trim().is_empty() && has_room;
        prop_assert_eq!(is_valid_comment(&text, selected), expected);
    }

    #[test]
    fn prop_relative_labels_are_well_formed(secs in 0i64..(10 * 365 * 24 * 3600)) {
        let now = Utc.timestamp_opt(2_000_000_000, 0).single().unwrap();
        let then = now - chrono::Duration::seconds(secs);
        let label = format_relative(now, then);

        prop_assert!(label.ends_with(" atrás"));
        let count: i64 = label.split(' ').next().and_then(|n| n.parse().ok()).unwrap_or(-1);
        prop_assert!(count >= 0);
    }

    #[test]
    fn prop_app_invariants_hold(
        session in session_strategy(),
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let mut app = App::new(session, ThreadRefresh::Stale);
        let _ = app.start();

        for event in events {
            let actions = app.handle(event);

            // The board is never visible without an authenticated session.
            if !app.session().is_authenticated() {
                prop_assert_ne!(app.screen(), Screen::Rooms);
                prop_assert!(!app.is_board_mounted());
                let emits_board_request = actions.iter().any(|a| matches!(
                    a,
                    AppAction::FetchRooms
                        | AppAction::CreateRoom { .. }
                        | AppAction::AddComment { .. }
                ));
                prop_assert!(!emits_board_request);
            }

            let board = app.board();
            prop_assert!(board.rooms().is_empty() || board.highlighted() < board.rooms().len());
        }
    }

    #[test]
    fn prop_mutations_carry_trimmed_nonempty_payloads(
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let session =
            SessionStatus::Authenticated { user_id: "user123".into(), access_token: None };
        let mut app = App::new(session, ThreadRefresh::Follow);
        let _ = app.start();

        for event in events {
            for action in app.handle(event) {
                match action {
                    AppAction::CreateRoom { name } => {
                        prop_assert!(!name.is_empty());
                        prop_assert_eq!(name.trim(), name.as_str());
                    },
                    AppAction::AddComment { content, .. } => {
                        prop_assert!(!content.is_empty());
                        prop_assert_eq!(content.trim(), content.as_str());
                    },
                    _ => {},
                }
            }
        }
    }
}
