//! Scenario tests for the room board through the App state machine.
//!
//! # Oracle Pattern
//!
//! A scripted backend answers network actions synchronously. Tests end with
//! oracle checks that verify:
//! - The screen and board state the user would see
//! - Which mutations were issued

use chrono::{TimeZone, Utc};
use roomboard_app::{
    App, AppAction, AppEvent, KeyInput, LOADING_ROOMS, LoadState, Message, Room, Route, Screen,
    SessionStatus, ThreadRefresh,
};

/// Backend fixture: rooms it serves and mutations it received.
#[derive(Default)]
struct Script {
    rooms: Vec<Room>,
    mutations: Vec<AppAction>,
}

impl Script {
    fn with_rooms(rooms: Vec<Room>) -> Self {
        Self { rooms, mutations: Vec::new() }
    }

    /// Answer network actions, feeding results back into the App.
    fn process(&mut self, app: &mut App, actions: Vec<AppAction>) {
        let mut pending = actions;
        while !pending.is_empty() {
            for action in std::mem::take(&mut pending) {
                let event = match action {
                    AppAction::FetchRooms => AppEvent::RoomsLoaded { rooms: self.rooms.clone() },
                    AppAction::CreateRoom { ref name } => {
                        self.rooms.push(room(&format!("r{}", self.rooms.len() + 1), name, &[]));
                        let id = self.rooms.last().map(|r| r.id.clone());
                        self.mutations.push(action);
                        AppEvent::RoomCreated { room_id: id }
                    },
                    AppAction::AddComment { ref room_id, ref content } => {
                        if let Some(target) = self.rooms.iter_mut().find(|r| &r.id == room_id) {
                            target.messages.push(message(room_id, content));
                        }
                        self.mutations.push(action);
                        AppEvent::CommentAdded { message_id: Some("m-new".into()) }
                    },
                    AppAction::Render
                    | AppAction::Quit
                    | AppAction::SignIn { .. }
                    | AppAction::SignUp { .. } => continue,
                };
                pending.extend(app.handle(event));
            }
        }
    }

    fn key(&mut self, app: &mut App, key: KeyInput) {
        let actions = app.handle(AppEvent::Key(key));
        self.process(app, actions);
    }

    fn type_text(&mut self, app: &mut App, text: &str) {
        for c in text.chars() {
            self.key(app, KeyInput::Char(c));
        }
    }
}

fn room(id: &str, name: &str, messages: &[&str]) -> Room {
    Room {
        id: id.into(),
        name: name.into(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).single().unwrap(),
        user_id: "user123".into(),
        messages: messages.iter().map(|text| message(id, text)).collect(),
    }
}

fn message(room_id: &str, content: &str) -> Message {
    Message {
        id: format!("{room_id}-{content}"),
        content: content.into(),
        user_id: "user123".into(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).single().unwrap(),
        room_id: Some(room_id.into()),
    }
}

fn signed_in() -> SessionStatus {
    SessionStatus::Authenticated { user_id: "user123".into(), access_token: None }
}

#[test]
fn loading_then_rooms_listed() {
    let mut app = App::new(signed_in(), ThreadRefresh::Stale);
    let actions = app.start();

    // Before the fetch resolves only the loading indicator is shown.
    assert_eq!(app.screen(), Screen::Rooms);
    assert_eq!(app.board().load(), &LoadState::Loading);
    assert_eq!(LOADING_ROOMS, "Carregando salas...");

    let mut script = Script::with_rooms(vec![room("1", "Sala Teste", &[])]);
    script.process(&mut app, actions);

    assert_eq!(app.board().load(), &LoadState::Ready);
    let names: Vec<_> = app.board().rooms().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Sala Teste"]);
}

#[test]
fn duplicate_room_issues_no_mutation() {
    let mut app = App::new(signed_in(), ThreadRefresh::Stale);
    let mut script = Script::with_rooms(vec![room("1", "Sala Teste", &[])]);
    let actions = app.start();
    script.process(&mut app, actions);

    script.type_text(&mut app, "Sala Teste");
    script.key(&mut app, KeyInput::Enter);

    assert!(script.mutations.is_empty());
    assert_eq!(app.board().rooms().len(), 1);
    assert_eq!(app.board().visible_error(), Some("Já existe uma sala com este nome."));
}

#[test]
fn created_room_appears_after_refetch() {
    let mut app = App::new(signed_in(), ThreadRefresh::Stale);
    let mut script = Script::default();
    let actions = app.start();
    script.process(&mut app, actions);

    script.type_text(&mut app, "  Nova Sala ");
    script.key(&mut app, KeyInput::Enter);

    assert_eq!(script.mutations, [AppAction::CreateRoom { name: "Nova Sala".into() }]);
    let names: Vec<_> = app.board().rooms().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Nova Sala"]);
    assert_eq!(app.board().room_name().text(), "");
}

#[test]
fn comment_clears_input_after_mutation() {
    let mut app = App::new(signed_in(), ThreadRefresh::Stale);
    let mut script = Script::with_rooms(vec![room("1", "Sala Teste", &[])]);
    let actions = app.start();
    script.process(&mut app, actions);

    // Focus the list and open the first room.
    script.key(&mut app, KeyInput::Tab);
    script.key(&mut app, KeyInput::Enter);
    assert_eq!(app.board().selected().map(|r| r.id.as_str()), Some("1"));

    script.type_text(&mut app, "Novo comentário");
    script.key(&mut app, KeyInput::Enter);

    assert_eq!(script.mutations, [AppAction::AddComment {
        room_id: "1".into(),
        content: "Novo comentário".into()
    }]);
    assert_eq!(app.board().comment().text(), "");
    assert_eq!(app.board().rooms()[0].messages.len(), 1);
    // Open thread keeps the snapshot taken when it was opened.
    assert_eq!(app.board().selected().map(|r| r.messages.len()), Some(0));
}

#[test]
fn follow_policy_shows_new_comment_in_thread() {
    let mut app = App::new(signed_in(), ThreadRefresh::Follow);
    let mut script = Script::with_rooms(vec![room("1", "Sala Teste", &["primeiro"])]);
    let actions = app.start();
    script.process(&mut app, actions);

    script.key(&mut app, KeyInput::Tab);
    script.key(&mut app, KeyInput::Enter);
    script.type_text(&mut app, "segundo");
    script.key(&mut app, KeyInput::Enter);

    let contents: Vec<_> = app
        .board()
        .selected()
        .map(|r| r.messages.iter().map(|m| m.content.clone()).collect())
        .unwrap_or_default();
    assert_eq!(contents, ["primeiro", "segundo"]);
}

#[test]
fn unauthenticated_never_renders_board() {
    let mut app = App::new(SessionStatus::Unauthenticated, ThreadRefresh::Stale);
    let mut script = Script::with_rooms(vec![room("1", "Sala Teste", &[])]);

    let actions = app.navigate(Route::Rooms);
    assert!(!actions.contains(&AppAction::FetchRooms));
    script.process(&mut app, actions);

    assert_eq!(app.route(), Route::SignIn);
    assert_eq!(app.screen(), Screen::SignIn);
    assert!(app.board().rooms().is_empty());

    let actions = app.navigate(Route::Feedback);
    script.process(&mut app, actions);
    assert_eq!(app.screen(), Screen::SignIn);
}

#[test]
fn fetch_failure_suppresses_board() {
    let mut app = App::new(signed_in(), ThreadRefresh::Stale);
    let _ = app.start();
    let _ = app.handle(AppEvent::RoomsFailed { message: "Network down".into() });

    assert_eq!(app.board().load(), &LoadState::Failed { message: "Network down".into() });

    // Input is ignored while the failure is shown; F5 retries.
    assert!(app.handle(AppEvent::Key(KeyInput::Char('x'))).is_empty());
    let actions = app.handle(AppEvent::Key(KeyInput::F(5)));
    assert_eq!(actions, [AppAction::FetchRooms]);
}

#[test]
fn transport_errors_reach_error_line() {
    let mut app = App::new(signed_in(), ThreadRefresh::Stale);
    let mut script = Script::default();
    let actions = app.start();
    script.process(&mut app, actions);

    script.type_text(&mut app, "Sala");
    let actions = app.handle(AppEvent::Key(KeyInput::Enter));
    assert!(matches!(actions.as_slice(), [AppAction::CreateRoom { .. }, AppAction::Render]));

    let _ = app.handle(AppEvent::RoomCreateFailed { message: "Network down".into() });
    assert_eq!(app.board().visible_error(), Some("Erro ao criar a sala: Network down"));
    assert_eq!(app.board().room_name().text(), "Sala");
}
