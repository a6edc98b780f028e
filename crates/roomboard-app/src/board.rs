//! Room board controller.
//!
//! Owns the rooms snapshot and the transient UI state of `/rooms`: selected
//! thread, input buffers and error slots. Every handler is synchronous and
//! returns the actions the runtime must execute; network results come back as
//! dedicated methods.
//!
//! Mutations never splice entities into the list. A successful create or
//! comment triggers a full refetch, and the list is only ever replaced by
//! [`Board::rooms_loaded`].

use crate::{
    AppAction, ErrorSlots, ErrorSource, KeyInput, LoadState, Room, TextInput, ThreadRefresh,
    validation,
};

/// Shown instead of the board while the first fetch is pending.
pub const LOADING_ROOMS: &str = "Carregando salas...";
/// Room creation attempted without a signed-in user.
pub const CREATE_NEEDS_AUTH: &str = "Você precisa estar autenticado para criar uma sala.";
/// Comment attempted without a signed-in user.
pub const COMMENT_NEEDS_AUTH: &str = "Você precisa estar autenticado para comentar.";
/// Create mutation answered without a room id.
pub const CREATE_FAILED: &str = "Erro ao criar a sala.";
/// Comment mutation failed or answered without a message id.
pub const COMMENT_FAILED: &str = "Erro ao adicionar o comentário.";

/// Which board element receives keys while no thread is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoardFocus {
    /// New-room name input.
    #[default]
    RoomName,
    /// Room list.
    RoomList,
}

/// State of the `/rooms` screen.
#[derive(Debug, Clone, Default)]
pub struct Board {
    load: LoadState,
    rooms: Vec<Room>,
    /// Copy of the room taken when the thread was opened.
    selected: Option<Room>,
    highlighted: usize,
    focus: BoardFocus,
    room_name: TextInput,
    comment: TextInput,
    errors: ErrorSlots,
    refresh: ThreadRefresh,
}

impl Board {
    /// Empty board using `refresh` for the open thread.
    pub fn new(refresh: ThreadRefresh) -> Self {
        Self { refresh, ..Self::default() }
    }

    /// Board became visible: start the initial fetch.
    pub fn mount(&mut self) -> Vec<AppAction> {
        self.load = LoadState::Loading;
        vec![AppAction::FetchRooms, AppAction::Render]
    }

    /// Re-run the query. The previous snapshot stays visible meanwhile.
    pub fn refetch(&self) -> Vec<AppAction> {
        vec![AppAction::FetchRooms]
    }

    /// Replace the snapshot with a fresh query result.
    pub fn rooms_loaded(&mut self, rooms: Vec<Room>) -> Vec<AppAction> {
        self.rooms = rooms;
        self.load = LoadState::Ready;
        self.highlighted = self.highlighted.min(self.rooms.len().saturating_sub(1));

        if self.refresh == ThreadRefresh::Follow
            && let Some(open) = &self.selected
            && let Some(fresh) = self.rooms.iter().find(|room| room.id == open.id)
        {
            self.selected = Some(fresh.clone());
        }
        vec![AppAction::Render]
    }

    /// The query failed; the board shows only the failure.
    pub fn rooms_failed(&mut self, message: String) -> Vec<AppAction> {
        self.load = LoadState::Failed { message };
        vec![AppAction::Render]
    }

    /// Validate the name buffer and issue the create mutation.
    pub fn create_room(&mut self, user_id: Option<&str>) -> Vec<AppAction> {
        if user_id.is_none() {
            self.errors.set_local(CREATE_NEEDS_AUTH);
            return vec![AppAction::Render];
        }

        let name = match validation::check_room_name(self.room_name.text(), &self.rooms) {
            Ok(name) => name.to_owned(),
            Err(err) => {
                self.errors.set_local(err.message());
                return vec![AppAction::Render];
            },
        };

        self.errors.clear(ErrorSource::CreateRoom);
        vec![AppAction::CreateRoom { name }, AppAction::Render]
    }

    /// Create mutation answered.
    pub fn room_created(&mut self, room_id: Option<String>) -> Vec<AppAction> {
        if room_id.is_none() {
            self.errors.set_local(CREATE_FAILED);
            return vec![AppAction::Render];
        }

        self.room_name.clear();
        self.errors.clear_local();
        vec![AppAction::FetchRooms, AppAction::Render]
    }

    /// Create mutation failed in transport. The name buffer is kept.
    pub fn room_create_failed(&mut self, message: &str) -> Vec<AppAction> {
        self.errors.set_local(format!("Erro ao criar a sala: {message}"));
        self.errors.set(ErrorSource::CreateRoom, message);
        vec![AppAction::Render]
    }

    /// Open the thread of the room with `room_id`. Unknown ids are ignored.
    pub fn select_room(&mut self, room_id: &str) -> Vec<AppAction> {
        let Some(room) = self.rooms.iter().find(|room| room.id == room_id) else {
            return vec![];
        };

        self.selected = Some(room.clone());
        self.comment.clear();
        self.errors.clear_all();
        vec![AppAction::Render]
    }

    /// Close the open thread.
    pub fn close_room(&mut self) -> Vec<AppAction> {
        self.selected = None;
        self.errors.clear_all();
        vec![AppAction::Render]
    }

    /// Validate the comment buffer and issue the add-comment mutation.
    pub fn add_comment(&mut self, user_id: Option<&str>) -> Vec<AppAction> {
        if user_id.is_none() {
            self.errors.set_local(COMMENT_NEEDS_AUTH);
            return vec![AppAction::Render];
        }

        let content = match validation::check_comment(self.comment.text(), self.selected.as_ref()) {
            Ok(content) => content.to_owned(),
            Err(err) => {
                self.errors.set_local(err.message());
                return vec![AppAction::Render];
            },
        };
        let Some(room) = &self.selected else {
            return vec![AppAction::Render];
        };

        self.errors.clear(ErrorSource::AddComment);
        vec![AppAction::AddComment { room_id: room.id.clone(), content }, AppAction::Render]
    }

    /// Add-comment mutation answered.
    pub fn comment_added(&mut self, message_id: Option<String>) -> Vec<AppAction> {
        if message_id.is_none() {
            self.errors.set_local(COMMENT_FAILED);
            return vec![AppAction::Render];
        }

        self.comment.clear();
        self.errors.clear_local();
        vec![AppAction::FetchRooms, AppAction::Render]
    }

    /// Add-comment mutation failed in transport.
    pub fn comment_failed(&mut self, message: &str) -> Vec<AppAction> {
        self.errors.set_local(COMMENT_FAILED);
        self.errors.set(ErrorSource::AddComment, message);
        vec![AppAction::Render]
    }

    /// Route a key press. `user_id` is the signed-in user, if any.
    pub fn handle_key(&mut self, key: KeyInput, user_id: Option<&str>) -> Vec<AppAction> {
        if key == KeyInput::F(5) {
            return self.refetch();
        }

        if self.selected.is_some() {
            return match key {
                KeyInput::Esc => self.close_room(),
                KeyInput::Enter => self.add_comment(user_id),
                _ if self.comment.apply(key) => vec![AppAction::Render],
                _ => vec![],
            };
        }

        if key == KeyInput::Esc {
            return vec![AppAction::Quit];
        }
        if self.load != LoadState::Ready {
            return vec![];
        }

        match (self.focus, key) {
            (_, KeyInput::Tab) => {
                self.focus = match self.focus {
                    BoardFocus::RoomName => BoardFocus::RoomList,
                    BoardFocus::RoomList => BoardFocus::RoomName,
                };
                vec![AppAction::Render]
            },
            (BoardFocus::RoomName, KeyInput::Enter) => self.create_room(user_id),
            (BoardFocus::RoomName, _) if self.room_name.apply(key) => vec![AppAction::Render],
            (BoardFocus::RoomList, KeyInput::Up) => {
                self.highlighted = self.highlighted.saturating_sub(1);
                vec![AppAction::Render]
            },
            (BoardFocus::RoomList, KeyInput::Down) => {
                if self.highlighted + 1 < self.rooms.len() {
                    self.highlighted += 1;
                }
                vec![AppAction::Render]
            },
            (BoardFocus::RoomList, KeyInput::Enter) => match self.rooms.get(self.highlighted) {
                Some(room) => {
                    let id = room.id.clone();
                    self.select_room(&id)
                },
                None => vec![],
            },
            _ => vec![],
        }
    }

    /// Query status.
    pub fn load(&self) -> &LoadState {
        &self.load
    }

    /// Latest successful snapshot, in backend order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Open thread. `None` when no thread is open.
    pub fn selected(&self) -> Option<&Room> {
        self.selected.as_ref()
    }

    /// Highlighted index in the room list.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Focused board element.
    pub fn focus(&self) -> BoardFocus {
        self.focus
    }

    /// New-room name buffer.
    pub fn room_name(&self) -> &TextInput {
        &self.room_name
    }

    /// Comment buffer.
    pub fn comment(&self) -> &TextInput {
        &self.comment
    }

    /// Error slots.
    pub fn errors(&self) -> &ErrorSlots {
        &self.errors
    }

    /// Error line of the board, by slot priority.
    pub fn visible_error(&self) -> Option<&str> {
        self.errors.shown().map(|shown| shown.message)
    }

    /// Error line of the open thread (local message only).
    pub fn thread_error(&self) -> Option<&str> {
        self.errors.local()
    }

    /// "Criar Sala" is enabled.
    pub fn can_create(&self) -> bool {
        !self.room_name.text().trim().is_empty()
    }

    /// "Enviar" is enabled.
    pub fn can_send(&self) -> bool {
        validation::is_valid_comment(self.comment.text(), self.selected.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::Message;

    const USER: Option<&str> = Some("user123");

    fn room(id: &str, name: &str, messages: usize) -> Room {
        let created_at = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap();
        Room {
            id: id.into(),
            name: name.into(),
            created_at,
            user_id: "user123".into(),
            messages: (0..messages)
                .map(|i| Message {
                    id: format!("{id}-m{i}"),
                    content: format!("comentário {i}"),
                    user_id: "user123".into(),
                    created_at,
                    room_id: Some(id.into()),
                })
                .collect(),
        }
    }

    fn ready(rooms: Vec<Room>) -> Board {
        let mut board = Board::new(ThreadRefresh::Stale);
        let _ = board.mount();
        let _ = board.rooms_loaded(rooms);
        board
    }

    fn type_text(board: &mut Board, text: &str) {
        for c in text.chars() {
            board.handle_key(KeyInput::Char(c), USER);
        }
    }

    #[test]
    fn mount_fetches_and_shows_loading() {
        let mut board = Board::new(ThreadRefresh::Stale);
        let actions = board.mount();
        assert!(matches!(actions.as_slice(), [AppAction::FetchRooms, AppAction::Render]));
        assert_eq!(board.load(), &LoadState::Loading);
    }

    #[test]
    fn failed_fetch_keeps_message() {
        let mut board = Board::new(ThreadRefresh::Stale);
        let _ = board.mount();
        let _ = board.rooms_failed("Network down".into());
        assert_eq!(board.load(), &LoadState::Failed { message: "Network down".into() });
    }

    #[test]
    fn create_requires_user() {
        let mut board = ready(vec![]);
        type_text(&mut board, "Nova");
        let actions = board.create_room(None);
        assert!(matches!(actions.as_slice(), [AppAction::Render]));
        assert_eq!(board.visible_error(), Some(CREATE_NEEDS_AUTH));
    }

    #[test]
    fn duplicate_name_issues_no_mutation() {
        let mut board = ready(vec![room("1", "Sala Teste", 0)]);
        type_text(&mut board, "sala teste");
        let actions = board.handle_key(KeyInput::Enter, USER);

        assert!(matches!(actions.as_slice(), [AppAction::Render]));
        assert_eq!(board.visible_error(), Some("Já existe uma sala com este nome."));
        assert_eq!(board.rooms().len(), 1);
        assert_eq!(board.room_name().text(), "sala teste");
    }

    #[test]
    fn create_sends_trimmed_name_not_raw_buffer() {
        let mut board = ready(vec![]);
        type_text(&mut board, "  Nova Sala ");
        let actions = board.handle_key(KeyInput::Enter, USER);
        assert!(matches!(actions.as_slice(), [
            AppAction::CreateRoom { name },
            AppAction::Render
        ] if name == "Nova Sala"));

        // The buffer keeps what was typed until the mutation succeeds.
        assert_eq!(board.room_name().text(), "  Nova Sala ");
    }

    #[test]
    fn comment_sends_trimmed_content_not_raw_buffer() {
        let mut board = ready(vec![room("1", "Sala", 0)]);
        let _ = board.select_room("1");
        type_text(&mut board, " oi  ");
        let actions = board.handle_key(KeyInput::Enter, USER);
        assert!(matches!(actions.as_slice(), [
            AppAction::AddComment { content, .. },
            AppAction::Render
        ] if content == "oi"));
        assert_eq!(board.comment().text(), " oi  ");
    }

    #[test]
    fn created_room_clears_input_and_refetches() {
        let mut board = ready(vec![]);
        type_text(&mut board, "Nova");
        board.errors.set_local("stale");
        let actions = board.room_created(Some("r1".into()));

        assert!(matches!(actions.as_slice(), [AppAction::FetchRooms, AppAction::Render]));
        assert_eq!(board.room_name().text(), "");
        assert_eq!(board.visible_error(), None);
    }

    #[test]
    fn created_without_id_is_an_error() {
        let mut board = ready(vec![]);
        type_text(&mut board, "Nova");
        let actions = board.room_created(None);
        assert!(matches!(actions.as_slice(), [AppAction::Render]));
        assert_eq!(board.visible_error(), Some(CREATE_FAILED));
        assert_eq!(board.room_name().text(), "Nova");
    }

    #[test]
    fn create_transport_failure_keeps_input() {
        let mut board = ready(vec![]);
        type_text(&mut board, "Nova");
        let _ = board.room_create_failed("Network down");
        assert_eq!(board.visible_error(), Some("Erro ao criar a sala: Network down"));
        assert_eq!(board.room_name().text(), "Nova");

        // Reissuing clears the recorded mutation error.
        board.errors.clear_local();
        let _ = board.create_room(USER);
        assert_eq!(board.visible_error(), None);
    }

    #[test]
    fn select_and_close_clear_errors() {
        let mut board = ready(vec![room("1", "Sala", 1)]);
        board.errors.set(ErrorSource::CreateRoom, "boom");
        let _ = board.select_room("1");
        assert_eq!(board.selected().map(|r| r.id.as_str()), Some("1"));
        assert_eq!(board.visible_error(), None);

        board.errors.set_local("x");
        let _ = board.close_room();
        assert!(board.selected().is_none());
        assert_eq!(board.visible_error(), None);
    }

    #[test]
    fn select_unknown_room_is_ignored() {
        let mut board = ready(vec![room("1", "Sala", 0)]);
        assert!(board.select_room("nope").is_empty());
        assert!(board.selected().is_none());
    }

    #[test]
    fn comment_flow() {
        let mut board = ready(vec![room("1", "Sala", 0)]);
        let _ = board.select_room("1");
        type_text(&mut board, "Novo comentário");
        assert!(board.can_send());

        let actions = board.handle_key(KeyInput::Enter, USER);
        assert!(matches!(actions.as_slice(), [
            AppAction::AddComment { room_id, content },
            AppAction::Render
        ] if room_id == "1" && content == "Novo comentário"));

        let actions = board.comment_added(Some("m1".into()));
        assert!(matches!(actions.as_slice(), [AppAction::FetchRooms, AppAction::Render]));
        assert_eq!(board.comment().text(), "");
    }

    #[test]
    fn blank_comment_is_rejected() {
        let mut board = ready(vec![room("1", "Sala", 0)]);
        let _ = board.select_room("1");
        type_text(&mut board, "   ");
        let actions = board.add_comment(USER);
        assert!(matches!(actions.as_slice(), [AppAction::Render]));
        assert_eq!(board.thread_error(), Some("Por favor, insira um comentário."));
    }

    #[test]
    fn comment_without_room_is_rejected() {
        let mut board = ready(vec![]);
        let _ = board.add_comment(USER);
        assert_eq!(board.visible_error(), Some("Por favor, insira um comentário."));
    }

    #[test]
    fn comment_requires_user() {
        let mut board = ready(vec![room("1", "Sala", 0)]);
        let _ = board.select_room("1");
        let _ = board.add_comment(None);
        assert_eq!(board.thread_error(), Some(COMMENT_NEEDS_AUTH));
    }

    #[test]
    fn comment_failures() {
        let mut board = ready(vec![room("1", "Sala", 0)]);
        let _ = board.select_room("1");
        type_text(&mut board, "oi");

        let _ = board.comment_added(None);
        assert_eq!(board.thread_error(), Some(COMMENT_FAILED));

        let _ = board.comment_failed("timeout");
        assert_eq!(board.thread_error(), Some(COMMENT_FAILED));
        assert_eq!(board.comment().text(), "oi");
    }

    #[test]
    fn stale_thread_keeps_snapshot() {
        let mut board = ready(vec![room("1", "Sala", 0)]);
        let _ = board.select_room("1");
        let _ = board.rooms_loaded(vec![room("1", "Sala", 1)]);

        assert_eq!(board.rooms()[0].messages.len(), 1);
        assert_eq!(board.selected().map(|r| r.messages.len()), Some(0));
    }

    #[test]
    fn follow_thread_takes_fresh_room() {
        let mut board = Board::new(ThreadRefresh::Follow);
        let _ = board.mount();
        let _ = board.rooms_loaded(vec![room("1", "Sala", 0)]);
        let _ = board.select_room("1");
        let _ = board.rooms_loaded(vec![room("1", "Sala", 2)]);

        assert_eq!(board.selected().map(|r| r.messages.len()), Some(2));
    }

    #[test]
    fn refetch_keeps_previous_snapshot() {
        let mut board = ready(vec![room("1", "Sala", 0)]);
        let actions = board.handle_key(KeyInput::F(5), USER);
        assert!(matches!(actions.as_slice(), [AppAction::FetchRooms]));
        assert_eq!(board.load(), &LoadState::Ready);
        assert_eq!(board.rooms().len(), 1);
    }

    #[test]
    fn list_navigation_opens_highlighted_room() {
        let mut board = ready(vec![room("1", "A", 0), room("2", "B", 0)]);
        board.handle_key(KeyInput::Tab, USER);
        assert_eq!(board.focus(), BoardFocus::RoomList);

        board.handle_key(KeyInput::Down, USER);
        board.handle_key(KeyInput::Down, USER);
        assert_eq!(board.highlighted(), 1);

        board.handle_key(KeyInput::Enter, USER);
        assert_eq!(board.selected().map(|r| r.name.as_str()), Some("B"));

        board.handle_key(KeyInput::Esc, USER);
        assert!(board.selected().is_none());
        assert!(matches!(board.handle_key(KeyInput::Esc, USER).as_slice(), [AppAction::Quit]));
    }

    #[test]
    fn highlight_clamps_when_list_shrinks() {
        let mut board = ready(vec![room("1", "A", 0), room("2", "B", 0)]);
        board.handle_key(KeyInput::Tab, USER);
        board.handle_key(KeyInput::Down, USER);
        let _ = board.rooms_loaded(vec![room("1", "A", 0)]);
        assert_eq!(board.highlighted(), 0);
    }

    #[test]
    fn keys_ignored_while_loading() {
        let mut board = Board::new(ThreadRefresh::Stale);
        let _ = board.mount();
        assert!(board.handle_key(KeyInput::Char('a'), USER).is_empty());
        assert_eq!(board.room_name().text(), "");
    }
}
