//! TUI application - main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 exchange task (tokio::spawn)
//!   ├─ crossterm EventStream              └─ SessionClient::exchange()
//!   ├─ event_rx (AppEvent)  <──────────────── event_tx
//!   └─ tick_interval
//! ```
//!
//! The controller is only touched from the loop. An exchange is started on
//! the loop (`begin_*`), runs on a spawned task, and its result comes back
//! as an [`AppEvent`] that the loop hands to `complete`.

use super::editor;
use super::event::AppEvent;
use super::mode::{Action, Focus, KeyHandler};
use super::state::{PAGE_SCROLL_LINES, TuiState, WHEEL_SCROLL_LINES};
use super::view::ChatView;
use super::widgets::{
    MainLayout,
    error_banner::ErrorBannerWidget,
    header::HeaderWidget,
    history::HistoryWidget,
    input::{
        CONTINUE_PROMPT_PLACEHOLDER, DIRECTORY_PLACEHOLDER, InputWidget, NEW_PROMPT_PLACEHOLDER,
        SendIndicator,
    },
    sidebar::{self, SidebarHit, SidebarWidget},
    status_bar::StatusBarWidget,
};
use crate::config::TuiConfig;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dirchat_application::{
    Completion, ConversationController, ConversationIndexStore, InputField, PendingExchange,
    SessionClient,
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Position};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Main TUI application
pub struct TuiApp<S: SessionClient + 'static, P: ConversationIndexStore + 'static> {
    controller: ConversationController<S, P>,
    config: TuiConfig,
    /// Endpoint shown in the header
    endpoint: String,
    state: TuiState,

    // -- Exchange results from spawned tasks --
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,

    /// Regions of the last frame, for mouse hit testing
    layout: Option<MainLayout>,
}

impl<S: SessionClient + 'static, P: ConversationIndexStore + 'static> TuiApp<S, P> {
    pub fn new(controller: ConversationController<S, P>, config: TuiConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            controller,
            config,
            endpoint: String::new(),
            state: TuiState::new(),
            event_tx,
            event_rx,
            layout: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn controller(&self) -> &ConversationController<S, P> {
        &self.controller
    }

    pub fn state(&self) -> &TuiState {
        &self.state
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> io::Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(100));

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, mouse, resize)
                term_event = event_stream.next() => match term_event {
                    Some(Ok(event)) => self.handle_terminal_event(event),
                    Some(Err(e)) => return Err(e),
                    None => break,
                },

                // Results of spawned exchanges
                Some(app_event) = self.event_rx.recv() => {
                    self.handle_app_event(app_event);
                }

                // Tick for the loading spinner
                _ = tick.tick() => {
                    if self.controller.is_loading() {
                        self.state.advance_spinner();
                    }
                }
            }
        }

        info!("Leaving TUI");
        Ok(())
    }

    /// Render all widgets
    fn render(&mut self, frame: &mut ratatui::Frame) {
        let view = ChatView::from_controller(&self.controller);
        let state = &self.state;
        let loading = view.is_loading();

        let prompt_lines = u16::try_from(view.prompt.split('\n').count()).unwrap_or(u16::MAX);
        let base = MainLayout::compute(frame.area(), self.config.sidebar_width, prompt_lines, 0);
        let layout = match view.error {
            Some(message) => MainLayout::compute(
                frame.area(),
                self.config.sidebar_width,
                prompt_lines,
                ErrorBannerWidget::new(message).height(base.history.width),
            ),
            None => base,
        };

        frame.render_widget(SidebarWidget::new(&view, state), layout.sidebar);
        frame.render_widget(HeaderWidget::new(&self.endpoint), layout.header);
        frame.render_widget(
            HistoryWidget::new(&view, state, &self.config.model_label),
            layout.history,
        );

        if let (Some(message), Some(area)) = (view.error, layout.error) {
            frame.render_widget(ErrorBannerWidget::new(message), area);
        }

        let cursor_for =
            |field: InputField| (state.focused_field() == Some(field)).then(|| state.cursor(field));

        let directory = InputWidget::new("Directory", view.directory_path, DIRECTORY_PLACEHOLDER)
            .focused(cursor_for(InputField::DirectoryPath))
            .editable(!loading)
            .color(Focus::Directory.color());
        frame.render_widget(directory, layout.directory);

        let placeholder = if view.history.is_empty() {
            NEW_PROMPT_PLACEHOLDER
        } else {
            CONTINUE_PROMPT_PLACEHOLDER
        };
        let prompt = InputWidget::new("Prompt", view.prompt, placeholder)
            .focused(cursor_for(InputField::Prompt))
            .editable(!loading)
            .color(Focus::Prompt.color())
            .send_indicator(SendIndicator {
                loading,
                enabled: view.can_submit,
            });
        frame.render_widget(prompt, layout.prompt);

        frame.render_widget(StatusBarWidget::new(&view, state), layout.status_bar);

        self.layout = Some(layout);
    }

    // -- Input handling --

    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = KeyHandler::handle(self.state.focus, key);
                self.handle_action(action);
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.scroll_up(WHEEL_SCROLL_LINES),
            MouseEventKind::ScrollDown => self.state.scroll_down(WHEEL_SCROLL_LINES),
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(layout) = self.layout else {
                    return;
                };
                let hit = sidebar::hit_test(
                    layout.sidebar,
                    mouse.column,
                    mouse.row,
                    self.state.sidebar_selected,
                    self.controller.records().len(),
                );
                let position = Position::new(mouse.column, mouse.row);

                match hit {
                    Some(SidebarHit::NewChat) => self.handle_action(Action::NewChat),
                    Some(SidebarHit::Record(index)) => {
                        self.state.focus = Focus::Sidebar;
                        self.state.sidebar_selected = index;
                        self.load_record(index);
                    }
                    None if layout.directory.contains(position) => {
                        self.state.focus = Focus::Directory;
                    }
                    None if layout.prompt.contains(position) => {
                        self.state.focus = Focus::Prompt;
                    }
                    None => {}
                }
            }
            _ => {}
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::NewChat => {
                if self.controller.start_new_conversation() {
                    self.state.reset_view();
                }
            }
            Action::FocusNext => self.state.focus = self.state.focus.next(),
            Action::FocusPrev => self.state.focus = self.state.focus.prev(),
            Action::Submit => self.submit(),
            Action::LoadSelected => self.load_record(self.state.sidebar_selected),
            Action::SelectUp => self.state.select_up(),
            Action::SelectDown => self.state.select_down(self.controller.records().len()),
            Action::ScrollUp => self.state.scroll_up(PAGE_SCROLL_LINES),
            Action::ScrollDown => self.state.scroll_down(PAGE_SCROLL_LINES),
            Action::None => {}
            edit => self.edit(edit),
        }
    }

    /// Apply an editing action to the focused input
    fn edit(&mut self, action: Action) {
        let Some(field) = self.state.focused_field() else {
            return;
        };
        let cursor = self.state.cursor_mut(field);
        // None while an exchange is in flight
        let Some(text) = self.controller.input_mut(field) else {
            return;
        };

        match action {
            Action::InsertChar(c) => editor::insert_char(text, cursor, c),
            Action::InsertNewline => editor::insert_char(text, cursor, '\n'),
            Action::DeleteBefore => editor::delete_before(text, cursor),
            Action::DeleteAt => editor::delete_at(text, cursor),
            Action::CursorLeft => editor::move_left(text, cursor),
            Action::CursorRight => editor::move_right(text, cursor),
            Action::CursorLineStart => editor::move_line_start(text, cursor),
            Action::CursorLineEnd => editor::move_line_end(text, cursor),
            _ => {}
        }
    }

    // -- Exchanges --

    fn submit(&mut self) {
        if !self.controller.can_submit() {
            debug!("Nothing to send");
            return;
        }
        match self.controller.begin_submit() {
            Ok(pending) => self.spawn_exchange(pending),
            Err(e) => debug!("Submit rejected: {}", e),
        }
    }

    fn load_record(&mut self, index: usize) {
        let Some(id) = self.controller.records().get(index).map(|r| r.id.clone()) else {
            return;
        };
        if let Some(pending) = self.controller.begin_load(&id) {
            self.spawn_exchange(pending);
        }
    }

    fn spawn_exchange(&self, pending: PendingExchange) {
        let client = self.controller.client();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.exchange(pending.request()).await;
            // The receiver only goes away when the app is dropped
            let _ = tx.send(AppEvent::ExchangeFinished { pending, result });
        });
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ExchangeFinished { pending, result } => {
                match self.controller.complete(pending, result) {
                    Completion::Applied => {
                        self.state.scroll_to_bottom();
                        self.select_active_record();
                    }
                    Completion::Failed(e) => debug!("Exchange failed: {}", e),
                    Completion::Stale => {}
                }
            }
        }
    }

    /// Move the sidebar selection onto the active conversation
    fn select_active_record(&mut self) {
        let Some(active) = self.controller.active_session_id() else {
            return;
        };
        if let Some(position) = self
            .controller
            .records()
            .iter()
            .position(|r| r.id == active)
        {
            self.state.sidebar_selected = position;
        }
    }
}
