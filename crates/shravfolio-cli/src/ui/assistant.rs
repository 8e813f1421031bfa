use crate::tui::Action;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use shravfolio_assistant::{AssistantSession, Author, MenuOption, Outcome};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Pause between the visitor's echo and the assistant's answer.
pub const TYPING_DELAY: Duration = Duration::from_millis(120);

pub struct AssistantView {
    session: AssistantSession,
    options: Vec<MenuOption>,
    list_state: ListState,
    // Transcript entries on screen; the rest are held back while typing.
    visible: usize,
    typing: bool,
    notice: Option<String>,
    tx: UnboundedSender<Action>,
}

impl AssistantView {
    pub fn new(tx: UnboundedSender<Action>) -> Self {
        let session = AssistantSession::new();
        let options = session.options();
        let visible = session.transcript().len();
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            session,
            options,
            list_state,
            visible,
            typing: false,
            notice: None,
            tx,
        }
    }

    pub fn session(&self) -> &AssistantSession {
        &self.session
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        match code {
            KeyCode::Down => {
                let i = match self.list_state.selected() {
                    Some(i) if i + 1 < len => i + 1,
                    _ => 0,
                };
                self.list_state.select(Some(i));
            }
            KeyCode::Up => {
                let i = match self.list_state.selected() {
                    Some(0) | None => len - 1,
                    Some(i) => i - 1,
                };
                self.list_state.select(Some(i));
            }
            KeyCode::Enter => self.choose_selected(),
            _ => {}
        }
    }

    fn choose_selected(&mut self) {
        if self.typing {
            return;
        }
        let Some(option) = self
            .list_state
            .selected()
            .and_then(|i| self.options.get(i))
            .cloned()
        else {
            return;
        };

        match option {
            MenuOption::Link { label, url } => {
                self.notice = Some(format!("{label}: {url}"));
            }
            MenuOption::Choice { label, payload } => {
                let before = self.session.transcript().len();
                if let Outcome::Applied { added, .. } = self.session.select(&label, payload.as_ref()) {
                    self.notice = None;
                    self.options = self.session.options();
                    self.list_state.select(Some(0));
                    if added > 1 {
                        // Echo now, answer after the delay.
                        self.visible = before + 1;
                        self.typing = true;
                        let tx = self.tx.clone();
                        tokio::spawn(async move {
                            tokio::time::sleep(TYPING_DELAY).await;
                            let _ = tx.send(Action::ReplyReady);
                        });
                    } else {
                        self.visible = self.session.transcript().len();
                    }
                }
            }
        }
    }

    pub fn reply_ready(&mut self) {
        self.typing = false;
        self.visible = self.session.transcript().len();
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);

        // Left: options
        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|option| match option {
                MenuOption::Choice { label, .. } => ListItem::new(label.as_str()),
                MenuOption::Link { label, .. } => ListItem::new(Line::from(Span::styled(
                    format!("{label} ↗"),
                    Style::default().fg(Color::Cyan),
                ))),
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Options ({})", self.session.state())),
            )
            .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, chunks[0], &mut self.list_state);

        // Right: transcript
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(chunks[1]);

        let mut lines = Vec::new();
        for m in self.session.transcript().iter().take(self.visible) {
            let (who, color) = match m.author {
                Author::User => ("You", Color::Green),
                Author::Assistant => ("Assistant", Color::Cyan),
            };
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", m.timestamp.format("%H:%M:%S"))),
                Span::styled(format!("{who}: "), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::raw(m.text.clone()),
            ]));
        }
        if self.typing {
            lines.push(Line::from(Span::styled(
                "Assistant is typing...",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }

        let inner_width = usize::from(right[0].width.saturating_sub(2)).max(1);
        let inner_height = usize::from(right[0].height.saturating_sub(2));
        let rows: usize = lines.iter().map(|l| l.width().div_ceil(inner_width).max(1)).sum();
        let scroll = u16::try_from(rows.saturating_sub(inner_height)).unwrap_or(u16::MAX);

        let transcript = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(Block::default().borders(Borders::ALL).title("Smart Portfolio Assistant"));
        f.render_widget(transcript, right[0]);

        let notice = Paragraph::new(self.notice.as_deref().unwrap_or("Enter to choose"))
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Link"));
        f.render_widget(notice, right[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use shravfolio_assistant::DialogueState;
    use tokio::sync::mpsc;

    fn choose(view: &mut AssistantView, label: &str) {
        let i = view
            .options
            .iter()
            .position(|o| o.label() == label)
            .unwrap();
        view.list_state.select(Some(i));
        view.handle_key(KeyCode::Enter);
    }

    #[tokio::test]
    async fn answer_waits_for_typing_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut view = AssistantView::new(tx);
        assert_eq!(view.visible, 1);

        choose(&mut view, "Talk about Shravani Karra");
        assert!(view.is_typing());
        assert_eq!(view.visible, 2);
        assert_eq!(view.session().state(), DialogueState::About);

        // Choices are locked until the answer is shown.
        view.handle_key(KeyCode::Enter);
        assert_eq!(view.session().transcript().len(), 3);

        assert!(matches!(rx.recv().await, Some(Action::ReplyReady)));
        view.reply_ready();
        assert!(!view.is_typing());
        assert_eq!(view.visible, 3);
    }

    #[tokio::test]
    async fn back_shows_immediately() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut view = AssistantView::new(tx);
        choose(&mut view, "Contact");
        rx.recv().await;
        view.reply_ready();

        choose(&mut view, "Back");
        assert!(!view.is_typing());
        assert_eq!(view.session().state(), DialogueState::Home);
    }

    #[tokio::test]
    async fn link_sets_notice_without_dispatch() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut view = AssistantView::new(tx);
        choose(&mut view, "Talk about a project");
        rx.recv().await;
        view.reply_ready();
        choose(&mut view, "Immigame");
        rx.recv().await;
        view.reply_ready();

        let len = view.session().transcript().len();
        choose(&mut view, "Open Live");
        assert_eq!(view.notice.as_deref(), Some("Open Live: https://immigame.com"));
        assert_eq!(view.session().transcript().len(), len);
        assert_eq!(view.session().state(), DialogueState::ProjectDetail);
    }

    #[test]
    fn selection_wraps() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut view = AssistantView::new(tx);
        view.handle_key(KeyCode::Up);
        assert_eq!(view.list_state.selected(), Some(view.options.len() - 1));
        view.handle_key(KeyCode::Down);
        assert_eq!(view.list_state.selected(), Some(0));
    }

    #[test]
    fn renders_home_menu() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut view = AssistantView::new(tx);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| view.render(f, f.area())).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(screen.contains("Talk about a project"));
        assert!(screen.contains("Options (home)"));
    }
}
