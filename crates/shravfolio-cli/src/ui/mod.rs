pub mod assistant;
pub mod graph;
pub mod projects;

use crate::app_state::{AppController, Tab};
use crate::tui::Action;
use assistant::AssistantView;
use crossterm::event::{KeyCode, KeyModifiers};
use graph::GraphView;
use projects::ProjectsView;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use shravfolio_models::OWNER;
use shravfolio_sdk::Catalog;
use tokio::sync::mpsc::UnboundedSender;

pub struct PortfolioApp {
    tab: Tab,
    assistant: AssistantView,
    projects: ProjectsView,
    graph: GraphView,
    should_quit: bool,
}

impl PortfolioApp {
    pub fn new(catalog: Catalog, tx: UnboundedSender<Action>) -> Self {
        Self {
            tab: Tab::Assistant,
            assistant: AssistantView::new(tx),
            graph: GraphView::new(catalog.projects.clone()),
            projects: ProjectsView::new(catalog),
            should_quit: false,
        }
    }
}

impl AppController for PortfolioApp {
    fn update(&mut self, action: Action) {
        match action {
            Action::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                KeyCode::Tab => self.tab = self.tab.next(),
                KeyCode::Char('1') => self.tab = Tab::Assistant,
                KeyCode::Char('2') => self.tab = Tab::Projects,
                KeyCode::Char('3') => self.tab = Tab::Graph,
                code => match self.tab {
                    Tab::Assistant => self.assistant.handle_key(code),
                    Tab::Projects => self.projects.handle_key(code),
                    Tab::Graph => {}
                },
            },
            Action::ReplyReady => self.assistant.reply_ready(),
            Action::Tick | Action::Resize(_, _) => {}
        }
    }

    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(f.area());

        let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
            .select(self.tab.index())
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} · {}", OWNER.name, OWNER.headline)),
            );
        f.render_widget(tabs, chunks[0]);

        match self.tab {
            Tab::Assistant => self.assistant.render(f, chunks[1]),
            Tab::Projects => self.projects.render(f, chunks[1]),
            Tab::Graph => self.graph.render(f, chunks[1]),
        }

        let help = Paragraph::new(" ↑/↓ move · Enter choose · Tab/1-3 switch · q/Esc quit")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(help, chunks[2]);
    }

    fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> Action {
        Action::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn tab_switching_and_quit() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = PortfolioApp::new(Catalog::offline(), tx);
        app.update(key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Projects);
        app.update(key(KeyCode::Char('3')));
        assert_eq!(app.tab, Tab::Graph);
        assert!(!app.should_quit());
        app.update(key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = PortfolioApp::new(Catalog::offline(), tx);
        app.update(Action::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }
}
