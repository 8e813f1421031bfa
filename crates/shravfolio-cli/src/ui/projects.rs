use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use shravfolio_models::{Project, ProjectCategory};
use shravfolio_sdk::Catalog;

pub fn category_color(category: ProjectCategory) -> Color {
    category.color().parse().unwrap_or(Color::White)
}

pub struct ProjectsView {
    catalog: Catalog,
    list_state: ListState,
}

impl ProjectsView {
    pub fn new(catalog: Catalog) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            catalog,
            list_state,
        }
    }

    fn selected(&self) -> Option<&Project> {
        self.list_state
            .selected()
            .and_then(|i| self.catalog.projects.get(i))
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        let len = self.catalog.projects.len();
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
            _ => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[0]);

        let items: Vec<ListItem> = self
            .catalog
            .projects
            .iter()
            .map(|p| {
                ListItem::new(Line::from(vec![
                    Span::styled("● ", Style::default().fg(category_color(p.category))),
                    Span::raw(format!("{} ({})", p.title, p.year)),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Projects [{}]", self.catalog.source)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, cols[0], &mut self.list_state);

        let detail = match self.selected() {
            Some(p) => {
                let color = category_color(p.category);
                let mut lines = vec![
                    Line::from(Span::styled(
                        p.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!(
                            "{} · {} · {}",
                            p.category.pillar(),
                            p.category,
                            p.category.tag()
                        ),
                        Style::default().fg(color),
                    )),
                    Line::raw(""),
                    Line::raw(p.description.clone()),
                    Line::raw(""),
                    Line::raw(format!("Stack: {}", p.technologies.join(", "))),
                    Line::raw(format!("GitHub: {}", p.github_url)),
                ];
                if let Some(demo) = &p.demo_url {
                    lines.push(Line::raw(format!("Live: {demo}")));
                }
                lines
            }
            None => vec![Line::raw("No projects.")],
        };
        let detail = Paragraph::new(detail)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Details"));
        f.render_widget(detail, cols[1]);

        let log: Vec<Line> = self
            .catalog
            .log
            .iter()
            .rev()
            .take(4)
            .rev()
            .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(Color::DarkGray))))
            .collect();
        let log = Paragraph::new(log).block(Block::default().borders(Borders::ALL).title("Loading log"));
        f.render_widget(log, rows[1]);
    }
}
