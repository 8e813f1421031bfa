use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle},
        Block, Borders,
    },
    Frame,
};
use shravfolio_models::{layout_projects, GraphLayout, LayoutConfig, Project};

// Approximate pixel size of one terminal cell.
const CELL_WIDTH: f64 = 8.0;
const CELL_HEIGHT: f64 = 16.0;

fn parse_color(hex: &str) -> Color {
    hex.parse().unwrap_or(Color::White)
}

pub struct GraphView {
    projects: Vec<Project>,
    layout: Option<GraphLayout>,
}

impl GraphView {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            layout: None,
        }
    }

    /// Re-run the simulation only when the drawing area changed size.
    fn ensure_layout(&mut self, area: Rect) {
        let width = f64::from(area.width.max(1)) * CELL_WIDTH;
        let height = f64::from(area.height.max(1)) * CELL_HEIGHT;
        let stale = self
            .layout
            .as_ref()
            .is_none_or(|l| l.width != width || l.height != height);
        if stale {
            self.layout = Some(layout_projects(&self.projects, LayoutConfig::new(width, height)));
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Skill Graph");
        self.ensure_layout(block.inner(area));
        let Some(layout) = &self.layout else {
            return;
        };

        // Canvas y grows upwards, layout y grows downwards.
        let flip = |y: f64| layout.height - y;
        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([0.0, layout.width])
            .y_bounds([0.0, layout.height])
            .paint(|ctx| {
                for caption in &layout.captions {
                    let half = caption.text.chars().count() as f64 * CELL_WIDTH / 2.0;
                    ctx.print(
                        caption.x - half,
                        flip(caption.y),
                        Line::from(Span::styled(
                            caption.text.clone(),
                            Style::default()
                                .fg(parse_color(caption.color))
                                .add_modifier(Modifier::DIM),
                        )),
                    );
                }
                for node in &layout.nodes {
                    ctx.draw(&Circle {
                        x: node.x,
                        y: flip(node.y),
                        radius: node.radius,
                        color: parse_color(node.color),
                    });
                }
                ctx.layer();
                for node in &layout.nodes {
                    let half = node.label.chars().count() as f64 * CELL_WIDTH / 2.0;
                    ctx.print(node.x - half, flip(node.y), Line::from(node.label.clone()));
                }
            });
        f.render_widget(canvas, area);
    }
}
