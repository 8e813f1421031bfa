#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Assistant,
    Projects,
    Graph,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Assistant, Tab::Projects, Tab::Graph];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Assistant => "Assistant",
            Tab::Projects => "Projects",
            Tab::Graph => "Skill Graph",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Assistant => 0,
            Tab::Projects => 1,
            Tab::Graph => 2,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }
}

pub trait AppController {
    fn update(&mut self, action: super::tui::Action);
    fn render(&mut self, f: &mut ratatui::Frame);
    fn should_quit(&self) -> bool;
}
