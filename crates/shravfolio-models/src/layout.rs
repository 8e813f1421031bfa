//! Force-directed placement of projects for the skill graph.
//!
//! Each project becomes a circular node pulled toward the focus of its
//! pillar. Nodes repel each other slightly and never overlap (collision
//! radius is the node radius plus a margin). The simulation runs to
//! completion up-front; renderers only read the final coordinates.
//!
//! ```text
//!  wide canvas                        narrow canvas (< 768)
//!  ┌──────────────────────────────┐   ┌──────────┐
//!  │   E2E  ·  BUSINESS  ·  DEEP   │   │   E2E    │
//!  │   (w/4)    (w/2)     (3w/4)   │   │ BUSINESS │
//!  └──────────────────────────────┘   │   DEEP   │
//!                                     └──────────┘
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::category::ProjectCategory;
use crate::project::{Project, ProjectId};
use crate::text::truncate_label;

/// Canvases narrower than this use the stacked layout.
pub const NARROW_BREAKPOINT: f64 = 768.0;

const MAX_LABEL_CHARS: usize = 18;
const COLLIDE_MARGIN: f64 = 10.0;
const COLLIDE_ITERATIONS: usize = 2;
const CHARGE_STRENGTH: f64 = -30.0;
const VELOCITY_DECAY: f64 = 0.4;
const ALPHA_MIN: f64 = 0.001;
const TICKS: usize = 300;
const START_SPREAD: f64 = 50.0;

/// Parameters of a layout run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Seed of the start-position jitter. Equal seeds give equal layouts.
    pub seed: u64,
}

impl LayoutConfig {
    /// A layout for a `width` × `height` canvas with the default seed.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            seed: 0x5eed,
        }
    }

    /// Returns true when the canvas uses the stacked arrangement.
    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_BREAKPOINT
    }

    /// Node radius for this canvas.
    pub fn node_radius(&self) -> f64 {
        if self.is_narrow() {
            40.0
        } else {
            65.0
        }
    }

    fn focus_strength(&self) -> f64 {
        if self.is_narrow() {
            0.3
        } else {
            0.15
        }
    }

    /// Point every node of `category` is pulled toward.
    pub fn focus(&self, category: ProjectCategory) -> (f64, f64) {
        let slot = (category.index() + 1) as f64;
        if self.is_narrow() {
            (self.width / 2.0, self.height / 4.0 * slot)
        } else {
            (self.width / 4.0 * slot, self.height / 2.0)
        }
    }
}

/// A positioned project.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Project the node stands for.
    pub project_id: ProjectId,
    /// Possibly truncated title.
    pub label: String,
    /// Pillar of the project.
    pub category: ProjectCategory,
    /// Fill colour.
    pub color: &'static str,
    /// Node radius.
    pub radius: f64,
    /// Final x coordinate.
    pub x: f64,
    /// Final y coordinate.
    pub y: f64,
}

/// A pillar caption drawn behind its cluster.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CategoryCaption {
    /// Pillar.
    pub category: ProjectCategory,
    /// Caption text (`"DEEP DIVE"`).
    pub text: String,
    /// Caption colour.
    pub color: &'static str,
    /// Caption x coordinate.
    pub x: f64,
    /// Caption y coordinate.
    pub y: f64,
}

/// Result of a layout run.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GraphLayout {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// One node per project, in input order.
    pub nodes: Vec<GraphNode>,
    /// One caption per pillar.
    pub captions: Vec<CategoryCaption>,
}

struct Body {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    radius: f64,
    focus: (f64, f64),
}

/// Run the simulation for `projects` and return the settled positions.
pub fn layout_projects(projects: &[Project], config: LayoutConfig) -> GraphLayout {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let radius = config.node_radius();
    let (cx, cy) = (config.width / 2.0, config.height / 2.0);

    let mut bodies: Vec<Body> = projects
        .iter()
        .map(|p| Body {
            x: cx + (rng.gen::<f64>() - 0.5) * START_SPREAD,
            y: cy + (rng.gen::<f64>() - 0.5) * START_SPREAD,
            vx: 0.0,
            vy: 0.0,
            radius,
            focus: config.focus(p.category),
        })
        .collect();

    let alpha_decay = 1.0 - ALPHA_MIN.powf(1.0 / TICKS as f64);
    let mut alpha = 1.0;
    for _ in 0..TICKS {
        alpha += (0.0 - alpha) * alpha_decay;
        apply_focus(&mut bodies, config.focus_strength(), alpha);
        for _ in 0..COLLIDE_ITERATIONS {
            apply_collide(&mut bodies, &mut rng);
        }
        apply_charge(&mut bodies, alpha, &mut rng);
        for b in &mut bodies {
            b.vx *= 1.0 - VELOCITY_DECAY;
            b.vy *= 1.0 - VELOCITY_DECAY;
            b.x += b.vx;
            b.y += b.vy;
        }
    }

    let nodes = projects
        .iter()
        .zip(&bodies)
        .map(|(p, b)| GraphNode {
            project_id: p.id.clone(),
            label: truncate_label(&p.title, MAX_LABEL_CHARS),
            category: p.category,
            color: p.category.color(),
            radius: b.radius,
            x: b.x,
            y: b.y,
        })
        .collect();

    let captions = ProjectCategory::ALL
        .into_iter()
        .map(|category| {
            let (x, y) = config.focus(category);
            CategoryCaption {
                category,
                text: category.caption(),
                color: category.color(),
                x,
                y: if config.is_narrow() {
                    y
                } else {
                    config.height * 0.15
                },
            }
        })
        .collect();

    GraphLayout {
        width: config.width,
        height: config.height,
        nodes,
        captions,
    }
}

fn jiggle(rng: &mut StdRng) -> f64 {
    (rng.gen::<f64>() - 0.5) * 1e-6
}

fn apply_focus(bodies: &mut [Body], strength: f64, alpha: f64) {
    for b in bodies {
        b.vx += (b.focus.0 - b.x) * strength * alpha;
        b.vy += (b.focus.1 - b.y) * strength * alpha;
    }
}

/// Push overlapping pairs apart, judging overlap on next-step positions.
fn apply_collide(bodies: &mut [Body], rng: &mut StdRng) {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let ri = bodies[i].radius + COLLIDE_MARGIN;
            let rj = bodies[j].radius + COLLIDE_MARGIN;
            let r = ri + rj;
            let mut dx = (bodies[i].x + bodies[i].vx) - (bodies[j].x + bodies[j].vx);
            let mut dy = (bodies[i].y + bodies[i].vy) - (bodies[j].y + bodies[j].vy);
            if dx == 0.0 {
                dx = jiggle(rng);
            }
            if dy == 0.0 {
                dy = jiggle(rng);
            }
            let dist2 = dx * dx + dy * dy;
            if dist2 >= r * r {
                continue;
            }
            let dist = dist2.sqrt();
            let push = (r - dist) / dist;
            dx *= push;
            dy *= push;
            let share = (rj * rj) / (ri * ri + rj * rj);
            bodies[i].vx += dx * share;
            bodies[i].vy += dy * share;
            bodies[j].vx -= dx * (1.0 - share);
            bodies[j].vy -= dy * (1.0 - share);
        }
    }
}

/// Pairwise repulsion (negative strength) scaled by inverse squared distance.
fn apply_charge(bodies: &mut [Body], alpha: f64, rng: &mut StdRng) {
    let snapshot: Vec<(f64, f64)> = bodies.iter().map(|b| (b.x, b.y)).collect();
    for (i, b) in bodies.iter_mut().enumerate() {
        for (j, &(ox, oy)) in snapshot.iter().enumerate() {
            if i == j {
                continue;
            }
            let mut dx = ox - b.x;
            let mut dy = oy - b.y;
            if dx == 0.0 {
                dx = jiggle(rng);
            }
            if dy == 0.0 {
                dy = jiggle(rng);
            }
            let mut dist2 = dx * dx + dy * dy;
            if dist2 < 1.0 {
                dist2 = dist2.sqrt();
            }
            b.vx += dx * CHARGE_STRENGTH * alpha / dist2;
            b.vy += dy * CHARGE_STRENGTH * alpha / dist2;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::fallback_projects;

    fn mean_x(layout: &GraphLayout, category: ProjectCategory) -> f64 {
        let xs: Vec<f64> = layout
            .nodes
            .iter()
            .filter(|n| n.category == category)
            .map(|n| n.x)
            .collect();
        xs.iter().sum::<f64>() / xs.len() as f64
    }

    fn mean_y(layout: &GraphLayout, category: ProjectCategory) -> f64 {
        let ys: Vec<f64> = layout
            .nodes
            .iter()
            .filter(|n| n.category == category)
            .map(|n| n.y)
            .collect();
        ys.iter().sum::<f64>() / ys.len() as f64
    }

    #[test]
    fn wide_layout_orders_clusters_left_to_right() {
        let layout = layout_projects(&fallback_projects(), LayoutConfig::new(1200.0, 600.0));
        assert_eq!(layout.nodes.len(), 6);
        let e2e = mean_x(&layout, ProjectCategory::EndToEnd);
        let biz = mean_x(&layout, ProjectCategory::BusinessValue);
        let deep = mean_x(&layout, ProjectCategory::DeepDive);
        assert!(e2e < biz && biz < deep, "got {e2e} {biz} {deep}");
    }

    #[test]
    fn narrow_layout_stacks_clusters_top_to_bottom() {
        let layout = layout_projects(&fallback_projects(), LayoutConfig::new(400.0, 1200.0));
        assert!(layout.nodes.iter().all(|n| n.radius == 40.0));
        let e2e = mean_y(&layout, ProjectCategory::EndToEnd);
        let biz = mean_y(&layout, ProjectCategory::BusinessValue);
        let deep = mean_y(&layout, ProjectCategory::DeepDive);
        assert!(e2e < biz && biz < deep, "got {e2e} {biz} {deep}");
    }

    #[test]
    fn same_seed_same_layout() {
        let projects = fallback_projects();
        let a = layout_projects(&projects, LayoutConfig::new(1000.0, 700.0));
        let b = layout_projects(&projects, LayoutConfig::new(1000.0, 700.0));
        assert_eq!(a, b);
    }

    #[test]
    fn coordinates_are_finite() {
        let layout = layout_projects(&fallback_projects(), LayoutConfig::new(900.0, 500.0));
        for n in &layout.nodes {
            assert!(n.x.is_finite() && n.y.is_finite());
        }
    }

    #[test]
    fn nodes_in_a_cluster_do_not_sit_on_top_of_each_other() {
        let layout = layout_projects(&fallback_projects(), LayoutConfig::new(1200.0, 600.0));
        for (i, a) in layout.nodes.iter().enumerate() {
            for b in layout.nodes.iter().skip(i + 1) {
                let d = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
                assert!(d > a.radius, "{} and {} overlap ({d})", a.label, b.label);
            }
        }
    }

    #[test]
    fn captions_one_per_pillar() {
        let layout = layout_projects(&[], LayoutConfig::new(1200.0, 600.0));
        assert!(layout.nodes.is_empty());
        assert_eq!(layout.captions.len(), 3);
        assert_eq!(layout.captions[2].text, "DEEP DIVE");
        assert_eq!(layout.captions[0].y, 600.0 * 0.15);
    }

    #[test]
    fn focus_points() {
        let wide = LayoutConfig::new(1200.0, 600.0);
        assert_eq!(wide.focus(ProjectCategory::EndToEnd), (300.0, 300.0));
        assert_eq!(wide.focus(ProjectCategory::DeepDive), (900.0, 300.0));
        let narrow = LayoutConfig::new(400.0, 800.0);
        assert_eq!(narrow.focus(ProjectCategory::BusinessValue), (200.0, 400.0));
    }
}
