//! Fixed-budget force relaxation.
//!
//! The force model mirrors the classic d3-force setup used for beeswarm
//! plots: a weak pull toward a horizontal center, a strong pull toward each
//! node's vertical target, and pairwise collision resolution. Nodes carry a
//! velocity that decays every tick while `alpha` cools from 1 toward 0.
//!
//! There is no live animation: callers run a fixed number of ticks and read
//! back the settled positions.

use std::f64::consts::PI;

use rand::Rng;

const INITIAL_RADIUS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceConfig {
    /// Horizontal target shared by every node.
    pub center_x: f64,
    pub x_strength: f64,
    pub y_strength: f64,
    /// Per-node collision radius; two nodes settle `2 * collide_radius` apart.
    pub collide_radius: f64,
    pub collide_strength: f64,
    pub collide_iterations: usize,
    pub alpha_min: f64,
    /// Fraction of velocity lost each tick.
    pub velocity_decay: f64,
    /// Tick budget `alpha` is tuned to reach `alpha_min` in.
    pub ticks: usize,
}

impl ForceConfig {
    pub fn alpha_decay(&self) -> f64 {
        1.0 - self.alpha_min.powf(1.0 / self.ticks.max(1) as f64)
    }
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            x_strength: 0.05,
            y_strength: 1.0,
            collide_radius: 8.0,
            collide_strength: 1.0,
            collide_iterations: 4,
            alpha_min: 0.001,
            velocity_decay: 0.4,
            ticks: 300,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub target_y: f64,
}

impl Node {
    pub fn new(target_y: f64) -> Self {
        Self {
            x: f64::NAN,
            y: f64::NAN,
            vx: 0.0,
            vy: 0.0,
            target_y,
        }
    }
}

pub struct Simulation<R> {
    nodes: Vec<Node>,
    config: ForceConfig,
    alpha: f64,
    alpha_decay: f64,
    rng: R,
}

impl<R: Rng> Simulation<R> {
    /// Nodes without a position are placed on a phyllotaxis spiral around the
    /// origin so no two start on top of each other.
    pub fn new(mut nodes: Vec<Node>, config: ForceConfig, rng: R) -> Self {
        let initial_angle = PI * (3.0 - 5f64.sqrt());
        for (i, node) in nodes.iter_mut().enumerate() {
            if node.x.is_nan() || node.y.is_nan() {
                let radius = INITIAL_RADIUS * (0.5 + i as f64).sqrt();
                let angle = i as f64 * initial_angle;
                node.x = radius * angle.cos();
                node.y = radius * angle.sin();
            }
        }

        Self {
            nodes,
            alpha_decay: config.alpha_decay(),
            config,
            alpha: 1.0,
            rng,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    pub fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    pub fn tick(&mut self) {
        self.alpha += (0.0 - self.alpha) * self.alpha_decay;
        let alpha = self.alpha;

        self.apply_center(alpha);
        for _ in 0..self.config.collide_iterations {
            self.apply_collide();
        }

        let keep = 1.0 - self.config.velocity_decay;
        for node in &mut self.nodes {
            node.vx *= keep;
            node.vy *= keep;
            node.x += node.vx;
            node.y += node.vy;
        }
    }

    fn apply_center(&mut self, alpha: f64) {
        let ForceConfig {
            center_x,
            x_strength,
            y_strength,
            ..
        } = self.config;
        for node in &mut self.nodes {
            node.vx += (center_x - node.x) * x_strength * alpha;
            node.vy += (node.target_y - node.y) * y_strength * alpha;
        }
    }

    /// Pairwise overlap resolution on the predicted positions. Equal radii
    /// split each correction evenly between the two nodes.
    fn apply_collide(&mut self) {
        let r = 2.0 * self.config.collide_radius;
        let r2 = r * r;
        let strength = self.config.collide_strength;
        let n = self.nodes.len();

        for i in 0..n {
            let xi = self.nodes[i].x + self.nodes[i].vx;
            let yi = self.nodes[i].y + self.nodes[i].vy;

            for j in (i + 1)..n {
                let other = self.nodes[j];
                let mut dx = xi - other.x - other.vx;
                let mut dy = yi - other.y - other.vy;
                let mut l = dx * dx + dy * dy;
                if l >= r2 {
                    continue;
                }

                if dx == 0.0 {
                    dx = jiggle(&mut self.rng);
                    l += dx * dx;
                }
                if dy == 0.0 {
                    dy = jiggle(&mut self.rng);
                    l += dy * dy;
                }

                let distance = l.sqrt();
                let push = (r - distance) / distance * strength;
                dx *= push;
                dy *= push;

                self.nodes[i].vx += dx * 0.5;
                self.nodes[i].vy += dy * 0.5;
                self.nodes[j].vx -= dx * 0.5;
                self.nodes[j].vy -= dy * 0.5;
            }
        }
    }
}

fn jiggle<R: Rng>(rng: &mut R) -> f64 {
    (rng.gen::<f64>() - 0.5) * 1e-6
}
