//! Splash Screen Component
//!
//! A burst of coloured particles behind a progress bar, shown for a few
//! seconds before the login list.
//!
//! Particles start at the centre, fly out to a random waypoint and settle
//! back at their home position over [`ANIMATION_DURATION`]. The bar gains
//! [`PROGRESS_STEP`] once per second and changes colour on each tick.

use std::time::Duration;

use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Gauge, Widget,
    },
};

pub const PARTICLE_COUNT: usize = 90;
pub const PARTICLE_COLORS: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
pub const ANIMATION_DURATION: Duration = Duration::from_secs(5);
pub const PROGRESS_STEP: f64 = 0.3;

const CENTER: (f64, f64) = (0.5, 0.5);
// Progress reaches 1.0 on the fourth tick and the timer stops there.
const LAST_TICK: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Particle {
    home: (f64, f64),
    waypoint: (f64, f64),
    color: Color,
}

fn random_point<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0))
}

fn lerp(from: (f64, f64), to: (f64, f64), t: f64) -> (f64, f64) {
    (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t)
}

fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn ease_in(t: f64) -> f64 {
    t * t
}

impl Particle {
    fn position(&self, elapsed: Duration) -> (f64, f64) {
        let p = (elapsed.as_secs_f64() / ANIMATION_DURATION.as_secs_f64()).clamp(0.0, 1.0);
        if p < 0.5 {
            lerp(CENTER, self.waypoint, ease_out(p * 2.0))
        } else {
            lerp(self.waypoint, self.home, ease_in((p - 0.5) * 2.0))
        }
    }
}

#[derive(Debug, Clone)]
pub struct SplashState {
    particles: Vec<Particle>,
    elapsed: Duration,
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashState {
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                home: random_point(rng),
                waypoint: random_point(rng),
                color: PARTICLE_COLORS[rng.gen_range(0..PARTICLE_COLORS.len())],
            })
            .collect();

        Self {
            particles,
            elapsed: Duration::ZERO,
        }
    }

    /// Set the time since the splash was first shown
    pub fn advance(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whole-second timer ticks so far
    pub fn ticks(&self) -> u64 {
        self.elapsed.as_secs().min(LAST_TICK)
    }

    pub fn progress(&self) -> f64 {
        (self.ticks() as f64 * PROGRESS_STEP).min(1.0)
    }

    pub fn bar_color(&self) -> Color {
        match self.ticks() {
            1 => Color::Red,
            2 => Color::Green,
            _ => Color::Blue,
        }
    }

    /// Current particle positions in unit coordinates, with their colours
    pub fn particle_positions(&self) -> Vec<((f64, f64), Color)> {
        self.particles
            .iter()
            .map(|p| (p.position(self.elapsed), p.color))
            .collect()
    }
}

pub struct SplashScreen<'a> {
    state: &'a SplashState,
}

impl<'a> SplashScreen<'a> {
    pub fn new(state: &'a SplashState) -> Self {
        Self { state }
    }
}

fn progress_bar_area(area: Rect) -> Rect {
    let width = (area.width as u32 * 60 / 100) as u16;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + area.height / 2;
    Rect::new(x, y, width, area.height.min(1))
}

impl Widget for SplashScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let positions = self.state.particle_positions();
        let groups: Vec<(Color, Vec<(f64, f64)>)> = PARTICLE_COLORS
            .iter()
            .map(|&color| {
                let coords = positions
                    .iter()
                    .filter(|(_, c)| *c == color)
                    .map(|(pos, _)| *pos)
                    .collect();
                (color, coords)
            })
            .collect();

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, 1.0])
            .y_bounds([0.0, 1.0])
            .paint(|ctx| {
                for (color, coords) in &groups {
                    ctx.draw(&Points { coords, color: *color });
                }
            })
            .render(area, buf);

        Gauge::default()
            .gauge_style(Style::default().fg(self.state.bar_color()).bg(Color::DarkGray))
            .ratio(self.state.progress())
            .label("")
            .render(progress_bar_area(area), buf);
    }
}
