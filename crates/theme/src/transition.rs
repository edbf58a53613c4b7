//! Mode-change transitions.
//!
//! A mode change either applies immediately or is revealed through a circle
//! growing from the point that triggered it. The choice is made once, when
//! the change happens, from the capabilities of the running terminal.

use std::time::{Duration, Instant};

/// Length of the circular reveal.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// Env var that requests reduced motion when set to anything but `0`/`false`.
pub const REDUCED_MOTION_ENV: &str = "FOLIO_REDUCED_MOTION";

/// A terminal cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPoint {
    pub x: u16,
    pub y: u16,
}

impl CellPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Visible area size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What the environment allows for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionEnvironment {
    /// Terminal can show a smooth per-cell color reveal
    pub animations_supported: bool,
    /// User asked for reduced motion
    pub reduced_motion: bool,
    pub viewport: Viewport,
}

impl MotionEnvironment {
    pub fn new(animations_supported: bool, reduced_motion: bool, viewport: Viewport) -> Self {
        Self {
            animations_supported,
            reduced_motion,
            viewport,
        }
    }

    /// Read the process environment.
    ///
    /// Animation needs true-color output (`COLORTERM=truecolor|24bit`) unless
    /// `force_animations` is set. Reduced motion is on when configured or when
    /// [`REDUCED_MOTION_ENV`] is set.
    pub fn detect(viewport: Viewport, reduced_motion: bool, force_animations: bool) -> Self {
        let truecolor = std::env::var("COLORTERM")
            .map(|v| {
                let v = v.to_ascii_lowercase();
                v == "truecolor" || v == "24bit"
            })
            .unwrap_or(false);
        let env_reduced = std::env::var(REDUCED_MOTION_ENV)
            .map(|v| !matches!(v.trim(), "" | "0" | "false"))
            .unwrap_or(false);

        Self::new(
            truecolor || force_animations,
            reduced_motion || env_reduced,
            viewport,
        )
    }

    pub fn allows_animation(&self) -> bool {
        self.animations_supported && !self.reduced_motion
    }
}

/// CSS `ease-in-out`, i.e. `cubic-bezier(0.42, 0, 0.58, 1)`.
pub fn ease_in_out(t: f64) -> f64 {
    const X1: f64 = 0.42;
    const X2: f64 = 0.58;

    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    // Both control points share y = (0, 1), so y(s) is a fixed polynomial
    let bezier = |s: f64, p1: f64, p2: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };

    // x(s) is monotonic on [0, 1]; bisect for x(s) = t
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..40 {
        let mid = (lo + hi) / 2.0;
        if bezier(mid, X1, X2) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier((lo + hi) / 2.0, 0.0, 1.0)
}

/// Circle growing from `origin` until it covers the farthest corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularReveal {
    pub origin: CellPoint,
    pub end_radius: f64,
    pub duration: Duration,
    pub started_at: Instant,
}

impl CircularReveal {
    pub fn new(origin: CellPoint, viewport: Viewport, started_at: Instant) -> Self {
        Self {
            origin,
            end_radius: Self::end_radius(origin, viewport),
            duration: TRANSITION_DURATION,
            started_at,
        }
    }

    /// Distance from `origin` to the farthest viewport corner.
    pub fn end_radius(origin: CellPoint, viewport: Viewport) -> f64 {
        let x = origin.x as f64;
        let y = origin.y as f64;
        let w = viewport.width as f64;
        let h = viewport.height as f64;
        x.max(w - x).hypot(y.max(h - y))
    }

    /// Eased progress in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        ease_in_out(elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }

    pub fn radius_at(&self, now: Instant) -> f64 {
        self.end_radius * self.progress(now)
    }

    /// Whether `cell` is inside the revealed (new-mode) region.
    pub fn contains(&self, cell: CellPoint, now: Instant) -> bool {
        let dx = cell.x as f64 - self.origin.x as f64;
        let dy = cell.y as f64 - self.origin.y as f64;
        dx.hypot(dy) <= self.radius_at(now)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

/// How a mode change reaches the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionStrategy {
    Animated(CircularReveal),
    Immediate,
}

impl TransitionStrategy {
    /// Animate only with an origin point and an environment that allows it.
    pub fn choose(origin: Option<CellPoint>, env: &MotionEnvironment, now: Instant) -> Self {
        match origin {
            Some(origin) if env.allows_animation() => {
                TransitionStrategy::Animated(CircularReveal::new(origin, env.viewport, now))
            }
            _ => TransitionStrategy::Immediate,
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, TransitionStrategy::Animated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(animations_supported: bool, reduced_motion: bool) -> MotionEnvironment {
        MotionEnvironment::new(animations_supported, reduced_motion, Viewport::new(100, 40))
    }

    #[test]
    fn test_ease_in_out_shape() {
        assert!(ease_in_out(0.0).abs() < 1e-9);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-9);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        // Slow start, slow end
        assert!(ease_in_out(0.1) < 0.1);
        assert!(ease_in_out(0.9) > 0.9);
        // Clamped
        assert_eq!(ease_in_out(-1.0), ease_in_out(0.0));
        assert_eq!(ease_in_out(2.0), ease_in_out(1.0));
    }

    #[test]
    fn test_end_radius_reaches_farthest_corner() {
        let viewport = Viewport::new(100, 40);

        let corner = CircularReveal::end_radius(CellPoint::new(0, 0), viewport);
        assert!((corner - 100f64.hypot(40.0)).abs() < 1e-9);

        let offset = CircularReveal::end_radius(CellPoint::new(70, 10), viewport);
        assert!((offset - 70f64.hypot(30.0)).abs() < 1e-9);
    }

    #[test]
    fn test_reveal_grows_over_duration() {
        let start = Instant::now();
        let reveal = CircularReveal::new(CellPoint::new(10, 5), Viewport::new(100, 40), start);

        assert_eq!(reveal.radius_at(start), 0.0);
        assert!(reveal.contains(CellPoint::new(10, 5), start));
        assert!(!reveal.contains(CellPoint::new(99, 39), start));
        assert!(!reveal.is_finished(start));

        let end = start + TRANSITION_DURATION;
        assert!(reveal.is_finished(end));
        assert!((reveal.radius_at(end) - reveal.end_radius).abs() < 1e-6);
        for (x, y) in [(0, 0), (99, 0), (0, 39), (99, 39)] {
            assert!(reveal.contains(CellPoint::new(x, y), end));
        }

        let later = end + Duration::from_secs(3);
        assert!((reveal.progress(later) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_choose_strategy() {
        let now = Instant::now();
        let origin = Some(CellPoint::new(3, 4));

        assert!(TransitionStrategy::choose(origin, &env(true, false), now).is_animated());
        assert_eq!(
            TransitionStrategy::choose(None, &env(true, false), now),
            TransitionStrategy::Immediate
        );
        assert_eq!(
            TransitionStrategy::choose(origin, &env(true, true), now),
            TransitionStrategy::Immediate
        );
        assert_eq!(
            TransitionStrategy::choose(origin, &env(false, false), now),
            TransitionStrategy::Immediate
        );
    }
}
