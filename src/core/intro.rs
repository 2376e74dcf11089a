//! Intro animation state
//!
//! The intro morphs three overlapping shapes and a reveal-mask hole from 0% to
//! 100% progress. `IntroAnimator::tick` is called once per display refresh with
//! the frame timestamp and the current viewport, and returns an `IntroFrame`
//! describing every visual parameter for that frame. Nothing here touches the
//! DOM; see `scene::apply_intro_frame`.

use std::f64::consts::PI;

use super::config::ChoreographyConfig;
use super::easing::{clamped_progress, ease_in_out_quint, lerp, renormalize};

/// Number of converging shapes
pub const SHAPE_COUNT: usize = 3;

/// Upper bound of the mask hole width, in vh
pub const MASK_HOLE_MAX_WIDTH: f64 = 100.0;
/// Upper bound of the mask hole height, in vh
pub const MASK_HOLE_MAX_HEIGHT: f64 = 60.0;
/// Share of the viewport the hole may cover before the caps apply
const MASK_HOLE_VIEWPORT_SHARE: f64 = 0.8;
const MASK_BLUR_BASE_PX: f64 = 80.0;
const MASK_BLUR_GROWTH_PX: f64 = 40.0;

/// Shapes fill this share of the shorter viewport side
const SHAPE_SIZE_PERCENT: f64 = 95.0;
/// Shape height relative to its width
const SHAPE_ASPECT: f64 = 0.6;
/// Target scale multiplier all shapes converge to
const CONVERGED_SCALE: f64 = 1.0;

/// Browser viewport in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_portrait(&self) -> bool {
        self.width < self.height
    }
}

/// Viewport-relative length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportUnit {
    Vw,
    Vh,
}

impl ViewportUnit {
    fn as_str(self) -> &'static str {
        match self {
            ViewportUnit::Vw => "vw",
            ViewportUnit::Vh => "vh",
        }
    }
}

/// Shape edge length, bound to the shorter viewport side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSize {
    pub value: f64,
    pub unit: ViewportUnit,
}

impl ShapeSize {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let unit = if viewport.is_portrait() {
            ViewportUnit::Vw
        } else {
            ViewportUnit::Vh
        };
        Self {
            value: SHAPE_SIZE_PERCENT,
            unit,
        }
    }

    /// CSS width, e.g. `95vh`
    pub fn width_css(&self) -> String {
        format!("{}{}", self.value, self.unit.as_str())
    }

    /// CSS height shared by shapes and the section holder
    pub fn height_css(&self) -> String {
        format!("calc({} * {})", self.width_css(), SHAPE_ASPECT)
    }
}

/// Mask parameters for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskFrame {
    /// Hole width in vh
    pub hole_width: f64,
    /// Hole height in vh
    pub hole_height: f64,
    pub blur_px: f64,
    /// Set once the mask fade has started
    pub opacity: Option<f64>,
}

/// Transform and opacity of one shape for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeFrame {
    pub axis_x: f64,
    pub axis_y: f64,
    pub angle_deg: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl ShapeFrame {
    pub fn transform_css(&self) -> String {
        format!(
            "translate3d(-50%, -50%, 0) rotate3d({}, {}, 0.5, {}deg) scale3d({}, {}, 1)",
            self.axis_x, self.axis_y, self.angle_deg, self.scale, self.scale
        )
    }
}

/// Every visual parameter of the intro for one tick
#[derive(Debug, Clone, PartialEq)]
pub struct IntroFrame {
    /// Raw progress in `[0, 1]`
    pub progress: f64,
    pub eased: f64,
    pub mask: MaskFrame,
    pub shape_size: ShapeSize,
    pub shapes: [ShapeFrame; SHAPE_COUNT],
    /// Convergence progress, present once the convergence phase is active
    pub convergence: Option<f64>,
    pub reveal_logo_elements: bool,
    /// True on exactly one frame: convergence just completed
    pub trigger_handoff: bool,
    /// No further frames need to be scheduled
    pub finished: bool,
}

/// Drives the intro from the first tick until progress reaches 1.
#[derive(Debug, Clone)]
pub struct IntroAnimator {
    duration_ms: f64,
    mask_fade_start: f64,
    convergence_start: f64,
    logo_reveal_after: f64,
    shape_scales: [f64; SHAPE_COUNT],
    shape_opacities: [f64; SHAPE_COUNT],
    start_time: Option<f64>,
    progress: f64,
    converging: bool,
    has_triggered_handoff: bool,
}

impl IntroAnimator {
    pub fn new(config: &ChoreographyConfig) -> Self {
        Self {
            duration_ms: config.intro_duration_ms,
            mask_fade_start: config.mask_fade_start,
            convergence_start: config.convergence_start,
            logo_reveal_after: config.logo_reveal_after,
            shape_scales: config.shape_scales,
            shape_opacities: config.shape_opacities,
            start_time: None,
            progress: 0.0,
            converging: false,
            has_triggered_handoff: false,
        }
    }

    #[cfg(test)]
    fn is_converging(&self) -> bool {
        self.converging
    }

    #[cfg(test)]
    fn has_triggered_handoff(&self) -> bool {
        self.has_triggered_handoff
    }

    /// Advance to the frame timestamp `now_ms` and compute the frame.
    pub fn tick(&mut self, now_ms: f64, viewport: Viewport) -> IntroFrame {
        let start = *self.start_time.get_or_insert(now_ms);
        let progress = clamped_progress(now_ms - start, self.duration_ms);
        // A clock that steps backwards must not rewind the animation
        self.progress = self.progress.max(progress);
        let progress = self.progress;
        let eased = ease_in_out_quint(progress);

        let mask = MaskFrame {
            hole_width: MASK_HOLE_MAX_WIDTH.min(viewport.width * MASK_HOLE_VIEWPORT_SHARE)
                * eased,
            hole_height: MASK_HOLE_MAX_HEIGHT.min(viewport.height * MASK_HOLE_VIEWPORT_SHARE)
                * eased,
            blur_px: MASK_BLUR_BASE_PX + MASK_BLUR_GROWTH_PX * eased,
            opacity: renormalize(progress, self.mask_fade_start)
                .map(|fade| 1.0 - ease_in_out_quint(fade)),
        };

        let convergence = renormalize(progress, self.convergence_start);
        if convergence.is_some() {
            self.converging = true;
        }
        let convergence = if self.converging {
            Some(convergence.unwrap_or(1.0))
        } else {
            None
        };
        let eased_convergence = convergence.map(ease_in_out_quint);

        let shapes = std::array::from_fn(|index| {
            let offset = index as f64 * 2.0 * PI / SHAPE_COUNT as f64;
            let base = self.shape_scales[index];
            let multiplier = eased_convergence
                .map(|t| lerp(base, CONVERGED_SCALE, t))
                .unwrap_or(base);

            ShapeFrame {
                axis_x: offset.sin(),
                axis_y: offset.cos(),
                angle_deg: -360.0 * (1.0 - eased),
                scale: eased * multiplier,
                opacity: self.shape_opacities[index],
            }
        });

        let reveal_logo_elements = convergence.is_some_and(|c| c > self.logo_reveal_after);

        let trigger_handoff = reveal_logo_elements
            && convergence.is_some_and(|c| c >= 1.0)
            && !self.has_triggered_handoff;
        if trigger_handoff {
            self.has_triggered_handoff = true;
        }

        IntroFrame {
            progress,
            eased,
            mask,
            shape_size: ShapeSize::for_viewport(viewport),
            shapes,
            convergence,
            reveal_logo_elements,
            trigger_handoff,
            finished: progress >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn desktop() -> Viewport {
        Viewport::new(1440.0, 900.0)
    }

    fn animator() -> IntroAnimator {
        IntroAnimator::new(&ChoreographyConfig::default())
    }

    /// Frame at `elapsed_ms`, with the first tick at t=1000.
    fn frame_at(elapsed_ms: f64) -> IntroFrame {
        let mut intro = animator();
        intro.tick(1000.0, desktop());
        intro.tick(1000.0 + elapsed_ms, desktop())
    }

    #[test]
    fn test_first_tick_starts_at_zero() {
        let mut intro = animator();
        let frame = intro.tick(123_456.0, desktop());

        assert_eq!(frame.progress, 0.0);
        assert_eq!(frame.eased, 0.0);
        assert_eq!(frame.mask.hole_width, 0.0);
        assert_eq!(frame.mask.blur_px, 80.0);
        assert_eq!(frame.mask.opacity, None);
        assert!(!frame.finished);
    }

    #[test]
    fn test_progress_clamps_to_one() {
        for elapsed in [7000.0, 7001.0, 20_000.0, 1e9] {
            let frame = frame_at(elapsed);
            assert_eq!(frame.progress, 1.0);
            assert!(frame.finished);
        }
    }

    #[test]
    fn test_progress_never_rewinds() {
        let mut intro = animator();
        intro.tick(0.0, desktop());
        let later = intro.tick(3500.0, desktop());
        let earlier = intro.tick(1000.0, desktop());

        assert_eq!(later.progress, 0.5);
        assert_eq!(earlier.progress, 0.5);
    }

    #[test]
    fn test_mask_hole_caps_on_large_viewport() {
        let frame = frame_at(7000.0);
        assert!((frame.mask.hole_width - 100.0).abs() < EPS);
        assert!((frame.mask.hole_height - 60.0).abs() < EPS);
        assert!((frame.mask.blur_px - 120.0).abs() < EPS);
    }

    #[test]
    fn test_mask_hole_follows_tiny_viewport() {
        let mut intro = animator();
        let tiny = Viewport::new(50.0, 40.0);
        intro.tick(0.0, tiny);
        let frame = intro.tick(7000.0, tiny);

        assert!((frame.mask.hole_width - 40.0).abs() < EPS);
        assert!((frame.mask.hole_height - 32.0).abs() < EPS);
    }

    #[test]
    fn test_mask_fade_starts_at_half() {
        assert_eq!(frame_at(3430.0).mask.opacity, None);
        assert_eq!(frame_at(3500.0).mask.opacity, Some(1.0));
        assert_eq!(frame_at(7000.0).mask.opacity, Some(0.0));
    }

    #[test]
    fn test_scale_uses_base_multiplier_before_convergence() {
        let frame = frame_at(0.59 * 7000.0);
        let eased = frame.eased;

        assert_eq!(frame.convergence, None);
        for (shape, base) in frame.shapes.iter().zip([0.3, 0.6, 1.0]) {
            assert!((shape.scale - eased * base).abs() < EPS);
        }
    }

    #[test]
    fn test_scale_converges_to_one() {
        let frame = frame_at(7000.0);
        for shape in frame.shapes {
            assert!((shape.scale - 1.0).abs() < EPS);
        }

        let almost = frame_at(0.99 * 7000.0);
        for shape in almost.shapes {
            assert!((shape.scale - almost.eased).abs() < 1e-3);
        }
    }

    #[test]
    fn test_rotation_unwinds() {
        assert!((frame_at(0.0).shapes[0].angle_deg + 360.0).abs() < EPS);
        assert!(frame_at(7000.0).shapes[0].angle_deg.abs() < EPS);
    }

    #[test]
    fn test_rotation_axes_are_spread() {
        let frame = frame_at(1000.0);
        assert!(frame.shapes[0].axis_x.abs() < EPS);
        assert!((frame.shapes[0].axis_y - 1.0).abs() < EPS);
        assert!((frame.shapes[1].axis_x - (2.0 * PI / 3.0).sin()).abs() < EPS);
        assert!((frame.shapes[2].axis_y - (4.0 * PI / 3.0).cos()).abs() < EPS);
    }

    #[test]
    fn test_convergence_never_deactivates() {
        let mut intro = animator();
        intro.tick(0.0, desktop());
        intro.tick(4500.0, desktop());
        assert!(intro.is_converging());

        let frame = intro.tick(100.0, desktop());
        assert!(intro.is_converging());
        assert!(frame.convergence.is_some());
    }

    #[test]
    fn test_logo_elements_revealed_after_half_convergence() {
        // convergence progress 0.5 at raw 0.8
        assert!(!frame_at(0.79 * 7000.0).reveal_logo_elements);
        assert!(frame_at(0.81 * 7000.0).reveal_logo_elements);
    }

    #[test]
    fn test_handoff_triggers_once() {
        let mut intro = animator();
        intro.tick(0.0, desktop());

        let mut triggers = 0;
        for step in 1..=400 {
            let frame = intro.tick(step as f64 * 50.0, desktop());
            if frame.trigger_handoff {
                triggers += 1;
                assert!(frame.finished);
            }
        }

        assert_eq!(triggers, 1);
        assert!(intro.has_triggered_handoff());
    }

    #[test]
    fn test_shape_size_follows_orientation() {
        let landscape = ShapeSize::for_viewport(Viewport::new(1200.0, 800.0));
        let portrait = ShapeSize::for_viewport(Viewport::new(390.0, 844.0));

        assert_eq!(landscape.width_css(), "95vh");
        assert_eq!(landscape.height_css(), "calc(95vh * 0.6)");
        assert_eq!(portrait.width_css(), "95vw");
    }

    #[test]
    fn test_transform_css() {
        let shape = ShapeFrame {
            axis_x: 0.0,
            axis_y: 1.0,
            angle_deg: -180.0,
            scale: 0.5,
            opacity: 1.0,
        };
        assert_eq!(
            shape.transform_css(),
            "translate3d(-50%, -50%, 0) rotate3d(0, 1, 0.5, -180deg) scale3d(0.5, 0.5, 1)"
        );
    }
}
