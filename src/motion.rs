//! Motion descriptions for the page's reveal effects.
//!
//! A [`Motion`] pairs a starting [`Pose`] with the pose it settles in and the
//! [`Transition`] between them. Components render the starting pose on the
//! server and flip to the target once their [`Trigger`] fires in the browser.
//! Everything here renders to inline CSS so the browser does the tweening.

/// Delay between consecutive hero lines in the entrance cascade (s).
pub const HERO_STAGGER_STEP: f64 = 0.15;

/// How far the background mesh drifts over a full page scroll (% of its height).
pub const PARALLAX_RANGE_PERCENT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Horizontal translate in px.
    pub x: f64,
    /// Vertical translate in px.
    pub y: f64,
    pub scale: f64,
    pub scale_x: f64,
    /// Rotation in degrees.
    pub rotate: f64,
    pub rotate_x: f64,
}

impl Pose {
    pub const VISIBLE: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        rotate: 0.0,
        rotate_x: 0.0,
    };

    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        ..Pose::VISIBLE
    };

    pub const fn shifted(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    pub const fn scaled(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub const fn scaled_x(self, scale_x: f64) -> Self {
        Self { scale_x, ..self }
    }

    pub const fn rotated(self, rotate: f64, rotate_x: f64) -> Self {
        Self {
            rotate,
            rotate_x,
            ..self
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({}) scaleX({}) rotate({}deg) rotateX({}deg)",
            self.x, self.y, self.scale, self.scale_x, self.rotate, self.rotate_x
        )
    }

    pub fn style(&self) -> String {
        format!("opacity: {}; transform: {};", self.opacity, self.transform())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
    Linear,
    /// Overshoots slightly before settling.
    Spring,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Linear => "linear",
            Easing::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Seconds.
    pub duration: f64,
    /// Seconds.
    pub delay: f64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: f64, easing: Easing) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing,
        }
    }

    pub const fn delayed(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    /// CSS `transition` value animating each of `properties` the same way.
    pub fn css(&self, properties: &[&str]) -> String {
        properties
            .iter()
            .map(|p| {
                format!(
                    "{p} {}s {} {}s",
                    self.duration,
                    self.easing.css(),
                    self.delay
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Plays once, right after the page hydrates.
    Mount,
    /// Plays the first time the element scrolls into view and stays put.
    ViewportOnce,
    /// Follows visibility: plays on entry, reverts on exit.
    Viewport,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: Pose,
    pub to: Pose,
    pub transition: Transition,
    pub trigger: Trigger,
}

impl Motion {
    pub const fn new(from: Pose, transition: Transition, trigger: Trigger) -> Self {
        Self {
            from,
            to: Pose::VISIBLE,
            transition,
            trigger,
        }
    }

    pub const fn delayed(self, delay: f64) -> Self {
        Self {
            transition: self.transition.delayed(delay),
            ..self
        }
    }

    pub fn pose(&self, fired: bool) -> Pose {
        if fired {
            self.to
        } else {
            self.from
        }
    }

    pub fn style(&self, fired: bool) -> String {
        format!(
            "{} transition: {};",
            self.pose(fired).style(),
            self.transition.css(&["opacity", "transform"])
        )
    }

    /// Hero copy rising into place.
    pub const fn fade_in_up(delay: f64) -> Self {
        Self::new(
            Pose::HIDDEN.shifted(0.0, 60.0),
            Transition::new(0.8, Easing::EaseOut).delayed(delay),
            Trigger::Mount,
        )
    }

    /// Hero stat tiles flipping up from a shrunken, tilted start.
    pub const fn stat_tile(delay: f64) -> Self {
        Self::new(
            Pose::HIDDEN.scaled(0.5).rotated(0.0, 90.0),
            Transition::new(0.8, Easing::Spring).delayed(delay),
            Trigger::Mount,
        )
    }

    pub const fn hero_visual() -> Self {
        Self::new(
            Pose::HIDDEN.scaled(0.8).rotated(-5.0, 0.0),
            Transition::new(1.0, Easing::EaseOut),
            Trigger::Mount,
        )
    }

    /// Slide in horizontally on mount, used by the navigation bar.
    pub const fn nav_slide(x: f64) -> Self {
        Self::new(
            Pose::HIDDEN.shifted(x, 0.0),
            Transition::new(0.3, Easing::EaseOut),
            Trigger::Mount,
        )
    }

    pub const fn header_line(delay: f64) -> Self {
        Self::new(
            Pose::HIDDEN.shifted(0.0, 10.0),
            Transition::new(0.3, Easing::EaseOut).delayed(delay),
            Trigger::ViewportOnce,
        )
    }

    /// Section underline drawing out from the center.
    pub const fn underline() -> Self {
        Self::new(
            Pose::VISIBLE.scaled_x(0.0),
            Transition::new(0.3, Easing::EaseOut),
            Trigger::ViewportOnce,
        )
    }

    pub const fn slide_in(x: f64) -> Self {
        Self::new(
            Pose::HIDDEN.shifted(x, 0.0),
            Transition::new(0.6, Easing::EaseOut),
            Trigger::ViewportOnce,
        )
    }

    pub const fn timeline_entry(delay: f64) -> Self {
        Self::new(
            Pose::HIDDEN.shifted(0.0, 50.0),
            Transition::new(0.6, Easing::EaseOut).delayed(delay),
            Trigger::ViewportOnce,
        )
    }

    pub const fn footer_callout() -> Self {
        Self::new(
            Pose::HIDDEN.shifted(0.0, 20.0),
            Transition::new(0.3, Easing::EaseOut),
            Trigger::Viewport,
        )
    }
}

/// Skill bars grow from empty to their level over this transition.
pub const SKILL_FILL: Transition = Transition::new(1.5, Easing::EaseOut);

/// One-shot flag behind viewport-once reveals.
///
/// Once fired it stays fired, no matter how often the element leaves and
/// re-enters the viewport.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub fn is_fired(&self) -> bool {
        self.fired
    }

    /// Feeds a visibility reading; returns true only on the call that fires.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }
}

pub fn stagger_delay(base: f64, step: f64, index: usize) -> f64 {
    base + step * index as f64
}

/// Background drift (%) for a scroll progress in `[0, 1]`.
pub fn parallax_offset(progress: f64) -> f64 {
    progress.clamp(0.0, 1.0) * PARALLAX_RANGE_PERCENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_style() {
        assert_eq!(
            Pose::HIDDEN.shifted(0.0, 60.0).style(),
            "opacity: 0; transform: translate3d(0px, 60px, 0) scale(1) scaleX(1) rotate(0deg) rotateX(0deg);"
        );
        assert_eq!(
            Pose::VISIBLE.style(),
            "opacity: 1; transform: translate3d(0px, 0px, 0) scale(1) scaleX(1) rotate(0deg) rotateX(0deg);"
        );
    }

    #[test]
    fn test_transition_css() {
        let t = Transition::new(0.6, Easing::EaseOut).delayed(0.2);
        assert_eq!(
            t.css(&["opacity", "transform"]),
            "opacity 0.6s ease-out 0.2s, transform 0.6s ease-out 0.2s"
        );
        assert_eq!(SKILL_FILL.css(&["width"]), "width 1.5s ease-out 0s");
    }

    #[test]
    fn test_motion_swaps_pose_when_fired() {
        let m = Motion::timeline_entry(0.4);
        assert_eq!(m.pose(false).opacity, 0.0);
        assert_eq!(m.pose(false).y, 50.0);
        assert_eq!(m.pose(true), Pose::VISIBLE);
        assert!(m.style(false).contains("opacity: 0;"));
        assert!(m.style(true).contains("opacity: 1;"));
        assert!(m.style(true).contains("0.4s"));
    }

    #[test]
    fn test_underline_stays_opaque() {
        let m = Motion::underline();
        assert_eq!(m.from.opacity, 1.0);
        assert_eq!(m.from.scale_x, 0.0);
        assert_eq!(m.to.scale_x, 1.0);
    }

    #[test]
    fn test_latch_never_reverts() {
        let mut latch = RevealLatch::default();
        assert!(!latch.is_fired());
        assert!(!latch.observe(false));
        assert!(!latch.is_fired());

        assert!(latch.observe(true));
        assert!(latch.is_fired());

        // scrolled away and back
        assert!(!latch.observe(false));
        assert!(latch.is_fired());
        assert!(!latch.observe(true));
        assert!(latch.is_fired());
    }

    #[test]
    fn test_stagger_delay() {
        let delays = (0..5)
            .map(|i| stagger_delay(0.0, HERO_STAGGER_STEP, i))
            .collect::<Vec<_>>();
        assert_eq!(delays[0], 0.0);
        for pair in delays.windows(2) {
            assert!((pair[1] - pair[0] - HERO_STAGGER_STEP).abs() < 1e-9);
        }
        assert!((stagger_delay(0.2, 0.2, 3) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_parallax_offset() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(0.5), 10.0);
        assert_eq!(parallax_offset(1.0), PARALLAX_RANGE_PERCENT);
        assert_eq!(parallax_offset(3.0), PARALLAX_RANGE_PERCENT);
        assert_eq!(parallax_offset(-1.0), 0.0);
    }
}
