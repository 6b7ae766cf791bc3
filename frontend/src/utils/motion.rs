//! Scroll-linked values and one-shot entrance transitions, expressed as plain
//! numbers and inline CSS so they can be checked without a browser.

/// Delay added per list position when items enter one after another.
pub const STAGGER_STEP_SECS: f64 = 0.2;

/// Maps a scroll offset onto an output range, clamping at both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMapping {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl ScrollMapping {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;
        if value.is_nan() {
            return out_start;
        }
        if in_start == in_end {
            return if value < in_start { out_start } else { out_end };
        }
        let progress = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
        out_start + (out_end - out_start) * progress
    }
}

/// Upper-right background orb drift, in pixels.
pub const ORB_TOP_DRIFT: ScrollMapping = ScrollMapping::new((0.0, 300.0), (0.0, -50.0));
/// Lower-left background orb drift, in pixels.
pub const ORB_BOTTOM_DRIFT: ScrollMapping = ScrollMapping::new((0.0, 300.0), (0.0, -100.0));
/// Hero section fade while scrolling away.
pub const HERO_FADE: ScrollMapping = ScrollMapping::new((0.0, 300.0), (1.0, 0.8));

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate_x: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate_x: 0.0,
    };

    pub const fn hidden() -> Self {
        Pose {
            opacity: 0.0,
            ..Pose::REST
        }
    }

    pub const fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub const fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub const fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub const fn rotate_x(mut self, degrees: f64) -> Self {
        self.rotate_x = degrees;
        self
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({}) rotateX({}deg);",
            self.opacity, self.x, self.y, self.scale, self.rotate_x
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    /// Overshoots slightly before settling, like a light spring.
    Spring,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// A one-time transition from `from` to `to`, started by a gate flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub from: Pose,
    pub to: Pose,
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Entrance {
    pub const fn from(from: Pose) -> Self {
        Entrance {
            from,
            to: Pose::REST,
            duration: 0.8,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub const fn duration(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    pub const fn delay(mut self, secs: f64) -> Self {
        self.delay = secs;
        self
    }

    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Same entrance, delayed by its position in a list.
    pub fn staggered(mut self, index: usize) -> Self {
        self.delay += index as f64 * STAGGER_STEP_SECS;
        self
    }

    pub fn pose(&self, active: bool) -> Pose {
        if active {
            self.to
        } else {
            self.from
        }
    }

    pub fn style(&self, active: bool) -> String {
        let easing = self.easing.css();
        format!(
            "{} transition: opacity {d}s {e} {w}s, transform {d}s {e} {w}s;",
            self.pose(active).to_css(),
            d = self.duration,
            e = easing,
            w = self.delay,
        )
    }
}

pub const HERO_CARD: Entrance = Entrance::from(Pose::hidden().y(50.0)).duration(1.0);
pub const HERO_LOGO: Entrance = Entrance::from(Pose::REST.scale(0.0))
    .delay(0.2)
    .easing(Easing::Spring);
pub const HERO_TITLE: Entrance = Entrance::from(Pose::hidden().y(30.0)).delay(0.4);
pub const HERO_SUBTITLE: Entrance = Entrance::from(Pose::hidden().y(20.0)).delay(0.6);
pub const HERO_CTA: Entrance = Entrance::from(Pose::hidden().scale(0.8)).delay(0.8);

/// Plain fade used by whole sections.
pub const SECTION_FADE: Entrance = Entrance::from(Pose::hidden()).duration(1.0);
/// Fade and rise used by headings, cards and list items.
pub const RISE: Entrance = Entrance::from(Pose::hidden().y(50.0));
/// Rise with a slight backwards tilt, used by testimonial cards.
pub const TILT_RISE: Entrance = Entrance::from(Pose::hidden().y(50.0).rotate_x(-10.0));
/// Grow in from 80%, used by the closing call to action.
pub const GROW: Entrance = Entrance::from(Pose::hidden().scale(0.8));
pub const SLIDE_FROM_LEFT: Entrance = Entrance::from(Pose::hidden().x(-30.0));
pub const SLIDE_FROM_RIGHT: Entrance = Entrance::from(Pose::hidden().x(30.0));
