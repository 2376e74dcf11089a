//! Scripted timelines of style changes
//!
//! A `Timeline` is an ordered list of steps with absolute start times: instant
//! style sets, CSS-transition tweens, and class additions. Builders place each
//! step either right after the current end of the timeline or overlapping it.
//! The scripts used by the page (hand-off, form reveal, thank-you, typing
//! cursor, auxiliary links) are defined at the bottom of this module.

use super::config::ChoreographyConfig;
use super::intro::SHAPE_COUNT;
use super::scene::SceneNode;

/// Timing function of a tween, rendered as a CSS easing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Ease,
    Power2Out,
    Power2InOut,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::Ease => "ease",
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::Power2InOut => "cubic-bezier(0.645, 0.045, 0.355, 1)",
        }
    }
}

/// One animatable style value
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    Opacity(f64),
    Filter(String),
    /// Vertical offset in px, written as a `transform`
    TranslateY(f64),
    MaxHeight(String),
    Display(&'static str),
    Visibility(&'static str),
    PointerEvents(&'static str),
    Width(&'static str),
    MinWidth(&'static str),
    MaxWidth(&'static str),
}

impl Property {
    /// CSS property name
    pub fn name(&self) -> &'static str {
        match self {
            Property::Opacity(_) => "opacity",
            Property::Filter(_) => "filter",
            Property::TranslateY(_) => "transform",
            Property::MaxHeight(_) => "max-height",
            Property::Display(_) => "display",
            Property::Visibility(_) => "visibility",
            Property::PointerEvents(_) => "pointer-events",
            Property::Width(_) => "width",
            Property::MinWidth(_) => "min-width",
            Property::MaxWidth(_) => "max-width",
        }
    }

    /// CSS property value
    pub fn value(&self) -> String {
        match self {
            Property::Opacity(v) => v.to_string(),
            Property::Filter(v) | Property::MaxHeight(v) => v.clone(),
            Property::TranslateY(px) => format!("translateY({px}px)"),
            Property::Display(v)
            | Property::Visibility(v)
            | Property::PointerEvents(v)
            | Property::Width(v)
            | Property::MinWidth(v)
            | Property::MaxWidth(v) => (*v).to_string(),
        }
    }
}

/// Animated change of `props` on `targets` over `duration_ms`
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub targets: Vec<SceneNode>,
    pub props: Vec<Property>,
    pub duration_ms: u32,
    pub ease: Ease,
}

impl Tween {
    pub fn new(targets: impl Into<Vec<SceneNode>>, props: impl Into<Vec<Property>>) -> Self {
        Self {
            targets: targets.into(),
            props: props.into(),
            duration_ms: 0,
            ease: Ease::Linear,
        }
    }

    pub fn duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Value for the CSS `transition` property covering every tweened property
    pub fn transition_css(&self) -> String {
        let mut names: Vec<&str> = Vec::new();
        for prop in &self.props {
            if !names.contains(&prop.name()) {
                names.push(prop.name());
            }
        }
        names
            .iter()
            .map(|name| format!("{name} {}ms {}", self.duration_ms, self.ease.css()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A single timeline entry
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Apply styles immediately, without a transition
    Set {
        targets: Vec<SceneNode>,
        props: Vec<Property>,
    },
    Tween(Tween),
    AddClass {
        targets: Vec<SceneNode>,
        class: &'static str,
    },
}

impl Step {
    pub fn duration_ms(&self) -> u32 {
        match self {
            Step::Tween(tween) => tween.duration_ms,
            Step::Set { .. } | Step::AddClass { .. } => 0,
        }
    }
}

/// A step with its absolute start time
#[derive(Debug, Clone, PartialEq)]
pub struct Scheduled {
    pub start_ms: u32,
    pub step: Step,
}

/// Where a step is placed relative to the timeline built so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// At the current end of the timeline
    End,
    /// This long before the current end, never before zero
    Overlap(u32),
    /// At an absolute time
    At(u32),
}

/// Ordered list of scheduled steps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    entries: Vec<Scheduled>,
    end_ms: u32,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instant style change at the current end.
    pub fn set(self, targets: impl Into<Vec<SceneNode>>, props: impl Into<Vec<Property>>) -> Self {
        self.push(
            Step::Set {
                targets: targets.into(),
                props: props.into(),
            },
            Position::End,
        )
    }

    /// Append a tween at the current end.
    pub fn to(self, tween: Tween) -> Self {
        self.push(Step::Tween(tween), Position::End)
    }

    /// Place a tween at `position`.
    pub fn to_at(self, tween: Tween, position: Position) -> Self {
        self.push(Step::Tween(tween), position)
    }

    /// Append a class addition at the current end.
    pub fn add_class(self, targets: impl Into<Vec<SceneNode>>, class: &'static str) -> Self {
        self.push(
            Step::AddClass {
                targets: targets.into(),
                class,
            },
            Position::End,
        )
    }

    /// Place any step at `position`.
    pub fn push(mut self, step: Step, position: Position) -> Self {
        let start_ms = match position {
            Position::End => self.end_ms,
            Position::Overlap(ms) => self.end_ms.saturating_sub(ms),
            Position::At(ms) => ms,
        };
        self.end_ms = self.end_ms.max(start_ms + step.duration_ms());

        // keep entries ordered by start, stable for equal starts
        let index = self
            .entries
            .partition_point(|entry| entry.start_ms <= start_ms);
        self.entries.insert(index, Scheduled { start_ms, step });
        self
    }

    /// Append all of `other`, shifted to start at the current end.
    pub fn append(self, other: Timeline) -> Self {
        let offset = self.end_ms;
        other.entries.into_iter().fold(self, |timeline, entry| {
            timeline.push(entry.step, Position::At(offset + entry.start_ms))
        })
    }

    /// Total length, the end of the last finishing step
    pub fn duration_ms(&self) -> u32 {
        self.end_ms
    }

    pub fn entries(&self) -> &[Scheduled] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const CLEARED_DROP_SHADOW: &str = "drop-shadow(0 0 0px rgba(255, 255, 255, 0))";
/// Expanded height of the lead form
pub const FORM_EXPANDED_MAX_HEIGHT: &str = "24rem";

fn shape_images() -> Vec<SceneNode> {
    (0..SHAPE_COUNT).map(SceneNode::ShapeImage).collect()
}

/// Cross-dissolve from the intro shapes to the complete logo.
pub fn handoff_timeline() -> Timeline {
    Timeline::new()
        .set(shape_images(), [Property::Filter(String::new())])
        .to(Tween::new(
            [SceneNode::Shape(0), SceneNode::Shape(1)],
            [
                Property::Opacity(0.0),
                Property::Filter(CLEARED_DROP_SHADOW.to_string()),
            ],
        )
        .duration(250)
        .ease(Ease::Power2InOut))
        .to_at(
            Tween::new(
                [SceneNode::Shape(2)],
                [
                    Property::Opacity(0.0),
                    Property::Filter(CLEARED_DROP_SHADOW.to_string()),
                ],
            )
            .duration(500)
            .ease(Ease::Power2InOut),
            Position::Overlap(300),
        )
        .to_at(
            Tween::new([SceneNode::SectionHolder], [Property::Opacity(0.0)])
                .duration(500)
                .ease(Ease::Power2InOut),
            Position::Overlap(200),
        )
        .set([SceneNode::SectionHolder], [Property::Display("none")])
        .set(
            [SceneNode::CompleteLogo],
            [Property::Opacity(0.0), Property::Display("block")],
        )
        .to(Tween::new([SceneNode::CompleteLogo], [Property::Opacity(1.0)])
            .duration(500)
            .ease(Ease::Power2InOut))
}

/// Collapse and fade the typing cursor once the heading is typed.
pub fn cursor_fade_timeline(config: &ChoreographyConfig) -> Timeline {
    Timeline::new()
        .set(
            [SceneNode::HeadingCursor],
            [
                Property::Width("0"),
                Property::MinWidth("0"),
                Property::MaxWidth("0"),
            ],
        )
        .to(Tween::new([SceneNode::HeadingCursor], [Property::Opacity(0.0)])
            .duration(config.cursor_fade_ms))
        .set([SceneNode::HeadingCursor], [Property::Visibility("hidden")])
}

/// Auxiliary links and buttons fading in together
pub const AUXILIARY: [SceneNode; 4] = [
    SceneNode::PrivacyPolicy,
    SceneNode::Persona,
    SceneNode::Email,
    SceneNode::Careers,
];

/// Hold the auxiliary elements just below their resting place, invisible.
pub fn auxiliary_prepare_timeline() -> Timeline {
    Timeline::new().set(
        AUXILIARY,
        [
            Property::Opacity(0.0),
            Property::TranslateY(10.0),
            Property::Visibility("visible"),
        ],
    )
}

/// Fade the auxiliary elements into place.
pub fn auxiliary_reveal_timeline() -> Timeline {
    Timeline::new()
        .add_class([SceneNode::PrivacyPolicy, SceneNode::Persona], "visible")
        .push(
            Step::Tween(
                Tween::new(AUXILIARY, [Property::Opacity(1.0), Property::TranslateY(0.0)])
                    .duration(500)
                    .ease(Ease::Power2Out),
            ),
            Position::At(0),
        )
}

/// Swap the call-to-action pill for the expanded lead form.
pub fn form_reveal_timeline() -> Timeline {
    Timeline::new()
        .to(Tween::new([SceneNode::Pill], [Property::Opacity(0.0)]).duration(300))
        .set([SceneNode::Pill], [Property::Display("none")])
        .set([SceneNode::LeadForm], [Property::Display("flex")])
        .to(Tween::new(
            [SceneNode::LeadForm],
            [
                Property::Opacity(1.0),
                Property::MaxHeight(FORM_EXPANDED_MAX_HEIGHT.to_string()),
            ],
        )
        .duration(500)
        .ease(Ease::Power2Out))
}

/// Replace the lead form with the thank-you message.
pub fn thank_you_timeline() -> Timeline {
    Timeline::new()
        .to(Tween::new(
            [SceneNode::LeadForm],
            [Property::Opacity(0.0), Property::PointerEvents("none")],
        )
        .duration(300))
        .set([SceneNode::ThankYou], [Property::Display("block")])
        .to(Tween::new([SceneNode::TextWrapper], [Property::TranslateY(0.0)])
            .duration(500)
            .ease(Ease::Power2InOut))
        .to(Tween::new([SceneNode::ThankYou], [Property::Opacity(1.0)])
            .duration(500)
            .ease(Ease::Power2Out))
}
