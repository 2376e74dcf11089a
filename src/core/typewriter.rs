//! Heading typewriter and the content reveal plan.

use super::config::ChoreographyConfig;
use super::scene::SceneNode;
use super::timeline::{
    Property, Timeline, auxiliary_prepare_timeline, auxiliary_reveal_timeline,
    cursor_fade_timeline,
};

/// Reveals a text one character at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
        }
    }

    /// Type the next character and return the visible text, or `None` once
    /// the whole text is shown.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_complete() {
            return None;
        }
        self.typed += 1;
        Some(self.visible())
    }

    pub fn visible(&self) -> String {
        self.chars[..self.typed].iter().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.typed >= self.chars.len()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// One stage of the content reveal
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStep {
    /// Play a timeline to its end
    Animate(Timeline),
    /// Type the heading; completes when the last character is shown
    TypeHeading {
        start_delay_ms: u32,
        char_interval_ms: u32,
    },
    Delay(u32),
}

/// Stages of the content reveal, run strictly in order after the hand-off.
pub fn content_plan(config: &ChoreographyConfig) -> Vec<ContentStep> {
    vec![
        ContentStep::Animate(
            Timeline::new()
                .set([SceneNode::ContentContainer], [Property::Opacity(1.0)])
                .add_class([SceneNode::ContentContainer], "visible")
                .set([SceneNode::Heading], [Property::Opacity(1.0)]),
        ),
        ContentStep::TypeHeading {
            start_delay_ms: config.typing_start_delay_ms,
            char_interval_ms: config.typing_speed_ms,
        },
        ContentStep::Animate(cursor_fade_timeline(config)),
        ContentStep::Delay(config.first_type_pause_ms),
        ContentStep::Animate(
            Timeline::new()
                .set([SceneNode::Subtitle], [Property::Opacity(1.0)])
                .append(auxiliary_prepare_timeline()),
        ),
        ContentStep::Delay(config.reveal_delay_ms),
        ContentStep::Animate(
            Timeline::new()
                .set([SceneNode::Pill], [Property::Visibility("visible")])
                .add_class([SceneNode::Pill], "visible"),
        ),
        ContentStep::Delay(config.reveal_delay_ms),
        ContentStep::Animate(auxiliary_reveal_timeline()),
    ]
}

/// Total time the plan takes for a heading of `heading_chars` characters
pub fn content_plan_duration_ms(plan: &[ContentStep], heading_chars: usize) -> u64 {
    plan.iter()
        .map(|step| match step {
            ContentStep::Animate(timeline) => u64::from(timeline.duration_ms()),
            ContentStep::TypeHeading {
                start_delay_ms,
                char_interval_ms,
            } => u64::from(*start_delay_ms) + heading_chars as u64 * u64::from(*char_interval_ms),
            ContentStep::Delay(ms) => u64::from(*ms),
        })
        .sum()
}
