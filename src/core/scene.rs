//! Scene elements and how choreography state is written to them
//!
//! Every element the choreography touches is named by a `SceneNode`. The
//! `Scene` trait is the only way animation code changes the page; the browser
//! implementation lives in `ui::scene_graph`, tests use a recording one.

use derive_more::Display;

use super::intro::{IntroFrame, SHAPE_COUNT};
use super::timeline::{Property, Step};

/// An element of the landing page scene
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SceneNode {
    #[display("mask")]
    Mask,
    #[display("mask hole")]
    MaskHole,
    #[display("shape #{}", _0 + 1)]
    Shape(usize),
    #[display("shape image #{}", _0 + 1)]
    ShapeImage(usize),
    #[display("logo elements")]
    LogoElements,
    #[display("section holder")]
    SectionHolder,
    #[display("complete logo")]
    CompleteLogo,
    #[display("content container")]
    ContentContainer,
    #[display("text wrapper")]
    TextWrapper,
    #[display("heading")]
    Heading,
    #[display("heading text")]
    HeadingText,
    #[display("heading cursor")]
    HeadingCursor,
    #[display("subtitle")]
    Subtitle,
    #[display("call-to-action pill")]
    Pill,
    #[display("lead form")]
    LeadForm,
    #[display("thank-you message")]
    ThankYou,
    #[display("privacy policy button")]
    PrivacyPolicy,
    #[display("persona button")]
    Persona,
    #[display("email link")]
    Email,
    #[display("careers link")]
    Careers,
}

impl SceneNode {
    /// Every node a complete scene must provide
    pub fn all() -> Vec<SceneNode> {
        let mut nodes = vec![SceneNode::Mask, SceneNode::MaskHole];
        nodes.extend((0..SHAPE_COUNT).map(SceneNode::Shape));
        nodes.extend((0..SHAPE_COUNT).map(SceneNode::ShapeImage));
        nodes.extend([
            SceneNode::LogoElements,
            SceneNode::SectionHolder,
            SceneNode::CompleteLogo,
            SceneNode::ContentContainer,
            SceneNode::TextWrapper,
            SceneNode::Heading,
            SceneNode::HeadingText,
            SceneNode::HeadingCursor,
            SceneNode::Subtitle,
            SceneNode::Pill,
            SceneNode::LeadForm,
            SceneNode::ThankYou,
            SceneNode::PrivacyPolicy,
            SceneNode::Persona,
            SceneNode::Email,
            SceneNode::Careers,
        ]);
        nodes
    }
}

/// Write access to the scene elements
pub trait Scene {
    fn set_style(&self, node: SceneNode, property: &str, value: &str);

    fn add_class(&self, node: SceneNode, class: &str);

    fn set_text(&self, node: SceneNode, text: &str);

    /// Force pending style changes to be computed, so that a following
    /// transition starts from them.
    fn flush(&self) {}
}

/// Write one intro frame to the scene.
pub fn apply_intro_frame(scene: &impl Scene, frame: &IntroFrame, shape_fade_out_ms: u32) {
    scene.set_style(
        SceneNode::MaskHole,
        "width",
        &format!("{}vh", frame.mask.hole_width),
    );
    scene.set_style(
        SceneNode::MaskHole,
        "height",
        &format!("{}vh", frame.mask.hole_height),
    );
    scene.set_style(
        SceneNode::MaskHole,
        "filter",
        &format!("blur({}px)", frame.mask.blur_px),
    );
    if let Some(opacity) = frame.mask.opacity {
        scene.set_style(SceneNode::Mask, "opacity", &opacity.to_string());
    }

    let width = frame.shape_size.width_css();
    let height = frame.shape_size.height_css();
    for (index, shape) in frame.shapes.iter().enumerate() {
        let node = SceneNode::Shape(index);
        scene.set_style(node, "width", &width);
        scene.set_style(node, "height", &height);
        scene.set_style(node, "transform", &shape.transform_css());
        scene.set_style(node, "opacity", &shape.opacity.to_string());
        scene.set_style(SceneNode::ShapeImage(index), "opacity", "1");
    }

    if frame.reveal_logo_elements {
        scene.add_class(SceneNode::LogoElements, "visible");
    }

    if frame.trigger_handoff {
        let transition =
            format!("opacity {shape_fade_out_ms}ms ease, filter {shape_fade_out_ms}ms ease");
        for index in 0..SHAPE_COUNT {
            scene.set_style(SceneNode::Shape(index), "transition", &transition);
            scene.set_style(SceneNode::Shape(index), "filter", "none");
        }
    }

    scene.set_style(SceneNode::SectionHolder, "height", &height);
}

fn apply_props(scene: &impl Scene, targets: &[SceneNode], props: &[Property]) {
    for &node in targets {
        for prop in props {
            scene.set_style(node, prop.name(), &prop.value());
        }
    }
}

/// Apply one timeline step. Tweens set their transition first and flush, so
/// the new values animate from whatever the elements currently show.
pub fn apply_step(scene: &impl Scene, step: &Step) {
    match step {
        Step::Set { targets, props } => apply_props(scene, targets, props),
        Step::Tween(tween) => {
            let transition = tween.transition_css();
            for &node in &tween.targets {
                scene.set_style(node, "transition", &transition);
            }
            scene.flush();
            apply_props(scene, &tween.targets, &tween.props);
        }
        Step::AddClass { targets, class } => {
            for &node in targets {
                scene.add_class(node, class);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::{Scene, SceneNode};

    /// A scene mutation, as recorded by `RecordingScene`
    #[derive(Debug, Clone, PartialEq)]
    pub enum SceneOp {
        Style(SceneNode, String, String),
        Class(SceneNode, String),
        Text(SceneNode, String),
        Flush,
    }

    /// Scene that remembers every call
    #[derive(Debug, Default)]
    pub struct RecordingScene {
        ops: RefCell<Vec<SceneOp>>,
    }

    impl RecordingScene {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn ops(&self) -> Vec<SceneOp> {
            self.ops.borrow().clone()
        }

        /// Last value written to `property` of `node`
        pub fn style(&self, node: SceneNode, property: &str) -> Option<String> {
            self.ops.borrow().iter().rev().find_map(|op| match op {
                SceneOp::Style(n, p, v) if *n == node && p == property => Some(v.clone()),
                _ => None,
            })
        }

        pub fn has_class(&self, node: SceneNode, class: &str) -> bool {
            self.ops
                .borrow()
                .iter()
                .any(|op| matches!(op, SceneOp::Class(n, c) if *n == node && c == class))
        }

        pub fn text(&self, node: SceneNode) -> Option<String> {
            self.ops.borrow().iter().rev().find_map(|op| match op {
                SceneOp::Text(n, t) if *n == node => Some(t.clone()),
                _ => None,
            })
        }

        pub fn clear(&self) {
            self.ops.borrow_mut().clear();
        }
    }

    impl Scene for RecordingScene {
        fn set_style(&self, node: SceneNode, property: &str, value: &str) {
            self.ops.borrow_mut().push(SceneOp::Style(
                node,
                property.to_string(),
                value.to_string(),
            ));
        }

        fn add_class(&self, node: SceneNode, class: &str) {
            self.ops
                .borrow_mut()
                .push(SceneOp::Class(node, class.to_string()));
        }

        fn set_text(&self, node: SceneNode, text: &str) {
            self.ops
                .borrow_mut()
                .push(SceneOp::Text(node, text.to_string()));
        }

        fn flush(&self) {
            self.ops.borrow_mut().push(SceneOp::Flush);
        }
    }
}
