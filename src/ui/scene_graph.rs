//! Browser side of the scene
//!
//! The landing page attaches a `NodeRef` from `SceneRefs` to every element the
//! choreography animates. `DomScene::resolve` turns them into element handles
//! once, failing with the name of the first element that is not mounted,
//! instead of failing later inside an animation callback.

use leptos::html;
use leptos::prelude::*;

use crate::core::intro::SHAPE_COUNT;

/// Node references for every scene element
#[derive(Clone, Copy)]
pub struct SceneRefs {
    pub mask: NodeRef<html::Div>,
    pub mask_hole: NodeRef<html::Div>,
    pub shapes: [NodeRef<html::Div>; SHAPE_COUNT],
    pub shape_images: [NodeRef<html::Img>; SHAPE_COUNT],
    pub logo_elements: NodeRef<html::Div>,
    pub section_holder: NodeRef<html::Section>,
    pub complete_logo: NodeRef<html::Div>,
    pub content: NodeRef<html::Div>,
    pub text_wrapper: NodeRef<html::Div>,
    pub heading: NodeRef<html::H1>,
    pub heading_text: NodeRef<html::Span>,
    pub heading_cursor: NodeRef<html::Span>,
    pub subtitle: NodeRef<html::P>,
    pub pill: NodeRef<html::Button>,
    pub lead_form: NodeRef<html::Form>,
    pub thank_you: NodeRef<html::Div>,
    pub privacy_policy: NodeRef<html::A>,
    pub persona: NodeRef<html::A>,
    pub email: NodeRef<html::A>,
    pub careers: NodeRef<html::A>,
}

impl SceneRefs {
    pub fn new() -> Self {
        Self {
            mask: NodeRef::new(),
            mask_hole: NodeRef::new(),
            shapes: std::array::from_fn(|_| NodeRef::new()),
            shape_images: std::array::from_fn(|_| NodeRef::new()),
            logo_elements: NodeRef::new(),
            section_holder: NodeRef::new(),
            complete_logo: NodeRef::new(),
            content: NodeRef::new(),
            text_wrapper: NodeRef::new(),
            heading: NodeRef::new(),
            heading_text: NodeRef::new(),
            heading_cursor: NodeRef::new(),
            subtitle: NodeRef::new(),
            pill: NodeRef::new(),
            lead_form: NodeRef::new(),
            thank_you: NodeRef::new(),
            privacy_policy: NodeRef::new(),
            persona: NodeRef::new(),
            email: NodeRef::new(),
            careers: NodeRef::new(),
        }
    }
}

impl Default for SceneRefs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(feature = "ssr"))]
pub use dom::{DomScene, read_page_config};

#[cfg(not(feature = "ssr"))]
mod dom {
    use std::collections::HashMap;

    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    use super::SceneRefs;
    use crate::core::{ChoreographyConfig, Scene, SceneError, SceneNode, Viewport};

    fn to_html<T: JsCast>(element: T) -> HtmlElement {
        element.unchecked_into()
    }

    impl SceneRefs {
        fn element(&self, node: SceneNode) -> Option<HtmlElement> {
            match node {
                SceneNode::Mask => self.mask.get_untracked().map(to_html),
                SceneNode::MaskHole => self.mask_hole.get_untracked().map(to_html),
                SceneNode::Shape(index) => self
                    .shapes
                    .get(index)
                    .and_then(|r| r.get_untracked())
                    .map(to_html),
                SceneNode::ShapeImage(index) => self
                    .shape_images
                    .get(index)
                    .and_then(|r| r.get_untracked())
                    .map(to_html),
                SceneNode::LogoElements => self.logo_elements.get_untracked().map(to_html),
                SceneNode::SectionHolder => self.section_holder.get_untracked().map(to_html),
                SceneNode::CompleteLogo => self.complete_logo.get_untracked().map(to_html),
                SceneNode::ContentContainer => self.content.get_untracked().map(to_html),
                SceneNode::TextWrapper => self.text_wrapper.get_untracked().map(to_html),
                SceneNode::Heading => self.heading.get_untracked().map(to_html),
                SceneNode::HeadingText => self.heading_text.get_untracked().map(to_html),
                SceneNode::HeadingCursor => self.heading_cursor.get_untracked().map(to_html),
                SceneNode::Subtitle => self.subtitle.get_untracked().map(to_html),
                SceneNode::Pill => self.pill.get_untracked().map(to_html),
                SceneNode::LeadForm => self.lead_form.get_untracked().map(to_html),
                SceneNode::ThankYou => self.thank_you.get_untracked().map(to_html),
                SceneNode::PrivacyPolicy => self.privacy_policy.get_untracked().map(to_html),
                SceneNode::Persona => self.persona.get_untracked().map(to_html),
                SceneNode::Email => self.email.get_untracked().map(to_html),
                SceneNode::Careers => self.careers.get_untracked().map(to_html),
            }
        }
    }

    /// Mounted scene elements, keyed by node
    pub struct DomScene {
        window: web_sys::Window,
        nodes: HashMap<SceneNode, HtmlElement>,
    }

    impl DomScene {
        /// Look up every scene element. Fails on the first missing one.
        pub fn resolve(refs: &SceneRefs) -> Result<Self, SceneError> {
            let window = web_sys::window().ok_or(SceneError::NoWindow)?;

            let mut nodes = HashMap::new();
            for node in SceneNode::all() {
                let element = refs
                    .element(node)
                    .ok_or(SceneError::MissingElement(node))?;
                nodes.insert(node, element);
            }

            Ok(Self { window, nodes })
        }

        /// Current viewport size in CSS pixels
        pub fn viewport(&self) -> Viewport {
            let width = self
                .window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or_default();
            let height = self
                .window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or_default();
            Viewport::new(width, height)
        }
    }

    impl Scene for DomScene {
        fn set_style(&self, node: SceneNode, property: &str, value: &str) {
            if let Some(element) = self.nodes.get(&node) {
                let _ = element.style().set_property(property, value);
            }
        }

        fn add_class(&self, node: SceneNode, class: &str) {
            if let Some(element) = self.nodes.get(&node) {
                let _ = element.class_list().add_1(class);
            }
        }

        fn set_text(&self, node: SceneNode, text: &str) {
            if let Some(element) = self.nodes.get(&node) {
                element.set_text_content(Some(text));
            }
        }

        fn flush(&self) {
            // reading layout forces pending styles to be computed
            if let Some(body) = self.window.document().and_then(|d| d.body()) {
                let _ = body.offset_height();
            }
        }
    }

    /// Choreography settings, with the lead endpoint published by the server
    /// in `<meta name="lead-endpoint">`.
    pub fn read_page_config() -> ChoreographyConfig {
        let endpoint = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(r#"meta[name="lead-endpoint"]"#).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"))
            .filter(|content| !content.trim().is_empty());

        let config = match endpoint {
            Some(endpoint) => ChoreographyConfig::default().with_lead_endpoint(endpoint),
            None => ChoreographyConfig::default(),
        };

        if let Err(err) = config.validate() {
            leptos::logging::warn!("Invalid page config ({}), using defaults", err);
            return ChoreographyConfig::default();
        }
        config
    }
}
