pub mod lead_form;
pub mod pages;
pub mod scene_graph;
pub mod scroll_reveal;

#[cfg(not(feature = "ssr"))]
pub mod intro;
#[cfg(not(feature = "ssr"))]
pub mod sequencer;
#[cfg(not(feature = "ssr"))]
pub mod typer;

pub use lead_form::LeadForm;
pub use scene_graph::SceneRefs;
pub use scroll_reveal::{RevealOnScroll, ScrollRevealRegistry, provide_scroll_reveal, use_scroll_reveal};
