//! Scroll-triggered reveal of landing page sections
//!
//! Every `RevealOnScroll` block registers itself with the page registry. Once
//! the page is mounted, `start_scroll_reveal` watches all of them and adds the
//! `visible` class the first time each one enters the viewport.

use leptos::html;
use leptos::prelude::*;

/// One registered block
#[derive(Clone, Copy)]
pub struct RevealTarget {
    pub id: usize,
    pub node: NodeRef<html::Div>,
    pub visible: RwSignal<bool>,
}

/// Page-wide list of reveal blocks, shared through context
#[derive(Clone, Copy)]
pub struct ScrollRevealRegistry {
    targets: StoredValue<Vec<RevealTarget>>,
}

impl ScrollRevealRegistry {
    pub fn new() -> Self {
        Self {
            targets: StoredValue::new(Vec::new()),
        }
    }

    /// Add a block and return its handle.
    pub fn register(&self, node: NodeRef<html::Div>) -> RevealTarget {
        let mut target = RevealTarget {
            id: 0,
            node,
            visible: RwSignal::new(false),
        };
        self.targets.update_value(|targets| {
            target.id = targets.len();
            targets.push(target);
        });
        target
    }

    pub fn targets(&self) -> Vec<RevealTarget> {
        self.targets.get_value()
    }

    pub fn len(&self) -> usize {
        self.targets.with_value(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ScrollRevealRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide a fresh registry to the current component tree
pub fn provide_scroll_reveal() -> ScrollRevealRegistry {
    let registry = ScrollRevealRegistry::new();
    provide_context(registry);
    registry
}

/// Get the registry from context
pub fn use_scroll_reveal() -> Option<ScrollRevealRegistry> {
    use_context::<ScrollRevealRegistry>()
}

/// Block that fades in the first time it scrolls into view
#[component]
pub fn RevealOnScroll(
    /// Extra classes for the wrapper
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();

    let Some(registry) = use_scroll_reveal() else {
        // outside a registry the block is simply shown
        return view! {
            <div class=format!("reveal-on-scroll visible {class}")>{children()}</div>
        }
        .into_any();
    };
    let target = registry.register(node);

    view! {
        <div
            node_ref=node
            class=format!("reveal-on-scroll {class}")
            class:visible=move || target.visible.get()
            data-reveal-id=target.id.to_string()
        >
            {children()}
        </div>
    }
    .into_any()
}

#[cfg(not(feature = "ssr"))]
pub use observer::start_scroll_reveal;

#[cfg(not(feature = "ssr"))]
mod observer {
    use std::collections::HashMap;

    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::ScrollRevealRegistry;
    use crate::core::{RevealSet, SceneError};

    const REVEAL_ID_ATTRIBUTE: &str = "data-reveal-id";

    fn reveal_id(entry: &IntersectionObserverEntry) -> Option<usize> {
        entry
            .target()
            .get_attribute(REVEAL_ID_ATTRIBUTE)
            .and_then(|id| id.parse().ok())
    }

    /// Observe every registered block at `threshold` visibility.
    pub fn start_scroll_reveal(
        registry: ScrollRevealRegistry,
        threshold: f64,
    ) -> Result<(), SceneError> {
        let targets = registry.targets();

        let mut pending = RevealSet::new();
        let mut visible = HashMap::new();
        let mut elements = Vec::with_capacity(targets.len());
        for target in &targets {
            let element = target
                .node
                .get_untracked()
                .ok_or(SceneError::MissingRevealTarget(target.id))?;
            pending.observe(target.id);
            visible.insert(target.id, target.visible);
            elements.push(element);
        }
        let watched = pending.pending_len();

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let Some(id) = reveal_id(&entry) else {
                        continue;
                    };
                    if pending.on_intersection(&id, entry.is_intersecting()) {
                        if let Some(signal) = visible.get(&id) {
                            signal.set(true);
                        }
                        observer.unobserve(&entry.target());
                    }
                }
                if pending.is_settled() {
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin("0px");
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| SceneError::Browser(format!("IntersectionObserver: {e:?}")))?;

        for element in &elements {
            observer.observe(element);
        }
        leptos::logging::log!("Watching {} sections for scroll reveal", watched);

        // The observer outlives this call; keep its callback alive
        callback.forget();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_register_assigns_sequential_ids() {
        Owner::new().with(|| {
            let registry = ScrollRevealRegistry::new();
            assert!(registry.is_empty());

            let ids: Vec<usize> = (0..3)
                .map(|_| registry.register(NodeRef::new()).id)
                .collect();

            assert_eq!(ids, vec![0, 1, 2]);
            assert_eq!(registry.len(), 3);
        });
    }

    #[test]
    fn test_registered_targets_start_hidden() {
        Owner::new().with(|| {
            let registry = ScrollRevealRegistry::new();
            registry.register(NodeRef::new());

            let targets = registry.targets();
            assert_eq!(targets.len(), 1);
            assert!(!targets[0].visible.get_untracked());
        });
    }

    #[test]
    fn test_provided_registry_is_found_in_context() {
        Owner::new().with(|| {
            let provided = provide_scroll_reveal();
            provided.register(NodeRef::new());

            let found = use_scroll_reveal().expect("registry in context");
            assert_eq!(found.len(), 1);
        });
    }
}
