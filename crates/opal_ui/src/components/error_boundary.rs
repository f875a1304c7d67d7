//! Error boundary
//!
//! Wraps child composition: a build failure (an `Err` or a panic) is
//! caught, reported to an optional error observer with a best-effort
//! context string, and replaced by a fallback view. The previous
//! successful child survives detached so the default fallback's retry
//! button can restore it.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use opal_layout::prelude::*;
use opal_theme::{ColorToken, ThemeState};

use crate::styling::ink_color;
use crate::text::localized;

/// Error type accepted from child builders
pub type RenderError = Box<dyn std::error::Error + Send + Sync>;

/// What went wrong during a render pass
#[derive(Clone, Debug)]
pub struct RenderFailure {
    /// Human-readable message shown in the fallback view
    pub message: String,
    /// Best-effort cause chain for the error observer
    pub context: String,
}

type FallbackFn = Box<dyn FnMut(&mut ElementTree, &RenderFailure) -> ElementId + Send>;
type ErrorObserver = Box<dyn FnMut(&RenderFailure) + Send>;

/// A container that swaps in a fallback view when rendering fails
pub struct ErrorBoundary {
    container: ElementId,
    current_child: Option<ElementId>,
    fallback: Option<FallbackFn>,
    on_error: Option<ErrorObserver>,
}

impl ErrorBoundary {
    pub fn new(tree: &mut ElementTree) -> Self {
        let container = tree.create_element("div");
        Self {
            container,
            current_child: None,
            fallback: None,
            on_error: None,
        }
    }

    /// Supply a custom fallback view builder
    pub fn fallback<F>(mut self, fallback: F) -> Self
    where
        F: FnMut(&mut ElementTree, &RenderFailure) -> ElementId + Send + 'static,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Observe failures (called before the fallback is built)
    pub fn on_error<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&RenderFailure) + Send + 'static,
    {
        self.on_error = Some(Box::new(observer));
        self
    }

    /// Build a child into the boundary, swapping in a fallback on failure
    ///
    /// Returns the boundary container either way.
    pub fn render<F>(&mut self, tree: &mut ElementTree, build: F) -> ElementId
    where
        F: FnOnce(&mut ElementTree) -> Result<ElementId, RenderError>,
    {
        let previous = self.current_child.take();
        self.clear_keeping(tree, previous);

        match catch_unwind(AssertUnwindSafe(|| build(tree))) {
            Ok(Ok(child)) => {
                if let Some(previous) = previous {
                    if previous != child {
                        tree.remove(previous);
                    }
                }
                tree.append_child(self.container, child);
                self.current_child = Some(child);
                self.container
            }
            Ok(Err(error)) => {
                let failure = RenderFailure {
                    message: error.to_string(),
                    context: cause_chain(error.as_ref()),
                };
                self.current_child = previous;
                self.handle_failure(tree, failure)
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                let failure = RenderFailure {
                    context: format!("panic during render: {message}"),
                    message,
                };
                self.current_child = previous;
                self.handle_failure(tree, failure)
            }
        }
    }

    /// The boundary container element
    pub fn container(&self) -> ElementId {
        self.container
    }

    /// The last successfully rendered child, if any
    pub fn current_child(&self) -> Option<ElementId> {
        self.current_child
    }

    pub fn destroy(mut self, tree: &mut ElementTree) {
        self.current_child = None;
        tree.remove(self.container);
    }

    fn clear_keeping(&self, tree: &mut ElementTree, keep: Option<ElementId>) {
        let children: Vec<ElementId> = tree.children(self.container).to_vec();
        for child in children {
            if Some(child) == keep {
                tree.detach(child);
            } else {
                tree.remove(child);
            }
        }
    }

    fn handle_failure(&mut self, tree: &mut ElementTree, failure: RenderFailure) -> ElementId {
        tracing::debug!(target: "opal_ui::error_boundary", context = %failure.context, "render failed");
        if let Some(observer) = &mut self.on_error {
            observer(&failure);
        }

        let view = match &mut self.fallback {
            Some(fallback) => fallback(tree, &failure),
            None => default_fallback(tree, &failure, self.container, self.current_child),
        };
        tree.append_child(self.container, view);
        self.container
    }
}

fn cause_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push_str("\n  caused by: ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected render failure".to_string()
    }
}

fn default_fallback(
    tree: &mut ElementTree,
    failure: &RenderFailure,
    container: ElementId,
    previous_child: Option<ElementId>,
) -> ElementId {
    let theme = ThemeState::get();
    let error = theme.color(ColorToken::Error);
    let tint = if theme.scheme().is_dark() {
        error.with_alpha(0.125)
    } else {
        error.with_alpha(0.0625)
    };
    let ink = ink_color(theme);

    let panel = tree.create_element("div");
    tree.update_style(panel, |style| {
        style.padding = EdgeInsets::uniform(16.0);
        style.border_radius = BorderRadius::Px(4.0);
        style.background = Some(tint);
        style.border = Some(Border::new(1.0, error));
        style.color = Some(ink);
    });

    let title = tree.create_element("h3");
    tree.set_text(title, localized("error.title", "Something went wrong"));
    tree.update_style(title, |style| {
        style.margin.top = 0.0;
        style.color = Some(error);
    });
    tree.append_child(panel, title);

    let message = tree.create_element("p");
    tree.set_text(message, failure.message.as_str());
    tree.update_style(message, |style| style.margin.bottom = 8.0);
    tree.append_child(panel, message);

    let retry = tree.create_element("button");
    tree.set_text(retry, localized("error.retry", "Try again"));
    tree.update_style(retry, |style| {
        style.margin.top = 16.0;
        style.padding = EdgeInsets::symmetric(8.0, 16.0);
        style.background = Some(error);
        style.color = Some(Color::WHITE);
        style.border = None;
        style.border_radius = BorderRadius::Px(4.0);
        style.cursor = Cursor::Pointer;
    });
    tree.add_listener(retry, event_types::CLICK, move |tree, _| {
        let Some(previous) = previous_child else {
            return;
        };
        let children: Vec<ElementId> = tree.children(container).to_vec();
        for child in children {
            tree.remove(child);
        }
        tree.append_child(container, previous);
    });
    tree.append_child(panel, retry);

    panel
}
