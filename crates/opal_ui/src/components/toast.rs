//! Toast renderer
//!
//! Subscribes to a toast bus once at construction and renders each
//! broadcast toast into a fixed stack in the top-right corner. Removal is
//! a two-phase timer: after the toast's duration the opacity drops to zero
//! (fade start), and a fixed delay later the element is removed.

use std::sync::{Arc, Mutex};

use opal_layout::prelude::*;
use opal_notify::{SubscriberId, Toast, ToastBus, ToastKind};
use opal_theme::{ColorToken, FontToken, RadiusToken, ShadowToken, SpacingToken, ThemeState};

/// Delay between fade start and element removal
const FADE_MS: u64 = 300;

/// A subscribed toast stack
pub struct ToastHost {
    container: ElementId,
    subscription: SubscriberId,
}

impl ToastHost {
    /// Build the stack container and subscribe to the bus
    ///
    /// The tree is shared because the bus delivers toasts from plain
    /// subscriber callbacks; the host locks it per delivery.
    pub fn attach(tree: &Arc<Mutex<ElementTree>>, bus: &ToastBus) -> ToastHost {
        let container = {
            let mut tree = tree.lock().unwrap();
            let inset = ThemeState::get().spacing_value(SpacingToken::Md);
            let gap = ThemeState::get().spacing_value(SpacingToken::Sm);
            let container = tree.create_element("div");
            tree.update_style(container, |style| {
                style.position = Position::Fixed;
                style.inset.top = Some(Dimension::Px(inset));
                style.inset.right = Some(Dimension::Px(inset));
                style.z_index = Some(9999);
                style.display = Display::Flex;
                style.flex_direction = FlexDirection::Column;
                style.gap = gap;
            });
            let root = tree.root();
            tree.append_child(root, container);
            container
        };

        let tree = Arc::clone(tree);
        let subscription = bus.subscribe(move |toast| {
            let Ok(mut tree) = tree.lock() else {
                return;
            };
            render_toast(&mut tree, container, toast);
        });

        ToastHost {
            container,
            subscription,
        }
    }

    /// The stack container element
    pub fn container(&self) -> ElementId {
        self.container
    }

    /// Stop receiving toasts; already-visible toasts finish their timers
    pub fn detach(&self, bus: &ToastBus) -> bool {
        bus.unsubscribe(self.subscription)
    }
}

fn render_toast(tree: &mut ElementTree, container: ElementId, toast: &Toast) {
    let theme = ThemeState::get();
    let background = match toast.kind {
        ToastKind::Success => theme.color(ColorToken::Success),
        ToastKind::Error => theme.color(ColorToken::Error),
        ToastKind::Info => theme.color(ColorToken::Secondary),
    };
    let ink = theme.color(ColorToken::Background);
    let padding = theme.spacing_value(SpacingToken::Sm);
    let radius = theme.radius(RadiusToken::Md);
    let shadow = *theme.shadow(ShadowToken::Raised);
    let body = theme.font(FontToken::Body).to_string();

    let el = tree.create_element("div");
    tree.set_text(el, toast.message.as_str());
    tree.set_attribute(el, "data-id", toast.id.as_str());
    tree.update_style(el, |style| {
        style.background = Some(background);
        style.color = Some(ink);
        style.padding = EdgeInsets::uniform(padding);
        style.border_radius = BorderRadius::Px(radius);
        style.font_family = Some(body);
        style.shadow = Some(shadow);
        style.opacity = 1.0;
        style.transition = Some(Transition::new(
            TransitionProperty::Opacity,
            FADE_MS,
            Easing::Ease,
        ));
    });
    tree.append_child(container, el);

    tree.schedule(toast.duration_ms, move |tree| {
        tree.update_style(el, |style| style.opacity = 0.0);
        tree.schedule(FADE_MS, move |tree| {
            tree.remove(el);
        });
    });
}
