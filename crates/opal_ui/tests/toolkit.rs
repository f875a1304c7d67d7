//! Cross-crate flows: scheme reflection onto the tree root, the toast
//! pipeline from bus to timed removal, and a themed form round trip.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use opal_layout::{bind_scheme_reflection, prelude::*};
use opal_notify::{ToastBus, ToastKind, ToastRequest};
use opal_theme::{ColorScheme, ThemeState};
use opal_ui::prelude::*;

static SCHEME_LOCK: Mutex<()> = Mutex::new(());

fn locked_scheme() -> std::sync::MutexGuard<'static, ()> {
    let guard = SCHEME_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    ThemeState::init_default();
    ThemeState::get().set_scheme(ColorScheme::Light);
    guard
}

#[test]
fn scheme_changes_reflect_onto_the_root_attribute() {
    let _guard = locked_scheme();
    let tree = Arc::new(Mutex::new(ElementTree::new()));
    bind_scheme_reflection(&tree);

    ThemeState::get().set_scheme(ColorScheme::Dark);
    {
        let tree = tree.lock().unwrap();
        assert_eq!(
            tree.attribute(tree.root(), THEME_ATTRIBUTE),
            Some("dark")
        );
    }

    ThemeState::get().set_scheme(ColorScheme::Light);
    {
        let tree = tree.lock().unwrap();
        assert_eq!(
            tree.attribute(tree.root(), THEME_ATTRIBUTE),
            Some("light")
        );
    }
}

#[test]
fn toast_pipeline_from_show_to_removal() {
    let _guard = locked_scheme();
    let tree = Arc::new(Mutex::new(ElementTree::new()));
    let counter = AtomicU64::new(0);
    let bus = ToastBus::with_id_source(Box::new(move || {
        format!("it-{}", counter.fetch_add(1, Ordering::SeqCst))
    }));
    let host = ToastHost::attach(&tree, &bus);

    // Any part of the program may produce; the host is the one renderer.
    bus.show(ToastRequest::new(ToastKind::Error, "disk full").duration_ms(1000));
    bus.success("written anyway");

    {
        let tree = tree.lock().unwrap();
        let toasts = tree.children(host.container());
        assert_eq!(toasts.len(), 2);
        assert_eq!(tree.attribute(toasts[0], "data-id"), Some("it-0"));
        assert_eq!(tree.attribute(toasts[1], "data-id"), Some("it-1"));
    }

    // The error toast fades and leaves on its own clock.
    {
        let mut tree = tree.lock().unwrap();
        tree.advance(1000);
        let toasts = tree.children(host.container());
        assert_eq!(tree.style(toasts[0]).unwrap().opacity, 0.0);
        assert_eq!(tree.style(toasts[1]).unwrap().opacity, 1.0);

        tree.advance(300);
        let toasts = tree.children(host.container());
        assert_eq!(toasts.len(), 1);
        assert_eq!(tree.text(toasts[0]), Some("written anyway"));

        // The success toast follows at the default duration.
        tree.advance(3000 - 1300 + 300);
        assert!(tree.children(host.container()).is_empty());
    }

    host.detach(&bus);
}

#[test]
fn form_validation_drives_input_error_state() {
    let _guard = locked_scheme();
    let mut tree = ElementTree::new();

    struct Profile {
        age: u32,
    }
    let rules = vec![ValidationRule::new(
        "age",
        |p: &Profile| p.age >= 18,
        "too young",
    )];

    let report = validate_form(&Profile { age: 15 }, &rules);
    assert!(!report.valid);

    let mut field = input().label("Age").build(&mut tree);
    field.set_error(&mut tree, report.errors.get("age").map(String::as_str));
    let border = tree.style(field.field()).unwrap().border.unwrap();
    assert_eq!(border.color.to_hex_string(), "#ef4444");

    let report = validate_form(&Profile { age: 20 }, &rules);
    assert!(report.valid);
    assert!(report.errors.is_empty());
    field.set_error(&mut tree, None);
    let border = tree.style(field.field()).unwrap().border.unwrap();
    assert_eq!(border.color.to_hex_string(), "#1f2937");
}

#[test]
fn widgets_share_one_tree() {
    let _guard = locked_scheme();
    let mut tree = ElementTree::new();
    let root = tree.root();

    let slot = tree.create_element("div");
    tree.set_attribute(slot, "id", "toolbar");
    tree.append_child(root, slot);

    let save = button("Save").build(&mut tree);
    tree.append_child(slot, save.render());
    let menu = dropdown("More").item("Delete", |_| {}).build(&mut tree);
    tree.append_child(slot, menu.render());
    let bar = SearchBar::new(&mut tree, "toolbar", SearchOptions::new()).unwrap();

    assert_eq!(tree.children(slot).len(), 3);

    save.destroy(&mut tree);
    menu.destroy(&mut tree);
    bar.destroy(&mut tree);
    assert!(tree.children(slot).is_empty());
}
