use icons::X;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_dom::helpers::{window_event_listener, WindowListenerHandle};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

// Focus bookkeeping for the overlay state machine. Kept as free functions so
// the DOM side is testable without mounting the component.

/// The element that held focus when the overlay opened ("trigger").
pub(crate) fn capture_active_element() -> Option<web_sys::HtmlElement> {
    document()
        .active_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Returns focus to the captured trigger. A trigger that has since been
/// removed from the document is skipped; losing it is not an error.
pub(crate) fn restore_focus(trigger: Option<web_sys::HtmlElement>) {
    if let Some(el) = trigger {
        if el.is_connected() {
            let _ = el.focus();
        }
    }
}

pub(crate) fn lock_body_scroll() {
    if let Some(body) = document().body() {
        let _ = body.style().set_property("overflow", "hidden");
    }
}

pub(crate) fn unlock_body_scroll() {
    if let Some(body) = document().body() {
        let _ = body.style().remove_property("overflow");
    }
}

/// Focus-trapping overlay.
///
/// Open: captures the trigger element, listens for Escape, suppresses
/// background scrolling and moves focus onto the dialog surface. Closed
/// (explicit close, Escape, or a click on the backdrop itself — not a
/// descendant): undoes all of that and returns focus to the trigger.
///
/// One instance per overlay use site; the caller owns the `open` state, so
/// surfaces that must be mutually exclusive are driven by disjoint fields.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let trigger_el: StoredValue<Option<web_sys::HtmlElement>, LocalStorage> =
        StoredValue::new_local(None);
    let key_handle: StoredValue<Option<WindowListenerHandle>, LocalStorage> =
        StoredValue::new_local(None);
    let panel_ref: NodeRef<html::Div> = NodeRef::new();

    let teardown = move || {
        if let Some(handle) = key_handle.try_update_value(|h| h.take()).flatten() {
            handle.remove();
        }
        unlock_body_scroll();
        restore_focus(trigger_el.try_update_value(|t| t.take()).flatten());
    };

    Effect::new(move |_| {
        if open.get() {
            // Closed -> Open
            trigger_el.set_value(capture_active_element());

            let handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" {
                    ev.prevent_default();
                    on_close.run(());
                }
            });
            key_handle.set_value(Some(handle));

            lock_body_scroll();

            // Focus the panel on the next tick, once it is mounted.
            let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
                wasm_bindgen::closure::Closure::once_into_js(move || {
                    if let Some(el) = panel_ref.get_untracked() {
                        let _ = el.focus();
                    }
                })
                .as_ref()
                .unchecked_ref(),
                0,
            );
        } else {
            // Open -> Closed (also runs on the initial Closed state, where
            // every step is a no-op).
            teardown();
        }
    });

    // Unmounting while open must not leave the listener or scroll lock behind.
    on_cleanup(teardown);

    let on_backdrop_click = move |ev: web_sys::MouseEvent| {
        let target = ev.target().map(JsValue::from);
        let backdrop = ev.current_target().map(JsValue::from);
        if target == backdrop {
            on_close.run(());
        }
    };

    let children = StoredValue::new(children);

    view! {
        <Show when=move || open.get() fallback=|| ().into_view()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 px-4"
                on:click=on_backdrop_click
            >
                <div
                    node_ref=panel_ref
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    class="relative max-h-[90vh] w-full max-w-2xl overflow-y-auto rounded-lg border border-border bg-background p-6 shadow-xl outline-none"
                >
                    <button
                        type="button"
                        class="absolute right-4 top-4 rounded-sm p-1 text-muted-foreground hover:text-foreground focus:outline-none focus:ring-2 focus:ring-ring [&_svg:not([class*='size-'])]:size-4"
                        aria-label="Close dialog"
                        on:click=move |_| on_close.run(())
                    >
                        <X />
                    </button>

                    {move || children.with_value(|c| c())}
                </div>
            </div>
        </Show>
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` +
// wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_button(id: &str) -> web_sys::HtmlElement {
        let doc = document();
        let el: web_sys::HtmlElement = doc
            .create_element("button")
            .expect("create button")
            .dyn_into()
            .expect("button is an HtmlElement");
        el.set_id(id);
        doc.body().expect("body").append_child(&el).expect("append");
        el
    }

    #[wasm_bindgen_test]
    fn focus_returns_to_captured_trigger() {
        let trigger = mount_button("modal-trigger");
        let other = mount_button("modal-other");

        let _ = trigger.focus();
        let captured = capture_active_element();
        assert_eq!(
            captured.as_ref().map(|e| e.id()),
            Some("modal-trigger".to_string())
        );

        // The overlay moves focus elsewhere while open.
        let _ = other.focus();

        restore_focus(captured);
        let active = document().active_element().map(|e| e.id());
        assert_eq!(active, Some("modal-trigger".to_string()));

        trigger.remove();
        other.remove();
    }

    #[wasm_bindgen_test]
    fn restore_is_a_noop_when_trigger_vanished() {
        let trigger = mount_button("gone-trigger");
        let other = mount_button("still-here");

        let _ = trigger.focus();
        let captured = capture_active_element();

        let _ = other.focus();
        trigger.remove();

        // Must not panic and must not steal focus.
        restore_focus(captured);
        let active = document().active_element().map(|e| e.id());
        assert_eq!(active, Some("still-here".to_string()));

        other.remove();
    }

    #[wasm_bindgen_test]
    fn scroll_lock_roundtrip() {
        lock_body_scroll();
        let body = document().body().expect("body");
        assert_eq!(
            body.style().get_property_value("overflow").ok().as_deref(),
            Some("hidden")
        );

        unlock_body_scroll();
        let overflow = body.style().get_property_value("overflow").unwrap_or_default();
        assert!(overflow.is_empty());
    }
}
