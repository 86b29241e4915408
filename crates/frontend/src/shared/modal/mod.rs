//! Dialog that turns into a bottom sheet on phones and tablets.
//!
//! Callers pass the same title, close callback and body either way.

use crate::shared::icons::icon;
use crate::shared::responsive::{use_responsive, use_responsive_context, ResponsivePolicy};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
}

impl ModalSize {
    pub fn class(&self) -> &'static str {
        match self {
            ModalSize::Sm => "modal--sm",
            ModalSize::Md => "modal--md",
            ModalSize::Lg => "modal--lg",
            ModalSize::Xl => "modal--xl",
            ModalSize::Full => "modal--full",
        }
    }

    pub fn max_width(&self) -> &'static str {
        match self {
            ModalSize::Sm => "400px",
            ModalSize::Md => "560px",
            ModalSize::Lg => "720px",
            ModalSize::Xl => "960px",
            ModalSize::Full => "calc(100vw - 32px)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPresentation {
    Sheet,
    Dialog(ModalSize),
}

impl ModalPresentation {
    /// Size is ignored by the sheet, which always spans the viewport width.
    pub fn choose(policy: &ResponsivePolicy, size: ModalSize) -> Self {
        if policy.is_small_screen {
            ModalPresentation::Sheet
        } else {
            ModalPresentation::Dialog(size)
        }
    }

    pub fn surface_class(&self) -> String {
        match self {
            ModalPresentation::Sheet => "modal modal--sheet".to_string(),
            ModalPresentation::Dialog(size) => format!("modal modal--dialog {}", size.class()),
        }
    }

    pub fn surface_style(&self, sheet_max_height_pct: u32) -> String {
        match self {
            ModalPresentation::Sheet => format!(
                "position: fixed; left: 0; right: 0; bottom: 0; width: 100%; \
                 max-height: {sheet_max_height_pct}vh; overflow-y: auto; \
                 border-radius: 16px 16px 0 0;"
            ),
            ModalPresentation::Dialog(size) => {
                format!("position: relative; width: 100%; max-width: {};", size.max_width())
            }
        }
    }

    pub fn overlay_class(&self) -> &'static str {
        match self {
            ModalPresentation::Sheet => "modal-overlay modal-overlay--sheet",
            ModalPresentation::Dialog(_) => "modal-overlay",
        }
    }
}

#[component]
pub fn ResponsiveModal(
    #[prop(into)]
    title: String,
    /// Called on Escape, backdrop click and the close button.
    on_close: Callback<()>,
    #[prop(optional)]
    size: ModalSize,
    children: Children,
) -> impl IntoView {
    let policy = use_responsive();
    let sheet_pct = use_responsive_context().config.layout.sheet_max_height_pct;
    let presentation = Memo::new(move |_| ModalPresentation::choose(&policy.get(), size));
    let overlay_mouse_down = RwSignal::new(false);

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Press and release must both land on the overlay.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // The overlay is removed by on_close; leave its own click dispatch first.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    view! {
        <div
            class=move || presentation.get().overlay_class()
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=move || presentation.get().surface_class()
                style=move || presentation.get().surface_style(sheet_pct)
                role="dialog"
                aria-modal="true"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <Show when=move || presentation.get() == ModalPresentation::Sheet>
                    <div class="modal__grabber" aria-hidden="true"></div>
                </Show>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        class="button button--icon modal__close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::responsive::Breakpoint;

    #[test]
    fn test_sheet_on_small_screens() {
        for bp in [Breakpoint::Sm, Breakpoint::Md] {
            let policy = ResponsivePolicy::derive(bp, bp == Breakpoint::Sm);
            assert!(policy.is_small_screen);
            assert_eq!(
                ModalPresentation::choose(&policy, ModalSize::Xl),
                ModalPresentation::Sheet
            );
        }
        for bp in [Breakpoint::Lg, Breakpoint::Xl, Breakpoint::Xxl] {
            let policy = ResponsivePolicy::derive(bp, false);
            assert_eq!(
                ModalPresentation::choose(&policy, ModalSize::Lg),
                ModalPresentation::Dialog(ModalSize::Lg)
            );
        }
    }

    #[test]
    fn test_sheet_height_comes_from_config() {
        let style = ModalPresentation::Sheet.surface_style(90);
        assert!(style.contains("max-height: 90vh"));
        assert!(style.contains("bottom: 0"));
    }

    #[test]
    fn test_dialog_sizes_are_distinct() {
        let sizes = [
            ModalSize::Sm,
            ModalSize::Md,
            ModalSize::Lg,
            ModalSize::Xl,
            ModalSize::Full,
        ];
        let classes: std::collections::HashSet<_> = sizes.iter().map(|s| s.class()).collect();
        assert_eq!(classes.len(), sizes.len());
        let dialog = ModalPresentation::Dialog(ModalSize::Sm);
        assert_eq!(dialog.surface_class(), "modal modal--dialog modal--sm");
        assert!(dialog.surface_style(90).contains("max-width: 400px"));
    }
}
