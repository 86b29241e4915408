//! Top bar with the brand and, in drawer mode, the menu toggle.

use crate::layout::global_context::use_app_context;
use crate::layout::left::sidebar::use_sidebar_mode;
use crate::shared::icons::icon;
use crate::shared::responsive::use_responsive;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let mode = use_sidebar_mode();
    let policy = use_responsive();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <Show when=move || mode.get().is_drawer()>
                    <button
                        class="top-header__icon-btn"
                        aria-label="Toggle navigation"
                        aria-expanded=move || ctx.sidebar_open.get().to_string()
                        on:click=move |_| ctx.toggle_sidebar()
                    >
                        {icon("menu")}
                    </button>
                </Show>
                <span class="top-header__title">"Property Manager"</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__page">{move || ctx.active.get().title()}</span>
                <span class="top-header__breakpoint" title="Active breakpoint">
                    {move || policy.get().breakpoint.as_str()}
                </span>
            </div>
        </div>
    }
}
