//! Side navigation: a fixed column on tablet and desktop, an overlay drawer on phones.

use crate::layout::global_context::{use_app_context, Page};
use crate::shared::icons::icon;
use crate::shared::responsive::{use_responsive, use_responsive_context, ResponsivePolicy};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    Persistent { width: u32 },
    Drawer { open: bool, width: u32 },
}

impl SidebarMode {
    pub fn choose(policy: &ResponsivePolicy, open: bool, width: u32) -> Self {
        if policy.is_mobile {
            SidebarMode::Drawer { open, width }
        } else {
            SidebarMode::Persistent { width }
        }
    }

    pub fn is_drawer(&self) -> bool {
        matches!(self, SidebarMode::Drawer { .. })
    }

    pub fn is_visible(&self) -> bool {
        match self {
            SidebarMode::Persistent { .. } => true,
            SidebarMode::Drawer { open, .. } => *open,
        }
    }

    pub fn shows_backdrop(&self) -> bool {
        matches!(self, SidebarMode::Drawer { open: true, .. })
    }

    pub fn class(&self) -> &'static str {
        match self {
            SidebarMode::Persistent { .. } => "app-sidebar",
            SidebarMode::Drawer { open: true, .. } => "app-sidebar app-sidebar--drawer app-sidebar--open",
            SidebarMode::Drawer { open: false, .. } => "app-sidebar app-sidebar--drawer",
        }
    }

    pub fn style(&self) -> String {
        match self {
            SidebarMode::Persistent { width } => format!("width: {width}px; flex-shrink: 0;"),
            SidebarMode::Drawer { open, width } => {
                let offset = if *open { 0 } else { *width };
                format!(
                    "position: fixed; top: 0; bottom: 0; left: 0; width: {width}px; \
                     transform: translateX(-{offset}px); transition: transform 0.2s ease; z-index: 900;"
                )
            }
        }
    }
}

/// Current sidebar mode for the calling component.
pub fn use_sidebar_mode() -> Memo<SidebarMode> {
    let ctx = use_app_context();
    let policy = use_responsive();
    let width = use_responsive_context().config.layout.sidebar_width;
    Memo::new(move |_| SidebarMode::choose(&policy.get(), ctx.sidebar_open.get(), width))
}

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let mode = use_sidebar_mode();

    view! {
        <Show when=move || mode.get().shows_backdrop()>
            <div class="app-sidebar__backdrop" on:click=move |_| ctx.close_sidebar()></div>
        </Show>
        <aside
            data-zone="left"
            class=move || mode.get().class()
            style=move || mode.get().style()
            aria-hidden=move || (!mode.get().is_visible()).to_string()
        >
            <Show when=move || mode.get().is_drawer()>
                <button
                    class="button button--icon app-sidebar__close"
                    aria-label="Close navigation"
                    on:click=move |_| ctx.close_sidebar()
                >
                    {icon("x")}
                </button>
            </Show>
            {children()}
        </aside>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let mode = use_sidebar_mode();

    view! {
        <nav class="app-sidebar__content">
            {Page::ALL.into_iter().map(|page| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active.get() == page
                        on:click=move |_| {
                            ctx.open_page(page, mode.get_untracked().is_drawer());
                        }
                    >
                        <div class="app-sidebar__item-content">
                            {icon(page.icon())}
                            <span>{page.title()}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
