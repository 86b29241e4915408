use crate::dashboards::d100_overview::ui::OverviewDashboard;
use crate::domain::a001_client::ui::list::ClientList;
use crate::domain::a002_project::ui::list::ProjectList;
use crate::domain::a003_sale::ui::list::SaleList;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Page::Clients => view! { <ClientList /> }.into_any(),
        Page::Projects => view! { <ProjectList /> }.into_any(),
        Page::Sales => view! { <SaleList /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! { {move || page_view(ctx.active.get())} }.into_any()
            }
        />
    }
}
