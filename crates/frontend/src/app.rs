use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::shared::data::provide_mock_data;
use crate::shared::responsive::provide_responsive;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    provide_responsive(config);
    provide_context(AppGlobalContext::new());
    provide_mock_data();

    view! {
        <AppRoutes />
    }
}
