use crate::dashboards::d100_overview::summary::OverviewSummary;
use crate::shared::components::container::ResponsiveGrid;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::format_currency;
use crate::shared::data::use_mock_data;
use leptos::prelude::*;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let data = use_mock_data();
    let summary = Memo::new(move |_| {
        data.clients.with(|clients| {
            data.projects.with(|projects| {
                data.sales
                    .with(|sales| OverviewSummary::compute(clients, projects, sales))
            })
        })
    });

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle="Portfolio at a glance">
                <span></span>
            </PageHeader>
            <ResponsiveGrid>
                <StatCard
                    label="Active clients"
                    icon_name="users"
                    value=Signal::derive(move || summary.get().active_clients.to_string())
                    subtitle=Signal::derive(move || Some(format!("{} leads", summary.get().leads)))
                />
                <StatCard
                    label="Open projects"
                    icon_name="folder"
                    value=Signal::derive(move || summary.get().open_projects.to_string())
                    subtitle=Signal::derive(move || {
                        Some(format!("{} budgeted", format_currency(summary.get().open_budget)))
                    })
                />
                <StatCard
                    label="Sales volume"
                    icon_name="dollar-sign"
                    value=Signal::derive(move || format_currency(summary.get().sales_total))
                    subtitle=Signal::derive(move || Some(format!("{} sales", summary.get().sales_count)))
                />
                <StatCard
                    label="Average sale"
                    icon_name="trending-up"
                    value=Signal::derive(move || {
                        summary
                            .get()
                            .average_sale()
                            .map(format_currency)
                            .unwrap_or_else(|| "-".to_string())
                    })
                />
            </ResponsiveGrid>
        </div>
    }
}
