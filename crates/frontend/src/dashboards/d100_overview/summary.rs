use contracts::domain::a001_client::aggregate::{Client, ClientStatus};
use contracts::domain::a002_project::aggregate::{Project, ProjectStatus};
use contracts::domain::a003_sale::aggregate::Sale;

/// Headline numbers of the overview page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverviewSummary {
    pub active_clients: usize,
    pub leads: usize,
    pub open_projects: usize,
    /// Budget of projects that are not completed.
    pub open_budget: f64,
    pub sales_count: usize,
    pub sales_total: f64,
}

impl OverviewSummary {
    pub fn compute(clients: &[Client], projects: &[Project], sales: &[Sale]) -> Self {
        let open: Vec<&Project> = projects
            .iter()
            .filter(|p| p.status != ProjectStatus::Completed)
            .collect();
        Self {
            active_clients: clients.iter().filter(|c| c.status == ClientStatus::Active).count(),
            leads: clients.iter().filter(|c| c.status == ClientStatus::Lead).count(),
            open_projects: open.len(),
            open_budget: open.iter().map(|p| p.budget).sum(),
            sales_count: sales.len(),
            sales_total: sales.iter().map(|s| s.amount).sum(),
        }
    }

    pub fn average_sale(&self) -> Option<f64> {
        (self.sales_count > 0).then(|| self.sales_total / self.sales_count as f64)
    }
}
