//! In-memory records the pages list and append to. Nothing is persisted.

pub mod seed;

use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a002_project::aggregate::Project;
use contracts::domain::a003_sale::aggregate::Sale;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct MockData {
    pub clients: RwSignal<Vec<Client>>,
    pub projects: RwSignal<Vec<Project>>,
    pub sales: RwSignal<Vec<Sale>>,
}

impl MockData {
    pub fn seeded() -> Self {
        let clients = seed::clients();
        let projects = seed::projects(&clients);
        Self {
            clients: RwSignal::new(clients),
            projects: RwSignal::new(projects),
            sales: RwSignal::new(seed::sales()),
        }
    }

    /// `(id, name)` pairs for client selectors.
    pub fn client_choices(&self) -> Vec<(String, String)> {
        self.clients.with(|clients| {
            clients
                .iter()
                .map(|c| (c.id.as_string(), c.name.clone()))
                .collect()
        })
    }

    pub fn client_name(&self, id: &str) -> Option<String> {
        self.clients.with(|clients| {
            clients
                .iter()
                .find(|c| c.id.as_string() == id)
                .map(|c| c.name.clone())
        })
    }
}

pub fn provide_mock_data() -> MockData {
    let data = MockData::seeded();
    provide_context(data);
    data
}

pub fn use_mock_data() -> MockData {
    use_context::<MockData>().expect("MockData not found. Call provide_mock_data in the app root.")
}
