use crate::domain::a001_client::ui::details::ClientDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{Column, ColumnPriority, ResponsiveTable, TableRecord};
use crate::shared::data::use_mock_data;
use crate::shared::icons::icon;
use contracts::domain::a001_client::aggregate::Client;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: String,
}

impl From<&Client> for ClientRow {
    fn from(c: &Client) -> Self {
        Self {
            name: c.name.clone(),
            email: c.email.clone(),
            phone: dash_if_blank(&c.phone),
            company: dash_if_blank(&c.company),
            status: c.status.label().to_string(),
        }
    }
}

fn dash_if_blank(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

impl TableRecord for ClientRow {
    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "email" => self.email.clone(),
            "phone" => self.phone.clone(),
            "company" => self.company.clone(),
            "status" => self.status.clone(),
            _ => String::new(),
        }
    }
}

fn columns() -> Vec<Column<ClientRow>> {
    vec![
        Column::new("name", "Name").priority(ColumnPriority::High),
        Column::new("status", "Status").priority(ColumnPriority::High),
        Column::new("email", "Email").priority(ColumnPriority::Medium),
        Column::new("company", "Company").priority(ColumnPriority::Low),
        Column::new("phone", "Phone").priority(ColumnPriority::Low),
    ]
}

#[component]
pub fn ClientList() -> impl IntoView {
    let data = use_mock_data();
    let show_modal = RwSignal::new(false);
    let rows = Signal::derive(move || {
        data.clients
            .with(|clients| clients.iter().map(ClientRow::from).collect::<Vec<_>>())
    });

    let on_saved = Callback::new(move |client: Client| {
        log::info!("client '{}' added", client.name);
        data.clients.update(|clients| clients.push(client));
        show_modal.set(false);
    });

    view! {
        <div class="page">
            <PageHeader
                title="Clients"
                subtitle=Signal::derive(move || Some(format!("{} total", data.clients.with(Vec::len))))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_modal.set(true)>
                    {icon("plus")}
                    " New client"
                </Button>
            </PageHeader>
            <ResponsiveTable columns=columns() rows=rows empty_message="No clients yet" />
            <Show when=move || show_modal.get()>
                <ClientDetails on_saved=on_saved on_close=Callback::new(move |_| show_modal.set(false)) />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::aggregate::{ClientId, ClientStatus};

    #[test]
    fn test_row_shows_dash_for_missing_optional_values() {
        let client = Client {
            id: ClientId::new_v4(),
            name: "Priya Shah".to_string(),
            email: "priya@mail.com".to_string(),
            phone: String::new(),
            company: " ".to_string(),
            status: ClientStatus::Lead,
            notes: String::new(),
        };
        let row = ClientRow::from(&client);
        assert_eq!(row.cell("phone"), "-");
        assert_eq!(row.cell("company"), "-");
        assert_eq!(row.cell("status"), ClientStatus::Lead.label());
        assert_eq!(row.cell("unknown"), "");
    }

    #[test]
    fn test_every_column_has_a_cell() {
        let row = ClientRow {
            name: "a".into(),
            email: "b".into(),
            phone: "c".into(),
            company: "d".into(),
            status: "e".into(),
        };
        for column in columns() {
            assert!(!row.cell(column.key).is_empty(), "column {}", column.key);
        }
    }
}
