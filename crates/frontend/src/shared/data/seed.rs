use contracts::domain::a001_client::aggregate::{Client, ClientId, ClientStatus};
use contracts::domain::a002_project::aggregate::{Project, ProjectId, ProjectStatus};
use contracts::domain::a003_sale::aggregate::{PaymentMethod, Sale, SaleId};

fn client(name: &str, email: &str, phone: &str, company: &str, status: ClientStatus) -> Client {
    Client {
        id: ClientId::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        company: company.to_string(),
        status,
        notes: String::new(),
    }
}

pub fn clients() -> Vec<Client> {
    vec![
        client("Maria Lopez", "maria@harborlofts.com", "5551234567", "Harbor Lofts", ClientStatus::Active),
        client("Daniel Kim", "dkim@northgate.io", "5559876543", "Northgate Rentals", ClientStatus::Active),
        client("Priya Shah", "priya.shah@mail.com", "", "", ClientStatus::Lead),
        client("Tom Becker", "tom@beckerhomes.net", "5550001111", "Becker Homes", ClientStatus::Inactive),
    ]
}

/// Projects are spread over the given clients in order.
pub fn projects(clients: &[Client]) -> Vec<Project> {
    let owner = |i: usize| {
        clients
            .get(i % clients.len().max(1))
            .map(|c| c.id.as_string())
            .unwrap_or_default()
    };
    vec![
        Project {
            id: ProjectId::new_v4(),
            name: "Harbor Lofts renovation".to_string(),
            client_id: owner(0),
            status: ProjectStatus::Active,
            budget: 250_000.0,
            start_date: "2025-03-01".to_string(),
            end_date: Some("2025-11-30".to_string()),
            description: "Lobby and common areas".to_string(),
        },
        Project {
            id: ProjectId::new_v4(),
            name: "Northgate unit turnover".to_string(),
            client_id: owner(1),
            status: ProjectStatus::Planning,
            budget: 42_500.0,
            start_date: "2025-06-15".to_string(),
            end_date: None,
            description: String::new(),
        },
        Project {
            id: ProjectId::new_v4(),
            name: "Becker duplex roof".to_string(),
            client_id: owner(3),
            status: ProjectStatus::Completed,
            budget: 18_900.0,
            start_date: "2024-09-02".to_string(),
            end_date: Some("2024-10-20".to_string()),
            description: "Full tear-off".to_string(),
        },
    ]
}

pub fn sales() -> Vec<Sale> {
    vec![
        Sale {
            id: SaleId::new_v4(),
            property: "12 Pier Street, Unit 4".to_string(),
            buyer: "Ana Ruiz".to_string(),
            buyer_email: "ana.ruiz@mail.com".to_string(),
            amount: 389_000.0,
            payment_method: PaymentMethod::Mortgage,
            installments: None,
        },
        Sale {
            id: SaleId::new_v4(),
            property: "7 Elm Court".to_string(),
            buyer: "Lee Chen".to_string(),
            buyer_email: "lee@chenfamily.org".to_string(),
            amount: 64_000.0,
            payment_method: PaymentMethod::Installments,
            installments: Some(24),
        },
    ]
}
