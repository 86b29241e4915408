use crate::domain::a003_sale::ui::details::SaleDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{
    format_currency, Column, ColumnPriority, ResponsiveTable, TableRecord,
};
use crate::shared::data::use_mock_data;
use crate::shared::icons::icon;
use contracts::domain::a003_sale::aggregate::Sale;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct SaleRow {
    pub property: String,
    pub buyer: String,
    pub amount: f64,
    pub payment: String,
}

impl From<&Sale> for SaleRow {
    fn from(s: &Sale) -> Self {
        let payment = match s.installments {
            Some(n) => format!("{} ({n} payments)", s.payment_method.label()),
            None => s.payment_method.label().to_string(),
        };
        Self {
            property: s.property.clone(),
            buyer: s.buyer.clone(),
            amount: s.amount,
            payment,
        }
    }
}

impl TableRecord for SaleRow {
    fn cell(&self, key: &str) -> String {
        match key {
            "property" => self.property.clone(),
            "buyer" => self.buyer.clone(),
            "amount" => format_currency(self.amount),
            "payment" => self.payment.clone(),
            _ => String::new(),
        }
    }
}

fn columns() -> Vec<Column<SaleRow>> {
    vec![
        Column::new("property", "Property").priority(ColumnPriority::High),
        Column::new("amount", "Amount").priority(ColumnPriority::High),
        Column::new("buyer", "Buyer").priority(ColumnPriority::Medium),
        Column::new("payment", "Payment").priority(ColumnPriority::Low),
    ]
}

#[component]
pub fn SaleList() -> impl IntoView {
    let data = use_mock_data();
    let show_modal = RwSignal::new(false);
    let rows = Signal::derive(move || {
        data.sales
            .with(|sales| sales.iter().map(SaleRow::from).collect::<Vec<_>>())
    });

    let on_saved = Callback::new(move |sale: Sale| {
        log::info!("sale of '{}' recorded", sale.property);
        data.sales.update(|sales| sales.push(sale));
        show_modal.set(false);
    });

    view! {
        <div class="page">
            <PageHeader title="Sales">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_modal.set(true)>
                    {icon("plus")}
                    " New sale"
                </Button>
            </PageHeader>
            <ResponsiveTable columns=columns() rows=rows empty_message="No sales recorded" />
            <Show when=move || show_modal.get()>
                <SaleDetails on_saved=on_saved on_close=Callback::new(move |_| show_modal.set(false)) />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_sale::aggregate::{PaymentMethod, SaleId};

    #[test]
    fn test_installment_count_in_payment_cell() {
        let sale = Sale {
            id: SaleId::new_v4(),
            property: "7 Elm Court".to_string(),
            buyer: "Lee Chen".to_string(),
            buyer_email: String::new(),
            amount: 64_000.0,
            payment_method: PaymentMethod::Installments,
            installments: Some(24),
        };
        let row = SaleRow::from(&sale);
        assert_eq!(
            row.cell("payment"),
            format!("{} (24 payments)", PaymentMethod::Installments.label())
        );
        assert_eq!(row.cell("amount"), "$64,000.00");
    }
}
