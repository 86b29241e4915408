use crate::shared::forms::{FieldDescriptor, FieldKind};
use crate::shared::validation::{parse_number, FormValues, Schema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaleId(pub Uuid);

impl SaleId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Mortgage,
    Installments,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Mortgage => "mortgage",
            Self::Installments => "installments",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Mortgage => "Mortgage",
            Self::Installments => "Installments",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "mortgage" => Self::Mortgage,
            "installments" => Self::Installments,
            _ => Self::Cash,
        }
    }

    pub fn all() -> [PaymentMethod; 3] {
        [Self::Cash, Self::Mortgage, Self::Installments]
    }
}

/// Closed property sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub property: String,
    pub buyer: String,
    pub buyer_email: String,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    /// Number of payments; only set for installment sales.
    pub installments: Option<u32>,
}

impl Sale {
    pub fn from_values(values: &FormValues) -> Self {
        let payment_method = PaymentMethod::from_str(values.get("payment_method"));
        let installments = match payment_method {
            PaymentMethod::Installments => values.get("installments").trim().parse().ok(),
            _ => None,
        };
        Self {
            id: SaleId::new_v4(),
            property: values.get("property").trim().to_string(),
            buyer: values.get("buyer").trim().to_string(),
            buyer_email: values.get("buyer_email").trim().to_string(),
            amount: parse_number(values.get("amount")).unwrap_or(0.0),
            payment_method,
            installments,
        }
    }
}

fn pays_in_installments(values: &FormValues) -> bool {
    values.get("payment_method") == PaymentMethod::Installments.as_str()
}

pub fn sale_schema() -> Schema {
    let methods: Vec<&str> = PaymentMethod::all().iter().map(|m| m.as_str()).collect();
    Schema::new("sale")
        .field("property", |f| f.required("Property is required"))
        .field("buyer", |f| {
            f.required("Buyer is required")
                .min_length(2, "Buyer must be at least 2 characters")
        })
        .field("buyer_email", |f| f.email("Enter a valid email address"))
        .field("amount", |f| {
            f.required("Amount is required")
                .number("Amount must be a number")
                .check(
                    |value, _| parse_number(value).is_some_and(|v| v > 0.0),
                    "Amount must be greater than zero",
                )
        })
        .field("payment_method", |f| {
            f.required("Payment method is required")
                .one_of(&methods, "Unknown payment method")
        })
        .field("installments", |f| {
            f.check(
                |value, all| !pays_in_installments(all) || !value.trim().is_empty(),
                "Number of installments is required",
            )
            .check(
                |value, all| {
                    !pays_in_installments(all)
                        || value
                            .trim()
                            .parse::<u32>()
                            .is_ok_and(|n| (2..=120).contains(&n))
                },
                "Installments must be a whole number from 2 to 120",
            )
        })
}

pub fn sale_fields() -> Vec<FieldDescriptor> {
    let methods: Vec<(&str, &str)> = PaymentMethod::all()
        .iter()
        .map(|m| (m.as_str(), m.label()))
        .collect();
    vec![
        FieldDescriptor::new("property", "Property", FieldKind::text())
            .required()
            .placeholder("12 Elm Street, Unit 4"),
        FieldDescriptor::new("buyer", "Buyer", FieldKind::text()).required(),
        FieldDescriptor::new("buyer_email", "Buyer email", FieldKind::email()),
        FieldDescriptor::new("amount", "Amount", FieldKind::number()).required(),
        FieldDescriptor::new("payment_method", "Payment method", FieldKind::select(&methods))
            .required(),
        FieldDescriptor::new("installments", "Installments", FieldKind::number())
            .placeholder("Only for installment sales"),
    ]
}

pub fn sale_defaults() -> FormValues {
    FormValues::new().with("payment_method", PaymentMethod::Cash.as_str())
}
