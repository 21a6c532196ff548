//! Customer account data shown on the dashboard.
//!
//! The data will eventually come from the billing/provisioning API. Until
//! that integration exists, `StaticBilling` returns fixed placeholder
//! records.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Active,
    Suspended,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    Answered,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
    Overdue,
}

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: u32,
    pub product: String,
    pub domain: String,
    pub status: ServiceStatus,
    pub next_due: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainRecord {
    pub name: String,
    pub expires_on: NaiveDate,
    pub auto_renew: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Ticket {
    pub id: u32,
    pub subject: String,
    pub status: TicketStatus,
    pub updated_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    pub number: String,
    pub amount_cents: u64,
    pub currency: &'static str,
    pub status: InvoiceStatus,
    pub due_on: NaiveDate,
}

/// Source of a customer's account records.
pub trait BillingProvider: Send + Sync {
    fn services(&self) -> Vec<Service>;
    fn domains(&self) -> Vec<DomainRecord>;
    fn tickets(&self) -> Vec<Ticket>;
    fn invoices(&self) -> Vec<Invoice>;
}

/// Placeholder records standing in for the billing API.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticBilling;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl BillingProvider for StaticBilling {
    fn services(&self) -> Vec<Service> {
        vec![
            Service {
                id: 1001,
                product: "Business Hosting".to_string(),
                domain: "ornekfirma.com.tr".to_string(),
                status: ServiceStatus::Active,
                next_due: date(2025, 3, 14),
            },
            Service {
                id: 1002,
                product: "Wildcard SSL".to_string(),
                domain: "*.ornekfirma.com.tr".to_string(),
                status: ServiceStatus::Pending,
                next_due: date(2025, 6, 1),
            },
        ]
    }

    fn domains(&self) -> Vec<DomainRecord> {
        vec![
            DomainRecord {
                name: "ornekfirma.com.tr".to_string(),
                expires_on: date(2025, 11, 2),
                auto_renew: true,
            },
            DomainRecord {
                name: "ornekfirma.io".to_string(),
                expires_on: date(2025, 2, 20),
                auto_renew: false,
            },
        ]
    }

    fn tickets(&self) -> Vec<Ticket> {
        vec![
            Ticket {
                id: 5120,
                subject: "DNS propagation".to_string(),
                status: TicketStatus::Answered,
                updated_on: date(2025, 1, 8),
            },
            Ticket {
                id: 5098,
                subject: "Mailbox quota".to_string(),
                status: TicketStatus::Closed,
                updated_on: date(2024, 12, 19),
            },
        ]
    }

    fn invoices(&self) -> Vec<Invoice> {
        vec![
            Invoice {
                number: "INV-2025-0007".to_string(),
                amount_cents: 24900,
                currency: "TRY",
                status: InvoiceStatus::Unpaid,
                due_on: date(2025, 3, 14),
            },
            Invoice {
                number: "INV-2024-0112".to_string(),
                amount_cents: 9900,
                currency: "TRY",
                status: InvoiceStatus::Paid,
                due_on: date(2024, 12, 1),
            },
        ]
    }
}
