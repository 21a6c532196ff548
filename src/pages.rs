//! Localized page models.
//!
//! Each page reads one translation namespace. A `PageView` bundles what a
//! client needs to render the page in one locale: title and description,
//! navigation, language-switcher links, the page's messages and, on the
//! dashboard, the customer's account records.

use crate::billing::{BillingProvider, InvoiceStatus, TicketStatus};
use crate::i18n::{Catalog, Locale};
use crate::routing::localized_path;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Hosting,
    Ssl,
    Domains,
    Support,
    Login,
    Register,
    Dashboard,
    DashboardServices,
    DashboardDomains,
    DashboardTickets,
    DashboardBilling,
}

impl Page {
    pub const ALL: [Page; 12] = [
        Page::Home,
        Page::Hosting,
        Page::Ssl,
        Page::Domains,
        Page::Support,
        Page::Login,
        Page::Register,
        Page::Dashboard,
        Page::DashboardServices,
        Page::DashboardDomains,
        Page::DashboardTickets,
        Page::DashboardBilling,
    ];

    /// Path below the locale prefix, without leading slash.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "",
            Page::Hosting => "hosting",
            Page::Ssl => "ssl",
            Page::Domains => "domains",
            Page::Support => "support",
            Page::Login => "login",
            Page::Register => "register",
            Page::Dashboard => "dashboard",
            Page::DashboardServices => "dashboard/services",
            Page::DashboardDomains => "dashboard/domains",
            Page::DashboardTickets => "dashboard/tickets",
            Page::DashboardBilling => "dashboard/billing",
        }
    }

    /// Stable page identifier: the path, or `home` for the root page.
    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            page => page.path(),
        }
    }

    pub fn namespace(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Hosting => "hosting",
            Page::Ssl => "ssl",
            Page::Domains => "domains",
            Page::Support => "support",
            Page::Login | Page::Register => "auth",
            Page::Dashboard
            | Page::DashboardServices
            | Page::DashboardDomains
            | Page::DashboardTickets
            | Page::DashboardBilling => "dashboard",
        }
    }

    /// Find the page for a path below the locale prefix. Leading and
    /// trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Page> {
        let path = path.trim_matches('/');
        Page::ALL.into_iter().find(|page| page.path() == path)
    }

    /// Key of the page title inside its namespace.
    fn title_key(&self) -> &'static str {
        match self {
            Page::Register => "register.title",
            Page::DashboardServices => "sections.services",
            Page::DashboardDomains => "sections.domains",
            Page::DashboardTickets => "sections.tickets",
            Page::DashboardBilling => "sections.billing",
            _ => "meta.title",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Alternate {
    pub locale: Locale,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub locale: Locale,
    pub page: &'static str,
    pub path: String,
    pub namespace: &'static str,
    pub title: String,
    pub description: String,
    pub nav: Vec<NavLink>,
    pub alternates: Vec<Alternate>,
    /// The page namespace, merged over the fallback locale
    pub content: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

const NAV: &[(&str, Page)] = &[
    ("nav.home", Page::Home),
    ("nav.hosting", Page::Hosting),
    ("nav.ssl", Page::Ssl),
    ("nav.domains", Page::Domains),
    ("nav.support", Page::Support),
    ("nav.login", Page::Login),
    ("nav.dashboard", Page::Dashboard),
];

/// Build the view of `page` in `locale`.
pub fn build(
    catalog: &Catalog,
    billing: &dyn BillingProvider,
    locale: Locale,
    page: Page,
) -> PageView {
    let common = catalog.translator(locale, "common");
    let t = catalog.translator(locale, page.namespace());

    let nav = NAV
        .iter()
        .map(|(key, target)| NavLink {
            label: common.t(key),
            href: localized_path(locale, target.path()),
        })
        .collect();

    let alternates = Locale::ALL
        .into_iter()
        .map(|alt| Alternate {
            locale: alt,
            label: common.t_with("language.switch_to", &[("language", alt.native_name())]),
            href: localized_path(alt, page.path()),
        })
        .collect();

    PageView {
        locale,
        page: page.id(),
        path: localized_path(locale, page.path()),
        namespace: page.namespace(),
        title: t.t(page.title_key()),
        description: t.t("meta.description"),
        nav,
        alternates,
        content: catalog
            .namespace(locale, page.namespace())
            .unwrap_or_else(|| json!({})),
        data: dashboard_data(catalog, billing, locale, page),
    }
}

fn dashboard_data(
    catalog: &Catalog,
    billing: &dyn BillingProvider,
    locale: Locale,
    page: Page,
) -> Option<Value> {
    let data = match page {
        Page::Dashboard => {
            let t = catalog.translator(locale, "dashboard");
            let unpaid = billing
                .invoices()
                .iter()
                .filter(|inv| inv.status != InvoiceStatus::Paid)
                .count();
            let open_tickets = billing
                .tickets()
                .iter()
                .filter(|ticket| ticket.status != TicketStatus::Closed)
                .count();
            json!({
                "services": billing.services().len(),
                "domains": billing.domains().len(),
                "open_tickets": open_tickets,
                "unpaid_invoices": unpaid,
                "billing_notice": t.t_with("billing.due", &[("count", unpaid.to_string())]),
            })
        }
        Page::DashboardServices => json!({ "services": billing.services() }),
        Page::DashboardDomains => json!({ "domains": billing.domains() }),
        Page::DashboardTickets => json!({ "tickets": billing.tickets() }),
        Page::DashboardBilling => json!({ "invoices": billing.invoices() }),
        _ => return None,
    };
    Some(data)
}
