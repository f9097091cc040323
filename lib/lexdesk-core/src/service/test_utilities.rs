use std::sync::Arc;

use rust_decimal::Decimal;
use shared_types::{AdminId, CaseId, ClientId, InvoiceId};
use time::macros::{date, datetime};
use time::OffsetDateTime;

use crate::config::core_config::CoreConfig;
use crate::model::admin::{Admin, AdminRole};
use crate::model::case::Case;
use crate::model::client::Client;
use crate::model::invoice::{Invoice, InvoiceStatus};
use crate::proto::clock::{Clock, MockClock};
use crate::proto::session::Session;
use crate::repository::history_repository::MockHistoryRepository;

pub(crate) const NOW: OffsetDateTime = datetime!(2026-03-10 10:00 UTC);

pub(crate) fn fixed_clock(now: OffsetDateTime) -> Arc<dyn Clock> {
    let mut clock = MockClock::default();
    clock.expect_now_utc().returning(move || now);
    Arc::new(clock)
}

pub(crate) fn generic_config() -> CoreConfig {
    let mut config = CoreConfig::default();
    config.access_link.public_base_url = "https://portal.example".to_string();
    config
}

pub(crate) fn advocate_session(admin_id: AdminId) -> Session {
    Session {
        admin_id,
        role: AdminRole::Advocate,
    }
}

pub(crate) fn super_admin_session() -> Session {
    Session {
        admin_id: AdminId::new_v4(),
        role: AdminRole::SuperAdmin,
    }
}

pub(crate) fn dummy_admin(id: AdminId, role: AdminRole) -> Admin {
    Admin {
        id,
        created_date: NOW,
        last_modified: NOW,
        name: "Advocate".to_string(),
        email: "advocate@example.com".to_string(),
        phone: None,
        role,
        deactivated_at: None,
    }
}

pub(crate) fn dummy_client(owner_id: AdminId) -> Client {
    Client {
        id: ClientId::new_v4(),
        created_date: NOW,
        last_modified: NOW,
        owner_id,
        name: "Client".to_string(),
        email: "client@example.com".to_string(),
        phone: None,
    }
}

pub(crate) fn dummy_case(owner_id: AdminId) -> Case {
    Case {
        id: CaseId::new_v4(),
        created_date: NOW,
        last_modified: NOW,
        owner_id,
        client_id: ClientId::new_v4(),
        title: "Land dispute".to_string(),
        case_number: "CS-101/2026".to_string(),
        description: None,
    }
}

pub(crate) fn dummy_invoice(owner_id: AdminId, amount: Decimal, paid_amount: Decimal) -> Invoice {
    Invoice {
        id: InvoiceId::new_v4(),
        created_date: NOW,
        last_modified: NOW,
        number: "INV-2026-00001".to_string(),
        year: 2026,
        sequence: 1,
        client_id: ClientId::new_v4(),
        owner_id,
        amount,
        paid_amount,
        status: crate::util::money::derive_status(paid_amount, amount),
        due_date: date!(2026 - 03 - 31),
        comments: None,
        last_reminder_sent_at: None,
        reminder_count: 0,
        client: None,
    }
}

pub(crate) fn cancelled(mut invoice: Invoice) -> Invoice {
    invoice.status = InvoiceStatus::Cancelled;
    invoice
}

/// History repository accepting any number of events
pub(crate) fn permissive_history_repository() -> MockHistoryRepository {
    let mut repository = MockHistoryRepository::default();
    repository
        .expect_create_history()
        .returning(|event| Ok(event.id));
    repository
}
