use shared_types::{AdminId, ClientId};
use time::OffsetDateTime;

use super::dto::CreateClientRequestDTO;
use crate::model::client::Client;

pub(super) fn client_from_create_request(
    request: CreateClientRequestDTO,
    owner_id: AdminId,
    now: OffsetDateTime,
) -> Client {
    Client {
        id: ClientId::new_v4(),
        created_date: now,
        last_modified: now,
        owner_id,
        name: request.name.trim().to_owned(),
        email: request.email.trim().to_owned(),
        phone: request.phone,
    }
}
