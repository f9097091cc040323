use secrecy::{ExposeSecret, SecretString};
use shared_types::{AttachmentId, CommentId};
use time::OffsetDateTime;

use super::dto::{AccessLinkResponseDTO, AttachmentRequestDTO};
use crate::config::core_config::AccessLinkConfig;
use crate::model::access_link::AccessLink;
use crate::model::comment::Attachment;
use crate::provider::notifier::Notification;

impl From<AccessLink> for AccessLinkResponseDTO {
    fn from(value: AccessLink) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            case_id: value.target.case_id(),
            hearing_id: value.target.hearing_id(),
            title: value.title,
            description: value.description,
            status: value.status,
            expires_at: value.expires_at,
            created_by: value.created_by,
            contact_email: value.contact.email,
            contact_phone: value.contact.phone,
        }
    }
}

pub(crate) fn attachment_from_request(
    request: AttachmentRequestDTO,
    comment_id: CommentId,
    now: OffsetDateTime,
) -> Attachment {
    Attachment {
        id: AttachmentId::new_v4(),
        created_date: now,
        comment_id,
        file_name: request.file_name,
        media_type: request.media_type,
        size: request.size,
        storage_key: request.storage_key,
    }
}

pub(super) fn presentation_url(link: &AccessLink, config: &AccessLinkConfig) -> String {
    format!(
        "{}/access-link/{}",
        config.public_base_url.trim_end_matches('/'),
        link.id
    )
}

pub(super) fn link_created_notification(
    link: &AccessLink,
    pin: &SecretString,
    config: &AccessLinkConfig,
) -> Notification {
    let url = presentation_url(link, config);
    let expires_at = link.expires_at;

    Notification {
        recipient: link.contact.email.to_owned(),
        subject: "Document submission request".to_string(),
        html_body: format!(
            "<p>You have been asked to submit documents for <b>{title}</b>.</p>\
             <p>Open <a href=\"{url}\">{url}</a> and enter the PIN <b>{pin}</b>.</p>\
             <p>The link is valid until {expires_at} and can be used once.</p>",
            title = link.title,
            pin = pin.expose_secret(),
        ),
        attachments: vec![],
    }
}

pub(super) fn link_used_notification(
    link: &AccessLink,
    recipient: String,
    attachment_count: usize,
) -> Notification {
    Notification {
        recipient,
        subject: format!("Documents received: {}", link.title),
        html_body: format!(
            "<p>The access link <b>{}</b> was used by {}.</p><p>Attachments received: {attachment_count}</p>",
            link.title, link.contact.email
        ),
        attachments: vec![],
    }
}
