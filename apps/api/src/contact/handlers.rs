use axum::{extract::rejection::JsonRejection, Json};
use tracing::{info, warn};

use crate::contact::{ContactAck, ContactSubmission, MISSING_FIELDS_MESSAGE, RECEIVED_MESSAGE};
use crate::errors::AppError;

/// POST /api/contact
/// Acknowledges a valid submission. Nothing is stored or forwarded.
pub async fn handle_contact(
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<ContactAck>, AppError> {
    let Json(submission) = payload.map_err(|rejection| {
        warn!("Rejected contact payload: {rejection}");
        AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())
    })?;

    let contact = submission
        .validate()
        .ok_or_else(|| AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()))?;

    info!(
        name = %contact.name,
        email = %contact.email,
        subject = %contact.subject,
        body = %contact.message,
        "Contact form submission"
    );

    Ok(Json(ContactAck {
        success: true,
        message: RECEIVED_MESSAGE,
    }))
}
