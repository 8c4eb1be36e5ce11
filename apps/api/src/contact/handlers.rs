//! Axum route handler for the contact form.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::contact::ContactMessage;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/v1/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(message): Json<ContactMessage>,
) -> Result<Json<ContactResponse>, AppError> {
    state.contact.send(&message).await?;
    Ok(Json(ContactResponse {
        success: true,
        message: "Thanks for reaching out! I'll get back to you soon.",
    }))
}
