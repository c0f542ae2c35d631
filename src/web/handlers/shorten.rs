//! HTML form submission for link creation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use super::home::{FormValues, IndexTemplate};
use super::view::format_expiry;
use crate::application::services::ShortenParams;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::qr::qr_data_uri;

/// Raw form fields; every field is text as submitted by the browser.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ShortenForm {
    pub long_url: String,
    pub custom_code: String,
    pub expires_in_days: String,
    pub note: String,
}

impl ShortenForm {
    /// Converts the form into service input.
    ///
    /// Empty fields are absent. Text fields are passed through untrimmed and
    /// face the same checks as the JSON API. A blank expiry field means
    /// "no expiry"; anything else must be a whole number.
    fn to_params(&self) -> Result<ShortenParams, AppError> {
        let expires_in_days = match self.expires_in_days.trim() {
            "" => None,
            raw => Some(raw.parse::<i64>().map_err(|_| {
                AppError::bad_request(
                    "Expiry must be a whole number of days",
                    json!({ "field": "expires_in_days", "value": raw }),
                )
            })?),
        };

        Ok(ShortenParams {
            long_url: self.long_url.clone(),
            custom_code: non_empty(&self.custom_code),
            expires_in_days,
            note: non_empty(&self.note),
        })
    }

    fn into_values(self) -> FormValues {
        FormValues {
            long_url: self.long_url,
            custom_code: self.custom_code,
            expires_in_days: self.expires_in_days,
            note: self.note,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Template for the page shown after a link is created.
///
/// Renders `templates/created.html`.
#[derive(Template, WebTemplate)]
#[template(path = "created.html")]
pub struct CreatedTemplate {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    pub expires_at: String,
    /// `data:` URI of the short URL's QR code.
    pub qr_data_uri: String,
}

/// Handles the home page form.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// On success renders the created page. On a user error re-renders the home
/// page with the message and the submitted values, using the error's status.
pub async fn shorten_form_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<Response, AppError> {
    let outcome = match form.to_params() {
        Ok(params) => state.link_service.shorten(params).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(link) => {
            let short_url = state.link_service.short_url(&link.code);
            Ok(CreatedTemplate {
                qr_data_uri: qr_data_uri(&short_url)?,
                short_url,
                code: link.code,
                long_url: link.long_url,
                expires_at: format_expiry(link.expires_at),
            }
            .into_response())
        }
        Err(err @ AppError::Internal { .. }) => Err(err),
        Err(err) => {
            let status = err.status_code();
            let page =
                IndexTemplate::load(&state, form.into_values(), Some(err.to_string())).await?;
            Ok((status, page).into_response())
        }
    }
}
