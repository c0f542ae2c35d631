//! QR code rendering for sharing short URLs.

use base64::{Engine, engine::general_purpose::STANDARD};
use qrcode::QrCode;
use qrcode::render::svg;
use serde_json::json;

use crate::error::AppError;

/// Smallest rendered side in pixels.
const QR_MIN_SIZE: u32 = 200;

/// Renders `data` as an SVG QR code.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the data does not fit in a QR code.
pub fn qr_svg(data: &str) -> Result<String, AppError> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| {
        tracing::error!(error = %e, "QR encoding failed");
        AppError::internal("Failed to render QR code", json!({}))
    })?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(QR_MIN_SIZE, QR_MIN_SIZE)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

/// Renders `data` as an SVG QR code wrapped in a `data:` URI for `<img src>`.
pub fn qr_data_uri(data: &str) -> Result<String, AppError> {
    let svg = qr_svg(data)?;
    Ok(format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg)))
}
