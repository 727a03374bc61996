use serde::Deserialize;

use storefront_menu::ImportMode;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payment confirmation as relayed by the payment collaborator.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    pub payment_key: String,
    pub order_id: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct ImportQuery {
    pub mode: Option<ImportMode>,
}
