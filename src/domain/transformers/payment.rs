use chrono::{DateTime, Utc};

use crate::domain::models::{LegacyPost, Payment, PaymentStatus};

/// Currency every payment is reported in.
pub const PAYMENT_CURRENCY: &str = "Naira";

/// Reshape a legacy post into a [`Payment`].
///
/// `amount` and `status` are derived from the upstream id so the same post
/// always produces the same payment.
pub fn to_payment(legacy: &LegacyPost) -> Payment {
    let id = legacy.id.unwrap_or(0);

    Payment {
        id: legacy.id,
        customer_id: legacy.user_id,
        amount: derived_amount(id),
        currency: PAYMENT_CURRENCY.to_string(),
        status: derived_status(id),
        description: legacy.title.clone(),
        created_at: legacy
            .created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|ts| ts.with_timezone(&Utc)),
    }
}

fn derived_status(id: u64) -> PaymentStatus {
    // id % 3 is always < 3
    #[allow(clippy::cast_possible_truncation)]
    PaymentStatus::ROTATION[(id % 3) as usize]
}

/// Amount in the range `0.00..=999.99`, two decimal places.
fn derived_amount(id: u64) -> f64 {
    let cents = id.wrapping_mul(2_654_435_761) % 100_000;
    #[allow(clippy::cast_precision_loss)]
    let amount = cents as f64 / 100.0;
    amount
}
