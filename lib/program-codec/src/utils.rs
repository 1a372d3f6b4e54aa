use rust_decimal::{
    Decimal,
    prelude::{MathematicalOps, ToPrimitive},
};

/// Convert the UI representation of a token amount (using the decimals field defined in its mint)
/// to the raw amount.
pub fn ui_amount_to_amount(ui_amount: Decimal, decimals: u8) -> crate::Result<u64> {
    if ui_amount < Decimal::ZERO {
        return Err(crate::Error::NegativeAmount);
    }
    ui_amount
        .checked_mul(Decimal::TEN.powu(decimals as u64))
        .and_then(|d| d.floor().to_u64())
        .ok_or(crate::Error::AmountOverflow)
}

/// Inverse of [`ui_amount_to_amount`].
pub fn amount_to_ui_amount(amount: u64, decimals: u8) -> Decimal {
    let mut d = Decimal::from(amount);
    // Decimal supports a scale of at most 28
    if d.set_scale(decimals.min(28) as u32).is_err() {
        return Decimal::ZERO;
    }
    d
}
