use crate::i18n::render::{tr, vars};

/// Render an amount in whole riyals with the active language's currency suffix.
#[must_use]
pub fn fmt_price(amount: u64) -> String {
    let amount = amount.to_string();
    tr("price.amount", Some(&vars(&[("amount", amount.as_str())])))
}

/// Price text for a cart entry with no catalog product: the currency suffix alone.
#[must_use]
pub fn fmt_missing_price() -> String {
    tr("price.amount", Some(&vars(&[("amount", "")])))
        .trim()
        .to_string()
}
