// src/domain/shoe.rs

use crate::format::is_new_shoe;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;

/// A single shoe as it arrives from the catalog data. Prices are in cents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shoe {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    /// Base price in cents.
    pub price: i64,
    /// In cents. Absent (or `null`) means the shoe is not discounted. Zero is a real sale price.
    #[serde(default)]
    pub sale_price: Option<i64>,
    pub release_date: DateTime<Utc>,
    pub num_of_colors: u32,
}

/// The display mode of a shoe card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    OnSale,
    NewRelease,
    Default,
}

impl Variant {
    /// Picks the variant for `shoe` as of `now`.
    ///
    /// A shoe that is both discounted and recently released is shown as on sale.
    pub fn for_shoe(shoe: &Shoe, now: DateTime<Utc>, window: TimeDelta) -> Self {
        if shoe.sale_price.is_some() {
            return Variant::OnSale;
        }
        if is_new_shoe(shoe.release_date, now, window) {
            return Variant::NewRelease;
        }
        Variant::Default
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }
}
