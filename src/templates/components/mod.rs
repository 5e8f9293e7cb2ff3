pub mod shoe_card;
pub mod spacer;

pub use shoe_card::shoe_card;
