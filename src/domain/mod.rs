pub mod shoe;

pub use shoe::{Shoe, Variant};
