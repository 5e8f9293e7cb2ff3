pub mod catalog;
pub mod shoe;

pub use catalog::catalog_page;
pub use shoe::shoe_page;
