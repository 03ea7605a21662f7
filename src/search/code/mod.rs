//! Dictionary and search implementations.

mod binary;
mod dictionary;
mod linear;

pub use binary::BinarySearch;
pub use dictionary::{Dictionary, Order};
pub use linear::{LinearSearch, SelfOrganizingSearch};
