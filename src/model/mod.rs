//! Record model: the flat scientist entity and the fields a search can target.

mod scientist;

pub use scientist::{Field, Scientist};
