//! Core domain types.

mod date;

pub use date::Date;
