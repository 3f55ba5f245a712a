//! Immutable unit-tagged quantity values.
//!
//! A [`Quantity`] pairs a finite numeric value with a unit from a
//! [`gauge_unit`] unit set. Conversion, equality, and addition all
//! normalize through the set's base unit, so callers combine values
//! stored in different units without manual factor bookkeeping.
//!
//! Everything here is plain immutable data: operations return new values,
//! and the types are freely shareable across threads.

mod convert;
mod error;
mod quantity;

pub use convert::{almost_equal, convert};
pub use error::QuantityError;
pub use quantity::{Length, Quantity, Weight};
