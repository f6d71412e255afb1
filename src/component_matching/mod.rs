//! Component matching domain
//!
//! Pure, synchronous logic: turning component source into structural
//! records and scoring those records against a design-system catalog.
//! Nothing in this module performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
