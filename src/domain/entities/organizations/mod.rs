//! Organizations Entity Module

pub mod organization;

pub use organization::Organization;
