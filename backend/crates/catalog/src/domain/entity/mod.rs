//! Entity Module

pub mod category;
