//! Value Object Module

pub mod category_id;
