//! Service client domain layer: entities and their status enums

pub mod entities;
