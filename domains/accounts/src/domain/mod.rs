//! Account domain layer: entities, status enums, validation

pub mod entities;
