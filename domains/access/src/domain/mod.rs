//! Access control domain layer: entities

pub mod entities;
