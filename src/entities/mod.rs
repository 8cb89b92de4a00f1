//! `SeaORM` Entities

pub mod student;
pub mod subject;
