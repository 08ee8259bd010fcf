pub mod domain;

pub use domain::{DomainError, ItemKind, StateKind, ValidationKind};
