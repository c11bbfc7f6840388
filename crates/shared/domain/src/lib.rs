//! Domain layer - User record, birth dates and age calculation.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod age;
pub mod birth_date;
pub mod constants;
pub mod error;
pub mod user;

pub use age::{calculate_age, AgeCalculator, Clock, FixedClock, SystemClock};
pub use birth_date::{format_birth_date, parse_birth_date};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::User;
