#[macro_use]
extern crate log;

mod session;

pub mod prelude {
    pub use super::session::*;
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use shelter_core::{entities::*, registry::ShelterRegistry, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;
