pub mod gateways;
pub mod registry;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use shelter_entities::{catalog::*, geo::*, id::*, shelter::*};
}
