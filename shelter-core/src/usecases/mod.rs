mod add_shelter;
mod delete_shelter;
mod error;
mod geocode_address;
mod nearby_shelters;

#[cfg(test)]
pub mod tests;

pub use self::{
    add_shelter::*, delete_shelter::*, error::Error, geocode_address::*, nearby_shelters::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
