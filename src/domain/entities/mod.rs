//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Dog` - a dog enrolled at the daycare, with its size-class variants
//! - `Owner` - contact details plus the dog ids registered to the owner
//! - `Daycare` - the registry owning both collections

mod daycare;
mod dog;
mod owner;

pub use daycare::{Daycare, RegistryStats, DEFAULT_ACTIVITIES};
pub use dog::{Dog, DogKind};
pub use owner::Owner;
