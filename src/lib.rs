//! Barkyard - dog daycare management
//!
//! Tracks dogs and their owners at a daycare facility: registration,
//! check-in/check-out, and simple lookups. The [`Daycare`] registry owns
//! the entities and mediates every presence transition by cross-validating
//! the dog-owner relationship recorded on the [`Owner`].
//!
//! Operational failures (duplicate ids, unknown ids, invalid transitions)
//! are boolean returns with a `tracing` diagnostic; malformed data fails
//! construction with a [`BarkyardError`].

pub mod config;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, Verbosity};
pub use domain::entities::{Daycare, Dog, DogKind, Owner, RegistryStats, DEFAULT_ACTIVITIES};
pub use domain::value_objects::{Email, Phone};
pub use error::{BarkyardError, BarkyardResult};
