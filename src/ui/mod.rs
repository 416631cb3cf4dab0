//! Terminal UI for the Barkyard binary.

pub mod logging;
pub mod theme;
