//! Daycare registry
//!
//! Owns the dog and owner collections and mediates check-in/check-out by
//! cross-validating the dog-owner relationship recorded on the owner.
//! Operational failures (unknown ids, duplicate ids, invalid transitions,
//! broken relationships) return false with a diagnostic; only malformed
//! input is an error.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use tracing::warn;

use crate::domain::entities::{Dog, Owner};
use crate::error::{BarkyardError, BarkyardResult};

/// Default activity list offered by a facility.
pub const DEFAULT_ACTIVITIES: [&str; 5] = [
    "Play Time",
    "Walking",
    "Training",
    "Socialization",
    "Resting",
];

/// Running totals of successful registrations.
///
/// Every facility created through [`Daycare::new`] shares one process-wide
/// handle, so the totals aggregate across facilities. Tests inject a
/// private handle through [`Daycare::with_stats`] instead.
#[derive(Debug, Default)]
pub struct RegistryStats {
    dogs: AtomicUsize,
    owners: AtomicUsize,
}

impl RegistryStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total dogs ever added successfully.
    pub fn dog_count(&self) -> usize {
        self.dogs.load(Ordering::Relaxed)
    }

    /// Total owners ever added successfully.
    pub fn owner_count(&self) -> usize {
        self.owners.load(Ordering::Relaxed)
    }

    fn record_dog(&self) {
        self.dogs.fetch_add(1, Ordering::Relaxed);
    }

    fn record_owner(&self) {
        self.owners.fetch_add(1, Ordering::Relaxed);
    }
}

fn process_stats() -> Arc<RegistryStats> {
    static STATS: OnceLock<Arc<RegistryStats>> = OnceLock::new();
    Arc::clone(STATS.get_or_init(Arc::default))
}

/// A daycare facility: identity, reference data, and the two registries.
#[derive(Debug, Clone)]
pub struct Daycare {
    name: String,
    address: String,
    available_activities: Vec<String>,
    dogs: BTreeMap<String, Dog>,
    owners: BTreeMap<String, Owner>,
    stats: Arc<RegistryStats>,
}

impl Daycare {
    /// Create a facility sharing the process-wide counters.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::with_stats(name, address, process_stats())
    }

    /// Create a facility with an explicitly injected counter handle.
    pub fn with_stats(
        name: impl Into<String>,
        address: impl Into<String>,
        stats: Arc<RegistryStats>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            available_activities: DEFAULT_ACTIVITIES.iter().map(|s| s.to_string()).collect(),
            dogs: BTreeMap::new(),
            owners: BTreeMap::new(),
            stats,
        }
    }

    /// Builder: replace the activity list.
    pub fn with_activities(mut self, activities: Vec<String>) -> Self {
        self.available_activities = activities;
        self
    }

    // --- Getters ---

    /// Get the facility name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the facility address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Snapshot of the activity list.
    pub fn available_activities(&self) -> Vec<String> {
        self.available_activities.clone()
    }

    /// Look a dog up by id.
    pub fn get_dog(&self, dog_id: &str) -> Option<&Dog> {
        self.dogs.get(dog_id)
    }

    /// Look an owner up by id.
    pub fn get_owner(&self, owner_id: &str) -> Option<&Owner> {
        self.owners.get(owner_id)
    }

    /// Defensive copy of the dog registry.
    pub fn get_all_dogs(&self) -> BTreeMap<String, Dog> {
        self.dogs.clone()
    }

    /// Defensive copy of the owner registry.
    pub fn get_all_owners(&self) -> BTreeMap<String, Owner> {
        self.owners.clone()
    }

    /// Total dogs added across every facility sharing this handle.
    pub fn dog_count(&self) -> usize {
        self.stats.dog_count()
    }

    /// Total owners added across every facility sharing this handle.
    pub fn owner_count(&self) -> usize {
        self.stats.owner_count()
    }

    // --- Mutations ---

    /// Insert a dog keyed by id, taking ownership.
    ///
    /// Returns false on a duplicate id; the registry and counters are left
    /// untouched.
    pub fn add_dog(&mut self, dog: Dog) -> bool {
        if self.dogs.contains_key(dog.dog_id()) {
            return false;
        }
        self.dogs.insert(dog.dog_id().to_string(), dog);
        self.stats.record_dog();
        true
    }

    /// Insert an owner keyed by id, taking ownership.
    pub fn add_owner(&mut self, owner: Owner) -> bool {
        if self.owners.contains_key(owner.owner_id()) {
            return false;
        }
        self.owners.insert(owner.owner_id().to_string(), owner);
        self.stats.record_owner();
        true
    }

    /// Register a stored dog to a stored owner.
    pub fn register_dog_to_owner(&mut self, dog_id: &str, owner_id: &str) -> bool {
        let Some(dog) = self.dogs.get(dog_id) else {
            warn!(%dog_id, "dog not found");
            return false;
        };
        let Some(owner) = self.owners.get_mut(owner_id) else {
            warn!(%owner_id, "owner not found");
            return false;
        };
        owner.register_dog(dog)
    }

    /// Check a dog in on behalf of an owner.
    ///
    /// Fails, returning false with a diagnostic naming the reason, when
    /// either id is unknown, the dog is already checked in, or the dog is
    /// not registered to that owner.
    pub fn check_in_dog(&mut self, dog_id: &str, owner_id: &str) -> bool {
        let Some(dog) = self.dogs.get_mut(dog_id) else {
            warn!(%dog_id, "dog not found");
            return false;
        };
        let Some(owner) = self.owners.get(owner_id) else {
            warn!(%owner_id, "owner not found");
            return false;
        };
        if dog.is_checked_in() {
            warn!(dog = %dog.name(), "dog is already checked in");
            return false;
        }
        if !owner.has_registered(dog_id) {
            warn!(dog = %dog.name(), %owner_id, "dog is not registered to this owner");
            return false;
        }
        dog.check_in()
    }

    /// Check a dog out on behalf of an owner. Symmetric to
    /// [`Daycare::check_in_dog`].
    pub fn check_out_dog(&mut self, dog_id: &str, owner_id: &str) -> bool {
        let Some(dog) = self.dogs.get_mut(dog_id) else {
            warn!(%dog_id, "dog not found");
            return false;
        };
        let Some(owner) = self.owners.get(owner_id) else {
            warn!(%owner_id, "owner not found");
            return false;
        };
        if !dog.is_checked_in() {
            warn!(dog = %dog.name(), "dog is not checked in");
            return false;
        }
        if !owner.has_registered(dog_id) {
            warn!(dog = %dog.name(), %owner_id, "dog is not registered to this owner");
            return false;
        }
        dog.check_out()
    }

    // --- Queries ---

    /// Dogs currently on site, keyed by id.
    pub fn get_checked_in_dogs(&self) -> BTreeMap<String, Dog> {
        self.filter_dogs(|dog| dog.is_checked_in())
    }

    /// Case-insensitive substring search over dog names.
    ///
    /// A missing query fails with [`BarkyardError::MissingQuery`]; an
    /// empty string matches every dog.
    pub fn search_dog_by_name(&self, name: Option<&str>) -> BarkyardResult<BTreeMap<String, Dog>> {
        let needle = name.ok_or(BarkyardError::MissingQuery)?.to_lowercase();
        Ok(self.filter_dogs(|dog| dog.name().to_lowercase().contains(&needle)))
    }

    /// Case-insensitive substring search over dog breeds.
    pub fn search_dog_by_breed(
        &self,
        breed: Option<&str>,
    ) -> BarkyardResult<BTreeMap<String, Dog>> {
        let needle = breed.ok_or(BarkyardError::MissingQuery)?.to_lowercase();
        Ok(self.filter_dogs(|dog| dog.breed().to_lowercase().contains(&needle)))
    }

    fn filter_dogs(&self, pred: impl Fn(&Dog) -> bool) -> BTreeMap<String, Dog> {
        self.dogs
            .iter()
            .filter(|&(_, dog)| pred(dog))
            .map(|(id, dog)| (id.clone(), dog.clone()))
            .collect()
    }
}
