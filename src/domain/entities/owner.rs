//! Owner entity
//!
//! Contact details plus the dog ids registered to this owner. The list
//! holds ids by value, never `Dog` references, so the owner-dog
//! relationship is a soft one: a stale id is harmless and simply fails the
//! relationship checks.

use tracing::warn;

use crate::domain::entities::Dog;
use crate::domain::value_objects::{Email, Phone};
use crate::error::BarkyardResult;

/// A dog owner registered with the daycare.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    owner_id: String,
    name: String,
    email: Email,
    phone: Phone,
    dogs_registered: Vec<String>,
}

impl Owner {
    /// Create an owner.
    ///
    /// Fails when the email or phone fails validation.
    pub fn new(
        owner_id: impl Into<String>,
        name: impl Into<String>,
        email: &str,
        phone: &str,
    ) -> BarkyardResult<Self> {
        Ok(Self {
            owner_id: owner_id.into(),
            name: name.into(),
            email: Email::new(email)?,
            phone: Phone::new(phone)?,
            dogs_registered: Vec::new(),
        })
    }

    /// Builder: seed the registered dog ids, e.g. for an owner arriving
    /// from records kept elsewhere. The ids are taken as given.
    pub fn with_registered(mut self, dog_ids: Vec<String>) -> Self {
        self.dogs_registered = dog_ids;
        self
    }

    // --- Getters ---

    /// Get the unique owner id
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Get the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the email address
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Get the phone number
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    /// Snapshot of the registered dog ids, in registration order.
    ///
    /// The returned collection is independent of the owner's internal
    /// state.
    pub fn dogs_registered(&self) -> Vec<String> {
        self.dogs_registered.clone()
    }

    /// Whether `dog_id` is registered to this owner.
    pub fn has_registered(&self, dog_id: &str) -> bool {
        self.dogs_registered.iter().any(|id| id == dog_id)
    }

    // --- Operations ---

    /// Record responsibility for a dog.
    ///
    /// Returns false when the dog is already registered to this owner.
    pub fn register_dog(&mut self, dog: &Dog) -> bool {
        if self.has_registered(dog.dog_id()) {
            warn!(owner_id = %self.owner_id, dog = %dog.name(), "dog is already registered");
            return false;
        }
        self.dogs_registered.push(dog.dog_id().to_string());
        true
    }

    /// Pick a registered, present dog up directly.
    ///
    /// Returns false when the dog is not registered to this owner or is
    /// not currently checked in; otherwise delegates to the dog's
    /// check-out transition.
    pub fn pickup_dog(&self, dog: &mut Dog) -> bool {
        if !self.has_registered(dog.dog_id()) {
            warn!(owner_id = %self.owner_id, dog = %dog.name(), "dog is not registered to this owner");
            return false;
        }
        if !dog.is_checked_in() {
            warn!(dog = %dog.name(), "dog is not checked in");
            return false;
        }
        dog.check_out()
    }

    /// One-line human-readable summary.
    pub fn display_info(&self) -> String {
        format!(
            "{} | {} | {} | {} | Dogs registered: {}",
            self.owner_id,
            self.name,
            self.email,
            self.phone,
            self.dogs_registered.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Owner {
        Owner::new("O001", "John Smith", "john@example.com", "555-123-4567").unwrap()
    }

    fn daisy() -> Dog {
        Dog::small("D001", "Daisy", "Yorkshire Terrier", 5, 7.5, "Plush toys").unwrap()
    }

    // === Construction validation ===

    #[test]
    fn new_rejects_bad_email() {
        assert!(Owner::new("O001", "John Smith", "invalidemail.com", "555-123-4567").is_err());
        assert!(Owner::new("O001", "John Smith", "invalid@", "555-123-4567").is_err());
    }

    #[test]
    fn new_rejects_bad_phone() {
        for phone in ["1234567890", "555", "abc-def-ghij"] {
            assert!(
                Owner::new("O001", "John Smith", "john@example.com", phone).is_err(),
                "phone {phone:?} should be rejected"
            );
        }
    }

    #[test]
    fn new_starts_with_no_registrations() {
        let owner = john();
        assert_eq!(owner.email(), "john@example.com");
        assert_eq!(owner.phone(), "555-123-4567");
        assert!(owner.dogs_registered().is_empty());
    }

    // === Registration ===

    #[test]
    fn register_dog_records_id_once() {
        let mut owner = john();
        let dog = daisy();

        assert!(owner.register_dog(&dog));
        assert!(!owner.register_dog(&dog));
        assert_eq!(owner.dogs_registered(), vec!["D001".to_string()]);
    }

    #[test]
    fn register_preserves_insertion_order() {
        let mut owner = john();
        let bella = Dog::small("D003", "Bella", "Beagle", 3, 25.0, "Tennis balls").unwrap();

        owner.register_dog(&daisy());
        owner.register_dog(&bella);
        assert_eq!(owner.dogs_registered(), vec!["D001".to_string(), "D003".to_string()]);
    }

    #[test]
    fn with_registered_seeds_the_list() {
        let owner = john().with_registered(vec!["D101".to_string(), "D102".to_string()]);
        assert!(owner.has_registered("D101"));
        assert_eq!(owner.dogs_registered().len(), 2);

        // Seeded ids count as registrations.
        let mut owner = owner;
        let dupe = Dog::new("D101", "Pepper", "Corgi", 2, 24.0).unwrap();
        assert!(!owner.register_dog(&dupe));
    }

    #[test]
    fn dogs_registered_returns_snapshot() {
        let mut owner = john();
        owner.register_dog(&daisy());

        let mut snapshot = owner.dogs_registered();
        snapshot.push("D999".to_string());
        snapshot.clear();

        assert_eq!(owner.dogs_registered(), vec!["D001".to_string()]);
    }

    // === Pickup ===

    #[test]
    fn pickup_requires_registration() {
        let owner = john();
        let mut dog = daisy();
        dog.check_in();

        assert!(!owner.pickup_dog(&mut dog));
        assert!(dog.is_checked_in());
    }

    #[test]
    fn pickup_requires_presence() {
        let mut owner = john();
        let mut dog = daisy();
        owner.register_dog(&dog);

        assert!(!owner.pickup_dog(&mut dog));
    }

    #[test]
    fn pickup_checks_dog_out() {
        let mut owner = john();
        let mut dog = daisy();
        owner.register_dog(&dog);
        dog.check_in();

        assert!(owner.pickup_dog(&mut dog));
        assert!(!dog.is_checked_in());
        assert!(!owner.pickup_dog(&mut dog));
    }

    // === Display ===

    #[test]
    fn display_info_reports_registration_count() {
        let mut owner = john();
        owner.register_dog(&daisy());
        insta::assert_snapshot!(
            owner.display_info(),
            @"O001 | John Smith | john@example.com | 555-123-4567 | Dogs registered: 1"
        );
    }
}
