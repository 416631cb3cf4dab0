//! Dog entity - a dog enrolled at the daycare
//!
//! The presence flag is the only mutable state; identity and physical
//! attributes are fixed at construction. The size-class specializations
//! form a closed set (`DogKind`) and differ only in one extra read-only
//! attribute and its display suffix - presence transitions behave
//! identically across kinds.

use crate::error::{BarkyardError, BarkyardResult};

/// Size-class specialization of a dog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DogKind {
    /// No extra attributes
    #[default]
    Standard,
    /// Small dogs track a toy preference
    Small { toy_preference: String },
    /// Large dogs track an exercise-needs level (Low/Medium/High by
    /// convention, unvalidated)
    Large { exercise_needs: String },
}

/// A dog enrolled at the daycare.
#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    dog_id: String,
    name: String,
    breed: String,
    age: i32,
    weight: f64,
    is_checked_in: bool,
    kind: DogKind,
}

impl Dog {
    /// Create a standard dog.
    ///
    /// Fails with [`BarkyardError::InvalidAge`] unless `age` is positive,
    /// and with [`BarkyardError::InvalidWeight`] unless `weight` is
    /// positive.
    pub fn new(
        dog_id: impl Into<String>,
        name: impl Into<String>,
        breed: impl Into<String>,
        age: i32,
        weight: f64,
    ) -> BarkyardResult<Self> {
        Self::with_kind(dog_id, name, breed, age, weight, DogKind::Standard)
    }

    /// Create a small dog with a toy preference.
    pub fn small(
        dog_id: impl Into<String>,
        name: impl Into<String>,
        breed: impl Into<String>,
        age: i32,
        weight: f64,
        toy_preference: impl Into<String>,
    ) -> BarkyardResult<Self> {
        Self::with_kind(
            dog_id,
            name,
            breed,
            age,
            weight,
            DogKind::Small {
                toy_preference: toy_preference.into(),
            },
        )
    }

    /// Create a large dog with an exercise-needs level.
    pub fn large(
        dog_id: impl Into<String>,
        name: impl Into<String>,
        breed: impl Into<String>,
        age: i32,
        weight: f64,
        exercise_needs: impl Into<String>,
    ) -> BarkyardResult<Self> {
        Self::with_kind(
            dog_id,
            name,
            breed,
            age,
            weight,
            DogKind::Large {
                exercise_needs: exercise_needs.into(),
            },
        )
    }

    /// Create a dog of an explicit kind.
    pub fn with_kind(
        dog_id: impl Into<String>,
        name: impl Into<String>,
        breed: impl Into<String>,
        age: i32,
        weight: f64,
        kind: DogKind,
    ) -> BarkyardResult<Self> {
        if age <= 0 {
            return Err(BarkyardError::InvalidAge { age });
        }
        // Written this way so NaN fails too.
        if !(weight > 0.0) {
            return Err(BarkyardError::InvalidWeight { weight });
        }

        Ok(Self {
            dog_id: dog_id.into(),
            name: name.into(),
            breed: breed.into(),
            age,
            weight,
            is_checked_in: false,
            kind,
        })
    }

    // --- Getters ---

    /// Get the unique dog id
    pub fn dog_id(&self) -> &str {
        &self.dog_id
    }

    /// Get the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the breed
    pub fn breed(&self) -> &str {
        &self.breed
    }

    /// Get the age in years
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Get the weight in pounds
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Whether the dog is currently checked in
    pub fn is_checked_in(&self) -> bool {
        self.is_checked_in
    }

    /// Get the size-class kind
    pub fn kind(&self) -> &DogKind {
        &self.kind
    }

    /// Toy preference, for small dogs
    pub fn toy_preference(&self) -> Option<&str> {
        match &self.kind {
            DogKind::Small { toy_preference } => Some(toy_preference),
            _ => None,
        }
    }

    /// Exercise-needs level, for large dogs
    pub fn exercise_needs(&self) -> Option<&str> {
        match &self.kind {
            DogKind::Large { exercise_needs } => Some(exercise_needs),
            _ => None,
        }
    }

    // --- Presence transitions ---

    /// Mark the dog as present.
    ///
    /// Returns false without mutating when the dog is already checked in.
    pub fn check_in(&mut self) -> bool {
        if self.is_checked_in {
            return false;
        }
        self.is_checked_in = true;
        true
    }

    /// Mark the dog as picked up.
    ///
    /// Returns false without mutating when the dog is not checked in.
    pub fn check_out(&mut self) -> bool {
        if !self.is_checked_in {
            return false;
        }
        self.is_checked_in = false;
        true
    }

    /// Raw setter for the presence flag. The transitions above are the
    /// public state machine; this bypasses it.
    pub fn set_checked_in(&mut self, value: bool) {
        self.is_checked_in = value;
    }

    // --- Display ---

    fn base_info(&self) -> String {
        let status = if self.is_checked_in {
            "Checked In"
        } else {
            "Not Checked In"
        };
        format!(
            "{} | {} ({}) | {} years | {} lbs | Status: {}",
            self.dog_id, self.name, self.breed, self.age, self.weight, status
        )
    }

    /// One-line human-readable summary. Specialized kinds append their
    /// extra attribute to the shared base line.
    pub fn display_info(&self) -> String {
        let base = self.base_info();
        match &self.kind {
            DogKind::Standard => base,
            DogKind::Small { toy_preference } => {
                format!("{base} | Toy Preference: {toy_preference}")
            }
            DogKind::Large { exercise_needs } => {
                format!("{base} | Exercise Needs: {exercise_needs}")
            }
        }
    }
}
