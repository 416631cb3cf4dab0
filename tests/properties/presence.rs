//! Property tests for the presence state machine.

use proptest::prelude::*;

use barkyard::Dog;

fn valid_dog() -> impl Strategy<Value = Dog> {
    (1..=20i32, 0.5f64..150.0, "[A-Za-z]{1,12}").prop_map(|(age, weight, name)| {
        Dog::new("D001", name, "Mixed", age, weight).expect("strategy only builds valid dogs")
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a freshly constructed dog is never checked in.
    #[test]
    fn property_new_dogs_start_checked_out(dog in valid_dog()) {
        prop_assert!(!dog.is_checked_in());
    }

    /// PROPERTY: the second of two consecutive check-ins is always a
    /// rejected no-op.
    #[test]
    fn property_double_check_in_rejected(mut dog in valid_dog()) {
        prop_assert!(dog.check_in());
        prop_assert!(!dog.check_in());
        prop_assert!(dog.is_checked_in());
    }

    /// PROPERTY: check-in followed by check-out restores the initial
    /// state, and both transitions report success.
    #[test]
    fn property_check_in_out_round_trip(mut dog in valid_dog()) {
        prop_assert!(dog.check_in());
        prop_assert!(dog.check_out());
        prop_assert!(!dog.is_checked_in());
    }

    /// PROPERTY: construction never panics, whatever the numbers - it
    /// either validates or returns an error.
    #[test]
    fn property_construction_never_panics(age in any::<i32>(), weight in any::<f64>()) {
        let dog = Dog::new("D000", "Scout", "Mixed", age, weight);
        prop_assert_eq!(dog.is_ok(), age > 0 && weight > 0.0);
    }
}
