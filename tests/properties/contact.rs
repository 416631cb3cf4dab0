//! Property tests for contact validation.

use proptest::prelude::*;

use barkyard::{Email, Phone};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every ###-###-#### string validates.
    #[test]
    fn property_well_formed_phones_validate(phone in "[0-9]{3}-[0-9]{3}-[0-9]{4}") {
        prop_assert!(Phone::new(phone).is_ok());
    }

    /// PROPERTY: strings without a hyphen never validate.
    #[test]
    fn property_unhyphenated_strings_rejected(raw in "[0-9A-Za-z]{0,16}") {
        prop_assert!(Phone::new(raw).is_err());
    }

    /// PROPERTY: user@domain.tld shapes always validate.
    #[test]
    fn property_well_formed_emails_validate(
        local in "[a-z0-9]{1,8}",
        domain in "[a-z0-9]{1,8}",
        tld in "[a-z]{2,4}",
    ) {
        let address = format!("{}@{}.{}", local, domain, tld);
        prop_assert!(Email::new(address).is_ok());
    }

    /// PROPERTY: addresses without '@' never validate.
    #[test]
    fn property_emails_without_at_rejected(raw in "[a-z.]{0,20}") {
        prop_assert!(Email::new(raw).is_err());
    }
}
