use crate::outcome::{InvalidReason, ValidationOutcome};
use crate::validators::Validator;

/// Vehicle identification number, format only: 17 alphanumerics without I, O and Q.
/// The check digit in position 9 is not verified.
pub struct VinFormat;

const VIN_LENGTH: usize = 17;

fn is_vin_char(c: char) -> bool {
    matches!(
        c.to_ascii_uppercase(),
        '0'..='9' | 'A'..='H' | 'J'..='N' | 'P' | 'R'..='Z'
    )
}

impl Validator for VinFormat {
    fn validate(&self, input: &str) -> ValidationOutcome {
        let vin = input.trim();
        if vin.is_empty() {
            return ValidationOutcome::Valid;
        }
        if vin.chars().count() == VIN_LENGTH && vin.chars().all(is_vin_char) {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid(InvalidReason::InvalidFormat)
        }
    }
}

#[cfg(test)]
mod test {
    use crate::outcome::{InvalidReason, ValidationOutcome};
    use crate::validators::*;

    #[test]
    fn test_valid_vins() {
        let valid_vins = vec![
            "1HGCM82633A004352",
            "WVWZZZ1JZXW000001",
            "wvwzzz1jzxw000001",
            " 1M8GDM9AXKP042788 ",
            // check digit is not verified
            "1HGCM82639A004352",
        ];
        for vin in valid_vins {
            assert_eq!(VinFormat.validate(vin), ValidationOutcome::Valid, "{}", vin);
        }
    }

    #[test]
    fn test_invalid_vins() {
        let invalid_vins = vec![
            "1HGCM82633A00435",
            "1HGCM82633A0043521",
            "1HGCM82633I004352",
            "1HGCM82633O004352",
            "1HGCM82633Q004352",
            "1hgcm82633q004352",
            "1HGCM8263 A004352",
            "1HGCM82633A00435\u{c9}",
        ];
        for vin in invalid_vins {
            assert_eq!(
                VinFormat.validate(vin),
                ValidationOutcome::Invalid(InvalidReason::InvalidFormat),
                "{}",
                vin
            );
        }
    }

    #[test]
    fn empty_is_valid() {
        assert!(VinFormat.is_valid(""));
        assert!(VinFormat.is_valid("\t"));
    }
}
