use afl::fuzz;
use idcheck::{validate, ValidatorFamily};
use strum::IntoEnumIterator;

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    for family in ValidatorFamily::iter() {
        run_fuzz(family, input);
    }
    Some(())
}

fn run_fuzz(family: ValidatorFamily, input: &str) {
    let outcome = validate(family, input);

    // same input, same verdict
    assert_eq!(outcome, validate(family, input));

    // surrounding whitespace never changes the verdict
    let padded = format!(" {input}\t");
    assert_eq!(outcome, validate(family, &padded));

    if outcome.is_valid() {
        match family {
            ValidatorFamily::PersonalId | ValidatorFamily::PhoneNumber => {
                let trimmed = input.trim();
                assert!(trimmed.is_empty() || trimmed.chars().all(|c| c.is_ascii_digit()));
            }
            ValidatorFamily::Vin => {
                let trimmed = input.trim();
                assert!(trimmed.is_empty() || trimmed.chars().count() == 17);
            }
            ValidatorFamily::BankAccountGeneric
            | ValidatorFamily::BankAccountSingleCountry
            | ValidatorFamily::FiscalCode => {}
        }
    }
}
