/// Numeric value of an IBAN-style character: '0'..'9' map to 0..9 and 'A'..'Z' to 10..35.
#[inline]
fn alphanumeric_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Computes the remainder of the decimal expansion of `input` modulo `modulus`.
///
/// Letters expand to two decimal digits (A = 10 ... Z = 35) which are folded one at a
/// time, so the result equals the big-integer remainder without arbitrary precision.
/// Returns `None` if `modulus` is zero or `input` contains anything other than digits
/// and uppercase ASCII letters.
pub fn expand_and_mod(input: &str, modulus: u32) -> Option<u32> {
    if modulus == 0 {
        return None;
    }
    let modulus = u64::from(modulus);
    let mut remainder: u64 = 0;
    for c in input.chars() {
        let value = u64::from(alphanumeric_value(c)?);
        if value >= 10 {
            remainder = (remainder * 10 + value / 10) % modulus;
        }
        remainder = (remainder * 10 + value % 10) % modulus;
    }
    // always below the u32 modulus
    u32::try_from(remainder).ok()
}

/// Weighted sum of `digits` reduced modulo 11, where a residue of 10 folds to 0.
///
/// `digits` and `weights` are zipped; callers make sure they have the same length.
pub fn weighted_mod_11_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        10 => 0,
        remainder => remainder,
    }
}

/// Collects `input` as decimal digits, `None` if any character is not an ASCII digit.
pub fn ascii_digits(input: &str) -> Option<Vec<u32>> {
    input
        .chars()
        .map(|c| if c.is_ascii_digit() { c.to_digit(10) } else { None })
        .collect()
}

#[cfg(test)]
mod test {
    use crate::validators::checksum::*;
    use iso_iec_7064::{System, MOD_97_10};

    #[test]
    fn digits_only_mod_97() {
        assert_eq!(expand_and_mod("0", 97), Some(0));
        assert_eq!(expand_and_mod("97", 97), Some(0));
        assert_eq!(expand_and_mod("98", 97), Some(1));
        assert_eq!(expand_and_mod("123456789", 97), Some(123456789 % 97));
    }

    #[test]
    fn letters_expand_to_two_digits() {
        // A -> 10, Z -> 35
        assert_eq!(expand_and_mod("A", 97), Some(10));
        assert_eq!(expand_and_mod("Z", 97), Some(35));
        // "1A" -> 110
        assert_eq!(expand_and_mod("1A", 97), Some(110 % 97));
        // "AB" -> 1011
        assert_eq!(expand_and_mod("AB", 1000), Some(11));
    }

    #[test]
    fn long_strings_do_not_overflow() {
        let input = "Z".repeat(40);
        assert!(expand_and_mod(&input, 97).is_some());
    }

    #[test]
    fn zero_modulus_has_no_remainder() {
        assert_eq!(expand_and_mod("12", 0), None);
        assert_eq!(expand_and_mod("", 0), None);
    }

    #[test]
    fn large_moduli_fold_without_overflow() {
        // "Z" * 10 -> 3535...35 (20 digits)
        assert_eq!(expand_and_mod("ZZZZZZZZZZ", u32::MAX), Some(3092336600));
        assert_eq!(expand_and_mod("4294967296", u32::MAX), Some(1));
        assert_eq!(expand_and_mod("9999999999", u32::MAX - 1), Some(1410065411));
    }

    #[test]
    fn rearranged_ibans_fold_to_one() {
        let rearranged = vec![
            "WEST12345698765432GB82",
            "500105175407324931DE44",
            "AAAA1B31007593840000RO49",
        ];
        for x in rearranged {
            assert_eq!(expand_and_mod(x, 97), Some(1), "{}", x);
        }
    }

    #[test]
    fn agrees_with_iso_7064_mod_97_10() {
        // a numeric string carrying MOD 97-10 check digits folds to 1
        let samples = vec!["12345678978", "79482092", "500036", "79482012", "500037"];
        for x in samples {
            let folded = expand_and_mod(x, 97).map(|r| r == 1);
            assert_eq!(folded, Some(MOD_97_10.validate_string(x)), "{}", x);
        }
    }

    #[test]
    fn rejects_unexpected_characters() {
        assert_eq!(expand_and_mod("ab12", 97), None);
        assert_eq!(expand_and_mod("12-34", 97), None);
        assert_eq!(expand_and_mod("1 2", 97), None);
    }

    #[test]
    fn weighted_check_digit_folds_ten_to_zero() {
        // 1*10 = 10 -> 0
        assert_eq!(weighted_mod_11_check_digit(&[1], &[10]), 0);
        // 3*3 = 9
        assert_eq!(weighted_mod_11_check_digit(&[3], &[3]), 9);
        // 2*6 = 12 -> 1
        assert_eq!(weighted_mod_11_check_digit(&[2], &[6]), 1);
    }

    #[test]
    fn ascii_digits_rejects_non_ascii_digits() {
        assert_eq!(ascii_digits("0123"), Some(vec![0, 1, 2, 3]));
        assert_eq!(ascii_digits("12a"), None);
        // Arabic-indic digit three
        assert_eq!(ascii_digits("1\u{0663}"), None);
        assert_eq!(ascii_digits(""), Some(vec![]));
    }
}
