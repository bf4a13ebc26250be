//! # Luhn Checksum
//!
//! Structural validation for card numbers. The Luhn algorithm catches
//! simple transcription errors (single mistyped digits, most adjacent
//! transpositions) before a number ever reaches a gateway.

/// Validate a card number's Luhn checksum.
///
/// Digits are indexed from the rightmost position. Every second digit
/// (counting from the right, starting with the second-to-last) is doubled;
/// doubled values above 9 are reduced by summing their own digits. The
/// number is valid iff the overall sum is divisible by 10.
///
/// The empty string sums to 0 and is therefore valid; callers that want to
/// reject empty numbers must screen them before invoking this function.
///
/// # Panics
///
/// Panics if `number` contains a non-digit character. Input is expected to
/// be pre-screened card data, so a non-digit is a caller error.
pub fn luhn_checksum(number: &str) -> bool {
    let checksum: u32 = number
        .chars()
        .rev()
        .map(|c| c.to_digit(10).expect("card number must contain only digits"))
        .enumerate()
        .map(|(i, digit)| {
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    checksum % 10 == 0
}
