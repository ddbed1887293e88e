/// Checks `number` against the Luhn checksum. Spaces are ignored; anything
/// else that is not a digit makes the number invalid.
pub fn is_valid(number: &str) -> bool {
    let digits: Vec<u32> = match number
        .chars()
        .filter(|c| *c != ' ')
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<_>>>()
    {
        Some(digits) => digits,
        None => return false,
    };

    if digits.len() <= 1 {
        return false;
    }

    // Positions sharing the length's parity are every second digit from the right.
    let parity = digits.len() % 2;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 != parity {
                return digit;
            }
            let doubled = digit * 2;
            if doubled > 9 {
                doubled - 9
            } else {
                doubled
            }
        })
        .sum();

    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(is_valid("4539 1488 0343 6467"));
        assert!(is_valid("059"));
        assert!(is_valid("0 0"));
        assert!(is_valid("095 245 88"));
        assert!(is_valid("091"));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!is_valid("8273 1232 7352 0569"));
        assert!(!is_valid("95"));
        assert!(!is_valid("055 444 286"));
    }

    #[test]
    fn test_too_short() {
        assert!(!is_valid("1"));
        assert!(!is_valid("0"));
        assert!(!is_valid(" 0"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_non_digits() {
        assert!(!is_valid("055a"));
        assert!(!is_valid("055-444-285"));
        assert!(!is_valid("055# 444$ 285"));
        assert!(!is_valid("055\t444 285"));
        assert!(!is_valid("٣٤"));
    }
}
