use crate::utils::error::{KataError, Result};

pub const MIN_ROMAN: i64 = 1;
pub const MAX_ROMAN: i64 = 3999;

const NUMERALS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Converts `number` by greedy subtraction over the numeral table.
///
/// Only 1..=3999 has a standard form; anything else, including values above
/// 3999 that a plain greedy loop would spell with repeated `M`, is an
/// `OutOfRange` error.
pub fn to_roman(number: i64) -> Result<String> {
    if !(MIN_ROMAN..=MAX_ROMAN).contains(&number) {
        return Err(KataError::OutOfRange {
            value: number,
            min: MIN_ROMAN,
            max: MAX_ROMAN,
        });
    }

    let mut remaining = number;
    let mut roman = String::new();

    for &(value, symbol) in NUMERALS.iter() {
        while remaining >= value {
            roman.push_str(symbol);
            remaining -= value;
        }
    }

    Ok(roman)
}
