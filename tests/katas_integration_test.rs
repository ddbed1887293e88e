use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use small_katas::{is_valid, respond, to_roman, Cipher, KataError, KeyOverflow, Tournament};

#[test]
fn test_bob_replies() {
    assert_eq!(respond(""), "Fine. Be that way!");
    assert_eq!(respond("WHAT THE HELL?"), "Calm down, I know what I'm doing!");
    assert_eq!(respond("Tom-ay-to, tom-aaaah-to."), "Whatever.");
    assert_eq!(respond("Does this cryogenic chamber make me look fat?"), "Sure.");
    assert_eq!(respond("ZOMG THE %^*@#$(*^ ZOMBIES ARE COMING!!11!!1!"), "Whoa, chill out!");
}

#[test]
fn test_luhn_examples() {
    assert!(is_valid("4539 1488 0343 6467"));
    assert!(!is_valid("8273 1232 7352 0569"));
    assert!(!is_valid("1"));
    assert!(!is_valid("055a"));
}

#[test]
fn test_roman_examples() -> Result<()> {
    assert_eq!(to_roman(1)?, "I");
    assert_eq!(to_roman(12)?, "XII");
    assert_eq!(to_roman(49)?, "XLIX");
    assert_eq!(to_roman(1984)?, "MCMLXXXIV");
    assert!(matches!(to_roman(0), Err(KataError::OutOfRange { .. })));
    assert!(matches!(to_roman(-7), Err(KataError::OutOfRange { .. })));
    Ok(())
}

#[test]
fn test_cipher_round_trip_with_seeded_keys() -> Result<()> {
    let plain = "thequickbrownfoxjumpsoverthelazydog";

    for seed in 0..8 {
        let cipher = Cipher::from_source(&mut StdRng::seed_from_u64(seed), plain.len());
        let encoded = cipher.encode(plain)?;
        assert_eq!(encoded.len(), plain.len());
        assert_eq!(cipher.decode(&encoded)?, plain);
    }

    let keyed = Cipher::with_key("lemonlemonlemonlemonlemonlemonlemonlemon")?;
    assert_eq!(keyed.decode(&keyed.encode(plain)?)?, plain);
    Ok(())
}

#[test]
fn test_cipher_short_key_policies() -> Result<()> {
    let wrapping = Cipher::new(Some("d"))?;
    assert_eq!(wrapping.encode("aaaaaaaaaa")?, "dddddddddd");

    let strict = wrapping.with_overflow(KeyOverflow::Reject);
    let err = strict.encode("aaaaaaaaaa").unwrap_err();
    assert!(err.is_invalid_argument());
    Ok(())
}

#[test]
fn test_cipher_rejects_bad_keys() {
    assert!(Cipher::new(Some("ABCDE")).unwrap_err().is_invalid_argument());
    assert!(Cipher::new(Some("abcde1")).unwrap_err().is_invalid_argument());
    assert!(Cipher::new(Some("")).unwrap_err().is_invalid_argument());
}

#[test]
fn test_tournament_table() {
    let table = Tournament::new().tally(
        "Allegoric Alaskans;Blue Moon;win\nnot a match line\nBlue Moon;Courageous Californians;draw",
    );

    let expected = [
        "Team                           | MP |  W |  D |  L |  P",
        "Allegoric Alaskans             |  1 |  1 |  0 |  0 |  3",
        "Blue Moon                      |  2 |  0 |  1 |  1 |  1",
        "Courageous Californians        |  1 |  0 |  1 |  0 |  1",
    ]
    .join("\n");

    assert_eq!(table, expected);
}
