use super::*;

#[test]
fn test_parse_pair() {
    assert_eq!(
        parse_rating_pair("health=4").unwrap(),
        ("health".to_string(), 4)
    );
    assert_eq!(
        parse_rating_pair(" time_use = 2 ").unwrap(),
        ("time_use".to_string(), 2)
    );
}

#[test]
fn test_out_of_range_value_still_parses() {
    assert_eq!(
        parse_rating_pair("health=7").unwrap(),
        ("health".to_string(), 7)
    );
}

#[test]
fn test_malformed_pairs() {
    assert!(matches!(
        parse_rating_pair("health"),
        Err(InputError::InvalidInput(_))
    ));
    assert!(matches!(
        parse_rating_pair("=3"),
        Err(InputError::InvalidInput(_))
    ));
    assert!(matches!(
        parse_rating_pair("health=high"),
        Err(InputError::Parse(_))
    ));
}

#[test]
fn test_fill_defaults_only_adds_missing() {
    let mut raw = vec![("health".to_string(), 5), ("Gobernanza".to_string(), 1)];
    fill_defaults(&mut raw);
    assert_eq!(raw.len(), catalog::DOMAIN_COUNT);
    assert_eq!(raw[0], ("health".to_string(), 5));
    assert_eq!(raw[1], ("Gobernanza".to_string(), 1));
    assert!(raw[2..].iter().all(|(_, v)| *v == 3));
    assert!(!raw[2..].iter().any(|(k, _)| k == "good_governance"));
}

#[test]
fn test_overflowing_value_is_out_of_range() {
    for arg in ["health=99999999999999999999", "health=-99999999999999999999"] {
        match parse_rating_pair(arg).unwrap_err() {
            InputError::InvalidInput(msg) => {
                assert!(msg.contains("out of range"), "{msg}");
                assert!(!msg.contains("not an integer"), "{msg}");
            }
            other => panic!("unexpected error for {arg}: {other}"),
        }
    }
    assert!(matches!(
        parse_rating_pair("health=3.5"),
        Err(InputError::Parse(_))
    ));
}
