use super::*;

fn uniform_raw(value: i64) -> RawRatings {
    catalog::domains()
        .iter()
        .map(|d| (d.id.to_string(), value))
        .collect()
}

#[test]
fn test_valid_sheet() {
    let sheet = validate(&uniform_raw(4)).unwrap();
    assert_eq!(sheet.total(), 36);
}

#[test]
fn test_input_order_does_not_matter() {
    let mut raw = uniform_raw(2);
    raw[0].1 = 5;
    raw.reverse();
    let sheet = validate(&raw).unwrap();
    assert_eq!(sheet.get(0).get(), 5);
    assert_eq!(sheet.get(8).get(), 2);
}

#[test]
fn test_original_labels_accepted() {
    let raw = catalog::domains()
        .iter()
        .map(|d| (d.label.to_string(), 3i64))
        .collect::<Vec<_>>();
    assert_eq!(validate(&raw).unwrap(), RatingSheet::uniform(Rating::DEFAULT));
}

#[test]
fn test_out_of_range_names_domain() {
    let mut raw = uniform_raw(3);
    raw[1].1 = 0;
    assert_eq!(
        validate(&raw),
        Err(ScoreError::OutOfRange {
            domain: "health",
            value: 0
        })
    );

    let mut raw = uniform_raw(3);
    raw[4].1 = 6;
    assert_eq!(
        validate(&raw),
        Err(ScoreError::OutOfRange {
            domain: "community_vitality",
            value: 6
        })
    );
}

#[test]
fn test_missing_domain() {
    let mut raw = uniform_raw(3);
    raw.remove(3);
    assert_eq!(validate(&raw), Err(ScoreError::MissingDomain("time_use")));
    assert_eq!(
        validate(&[]),
        Err(ScoreError::MissingDomain("psychological_wellbeing"))
    );
}

#[test]
fn test_unknown_domain() {
    let mut raw = uniform_raw(3);
    raw.push(("happiness".to_string(), 3));
    assert_eq!(
        validate(&raw),
        Err(ScoreError::UnknownDomain("happiness".to_string()))
    );
}

#[test]
fn test_duplicate_domain_via_alias() {
    let mut raw = uniform_raw(3);
    raw.push(("Salud".to_string(), 4));
    assert_eq!(validate(&raw), Err(ScoreError::DuplicateDomain("health")));
}
