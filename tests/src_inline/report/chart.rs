use super::*;

fn rows() -> Vec<DomainRating> {
    vec![
        DomainRating {
            id: "health",
            name: "Health",
            rating: 1,
        },
        DomainRating {
            id: "time_use",
            name: "Time use",
            rating: 5,
        },
    ]
}

#[test]
fn test_bar_length_proportional_to_rating() {
    let chart = render_bar_chart(&rows());
    let lines = chart.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].matches('#').count(), UNIT_WIDTH);
    assert_eq!(lines[1].matches('#').count(), 5 * UNIT_WIDTH);
    assert!(lines[0].ends_with("| 1"));
    assert!(lines[1].ends_with("| 5"));
}

#[test]
fn test_axis_is_fixed_width() {
    let chart = render_bar_chart(&rows());
    let lines = chart.lines().collect::<Vec<_>>();
    let first_close = lines[0].rfind('|').unwrap();
    let second_close = lines[1].rfind('|').unwrap();
    assert_eq!(first_close, second_close);
}

#[test]
fn test_scale_ticks_align_with_bar_ends() {
    let chart = render_bar_chart(&rows());
    let lines = chart.lines().collect::<Vec<_>>();
    let open = lines[1].find('|').unwrap();
    let scale = lines[2];
    assert_eq!(scale.as_bytes()[open], b'0');
    assert_eq!(scale.as_bytes()[open + UNIT_WIDTH], b'1');
    assert_eq!(scale.as_bytes()[open + 5 * UNIT_WIDTH], b'5');
    assert_eq!(lines[1].as_bytes()[open + 5 * UNIT_WIDTH], b'#');
}
