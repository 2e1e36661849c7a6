use space_calculator::format::{display_entry, format, group_thousands};
use space_calculator::units::convert;

#[test]
fn conversion_results_render_for_display() {
    let results = convert("astronomy", "light-years", 1.0).unwrap();
    for result in &results {
        let text = format(result.value);
        assert!(!text.is_empty());
        assert!(!text.contains("inf"));
    }
}

#[test]
fn tie_values_round_up_like_the_display() {
    let results = convert("basic", "kilometers", 1234.5).unwrap();
    let meters = results.iter().find(|r| r.unit.key == "meters").unwrap();
    assert_eq!(format(meters.value), "1.235e+6");
    assert_eq!(format(1_000_500.0), "1.001e+6");
    assert_eq!(format(0.0078125), "0.007813");
}

#[test]
fn thresholds_switch_notation() {
    assert_eq!(format(999_999.999), "999,999.999");
    assert_eq!(format(1_000_000.0), "1.000e+6");
    assert_eq!(format(0.001), "0.001");
    assert_eq!(format(0.000_999), "9.990e-4");
}

#[test]
fn non_finite_values_have_names() {
    assert_eq!(format(f64::NAN), "NaN");
    assert_eq!(format(f64::INFINITY), "Infinity");
    assert_eq!(format(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn entry_buffer_keeps_typed_fraction() {
    assert_eq!(display_entry("1234567.50"), "1,234,567.50");
    assert_eq!(display_entry("-1000"), "-1,000");
    assert_eq!(display_entry("0."), "0.");
    assert_eq!(display_entry(""), "");
    assert_eq!(group_thousands("1000000"), "1,000,000");
}
