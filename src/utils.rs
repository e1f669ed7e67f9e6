/// Rounds a value to two decimals and prints it with at least one fractional digit.
///
/// `60.0` stays `"60.0"`, `49.254` becomes `"49.25"`.
pub fn format_label(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid printing "-0.0" for tiny negatives.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{:?}", rounded);
    // Large magnitudes print as `1e16`; show the exponent sign like `1e+16`.
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
