use std::fmt::Write as _;

/// `[a, b, c]` with every value printed to `precision` decimals.
pub fn format_vector(values: &[f64], precision: usize) -> String {
    let mut out = String::with_capacity(values.len() * (precision + 4) + 2);
    out.push('[');
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{v:.precision$}");
    }
    out.push(']');
    out
}
