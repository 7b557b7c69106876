//! CSV output format for comparison rankings
//!
//! --format csv implementation. Demangled C++ symbols routinely contain
//! commas and angle brackets, so the function column is escaped.

use crate::compare::Comparison;

/// Escape a CSV field (handle commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render the first `top` ranked functions as CSV with a header row
pub fn to_csv(comparison: &Comparison, top: usize) -> String {
    let mut output = String::from("function,baseline_pct,new_pct,delta\n");

    for entry in comparison.ranking.iter().take(top) {
        output.push_str(&format!(
            "{},{},{},{}\n",
            escape_field(&entry.function),
            entry.baseline_pct,
            entry.new_pct,
            entry.delta
        ));
    }

    output
}
