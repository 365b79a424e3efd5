//! Small text formatting helpers shared by the terminal views

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation of `fraction` (0..=1)
pub fn format_bar(fraction: f64, width: usize) -> String {
    if !fraction.is_finite() || fraction <= 0.0 {
        return "░".repeat(width);
    }

    let filled = (fraction.min(1.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
