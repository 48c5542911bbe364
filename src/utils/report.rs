use crate::domain::model::StatisticsSummary;

/// Format a value with thousands separators and two decimal places,
/// e.g. 12345.678 -> "12,345.68".
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded
        .split_once('.')
        .unwrap_or((rounded.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// The four-line console report. Mirrored to the log for runs where
/// stdout is redirected.
pub fn print_summary(summary: &StatisticsSummary) {
    let lines = [
        ("Mean Risk", summary.mean),
        ("Median Risk", summary.median),
        ("5th Percentile", summary.p5),
        ("95th Percentile", summary.p95),
    ];

    for (label, value) in lines {
        let formatted = format_amount(value);
        println!("{}: {}", label, formatted);
        tracing::info!("{}: {}", label, formatted);
    }
}
