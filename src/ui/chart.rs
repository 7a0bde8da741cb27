//! Terminal bar rendering for the per-entry chart series.

use ansi_term::Colour;

use crate::core::stats::ChartPoint;
use crate::utils::formatting;

const BAR_WIDTH: usize = 40;

/// One proportional bar per point, scaled against the longest day.
pub fn render(points: &[ChartPoint], currency: &str) -> String {
    let max_hours = points.iter().map(|p| p.hours).fold(0.0_f64, f64::max);
    if max_hours <= 0.0 {
        return String::new();
    }

    let mut out = String::new();
    for p in points {
        let len = ((p.hours / max_hours) * BAR_WIDTH as f64).round() as usize;
        let bar = "▇".repeat(len.max(1));
        out.push_str(&format!(
            "{} {} {}h ({})\n",
            p.label,
            Colour::Blue.paint(bar),
            formatting::hours(p.hours),
            formatting::money(currency, p.salary),
        ));
    }
    out
}
