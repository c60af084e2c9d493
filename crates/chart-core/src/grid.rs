// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Round `span` to a 1/2/5 x 10^k step.
fn nice_step(span: f64) -> f64 {
    let exp = span.log10().floor();
    let base = 10f64.powf(exp);
    let frac = span / base;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Tick positions inside `[min, max]` on a "nice" step, at most about `max_ticks` of them.
/// Returns the ticks and the step used.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> (Vec<f64>, f64) {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || max_ticks < 2 {
        return (vec![min], 1.0);
    }
    let step = nice_step(span / (max_ticks as f64 - 1.0));
    let eps = step * 1e-9;
    let first = (min / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut i = 0usize;
    loop {
        let v = first + step * i as f64;
        if v > max + eps { break; }
        // snap -0.0 and float noise like 0.30000000000000004
        let snapped = (v / step).round() * step;
        ticks.push(if snapped.abs() < eps { 0.0 } else { snapped });
        i += 1;
    }
    (ticks, step)
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    format!("{:.*}", decimals.min(6), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_cover_client_counts() {
        let (ticks, step) = nice_ticks(0.3, 15.7, 10);
        assert_eq!(step, 2.0);
        assert_eq!(ticks.first().copied(), Some(2.0));
        assert_eq!(ticks.last().copied(), Some(14.0));
    }

    #[test]
    fn ticks_are_snapped() {
        let (ticks, step) = nice_ticks(0.0, 1.0, 11);
        assert!((step - 0.1).abs() < 1e-12);
        assert_eq!(format_tick(ticks[3], step), "0.3");
        assert_eq!(ticks[0], 0.0);
    }

    #[test]
    fn degenerate_range_yields_single_tick() {
        let (ticks, _) = nice_ticks(5.0, 5.0, 6);
        assert_eq!(ticks, vec![5.0]);
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(1400.0, 200.0), "1400");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
    }
}
