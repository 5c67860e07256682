//! Compact chart primitives for the Analytics tab

const BAR_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render a series as a one-line sparkline string
pub fn sparkline_text(data: &[u64], width: usize) -> String {
    if data.is_empty() || width == 0 {
        return String::new();
    }

    let max = (*data.iter().max().unwrap_or(&1)).max(1);

    let data_len = data.len().min(width);
    let data_start = data.len().saturating_sub(data_len);

    data[data_start..]
        .iter()
        .map(|&value| {
            let scaled = ((value as f64 / max as f64) * 7.0).round() as usize;
            BAR_CHARS[scaled.min(7)]
        })
        .collect()
}

/// Render a value as a horizontal meter, e.g. `███░░░░░` for 3/8
pub fn meter_text(value: u64, max: u64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let max = max.max(1);
    let filled = ((value.min(max) as f64 / max as f64) * width as f64).round() as usize;
    let filled = filled.min(width);
    let mut out = String::with_capacity(width);
    for _ in 0..filled {
        out.push('█');
    }
    for _ in filled..width {
        out.push('░');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_text() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8];
        let text = sparkline_text(&data, 8);
        assert_eq!(text.chars().count(), 8);
        assert!(text.ends_with('█'));
    }

    #[test]
    fn test_sparkline_text_empty() {
        let data: [u64; 0] = [];
        assert!(sparkline_text(&data, 8).is_empty());
    }

    #[test]
    fn test_sparkline_clips_to_width() {
        let data = [1, 2, 3, 4, 5, 6];
        assert_eq!(sparkline_text(&data, 3).chars().count(), 3);
    }

    #[test]
    fn test_meter_text_bounds() {
        assert_eq!(meter_text(0, 100, 4), "░░░░");
        assert_eq!(meter_text(100, 100, 4), "████");
        assert_eq!(meter_text(50, 100, 4), "██░░");
        // Value above max saturates
        assert_eq!(meter_text(250, 100, 4), "████");
    }
}
