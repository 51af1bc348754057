//! ASCII lane chart: one terminal line per row, bars placed from their
//! `left`/`width` percentages.

use crate::core::layout::{TimelineLayout, TimelineWindow};
use crate::utils::colors::style_for_status;
use crate::utils::formatting::{fit_to_width, pad_right};

const GUTTER: usize = 6;

pub struct ChartOptions {
    pub columns: usize,
    /// Current-time marker, percent of the window.
    pub now: Option<f64>,
    pub color: bool,
}

fn column_at(percent: f64, columns: usize) -> usize {
    ((percent / 100.0) * columns as f64).round() as usize
}

fn ruler(window: &TimelineWindow, columns: usize) -> (String, String) {
    let mut ticks = vec![' '; columns + 1];
    let mut labels = vec![' '; columns + 3];

    let first_hour = window.start().div_ceil(60);
    let last_hour = window.end() / 60;

    for hour in first_hour..=last_hour {
        let col = column_at(window.percent_of(hour * 60), columns).min(columns);
        ticks[col] = '|';

        if hour % 3 == 0 {
            for (i, c) in format!("{:02}", hour % 24).chars().enumerate() {
                if let Some(slot) = labels.get_mut(col + i) {
                    *slot = c;
                }
            }
        }
    }

    (
        labels.into_iter().collect::<String>().trim_end().to_string(),
        ticks.into_iter().collect::<String>().trim_end().to_string(),
    )
}

fn bar_text(label: &str, len: usize, color: bool) -> String {
    if color {
        return pad_right(&fit_to_width(label, len), len);
    }
    match len {
        0 => String::new(),
        1 => "#".to_string(),
        _ => format!("[{}]", pad_right(&fit_to_width(label, len - 2), len - 2)),
    }
}

pub fn render_chart(layout: &TimelineLayout, window: &TimelineWindow, opts: &ChartOptions) -> String {
    let columns = opts.columns.max(10);
    let gutter = " ".repeat(GUTTER);
    let mut out = String::new();

    let (labels, ticks) = ruler(window, columns);
    out.push_str(&format!("{gutter}{labels}\n"));

    if let Some(now) = opts.now {
        let col = column_at(now, columns).min(columns);
        out.push_str(&format!("{gutter}{}v now\n", " ".repeat(col)));
    }

    out.push_str(&format!("{gutter}{ticks}\n"));

    for (row_idx, row) in layout.rows().iter().enumerate() {
        let mut line = pad_right(&format!("R{row_idx}"), GUTTER);
        let mut cursor = 0;

        for pb in row {
            let start = column_at(pb.left, columns).max(cursor);
            let end = column_at(pb.left + pb.width, columns).max(start + 1).min(columns);
            if start >= end {
                continue;
            }

            line.push_str(&" ".repeat(start - cursor));

            let text = bar_text(pb.booking.label(), end - start, opts.color);
            if opts.color {
                let style = style_for_status(pb.booking.status_or_default()).reverse();
                line.push_str(&style.paint(text).to_string());
            } else {
                line.push_str(&text);
            }

            cursor = end;
        }

        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
