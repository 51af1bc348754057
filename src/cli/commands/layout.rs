use super::resolve_window;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::layout::{LayoutOptions, TimelineLayout, compute_now_marker_position};
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::{ExportLogic, OutputFormat};
use crate::ui::chart::{ChartOptions, render_chart};
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::paint_status;
use crate::utils::formatting::percent;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_minutes, parse_time_of_day};

pub fn handle(cmd: &Commands, cfg: &Config, color: bool) -> AppResult<()> {
    if let Commands::Layout {
        file,
        buffer,
        start,
        end,
        strategy,
        chart,
        now,
        format,
        out,
        force,
    } = cmd
    {
        let mut options: LayoutOptions = cfg.layout_options()?;
        options.window = resolve_window(cfg, start, end)?;
        if let Some(b) = buffer {
            options.buffer_minutes = *b;
        }
        if let Some(s) = strategy {
            options.strategy = *s;
        }

        let path = expand_tilde(file);
        let layout = Core::build_day_layout(&path, &options)?;

        report_rejected(&layout);

        if *chart && *format != OutputFormat::Table {
            warning(format!(
                "--chart only applies to table output; ignored for {}.",
                format.as_str()
            ));
        }

        match (format, out) {
            (OutputFormat::Table, _) => {
                print_table(&layout, &options, color);

                if *chart {
                    let now_pct = match now {
                        Some(t) => Some(compute_now_marker_position(
                            parse_time_of_day(t)?,
                            &options.window,
                        )),
                        None => None,
                    };
                    let chart_opts = ChartOptions {
                        columns: cfg.chart_columns,
                        now: now_pct,
                        color,
                    };
                    println!();
                    print!("{}", render_chart(&layout, &options.window, &chart_opts));
                }
            }
            (fmt, Some(target)) => ExportLogic::export(&layout, *fmt, target, *force)?,
            (fmt, None) => ExportLogic::print(&layout, *fmt)?,
        }
    }
    Ok(())
}

fn report_rejected(layout: &TimelineLayout) {
    for r in &layout.rejected {
        warning(format!("Skipped booking '{}' ({}): {}", r.id, r.field, r.message));
    }
}

fn print_table(layout: &TimelineLayout, options: &LayoutOptions, color: bool) {
    header(format!(
        "Timeline {} - {}",
        format_minutes(options.window.start()),
        format_minutes(options.window.end())
    ));

    if layout.is_empty() {
        info("No bookings to lay out.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ROW", 4),
        Column::new("START", 8),
        Column::new("END", 8),
        Column::new("LEFT", 8),
        Column::new("WIDTH", 8),
        Column::new("ID", 10),
        Column::new("CUSTOMER", 20),
        Column::new("GUESTS", 6),
        Column::new("STATUS", 10),
    ]);

    for pb in &layout.bookings {
        let b = &pb.booking;
        table.add_row(vec![
            pb.row.to_string(),
            format_minutes(pb.start_minutes),
            format_minutes(pb.end_minutes),
            percent(pb.left),
            percent(pb.width),
            b.id.clone(),
            b.customer_name.clone().unwrap_or_default(),
            b.guest_count.map(|g| g.to_string()).unwrap_or_default(),
            b.status_or_default().as_str().to_string(),
        ]);
    }

    let rendered = table.render();
    let mut lines = rendered.lines();

    // header and separator
    for line in lines.by_ref().take(2) {
        println!("{}", line);
    }
    for (line, pb) in lines.zip(&layout.bookings) {
        println!("{}", paint_status(line, pb.booking.status_or_default(), color));
    }

    info(format!(
        "{} booking(s) in {} row(s), buffer {} min, {}",
        layout.bookings.len(),
        layout.row_count,
        options.buffer_minutes,
        options.strategy.as_str()
    ));
}
