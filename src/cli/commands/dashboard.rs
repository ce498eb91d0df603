use super::load_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::export::{ensure_writable, notify_export_success, write_json};
use crate::models::{BucketPoint, DashboardFilters, DashboardModel};
use crate::ui::messages::header;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use crate::utils::time::Zone;
use std::fs::File;
use std::io::{self, BufWriter};

/// Handle the `dashboard` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard {
        input,
        board,
        range,
        granularity,
        weekday,
        daypart,
        order,
        limit,
        tz,
        json,
        file,
        force,
    } = cmd
    {
        // Flags override the configured defaults
        let defaults = cfg.filters();
        let filters = DashboardFilters {
            range: range.unwrap_or(defaults.range),
            granularity: granularity.unwrap_or(defaults.granularity),
            weekday: weekday.unwrap_or(defaults.weekday),
            daypart: daypart.unwrap_or(defaults.daypart),
        };
        let order = order.unwrap_or(cfg.order);
        let limit = limit.unwrap_or(cfg.limit);
        let zone: Zone = match tz {
            Some(tz) => tz.parse()?,
            None => cfg.zone()?,
        };

        let board = board.as_deref().unwrap_or(&cfg.board_name);
        let checkins = load_input(input, board)?;
        let model = Core::build_dashboard(&checkins, &filters, order, limit, zone)?;

        if let Some(f) = file {
            let path = expand_tilde(f);
            ensure_writable(&path, *force)?;
            write_json(BufWriter::new(File::create(&path)?), &model)?;
            notify_export_success("JSON", &path);
        } else if *json {
            write_json(io::stdout().lock(), &model)?;
        } else {
            print_summary(&model, &filters, zone);
        }
    }
    Ok(())
}

fn print_summary(model: &DashboardModel, filters: &DashboardFilters, zone: Zone) {
    header(format!(
        "Coffee dashboard (range={}, weekday={}, daypart={}, tz={})",
        filters.range.as_str(),
        filters.weekday.as_str(),
        filters.daypart.as_str(),
        zone
    ));

    let k = &model.kpis;
    println!(
        "Total: {} | Espresso: {} | Normal: {} | Espresso share: {:.1}% | Avg/day: {:.2}",
        k.total,
        k.espresso_count,
        k.normal_count,
        k.espresso_ratio * 100.0,
        k.average_per_day
    );
    let i = &model.insight;
    println!(
        "Clusters: {} | Entries in clusters: {} | Largest cluster: {}",
        i.cluster_events, i.close_event_entries, i.largest_cluster
    );

    println!();
    header(format!("By {}", filters.granularity.as_str()));
    print!("{}", bucket_table(&model.time_series).render());

    println!();
    header("Monthly trend");
    print!("{}", bucket_table(&model.monthly).render());

    println!();
    header("Hour of day");
    let mut hours = Table::new(vec![Column::right("hour"), Column::right("count")]);
    for slot in model.hourly.iter().filter(|h| h.count > 0) {
        hours.add_row(vec![format!("{:02}", slot.hour), slot.count.to_string()]);
    }
    print!("{}", hours.render());

    println!();
    header("Weekday");
    let mut days = Table::new(vec![Column::left("day"), Column::right("count")]);
    for slot in &model.weekday {
        days.add_row(vec![slot.label.clone(), slot.count.to_string()]);
    }
    print!("{}", days.render());

    println!();
    header("Check-ins");
    let mut rows = Table::new(vec![
        Column::left("createdAt"),
        Column::left("id"),
        Column::left("espresso"),
        Column::right("gap (s)"),
    ]);
    for c in &model.table_rows {
        rows.add_row(vec![
            c.created_at.clone(),
            c.id.clone(),
            if c.is_espresso { "yes" } else { "" }.to_string(),
            c.gap_to_prev_seconds
                .map(|g| g.to_string())
                .unwrap_or_else(|| "--".to_string()),
        ]);
    }
    print!("{}", rows.render());
}

fn bucket_table(points: &[BucketPoint]) -> Table {
    let mut table = Table::new(vec![
        Column::left("bucket"),
        Column::right("total"),
        Column::right("espresso"),
        Column::right("normal"),
        Column::right("espresso %"),
    ]);
    for p in points {
        table.add_row(vec![
            p.label.clone(),
            p.total.to_string(),
            p.espresso.to_string(),
            p.normal.to_string(),
            format!("{:.1}", p.espresso_pct()),
        ]);
    }
    table
}
