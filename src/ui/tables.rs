use eframe::egui::{self, Ui};

use crate::data::model::{month_label, working_day_label, DailyRecord, HourlyRecord};
use crate::data::pipeline::DescriptiveBundle;
use crate::data::stats::{CorrelationMatrix, Summary};
use crate::ui::plot::no_data;

// ---------------------------------------------------------------------------
// Descriptive statistics (central panel, tables)
// ---------------------------------------------------------------------------

pub fn descriptive(ui: &mut Ui, bundle: &DescriptiveBundle) {
    ui.heading("Daily data: descriptive statistics");
    summary_table(ui, "summary", &bundle.summary);

    ui.heading("Hourly data: descriptive statistics");
    summary_table(ui, "hourly_summary", &bundle.hourly_summary);

    ui.heading("Correlation between variables");
    correlation_table(ui, &bundle.correlation);

    ui.heading("Numeric summary");
    summary_table(ui, "numeric_summary", &bundle.numeric_summary);

    ui.heading("Average rentals per month (highest first)");
    let rows: Vec<Vec<String>> = bundle
        .monthly_ranking
        .iter()
        .map(|(m, v)| vec![month_label(*m).to_string(), fmt(*v)])
        .collect();
    grid(ui, "monthly_ranking", &["month", "cnt"], &rows);

    ui.heading("Average rentals per season");
    let rows: Vec<Vec<String>> = bundle
        .seasons
        .iter()
        .map(|s| vec![s.season.to_string(), fmt_opt(s.daily), fmt_opt(s.hourly)])
        .collect();
    grid(ui, "season_summary", &["season", "daily mean", "hourly mean"], &rows);

    ui.heading("Working-day effect");
    let rows: Vec<Vec<String>> = bundle
        .workday
        .iter()
        .map(|w| {
            vec![
                working_day_label(w.is_working_day).to_string(),
                fmt(w.casual),
                fmt(w.registered),
            ]
        })
        .collect();
    grid(ui, "workday_effect", &["workingday", "casual", "registered"], &rows);

    ui.heading("Average rentals by temperature category");
    let rows: Vec<Vec<String>> = bundle
        .temperature
        .iter()
        .map(|(b, v)| vec![b.to_string(), fmt(*v)])
        .collect();
    grid(ui, "temperature_effect", &["temp_category", "cnt"], &rows);

    ui.heading(format!(
        "Daily rows (first {} of {})",
        bundle.daily_preview.len(),
        bundle.filtered_rows
    ));
    daily_rows(ui, &bundle.daily_preview);

    ui.heading("Hourly rows");
    hourly_rows(ui, &bundle.hourly_preview);
}

fn fmt(v: f64) -> String {
    format!("{v:.4}")
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(fmt).unwrap_or_else(|| "n/a".to_string())
}

/// Striped grid with a bold header row.
fn grid(ui: &mut Ui, id: &str, header: &[&str], rows: &[Vec<String>]) {
    if no_data(ui, rows.is_empty()) {
        return;
    }
    egui::ScrollArea::horizontal().id_salt(id).show(ui, |ui: &mut Ui| {
        egui::Grid::new(id).striped(true).show(ui, |ui: &mut Ui| {
            for h in header {
                ui.strong(*h);
            }
            ui.end_row();
            for row in rows {
                for cell in row {
                    ui.monospace(cell.as_str());
                }
                ui.end_row();
            }
        });
    });
    ui.add_space(8.0);
}

/// Statistics as rows, columns as table columns.
fn summary_table(ui: &mut Ui, id: &str, summary: &[Summary]) {
    let mut header = vec![""];
    header.extend(summary.iter().map(|s| s.field.column()));
    let stat_rows: [(&str, fn(&Summary) -> String); 8] = [
        ("count", |s| s.count.to_string()),
        ("mean", |s| fmt(s.mean)),
        ("std", |s| fmt_opt(s.std)),
        ("min", |s| fmt(s.min)),
        ("25%", |s| fmt(s.q25)),
        ("50%", |s| fmt(s.median)),
        ("75%", |s| fmt(s.q75)),
        ("max", |s| fmt(s.max)),
    ];
    let rows: Vec<Vec<String>> = if summary.is_empty() {
        Vec::new()
    } else {
        stat_rows
            .iter()
            .map(|(name, stat)| {
                std::iter::once(name.to_string())
                    .chain(summary.iter().map(stat))
                    .collect()
            })
            .collect()
    };
    grid(ui, id, &header, &rows);
}

fn correlation_table(ui: &mut Ui, matrix: &CorrelationMatrix) {
    let mut header = vec![""];
    header.extend(matrix.fields.iter().map(|f| f.column()));
    let rows: Vec<Vec<String>> = matrix
        .fields
        .iter()
        .zip(&matrix.values)
        .map(|(f, row)| {
            std::iter::once(f.column().to_string())
                .chain(row.iter().map(|v| fmt_opt(*v)))
                .collect()
        })
        .collect();
    grid(ui, "correlation", &header, &rows);
}

fn daily_rows(ui: &mut Ui, records: &[DailyRecord]) {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.date.to_string(),
                r.season.to_string(),
                r.weather.to_string(),
                r.is_working_day.to_string(),
                format!("{:.3}", r.temperature),
                r.casual_count.to_string(),
                r.registered_count.to_string(),
                r.total_count.to_string(),
            ]
        })
        .collect();
    grid(
        ui,
        "daily_rows",
        &["dteday", "season", "weather", "workingday", "temp", "casual", "registered", "cnt"],
        &rows,
    );
}

fn hourly_rows(ui: &mut Ui, records: &[HourlyRecord]) {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.date.to_string(),
                r.hour.to_string(),
                r.season.to_string(),
                r.weather.to_string(),
                format!("{:.3}", r.temperature),
                r.casual_count.to_string(),
                r.registered_count.to_string(),
                r.total_count.to_string(),
            ]
        })
        .collect();
    grid(
        ui,
        "hourly_rows",
        &["dteday", "hr", "season", "weather", "temp", "casual", "registered", "cnt"],
        &rows,
    );
}
