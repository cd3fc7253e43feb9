use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::color::CategoryColors;
use crate::data::aggregate::{Series, WorkdayEffect};
use crate::data::model::{month_label, working_day_label, Season, Weather};
use crate::data::pipeline::VisualizationBundle;

const CHART_HEIGHT: f32 = 260.0;
const BAR_WIDTH: f64 = 0.6;

// ---------------------------------------------------------------------------
// Rental charts (central panel, visualization mode)
// ---------------------------------------------------------------------------

pub fn visualization(ui: &mut Ui, bundle: &VisualizationBundle) {
    ui.heading("Average rentals per month");
    let points: Vec<[f64; 2]> = bundle.monthly.iter().map(|(m, v)| [*m as f64, *v]).collect();
    trend_chart(ui, "monthly_trend", points, Color32::from_rgb(31, 119, 180), "Month");
    ui.label(
        bundle
            .monthly
            .iter()
            .map(|(m, v)| format!("{} {v:.0}", month_label(*m)))
            .collect::<Vec<_>>()
            .join("  ·  "),
    );

    ui.heading("Average rentals per season");
    let seasons = CategoryColors::ordered(Season::ALL.map(Season::label));
    category_chart(ui, "seasonal_trend", &bundle.seasonal, |s| s.label(), &seasons);

    ui.heading("Working days vs weekends / holidays");
    workday_chart(ui, &bundle.workday);

    ui.heading("Average rentals by hour of day");
    let points: Vec<[f64; 2]> = bundle.hourly.iter().map(|(h, v)| [*h as f64, *v]).collect();
    trend_chart(ui, "hourly_trend", points, Color32::from_rgb(44, 160, 44), "Hour");

    ui.heading("Weather and rentals");
    let weathers = CategoryColors::ordered(Weather::ALL.map(Weather::label));
    category_chart(ui, "weather_effect", &bundle.weather, |w| w.label(), &weathers);
}

/// Line with point markers, used for month and hour trends.
fn trend_chart(ui: &mut Ui, id: &str, points: Vec<[f64; 2]>, color: Color32, x_label: &str) {
    if no_data(ui, points.is_empty()) {
        return;
    }
    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label(x_label)
        .y_axis_label("Rentals")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .color(color)
                    .width(2.0),
            );
            plot_ui.points(Points::new(PlotPoints::from(points)).color(color).radius(4.0));
        });
}

/// One bar per category, coloured and named so the legend labels the axis.
fn category_chart<K: Copy>(
    ui: &mut Ui,
    id: &str,
    series: &Series<K>,
    label: impl Fn(K) -> &'static str,
    colors: &CategoryColors,
) {
    if no_data(ui, series.is_empty()) {
        return;
    }
    Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .y_axis_label("Rentals")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (i, (key, value)) in series.iter().enumerate() {
                let name = label(*key);
                let color = colors.color_for(name);
                let bar = Bar::new(i as f64, *value).width(BAR_WIDTH).name(name);
                plot_ui.bar_chart(BarChart::new(vec![bar]).color(color).name(name));
            }
        });
}

/// Casual riders stacked under registered riders, per working-day group.
fn workday_chart(ui: &mut Ui, rows: &[WorkdayEffect]) {
    if no_data(ui, rows.is_empty()) {
        return;
    }
    let colors = CategoryColors::distinct(["Casual", "Registered"]);
    let bars = |value: fn(&WorkdayEffect) -> f64| -> Vec<Bar> {
        rows.iter()
            .map(|r| {
                Bar::new(r.is_working_day as u8 as f64, value(r))
                    .width(BAR_WIDTH)
                    .name(working_day_label(r.is_working_day))
            })
            .collect()
    };
    let casual = BarChart::new(bars(|r| r.casual))
        .color(colors.color_for("Casual"))
        .name("Casual");
    let registered = BarChart::new(bars(|r| r.registered))
        .color(colors.color_for("Registered"))
        .name("Registered")
        .stack_on(&[&casual]);

    Plot::new("workday_effect")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("0 = weekend / holiday, 1 = working day")
        .y_axis_label("Rentals")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(casual);
            plot_ui.bar_chart(registered);
        });
}

/// Show the placeholder when there is nothing to draw.
pub fn no_data(ui: &mut Ui, empty: bool) -> bool {
    if empty {
        ui.label("No data for the current filters.");
    }
    empty
}
