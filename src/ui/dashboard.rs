use chrono::{Datelike, NaiveDate};
use eframe::egui::{RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Line, Plot, PlotPoints, Points};

use crate::color;
use crate::data::model::Season;
use crate::state::{AppState, DashboardView};

// ---------------------------------------------------------------------------
// Central panel – the dashboard itself
// ---------------------------------------------------------------------------

/// Render the dashboard: metric, daily trend, and the two category panels.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a dataset to view rentals  (File → Open…)");
        });
        return;
    }

    let Some(view) = &state.view else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Select a start date on or before the end date to show results.");
        });
        return;
    };

    ui.heading("Daily Rental Usage");
    ui.add_space(4.0);

    ui.label("Total rentals");
    ui.label(RichText::new(view.total.to_string()).size(28.0).strong());
    ui.add_space(8.0);

    daily_trend(ui, view);
    ui.add_space(12.0);

    ui.columns(2, |columns: &mut [Ui]| {
        seasonal_panel(&mut columns[0], view);
        workday_panel(&mut columns[1], view);
    });
}

// -- Axis helpers --

fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

fn date_from_day(value: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(value.round() as i32)
}

// ---------------------------------------------------------------------------
// Daily trend line
// ---------------------------------------------------------------------------

fn daily_trend(ui: &mut Ui, view: &DashboardView) {
    let coords: Vec<[f64; 2]> = view
        .daily
        .iter()
        .map(|d| [day_number(d.date), d.rentals as f64])
        .collect();

    Plot::new("daily_trend")
        .height(300.0)
        .y_axis_label("Rentals")
        .x_axis_formatter(|mark, _range| {
            date_from_day(mark.value)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
        .label_formatter(|_name, value| match date_from_day(value.x) {
            Some(d) => format!("{}\n{:.0} rentals", d.format("%Y-%m-%d"), value.y),
            None => String::new(),
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(coords.clone()))
                    .color(color::DAILY_TREND)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(coords))
                    .color(color::DAILY_TREND)
                    .radius(2.5),
            );
        });
}

// ---------------------------------------------------------------------------
// Seasonal averages (horizontal bars, maximum highlighted)
// ---------------------------------------------------------------------------

fn seasonal_panel(ui: &mut Ui, view: &DashboardView) {
    ui.strong("Rental by Season");

    let Some(averages) = &view.seasonal else {
        ui.label("N/A (try widening the date range)");
        return;
    };

    let best = averages
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.average.total_cmp(&b.average))
        .map(|(i, _)| i);

    let bars: Vec<Bar> = averages
        .iter()
        .enumerate()
        .map(|(i, avg)| {
            let fill = if Some(i) == best {
                color::BAR_HIGHLIGHT
            } else {
                color::BAR_MUTED
            };
            Bar::new(i as f64, avg.average)
                .name(avg.season.label())
                .width(0.6)
                .fill(fill)
        })
        .collect();

    Plot::new("seasonal_averages")
        .height(240.0)
        .x_axis_label("Daily rental average")
        .y_axis_formatter(|mark, _range| season_tick(mark.value))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

fn season_tick(value: f64) -> String {
    if value.fract() != 0.0 || value < 0.0 {
        return String::new();
    }
    Season::ALL
        .get(value as usize)
        .map(|s| s.label().to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Working-day distribution (box plot)
// ---------------------------------------------------------------------------

fn workday_panel(ui: &mut Ui, view: &DashboardView) {
    ui.strong("Rental by Working Day");

    let palette = color::category_palette(2);
    let mut boxes = Vec::new();
    let mut outliers: Vec<Points> = Vec::new();

    for group in &view.workday.groups {
        let x = f64::from(u8::from(group.working_day));
        let group_color = palette[usize::from(group.working_day)];
        let stats = &group.stats;

        boxes.push(
            BoxElem::new(
                x,
                BoxSpread::new(
                    stats.whisker_low,
                    stats.q1,
                    stats.median,
                    stats.q3,
                    stats.whisker_high,
                ),
            )
            .name(workday_label(group.working_day))
            .box_width(0.5)
            .fill(group_color.gamma_multiply(0.4))
            .stroke(Stroke::new(1.5, group_color)),
        );

        if !stats.outliers.is_empty() {
            let pts: Vec<[f64; 2]> = stats.outliers.iter().map(|v| [x, *v]).collect();
            outliers.push(
                Points::new(PlotPoints::from(pts))
                    .color(group_color)
                    .radius(2.0),
            );
        }
    }

    Plot::new("workday_distribution")
        .height(240.0)
        .y_axis_label("Daily rental count")
        .x_axis_formatter(|mark, _range| workday_tick(mark.value))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(boxes));
            for pts in outliers {
                plot_ui.points(pts);
            }
        });
}

fn workday_label(working: bool) -> &'static str {
    if working {
        "Working day"
    } else {
        "Non-working day"
    }
}

fn workday_tick(value: f64) -> String {
    if value == 0.0 {
        "Non-working".to_string()
    } else if value == 1.0 {
        "Working".to_string()
    } else {
        String::new()
    }
}
