use crate::DailyRecord;
use chrono::Datelike;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const CONFIRMED_COLOR: &str = "#FFFF0030";
pub const DEATHS_COLOR: &str = "#FF000030";
pub const RECOVERED_COLOR: &str = "#00FF0030";

/// One line of the chart.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<i64>,
    /// Fill color below the line, `#RRGGBBAA`.
    pub background_color: String,
}

/// Labels and datasets in the shape a line chart consumes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// A line chart drawn on a canvas.
pub trait Chart {
    /// Replaces the labels and datasets. Takes effect on the next
    /// [`update`](Chart::update).
    fn set_data(&mut self, data: ChartData);

    /// Redraws the chart.
    fn update(&mut self);
}

/// Label of one point: `day.month` over a month, weekday name over a week.
/// Months count from zero, so March 29 is `29.2`.
pub fn point_label(record: &DailyRecord, month: bool) -> String {
    let date = record.date.date_naive();
    if month {
        format!("{}.{}", date.day(), date.month0())
    } else {
        date.format("%A").to_string()
    }
}

/// Builds the Confirmed, Deaths and Recovered lines of the total chart, one
/// point per record, in input order.
pub fn total_chart_data(records: &[DailyRecord], month: bool) -> ChartData {
    let dataset = |label: &str, color: &str, value: fn(&DailyRecord) -> i64| Dataset {
        label: label.to_string(),
        data: records.iter().map(value).collect(),
        background_color: color.to_string(),
    };
    ChartData {
        labels: records.iter().map(|r| point_label(r, month)).collect(),
        datasets: vec![
            dataset("Confirmed", CONFIRMED_COLOR, |r| r.confirmed),
            dataset("Deaths", DEATHS_COLOR, |r| r.deaths),
            dataset("Recovered", RECOVERED_COLOR, |r| r.recovered),
        ],
    }
}
