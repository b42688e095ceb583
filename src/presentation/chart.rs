use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::DailyRegionalTotal;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A Plotly figure: one line per region, dates on x, total sales on y.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFigure {
    pub data: Vec<LineTrace>,
    pub layout: ChartLayout
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: Text,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub legend: Legend,
    pub margin: Margin,
    pub transition: Transition,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub text: String
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<&'static str>,
    pub gridcolor: &'static str
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Text
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub duration: u32
}

impl Text {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ChartFigure {
    /// Builds the daily sales line chart. `daily` must be sorted by date, as
    /// produced by `aggregate_daily`. An empty slice gives a chart with no lines.
    pub fn daily_sales(daily: &[DailyRegionalTotal], product: &str, symbol: char) -> Self {
        let mut traces = BTreeMap::<&str, LineTrace>::new();

        for total in daily {
            let trace = traces.entry(total.region.as_str()).or_insert_with(|| LineTrace {
                kind: "scatter",
                mode: "lines",
                name: total.region.clone(),
                x: Vec::new(),
                y: Vec::new()
            });

            trace.x.push(total.date.format(DATE_FORMAT).to_string());
            trace.y.push(total.total_sales());
        }

        Self {
            data: traces.into_values().collect(),
            layout: ChartLayout {
                title: Text::new(format!("{product} Total Daily Sales by Region")),
                xaxis: Axis {
                    title: Text::new("Date"),
                    tickformat: Some(DATE_FORMAT),
                    gridcolor: "#ebf0f8"
                },
                yaxis: Axis {
                    title: Text::new(format!("Total Sales ({symbol})")),
                    tickformat: None,
                    gridcolor: "#ebf0f8"
                },
                legend: Legend { title: Text::new("Region") },
                margin: Margin { l: 40, r: 40, t: 60, b: 40 },
                transition: Transition { duration: 500 },
                paper_bgcolor: "white",
                plot_bgcolor: "white"
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
