// Copyright 2018-2021 Cargill Incorporated
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Text rendering of tables and chart series for the terminal.

use food_rescue_sdk::reports::{Chart, ChartKind, ReportOutput, ResultTable};

const BAR_WIDTH: usize = 40;

/// Rows that can be printed as one line of a table.
pub trait TableDisplay {
    fn header() -> &'static [&'static str];
    fn details(&self) -> Vec<String>;
}

/// Formats a header and rows as left-aligned columns, each as wide as its widest value.
pub fn format_rows(header: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|column| column.chars().count()).collect();
    for row in rows {
        for (i, value) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(value.chars().count());
        }
    }

    let mut out = format_line(header, &widths);
    for row in rows {
        out.push('\n');
        out += &format_line(row, &widths);
    }
    out
}

fn format_line(values: &[String], widths: &[usize]) -> String {
    values
        .iter()
        .zip(widths)
        .map(|(value, width)| format!("{:width$}", value, width = width))
        .collect::<Vec<String>>()
        .join("  ")
        .trim_end()
        .to_string()
}

pub fn print_table<T: TableDisplay>(data: &[T]) {
    let header: Vec<String> = T::header().iter().map(|column| column.to_string()).collect();
    let rows: Vec<Vec<String>> = data.iter().map(TableDisplay::details).collect();
    println!("{}", format_rows(&header, &rows));
}

pub fn format_result_table(table: &ResultTable) -> String {
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let body = format_rows(&table.columns, &rows);
    match &table.title {
        Some(title) => format!("{}\n{}", title, body),
        None => body,
    }
}

/// Draws a chart series as labelled bars. Pie and donut slices are drawn as their share of the
/// total.
pub fn format_chart(chart: &Chart) -> String {
    let label_width = chart
        .points
        .iter()
        .map(|point| point.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!("{} ({} chart)", chart.title, chart.kind);
    if let (Some(x), Some(y)) = (&chart.x_label, &chart.y_label) {
        out += &format!("\n{} by {}", y, x);
    }

    let proportional = matches!(chart.kind, ChartKind::Pie | ChartKind::Donut);
    let scale = if proportional {
        chart.total()
    } else {
        chart
            .points
            .iter()
            .map(|point| point.value)
            .fold(0.0, f64::max)
    };

    for point in &chart.points {
        let fraction = if scale > 0.0 { point.value / scale } else { 0.0 };
        let bar = "#".repeat((fraction * BAR_WIDTH as f64).round() as usize);
        let value = if proportional {
            format!("{:.1}%", fraction * 100.0)
        } else {
            format_value(point.value)
        };
        out += &format!(
            "\n{:width$}  {} {}",
            point.label,
            bar,
            value,
            width = label_width
        );
    }
    out
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

pub fn print_report(output: &ReportOutput) {
    println!("{}", output.report);
    for table in &output.tables {
        println!();
        println!("{}", format_result_table(table));
    }
    if let Some(chart) = &output.chart {
        println!();
        println!("{}", format_chart(chart));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use food_rescue_sdk::reports::{Cell, ChartPoint};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_columns_fit_widest_value() {
        let table = ResultTable::new(
            Some("Food Providers"),
            &["City", "Provider Count"],
            vec![
                vec![Cell::Text("Springfield".into()), Cell::Integer(12)],
                vec![Cell::Text("Ely".into()), Cell::Integer(3)],
            ],
        );

        assert_eq!(
            format_result_table(&table),
            "Food Providers\n\
             City         Provider Count\n\
             Springfield  12\n\
             Ely          3"
        );
    }

    #[test]
    fn test_pie_drawn_as_shares() {
        let chart = Chart {
            kind: ChartKind::Pie,
            title: "Food Type Distribution".into(),
            x_label: None,
            y_label: None,
            points: vec![
                ChartPoint {
                    label: "Fruits".into(),
                    value: 3.0,
                },
                ChartPoint {
                    label: "Vegetables".into(),
                    value: 1.0,
                },
            ],
        };

        let text = format_chart(&chart);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Food Type Distribution (pie chart)");
        assert_eq!(lines[1], format!("Fruits      {} 75.0%", "#".repeat(30)));
        assert_eq!(lines[2], format!("Vegetables  {} 25.0%", "#".repeat(10)));
    }

    #[test]
    fn test_bars_scaled_to_largest_value() {
        let chart = Chart {
            kind: ChartKind::Bar,
            title: "Total Quantity by Provider Type".into(),
            x_label: Some("Provider Type".into()),
            y_label: Some("Total Quantity".into()),
            points: vec![
                ChartPoint {
                    label: "Restaurant".into(),
                    value: 20.0,
                },
                ChartPoint {
                    label: "Bakery".into(),
                    value: 5.0,
                },
            ],
        };

        let text = format_chart(&chart);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "Total Quantity by Provider Type");
        assert_eq!(lines[2], format!("Restaurant  {} 20", "#".repeat(40)));
        assert_eq!(lines[3], format!("Bakery      {} 5", "#".repeat(10)));
    }
}
