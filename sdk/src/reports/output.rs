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

use std::fmt;

use super::Report;

/// One value in a result table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// The numeric value of the cell, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(value) => Some(*value as f64),
            Cell::Float(value) => Some(*value),
            Cell::Text(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Integer(value) => write!(f, "{}", value),
            Cell::Float(value) => write!(f, "{:.2}", value),
            Cell::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

/// Rows returned by one statement of a report, with display column names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    pub title: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ResultTable {
    pub fn new(title: Option<&str>, columns: &[&str], rows: Vec<Vec<Cell>>) -> Self {
        ResultTable {
            title: title.map(String::from),
            columns: columns.iter().map(|column| column.to_string()).collect(),
            rows,
        }
    }

    /// Index of the column with the given display name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Pie,
    Donut,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChartKind::Bar => f.write_str("bar"),
            ChartKind::HorizontalBar => f.write_str("horizontal bar"),
            ChartKind::Pie => f.write_str("pie"),
            ChartKind::Donut => f.write_str("donut"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// A chart-ready series. Drawing it is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub points: Vec<ChartPoint>,
}

impl Chart {
    /// Sum of all point values; a pie or donut shows each point as a share of this.
    pub fn total(&self) -> f64 {
        self.points.iter().map(|point| point.value).sum()
    }
}

/// Everything one report produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportOutput {
    pub report: Report,
    pub tables: Vec<ResultTable>,
    pub chart: Option<Chart>,
}

impl ReportOutput {
    /// Wraps the report's tables, deriving its chart series from them.
    pub fn new(report: Report, tables: Vec<ResultTable>) -> Self {
        let chart = report.chart(&tables);
        ReportOutput {
            report,
            tables,
            chart,
        }
    }
}
