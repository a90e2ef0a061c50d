// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;
use std::fmt::{self, Write as _};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render `value` as its text form or as pretty JSON, newline-terminated
pub fn render<T: Serialize + fmt::Display>(
    value: &T,
    format: OutputFormat,
) -> serde_json::Result<String> {
    let mut out = match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Render items one per line, or as a JSON array
pub fn render_list<T: Serialize + fmt::Display>(
    items: &[T],
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(items.iter().fold(String::new(), |mut out, item| {
            let _ = writeln!(out, "{}", item);
            out
        })),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)? + "\n"),
    }
}

pub fn print<T: Serialize + fmt::Display>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    print!("{}", render(value, format)?);
    Ok(())
}

pub fn print_list<T: Serialize + fmt::Display>(
    items: &[T],
    format: OutputFormat,
) -> anyhow::Result<()> {
    print!("{}", render_list(items, format)?);
    Ok(())
}

/// Plain-text table sized to its widest cells.
///
/// The first column is left-aligned and holds names; every other column is
/// right-aligned so numbers line up.
#[derive(Debug, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.header.len()];
        for line in std::iter::once(&self.header).chain(&self.rows) {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        for line in std::iter::once(&self.header).chain(&self.rows) {
            let mut cells = line.iter().zip(&widths);
            if let Some((name, &width)) = cells.next() {
                if line.len() == 1 {
                    write!(f, "{}", name)?;
                } else {
                    write!(f, "{:<width$}", name)?;
                }
            }
            for (cell, &width) in cells {
                write!(f, "  {:>width$}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
