// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

pub trait TableStyle {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result;
}

pub struct Table<'a, S: TableStyle, T, C: TableColumn<T>> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S: TableStyle, T, C: TableColumn<T>> Table<'a, S, T, C> {
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S: TableStyle, T, C: TableColumn<T>> fmt::Display for Table<'_, S, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.write(f, self.columns, self.data)
    }
}

/// Aligned columns with a header row, colored cells.
#[derive(Debug, Clone)]
pub struct TableStyleBasic {
    separator: &'static str,
    header: bool,
    color: bool,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self {
            separator: "  ",
            header: true,
            color: true,
        }
    }

    #[cfg(test)]
    pub fn plain(mut self) -> Self {
        self.color = false;
        self
    }
}

impl TableStyle for TableStyleBasic {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let mut rows: Vec<Vec<Cow<'_, str>>> = Vec::with_capacity(data.len() + 1);
        if self.header {
            rows.push(columns.iter().map(|c| c.name()).collect());
        }
        for item in data {
            rows.push(columns.iter().map(|c| c.format(item)).collect());
        }

        let widths = get_column_max_width(&rows, columns.len());
        let header_offset = usize::from(self.header);
        for (i, row) in rows.iter().enumerate() {
            for (j, (col, cell)) in columns.iter().zip(row).enumerate() {
                let last = j == columns.len() - 1;
                let padded = pad(cell, widths[j], col.padding_direction(), last);

                let styled = match (i.checked_sub(header_offset), self.color) {
                    (None, true) => padded.bold().to_string(),
                    (Some(k), true) => match col.get_color(&data[k]) {
                        Some(color) => padded.color(color).to_string(),
                        None => padded,
                    },
                    (_, false) => padded,
                };
                write!(f, "{styled}")?;

                if !last {
                    write!(f, "{}", self.separator)?;
                }
            }
            if i < rows.len() - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// A JSON array of objects keyed by column name.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> = data
            .iter()
            .map(|item| {
                columns
                    .iter()
                    .map(|c| {
                        let value = serde_json::Value::String(c.format(item).into_owned());
                        (c.name().into_owned(), value)
                    })
                    .collect()
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

fn pad(cell: &str, width: usize, direction: PaddingDirection, last: bool) -> String {
    let fill = width.saturating_sub(cell.width());
    match direction {
        // Last column does not need padding if it's left-aligned
        PaddingDirection::Left if last => cell.to_string(),
        PaddingDirection::Left => format!("{cell}{}", " ".repeat(fill)),
        PaddingDirection::Right => format!("{}{cell}", " ".repeat(fill)),
    }
}

fn get_column_max_width(rows: &[Vec<Cow<'_, str>>], n: usize) -> Vec<usize> {
    let mut max_width = vec![0; n];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            max_width[i] = max_width[i].max(cell.width());
        }
    }
    max_width
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Col(usize, &'static str, PaddingDirection);

    impl TableColumn<(&'static str, &'static str)> for Col {
        fn name(&self) -> Cow<'_, str> {
            self.1.into()
        }

        fn format<'a>(&self, data: &'a (&'static str, &'static str)) -> Cow<'a, str> {
            match self.0 {
                0 => data.0.into(),
                _ => data.1.into(),
            }
        }

        fn padding_direction(&self) -> PaddingDirection {
            self.2
        }
    }

    fn columns() -> Vec<Col> {
        vec![
            Col(0, "Id", PaddingDirection::Right),
            Col(1, "Name", PaddingDirection::Left),
        ]
    }

    #[test]
    fn test_basic_style_aligns_columns() {
        let data = vec![("1", "Syd"), ("10", "中文")];
        let columns = columns();
        let out = Table::new(TableStyleBasic::new().plain(), &columns, &data).to_string();
        assert_eq!(out, "Id  Name\n 1  Syd\n10  中文");
    }

    #[test]
    fn test_json_style() {
        let data = vec![("1", "Syd")];
        let columns = columns();
        let out = Table::new(TableStyleJson::new(), &columns, &data).to_string();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["Id"], "1");
        assert_eq!(value[0]["Name"], "Syd");
    }

    #[test]
    fn test_json_style_empty() {
        let data: Vec<(&'static str, &'static str)> = vec![];
        let columns = columns();
        let out = Table::new(TableStyleJson::new(), &columns, &data).to_string();
        assert_eq!(out, "[]");
    }
}
