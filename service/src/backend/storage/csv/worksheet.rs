//! # Worksheet
//!
//! A CSV file treated like one tab of a spreadsheet. Rows are addressed the
//! way a spreadsheet addresses them: row 1 is the header, the first data row
//! is row 2. Nothing here knows what the columns mean; the typed repositories
//! on top map rows to domain records.
//!
//! ## Write paths
//!
//! - `append_row` opens the file in append mode and writes one record.
//! - `update_cells`, `patch_first_match` and `delete_row` rewrite the whole
//!   file through a temp file followed by a rename.
//!
//! Every operation holds the connection's file lock for its full duration,
//! shared for reads and exclusive for writes.

use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use super::connection::CsvConnection;
use crate::backend::storage::error::{StoreError, StoreResult};

pub type Row = Vec<String>;

/// Name and header row of one table
#[derive(Debug)]
pub struct TableSpec {
    pub name: &'static str,
    pub headers: &'static [&'static str],
}

impl TableSpec {
    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

pub const EMPLOYEE_MASTER: TableSpec = TableSpec {
    name: "Employee Master Data",
    headers: &[
        "Employee ID",
        "Employee Name",
        "Phone Number",
        "E-mail Address",
        "Department",
        "Job Title",
        "Joining Date",
        "Shift Days",
        "Supervisor Name",
        "Address",
    ],
};

pub const ATTENDANCE_DATA: TableSpec = TableSpec {
    name: "Attendance Data",
    headers: &[
        "Employee ID",
        "Employee Name",
        "Department",
        "Date",
        "Day",
        "In-Time",
        "Attendance Status In",
        "Break Start",
        "Break End",
        "Out-Time",
        "Attendance Status Out",
    ],
};

/// 1-based sheet row, header included
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RowCoordinate(pub usize);

impl RowCoordinate {
    /// Coordinate of the data row at `index` in scan order
    pub fn from_index(index: usize) -> Self {
        RowCoordinate(index + 2)
    }

    /// Position in scan order, None for the header row and row 0
    pub fn index(&self) -> Option<usize> {
        self.0.checked_sub(2)
    }
}

#[derive(Clone)]
pub struct Worksheet {
    connection: CsvConnection,
    table: &'static TableSpec,
}

impl Worksheet {
    pub fn new(connection: CsvConnection, table: &'static TableSpec) -> Self {
        Self { connection, table }
    }

    /// Append one row at the end of the sheet
    pub async fn append_row(&self, row: &[String]) -> StoreResult<()> {
        let _guard = self.connection.file_lock().write().await;
        let path = self.connection.ensure_table_exists(self.table)?;

        let file = OpenOptions::new().append(true).open(&path)?;
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(file));
        writer.write_record(self.padded(row.to_vec()))?;
        writer.flush()?;

        debug!("Appended row to '{}'", self.table.name);
        Ok(())
    }

    /// Every data row in append order
    pub async fn scan_all(&self) -> StoreResult<Vec<Row>> {
        let _guard = self.connection.file_lock().read().await;
        self.read_rows()
    }

    /// First row (in append order) accepted by `predicate`
    pub async fn find_first<F>(&self, predicate: F) -> StoreResult<Option<(RowCoordinate, Row)>>
    where
        F: Fn(&Row) -> bool,
    {
        let rows = self.scan_all().await?;
        Ok(rows
            .into_iter()
            .enumerate()
            .find(|(_, row)| predicate(row))
            .map(|(index, row)| (RowCoordinate::from_index(index), row)))
    }

    /// Overwrite individual cells of an existing row. Columns are 0-based.
    pub async fn update_cells(
        &self,
        coordinate: RowCoordinate,
        cells: &[(usize, String)],
    ) -> StoreResult<()> {
        let _guard = self.connection.file_lock().write().await;
        let mut rows = self.read_rows()?;

        let index = self.checked_index(coordinate, rows.len())?;
        self.apply_cells(&mut rows[index], cells)?;
        self.write_rows(&rows)?;

        debug!("Updated {} cell(s) in row {} of '{}'", cells.len(), coordinate.0, self.table.name);
        Ok(())
    }

    /// Locate a row and patch it under one exclusive lock, so the coordinate
    /// cannot drift between the lookup and the write.
    ///
    /// `locate` receives every data row and returns the scan index to patch.
    /// The row is returned as written.
    pub async fn patch_first_match<F>(
        &self,
        locate: F,
        cells: &[(usize, String)],
    ) -> StoreResult<Option<(RowCoordinate, Row)>>
    where
        F: FnOnce(&[Row]) -> Option<usize>,
    {
        let _guard = self.connection.file_lock().write().await;
        let mut rows = self.read_rows()?;

        let Some(index) = locate(&rows) else {
            return Ok(None);
        };
        let coordinate = RowCoordinate::from_index(index);
        self.checked_index(coordinate, rows.len())?;
        self.apply_cells(&mut rows[index], cells)?;
        self.write_rows(&rows)?;

        Ok(Some((coordinate, rows.swap_remove(index))))
    }

    /// True when the cell at `column` is missing or blank
    pub fn is_blank(row: &Row, column: usize) -> bool {
        row.get(column).map(|cell| cell.trim().is_empty()).unwrap_or(true)
    }

    /// Remove a row, shifting every row below it up by one
    pub async fn delete_row(&self, coordinate: RowCoordinate) -> StoreResult<Row> {
        let _guard = self.connection.file_lock().write().await;
        let mut rows = self.read_rows()?;

        let index = self.checked_index(coordinate, rows.len())?;
        let removed = rows.remove(index);
        self.write_rows(&rows)?;

        debug!("Deleted row {} of '{}'", coordinate.0, self.table.name);
        Ok(removed)
    }

    fn checked_index(&self, coordinate: RowCoordinate, len: usize) -> StoreResult<usize> {
        coordinate
            .index()
            .filter(|index| *index < len)
            .ok_or(StoreError::RowOutOfRange {
                table: self.table.name,
                row: coordinate.0,
            })
    }

    fn apply_cells(&self, row: &mut Row, cells: &[(usize, String)]) -> StoreResult<()> {
        for (column, value) in cells {
            let cell = row.get_mut(*column).ok_or(StoreError::ColumnOutOfRange {
                table: self.table.name,
                column: *column,
            })?;
            *cell = value.clone();
        }
        Ok(())
    }

    /// Spreadsheets drop trailing empty cells, so short rows are padded
    fn padded(&self, mut row: Row) -> Row {
        if row.len() < self.table.width() {
            row.resize(self.table.width(), String::new());
        }
        row
    }

    fn read_rows(&self) -> StoreResult<Vec<Row>> {
        let path = self.connection.ensure_table_exists(self.table)?;
        let file = File::open(&path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Row = record.iter().map(|cell| cell.to_string()).collect();
            rows.push(self.padded(row));
        }

        Ok(rows)
    }

    fn write_rows(&self, rows: &[Row]) -> StoreResult<()> {
        let path = self.connection.table_path(self.table);
        let temp_path = path.with_extension("tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;
            let mut writer = WriterBuilder::new()
                .flexible(true)
                .from_writer(BufWriter::new(file));

            writer.write_record(self.table.headers)?;
            for row in rows {
                writer.write_record(row)?;
            }
            writer.flush()?;
        }

        std::fs::rename(&temp_path, &path)?;
        Ok(())
    }
}
