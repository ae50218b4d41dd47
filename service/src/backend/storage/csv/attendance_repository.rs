use async_trait::async_trait;
use chrono::NaiveTime;
use log::{debug, info, warn};

use super::connection::CsvConnection;
use super::worksheet::{Row, RowCoordinate, Worksheet, ATTENDANCE_DATA};
use crate::backend::domain::models::attendance::{
    format_date, format_time, parse_date, parse_time, AttendanceRecord, RecordKey, StatusIn,
    StatusOut,
};
use crate::backend::storage::error::{StoreError, StoreResult};
use crate::backend::storage::traits::AttendanceStorage;

const COL_EMPLOYEE_ID: usize = 0;
const COL_DATE: usize = 3;
const COL_OUT_TIME: usize = 9;
const COL_STATUS_OUT: usize = 10;

/// Attendance Data ledger repository
#[derive(Clone)]
pub struct AttendanceRepository {
    sheet: Worksheet,
}

impl AttendanceRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self {
            sheet: Worksheet::new(connection, &ATTENDANCE_DATA),
        }
    }

    fn to_row(record: &AttendanceRecord) -> Row {
        vec![
            record.employee_id.clone(),
            record.employee_name.clone(),
            record.department.clone(),
            format_date(record.date),
            record.day_of_week.clone(),
            format_time(record.in_time),
            record.status_in.label().to_string(),
            format_time(record.break_start),
            format_time(record.break_end),
            record.out_time.map(format_time).unwrap_or_default(),
            record.status_out.map(|s| s.label().to_string()).unwrap_or_default(),
        ]
    }

    fn from_row(row: &Row, coordinate: RowCoordinate) -> StoreResult<AttendanceRecord> {
        let malformed = |reason: String| StoreError::MalformedRow {
            table: ATTENDANCE_DATA.name,
            row: coordinate.0,
            reason,
        };
        let cell = |i: usize| row.get(i).map(|c| c.trim()).unwrap_or("");
        let time = |i: usize| {
            parse_time(cell(i)).ok_or_else(|| {
                malformed(format!("invalid {} '{}'", ATTENDANCE_DATA.headers[i], cell(i)))
            })
        };
        let optional_time = |i: usize| {
            if cell(i).is_empty() {
                Ok(None)
            } else {
                time(i).map(Some)
            }
        };

        let date = parse_date(cell(COL_DATE))
            .ok_or_else(|| malformed(format!("invalid Date '{}'", cell(COL_DATE))))?;
        let status_in: StatusIn = cell(6).parse().map_err(|e| malformed(format!("{}", e)))?;
        let status_out = match cell(COL_STATUS_OUT) {
            "" => None,
            value => Some(
                value
                    .parse::<StatusOut>()
                    .map_err(|e| malformed(format!("{}", e)))?,
            ),
        };

        Ok(AttendanceRecord {
            employee_id: cell(COL_EMPLOYEE_ID).to_string(),
            employee_name: cell(1).to_string(),
            department: cell(2).to_string(),
            date,
            day_of_week: cell(4).to_string(),
            in_time: time(5)?,
            status_in,
            break_start: time(7)?,
            break_end: time(8)?,
            out_time: optional_time(COL_OUT_TIME)?,
            status_out,
        })
    }

    /// Scan index of the last open row carrying `key`.
    ///
    /// Dates are compared parsed, the same way `from_row` reads them.
    fn locate_open(rows: &[Row], key: &RecordKey) -> Option<usize> {
        rows.iter().rposition(|row| {
            let cell = |i: usize| row.get(i).map(|c| c.trim()).unwrap_or("");
            cell(COL_EMPLOYEE_ID) == key.employee_id
                && parse_date(cell(COL_DATE)) == Some(key.date)
                && cell(COL_OUT_TIME).is_empty()
        })
    }
}

#[async_trait]
impl AttendanceStorage for AttendanceRepository {
    async fn append_record(&self, record: &AttendanceRecord) -> StoreResult<()> {
        self.sheet.append_row(&Self::to_row(record)).await?;
        debug!("Appended attendance record {}", record.key());
        Ok(())
    }

    async fn list_records(&self) -> StoreResult<Vec<AttendanceRecord>> {
        let rows = self.sheet.scan_all().await?;
        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let coordinate = RowCoordinate::from_index(index);
            if Worksheet::is_blank(row, COL_EMPLOYEE_ID) {
                warn!("Skipping row {} of '{}': no Employee ID", coordinate.0, ATTENDANCE_DATA.name);
                continue;
            }
            records.push(Self::from_row(row, coordinate)?);
        }
        Ok(records)
    }

    async fn close_record(
        &self,
        key: &RecordKey,
        out_time: NaiveTime,
        status_out: StatusOut,
    ) -> StoreResult<AttendanceRecord> {
        let cells = [
            (COL_OUT_TIME, format_time(out_time)),
            (COL_STATUS_OUT, status_out.label().to_string()),
        ];

        let (coordinate, row) = self
            .sheet
            .patch_first_match(|rows| Self::locate_open(rows, key), &cells)
            .await?
            .ok_or_else(|| StoreError::RecordNotFound {
                table: ATTENDANCE_DATA.name,
                key: key.to_string(),
            })?;
        info!("Closed attendance record {} at row {}", key, coordinate.0);

        Self::from_row(&row, coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::csv::test_utils::TestEnvironment;
    use chrono::NaiveDate;

    fn record(employee_id: &str, date: &str, hour: u32) -> AttendanceRecord {
        let now = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        AttendanceRecord::sign_in(employee_id, "Ada", "Sales", now, StatusIn::Early)
    }

    #[tokio::test]
    async fn test_append_and_list_in_append_order() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = AttendanceRepository::new(env.connection.clone());

        repo.append_record(&record("sbx002", "2024-01-02", 9)).await.unwrap();
        repo.append_record(&record("sbx001", "2024-01-01", 8)).await.unwrap();

        let records = repo.list_records().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].employee_id, "sbx002");
        assert_eq!(records[1].employee_id, "sbx001");
        assert!(records.iter().all(|r| r.is_open()));
    }

    #[tokio::test]
    async fn test_row_layout_matches_sheet_columns() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = AttendanceRepository::new(env.connection.clone());
        repo.append_record(&record("sbx001", "2024-01-01", 8)).await.unwrap();

        let content = std::fs::read_to_string(env.connection.table_path(&ATTENDANCE_DATA)).unwrap();
        let data_line = content.lines().nth(1).unwrap();
        assert_eq!(
            data_line,
            "sbx001,Ada,Sales,2024-01-01,Monday,08:00 AM,Early,12:00 PM,12:40 PM,,"
        );
    }

    #[tokio::test]
    async fn test_close_record_patches_only_out_cells() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = AttendanceRepository::new(env.connection.clone());
        let open = record("sbx001", "2024-01-01", 8);
        repo.append_record(&open).await.unwrap();

        let out_time = NaiveTime::from_hms_opt(17, 15, 0).unwrap();
        let closed = repo
            .close_record(&open.key(), out_time, StatusOut::OnTime)
            .await
            .unwrap();

        assert_eq!(closed.out_time, Some(out_time));
        assert_eq!(closed.status_out, Some(StatusOut::OnTime));
        assert_eq!(closed.in_time, open.in_time);

        let records = repo.list_records().await.unwrap();
        assert_eq!(records, vec![closed]);
    }

    #[tokio::test]
    async fn test_close_record_resolves_key_after_rows_shift() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = AttendanceRepository::new(env.connection.clone());
        let sheet = Worksheet::new(env.connection.clone(), &ATTENDANCE_DATA);

        repo.append_record(&record("sbx002", "2024-01-01", 8)).await.unwrap();
        let target = record("sbx001", "2024-01-01", 9);
        repo.append_record(&target).await.unwrap();

        // Someone removes the first row by hand between scan and write
        sheet.delete_row(RowCoordinate(2)).await.unwrap();

        let out_time = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        let closed = repo
            .close_record(&target.key(), out_time, StatusOut::LeftEarly)
            .await
            .unwrap();
        assert_eq!(closed.employee_id, "sbx001");
        assert_eq!(closed.status_out, Some(StatusOut::LeftEarly));
    }

    #[tokio::test]
    async fn test_close_record_without_open_row_fails() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = AttendanceRepository::new(env.connection.clone());
        let open = record("sbx001", "2024-01-01", 8);
        repo.append_record(&open).await.unwrap();

        let out_time = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        repo.close_record(&open.key(), out_time, StatusOut::OnTime).await.unwrap();

        let err = repo
            .close_record(&open.key(), out_time, StatusOut::OnTime)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::RecordNotFound { .. }));
    }

    #[tokio::test]
    async fn test_close_record_matches_unpadded_date() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = AttendanceRepository::new(env.connection.clone());
        let sheet = Worksheet::new(env.connection.clone(), &ATTENDANCE_DATA);

        // Spreadsheets like to drop leading zeros
        let mut row = AttendanceRepository::to_row(&record("sbx001", "2024-01-02", 8));
        row[COL_DATE] = "2024-1-2".to_string();
        sheet.append_row(&row).await.unwrap();

        let open = repo.list_records().await.unwrap().remove(0);
        assert!(open.is_open());
        assert_eq!(format_date(open.date), "2024-01-02");

        let out_time = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        let closed = repo
            .close_record(&open.key(), out_time, StatusOut::OnTime)
            .await
            .unwrap();
        assert_eq!(closed.out_time, Some(out_time));
        assert!(!repo.list_records().await.unwrap()[0].is_open());
    }

    #[tokio::test]
    async fn test_legacy_work_from_home_rows_load() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = AttendanceRepository::new(env.connection.clone());
        let sheet = Worksheet::new(env.connection.clone(), &ATTENDANCE_DATA);

        let mut row = AttendanceRepository::to_row(&record("sbx002", "2024-01-01", 8));
        row[6] = "Work from Hoome".to_string();
        sheet.append_row(&row).await.unwrap();

        let records = repo.list_records().await.unwrap();
        assert_eq!(records[0].status_in, StatusIn::WorkFromHome);
    }

    #[tokio::test]
    async fn test_rows_without_id_are_skipped() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = AttendanceRepository::new(env.connection.clone());
        let sheet = Worksheet::new(env.connection.clone(), &ATTENDANCE_DATA);

        repo.append_record(&record("sbx001", "2024-01-01", 8)).await.unwrap();
        sheet.append_row(&[]).await.unwrap();

        let records = repo.list_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].employee_id, "sbx001");
    }

    #[tokio::test]
    async fn test_unknown_status_is_malformed() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = AttendanceRepository::new(env.connection.clone());
        let sheet = Worksheet::new(env.connection.clone(), &ATTENDANCE_DATA);

        let mut row = AttendanceRepository::to_row(&record("sbx001", "2024-01-01", 8));
        row[6] = "Work from Office".to_string();
        sheet.append_row(&row).await.unwrap();

        let err = repo.list_records().await.unwrap_err();
        match err {
            StoreError::MalformedRow { row, reason, .. } => {
                assert_eq!(row, 2);
                assert!(reason.contains("Work from Office"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
