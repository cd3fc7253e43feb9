use std::fs::File;
use std::path::{Path, PathBuf};

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Date32Type, Float64Type, Int64Type};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::error::LoadError;
use super::model::{
    DailyDataset, DailyRecord, Datasets, HourlyDataset, HourlyRecord, Season, Weather,
};

/// File stems looked up by [`load_from_dir`].
pub const DAILY_STEM: &str = "day";
pub const HOURLY_STEM: &str = "hour";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Columns every daily source must provide.  `instant` may be present and is ignored.
pub const DAILY_COLUMNS: [&str; 15] = [
    "dteday",
    "season",
    "yr",
    "mnth",
    "holiday",
    "weekday",
    "workingday",
    "weathersit",
    "temp",
    "atemp",
    "hum",
    "windspeed",
    "casual",
    "registered",
    "cnt",
];

/// Hourly sources carry the daily columns plus the hour of day.
pub const HOURLY_EXTRA_COLUMN: &str = "hr";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load both collections.  Either source failing fails the whole load.
pub fn load_datasets(daily_path: &Path, hourly_path: &Path) -> Result<Datasets, LoadError> {
    let daily = load_daily(daily_path)?;
    let hourly = load_hourly(hourly_path)?;
    Ok(Datasets { daily, hourly })
}

/// Load `day.{csv,parquet}` and `hour.{csv,parquet}` from a directory.
pub fn load_from_dir(dir: &Path) -> Result<Datasets, LoadError> {
    load_datasets(&find_source(dir, DAILY_STEM), &find_source(dir, HOURLY_STEM))
}

/// Load the daily table.  Dispatch by extension.
pub fn load_daily(path: &Path) -> Result<DailyDataset, LoadError> {
    let rows = read_rows(path, false)?;
    let records = rows
        .into_iter()
        .enumerate()
        .map(|(row, raw)| raw.into_daily(path, row))
        .collect::<Result<Vec<_>, _>>()?;

    let inconsistent = records
        .iter()
        .filter(|r| r.casual_count.checked_add(r.registered_count) != Some(r.total_count))
        .count();
    warn_inconsistent_totals(path, inconsistent);

    Ok(DailyDataset::from_records(records))
}

/// Load the hourly table.  Dispatch by extension.
pub fn load_hourly(path: &Path) -> Result<HourlyDataset, LoadError> {
    let rows = read_rows(path, true)?;
    let records = rows
        .into_iter()
        .enumerate()
        .map(|(row, raw)| raw.into_hourly(path, row))
        .collect::<Result<Vec<_>, _>>()?;

    let inconsistent = records
        .iter()
        .filter(|r| r.casual_count.checked_add(r.registered_count) != Some(r.total_count))
        .count();
    warn_inconsistent_totals(path, inconsistent);

    Ok(HourlyDataset::from_records(records))
}

fn find_source(dir: &Path, stem: &str) -> PathBuf {
    ["csv", "parquet", "pq"]
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|p| p.is_file())
        .unwrap_or_else(|| dir.join(format!("{stem}.csv")))
}

fn warn_inconsistent_totals(path: &Path, count: usize) {
    if count > 0 {
        log::warn!(
            "{count} rows in '{}' have cnt != casual + registered",
            path.display()
        );
    }
}

fn read_rows(path: &Path, hourly: bool) -> Result<Vec<RawRow>, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => read_csv(path, hourly),
        "parquet" | "pq" => read_parquet(path, hourly),
        _ => Err(LoadError::UnsupportedFormat {
            source_path: path.to_path_buf(),
            extension: ext,
        }),
    }
}

fn expected_columns(hourly: bool) -> impl Iterator<Item = &'static str> {
    DAILY_COLUMNS
        .into_iter()
        .chain(hourly.then_some(HOURLY_EXTRA_COLUMN))
}

// ---------------------------------------------------------------------------
// Raw row – one source row before typing
// ---------------------------------------------------------------------------

/// Column names follow the canonical bike-sharing tables.
#[derive(Debug, Clone, Deserialize)]
struct RawRow {
    dteday: String,
    season: i64,
    yr: i64,
    mnth: i64,
    holiday: i64,
    weekday: i64,
    workingday: i64,
    weathersit: i64,
    temp: f64,
    atemp: f64,
    hum: f64,
    windspeed: f64,
    casual: i64,
    registered: i64,
    cnt: i64,
    #[serde(default)]
    hr: Option<i64>,
}

/// Typed fields shared by both tables.
struct CommonFields {
    date: NaiveDate,
    season: Season,
    year: u8,
    month: u32,
    is_holiday: bool,
    weekday: u8,
    is_working_day: bool,
    weather: Weather,
    casual_count: u32,
    registered_count: u32,
    total_count: u32,
}

impl RawRow {
    fn common(&self, path: &Path, row: usize) -> Result<CommonFields, LoadError> {
        let invalid = |column: &str, value: String| LoadError::InvalidValue {
            source_path: path.to_path_buf(),
            row,
            column: column.to_string(),
            value,
        };
        let in_range = |column: &str, value: i64, max: i64| -> Result<i64, LoadError> {
            if (0..=max).contains(&value) {
                Ok(value)
            } else {
                Err(invalid(column, value.to_string()))
            }
        };
        let count = |column: &str, value: i64| -> Result<u32, LoadError> {
            u32::try_from(value).map_err(|_| invalid(column, value.to_string()))
        };

        let date = NaiveDate::parse_from_str(self.dteday.trim(), DATE_FORMAT)
            .map_err(|_| invalid("dteday", self.dteday.clone()))?;
        let season = Season::from_code(self.season)
            .ok_or_else(|| invalid("season", self.season.to_string()))?;
        let weather = Weather::from_code(self.weathersit)
            .ok_or_else(|| invalid("weathersit", self.weathersit.to_string()))?;
        let month = in_range("mnth", self.mnth, 12)?;
        if month == 0 {
            return Err(invalid("mnth", self.mnth.to_string()));
        }

        Ok(CommonFields {
            date,
            season,
            year: in_range("yr", self.yr, u8::MAX as i64)? as u8,
            month: month as u32,
            is_holiday: in_range("holiday", self.holiday, 1)? == 1,
            weekday: in_range("weekday", self.weekday, 6)? as u8,
            is_working_day: in_range("workingday", self.workingday, 1)? == 1,
            weather,
            casual_count: count("casual", self.casual)?,
            registered_count: count("registered", self.registered)?,
            total_count: count("cnt", self.cnt)?,
        })
    }

    fn into_daily(self, path: &Path, row: usize) -> Result<DailyRecord, LoadError> {
        let c = self.common(path, row)?;
        Ok(DailyRecord {
            date: c.date,
            season: c.season,
            year: c.year,
            month: c.month,
            is_holiday: c.is_holiday,
            weekday: c.weekday,
            is_working_day: c.is_working_day,
            weather: c.weather,
            temperature: self.temp,
            feeling_temperature: self.atemp,
            humidity: self.hum,
            windspeed: self.windspeed,
            casual_count: c.casual_count,
            registered_count: c.registered_count,
            total_count: c.total_count,
            temp_bucket: None,
        })
    }

    fn into_hourly(self, path: &Path, row: usize) -> Result<HourlyRecord, LoadError> {
        let c = self.common(path, row)?;
        let hour = self
            .hr
            .filter(|h| (0..=23).contains(h))
            .ok_or_else(|| LoadError::InvalidValue {
                source_path: path.to_path_buf(),
                row,
                column: HOURLY_EXTRA_COLUMN.to_string(),
                value: self.hr.map(|h| h.to_string()).unwrap_or_default(),
            })?;
        Ok(HourlyRecord {
            date: c.date,
            hour: hour as u8,
            season: c.season,
            year: c.year,
            month: c.month,
            is_holiday: c.is_holiday,
            weekday: c.weekday,
            is_working_day: c.is_working_day,
            weather: c.weather,
            temperature: self.temp,
            feeling_temperature: self.atemp,
            humidity: self.hum,
            windspeed: self.windspeed,
            casual_count: c.casual_count,
            registered_count: c.registered_count,
            total_count: c.total_count,
        })
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Header row with column names; one rental row per line.
fn read_csv(path: &Path, hourly: bool) -> Result<Vec<RawRow>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::Io(path.to_path_buf(), e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(file);
    let headers = reader
        .headers()
        .map_err(|e| LoadError::Csv(path.to_path_buf(), e))?
        .clone();

    for column in expected_columns(hourly) {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn {
                source_path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    reader
        .deserialize::<RawRow>()
        .map(|result| result.map_err(|e| LoadError::Csv(path.to_path_buf(), e)))
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`): integer columns of any width, float
/// columns, and `dteday` as a string, date or timestamp column.
fn read_parquet(path: &Path, hourly: bool) -> Result<Vec<RawRow>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::Io(path.to_path_buf(), e))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| LoadError::Parquet(path.to_path_buf(), e))?;

    for column in expected_columns(hourly) {
        if builder.schema().index_of(column).is_err() {
            return Err(LoadError::MissingColumn {
                source_path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let reader = builder
        .build()
        .map_err(|e| LoadError::Parquet(path.to_path_buf(), e))?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.map_err(|e| LoadError::Arrow {
            source_path: path.to_path_buf(),
            column: String::new(),
            source: e,
        })?;
        let columns = BatchColumns { path, batch: &batch, offset: rows.len() };

        let dteday = columns.dates("dteday")?;
        let ints: Vec<ArrayRef> = INT_COLUMNS
            .iter()
            .map(|c| columns.cast(c, &DataType::Int64))
            .collect::<Result<_, _>>()?;
        let floats: Vec<ArrayRef> = FLOAT_COLUMNS
            .iter()
            .map(|c| columns.cast(c, &DataType::Float64))
            .collect::<Result<_, _>>()?;
        let hr = if hourly {
            Some(columns.cast(HOURLY_EXTRA_COLUMN, &DataType::Int64)?)
        } else {
            None
        };

        for row in 0..batch.num_rows() {
            let int = |i: usize, name: &str| columns.int_at(&ints[i], name, row);
            let float = |i: usize, name: &str| columns.float_at(&floats[i], name, row);
            rows.push(RawRow {
                dteday: columns.date_at(&dteday, "dteday", row)?,
                season: int(0, "season")?,
                yr: int(1, "yr")?,
                mnth: int(2, "mnth")?,
                holiday: int(3, "holiday")?,
                weekday: int(4, "weekday")?,
                workingday: int(5, "workingday")?,
                weathersit: int(6, "weathersit")?,
                casual: int(7, "casual")?,
                registered: int(8, "registered")?,
                cnt: int(9, "cnt")?,
                temp: float(0, "temp")?,
                atemp: float(1, "atemp")?,
                hum: float(2, "hum")?,
                windspeed: float(3, "windspeed")?,
                hr: hr
                    .as_ref()
                    .map(|a| columns.int_at(a, HOURLY_EXTRA_COLUMN, row))
                    .transpose()?,
            });
        }
    }

    Ok(rows)
}

// -- Parquet / Arrow helpers --

const INT_COLUMNS: [&str; 10] = [
    "season",
    "yr",
    "mnth",
    "holiday",
    "weekday",
    "workingday",
    "weathersit",
    "casual",
    "registered",
    "cnt",
];
const FLOAT_COLUMNS: [&str; 4] = ["temp", "atemp", "hum", "windspeed"];

/// `dteday` as read from parquet: text to parse, or a calendar column.
enum DateColumn {
    Text(ArrayRef),
    Calendar(ArrayRef),
}

/// Column access for one record batch; `offset` turns batch rows into file rows.
struct BatchColumns<'a> {
    path: &'a Path,
    batch: &'a RecordBatch,
    offset: usize,
}

impl BatchColumns<'_> {
    fn cast(&self, column: &str, to: &DataType) -> Result<ArrayRef, LoadError> {
        let array = self
            .batch
            .column_by_name(column)
            .ok_or_else(|| LoadError::MissingColumn {
                source_path: self.path.to_path_buf(),
                column: column.to_string(),
            })?;
        cast(array, to).map_err(|e| LoadError::Arrow {
            source_path: self.path.to_path_buf(),
            column: column.to_string(),
            source: e,
        })
    }

    fn null_error(&self, column: &str, row: usize) -> LoadError {
        LoadError::InvalidValue {
            source_path: self.path.to_path_buf(),
            row: self.offset + row,
            column: column.to_string(),
            value: "null".to_string(),
        }
    }

    fn int_at(&self, array: &ArrayRef, column: &str, row: usize) -> Result<i64, LoadError> {
        if array.is_null(row) {
            return Err(self.null_error(column, row));
        }
        Ok(array.as_primitive::<Int64Type>().value(row))
    }

    fn float_at(&self, array: &ArrayRef, column: &str, row: usize) -> Result<f64, LoadError> {
        if array.is_null(row) {
            return Err(self.null_error(column, row));
        }
        Ok(array.as_primitive::<Float64Type>().value(row))
    }

    /// Date and timestamp columns are cast to `Date32`; anything else is read as text.
    fn dates(&self, column: &str) -> Result<DateColumn, LoadError> {
        let calendar = self.batch.column_by_name(column).is_some_and(|a| {
            matches!(
                a.data_type(),
                DataType::Date32 | DataType::Date64 | DataType::Timestamp(..)
            )
        });
        if calendar {
            Ok(DateColumn::Calendar(self.cast(column, &DataType::Date32)?))
        } else {
            Ok(DateColumn::Text(self.cast(column, &DataType::Utf8)?))
        }
    }

    /// The date at `row` in `DATE_FORMAT`, ready for the shared row validation.
    fn date_at(&self, dates: &DateColumn, column: &str, row: usize) -> Result<String, LoadError> {
        match dates {
            DateColumn::Text(array) => {
                if array.is_null(row) {
                    return Err(self.null_error(column, row));
                }
                Ok(array.as_string::<i32>().value(row).to_string())
            }
            DateColumn::Calendar(array) => {
                if array.is_null(row) {
                    return Err(self.null_error(column, row));
                }
                let days = array.as_primitive::<Date32Type>();
                days.value_as_date(row)
                    .map(|d| d.format(DATE_FORMAT).to_string())
                    .ok_or_else(|| LoadError::InvalidValue {
                        source_path: self.path.to_path_buf(),
                        row: self.offset + row,
                        column: column.to_string(),
                        value: days.value(row).to_string(),
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::{
        Float64Array, Int32Array, Int64Array, StringArray, TimestampNanosecondArray,
    };
    use arrow::datatypes::{Field, Schema, TimeUnit};
    use parquet::arrow::ArrowWriter;

    use super::*;
    use crate::data::model::TempBucket;

    const DAILY_HEADER: &str =
        "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn daily_csv() -> String {
        [
            DAILY_HEADER,
            "2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,131,670,801",
            "1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985",
            "3,2011-06-15,2,0,6,0,3,1,1,0.626667,0.587754,0.471667,0.167912,784,5119,5903",
        ]
        .join("\n")
    }

    fn hourly_csv() -> String {
        [
            format!("{},hr", DAILY_HEADER),
            "2,2011-01-01,1,0,1,0,6,0,1,0.22,0.2727,0.8,0.0,8,32,40,1".to_string(),
            "1,2011-01-01,1,0,1,0,6,0,1,0.24,0.2879,0.81,0.0,3,13,16,0".to_string(),
        ]
        .join("\n")
    }

    #[test]
    fn loads_and_sorts_daily_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "day.csv", &daily_csv());

        let ds = load_daily(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[0].date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(ds.records[2].season, Season::Summer);
        assert_eq!(ds.records[2].weather, Weather::Clear);
        assert!(ds.records[2].is_working_day);
        assert_eq!(ds.records[2].temp_bucket, Some(TempBucket::Warm));
        for r in &ds.records {
            assert_eq!(r.total_count, r.casual_count + r.registered_count);
        }
    }

    #[test]
    fn loads_hourly_csv_sorted_by_hour() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "hour.csv", &hourly_csv());

        let ds = load_hourly(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].hour, 0);
        assert_eq!(ds.records[0].total_count, 16);
        assert_eq!(ds.records[1].hour, 1);
    }

    #[test]
    fn load_from_dir_finds_both_tables() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "day.csv", &daily_csv());
        write_file(dir.path(), "hour.csv", &hourly_csv());

        let datasets = load_from_dir(dir.path()).unwrap();
        assert_eq!(datasets.daily.len(), 3);
        assert_eq!(datasets.hourly.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_daily(&dir.path().join("day.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io(..)), "{err:?}");

        let err = load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Io(..)), "{err:?}");
    }

    #[test]
    fn missing_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let csv = daily_csv().replace("windspeed", "wind");
        let path = write_file(dir.path(), "day.csv", &csv);

        match load_daily(&path).unwrap_err() {
            LoadError::MissingColumn { column, .. } => assert_eq!(column, "windspeed"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn hourly_requires_hour_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "hour.csv", &daily_csv());

        match load_hourly(&path).unwrap_err() {
            LoadError::MissingColumn { column, .. } => assert_eq!(column, "hr"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_season_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let csv = format!(
            "{DAILY_HEADER}\n1,2011-01-01,5,0,1,0,6,0,2,0.34,0.36,0.80,0.16,331,654,985"
        );
        let path = write_file(dir.path(), "day.csv", &csv);

        match load_daily(&path).unwrap_err() {
            LoadError::InvalidValue { column, row, value, .. } => {
                assert_eq!(column, "season");
                assert_eq!(row, 0);
                assert_eq!(value, "5");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparseable_date_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let csv = format!(
            "{DAILY_HEADER}\n1,first of jan,1,0,1,0,6,0,2,0.34,0.36,0.80,0.16,331,654,985"
        );
        let path = write_file(dir.path(), "day.csv", &csv);

        assert!(matches!(
            load_daily(&path).unwrap_err(),
            LoadError::InvalidValue { ref column, .. } if column == "dteday"
        ));
    }

    #[test]
    fn unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "day.xlsx", "");
        assert!(matches!(
            load_daily(&path).unwrap_err(),
            LoadError::UnsupportedFormat { ref extension, .. } if extension == "xlsx"
        ));
    }

    #[test]
    fn loads_daily_parquet_with_narrow_ints() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("day.parquet");

        let int32 = |name: &str| Field::new(name, DataType::Int32, false);
        let float = |name: &str| Field::new(name, DataType::Float64, false);
        let schema = Arc::new(Schema::new(vec![
            Field::new("dteday", DataType::Utf8, false),
            int32("season"),
            int32("yr"),
            int32("mnth"),
            int32("holiday"),
            int32("weekday"),
            int32("workingday"),
            int32("weathersit"),
            float("temp"),
            float("atemp"),
            float("hum"),
            float("windspeed"),
            Field::new("casual", DataType::Int64, false),
            Field::new("registered", DataType::Int64, false),
            Field::new("cnt", DataType::Int64, false),
        ]));
        let ints = |v: [i32; 2]| Arc::new(Int32Array::from(v.to_vec())) as ArrayRef;
        let floats = |v: [f64; 2]| Arc::new(Float64Array::from(v.to_vec())) as ArrayRef;
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["2012-12-31", "2012-12-30"])),
                ints([1, 1]),
                ints([1, 1]),
                ints([12, 12]),
                ints([0, 0]),
                ints([1, 0]),
                ints([1, 0]),
                ints([2, 1]),
                floats([0.215833, 0.255833]),
                floats([0.223487, 0.2317]),
                floats([0.5775, 0.483333]),
                floats([0.154846, 0.350754]),
                Arc::new(Int64Array::from(vec![439, 364])),
                Arc::new(Int64Array::from(vec![2290, 1432])),
                Arc::new(Int64Array::from(vec![2729, 1796])),
            ],
        )
        .unwrap();
        let mut writer = ArrowWriter::try_new(File::create(&path).unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_daily(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].date, NaiveDate::from_ymd_opt(2012, 12, 30).unwrap());
        assert_eq!(ds.records[1].weather, Weather::Mist);
        assert_eq!(ds.records[1].total_count, 2729);
        assert_eq!(ds.records[0].temp_bucket, Some(TempBucket::Cold));
    }

    #[test]
    fn inconsistent_total_is_kept_as_given() {
        let dir = tempfile::tempdir().unwrap();
        let csv = format!(
            "{DAILY_HEADER}\n1,2011-01-01,1,0,1,0,6,0,2,0.34,0.36,0.80,0.16,331,654,1000"
        );
        let path = write_file(dir.path(), "day.csv", &csv);

        let ds = load_daily(&path).unwrap();
        assert_eq!(ds.len(), 1);
        let r = &ds.records[0];
        assert_eq!((r.casual_count, r.registered_count), (331, 654));
        assert_eq!(r.total_count, 1000);
    }

    #[test]
    fn padded_headers_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let csv = daily_csv().replace(",season,", ", season ,");
        let path = write_file(dir.path(), "day.csv", &csv);

        let ds = load_daily(&path).unwrap();
        assert_eq!(ds.records[2].season, Season::Summer);
    }

    #[test]
    fn loads_parquet_with_timestamp_dates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("day.parquet");

        let int = |name: &str| Field::new(name, DataType::Int64, false);
        let float = |name: &str| Field::new(name, DataType::Float64, false);
        let mut fields = vec![Field::new(
            "dteday",
            DataType::Timestamp(TimeUnit::Nanosecond, None),
            false,
        )];
        fields.extend(INT_COLUMNS[..7].iter().map(|c| int(c)));
        fields.extend(FLOAT_COLUMNS.iter().map(|c| float(c)));
        fields.extend(INT_COLUMNS[7..].iter().map(|c| int(c)));
        let schema = Arc::new(Schema::new(fields));

        // 2011-01-01T00:00:00 as written by pandas after `to_datetime`
        let midnight_ns = 1_293_840_000_i64 * 1_000_000_000;
        let int_col = |v: i64| Arc::new(Int64Array::from(vec![v])) as ArrayRef;
        let float_col = |v: f64| Arc::new(Float64Array::from(vec![v])) as ArrayRef;
        let mut columns: Vec<ArrayRef> =
            vec![Arc::new(TimestampNanosecondArray::from(vec![midnight_ns]))];
        columns.extend([1, 0, 1, 0, 6, 0, 2].map(int_col));
        columns.extend([0.344167, 0.363625, 0.805833, 0.160446].map(float_col));
        columns.extend([331, 654, 985].map(int_col));
        let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();

        let mut writer = ArrowWriter::try_new(File::create(&path).unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_daily(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(ds.records[0].total_count, 985);
    }
}
