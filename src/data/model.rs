use std::fmt;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Categorical codes
// ---------------------------------------------------------------------------

/// Meteorological season, encoded 1–4 in the source tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Spring = 1,
    Summer = 2,
    Fall = 3,
    Winter = 4,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

/// Weather situation, ordered by severity (1 = clear … 4 = heavy precipitation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weather {
    Clear = 1,
    Mist = 2,
    LightPrecip = 3,
    HeavyPrecip = 4,
}

impl Weather {
    pub const ALL: [Weather; 4] = [
        Weather::Clear,
        Weather::Mist,
        Weather::LightPrecip,
        Weather::HeavyPrecip,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Weather::Clear),
            2 => Some(Weather::Mist),
            3 => Some(Weather::LightPrecip),
            4 => Some(Weather::HeavyPrecip),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Weather::Clear => "Clear",
            Weather::Mist => "Mist",
            Weather::LightPrecip => "Light Snow/Rain",
            Weather::HeavyPrecip => "Heavy Rain/Snow",
        }
    }
}

/// Temperature category derived from the normalised `temp` column.
///
/// Buckets are `[0, 0.3]`, `(0.3, 0.6]`, `(0.6, 1.0]`: each upper bound is
/// inclusive and zero belongs to the first bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TempBucket {
    Cold,
    Moderate,
    Warm,
}

impl TempBucket {
    /// Values outside `[0, 1]` (and NaN) have no bucket.
    pub fn from_temperature(temp: f64) -> Option<Self> {
        if (0.0..=0.3).contains(&temp) {
            Some(TempBucket::Cold)
        } else if temp > 0.3 && temp <= 0.6 {
            Some(TempBucket::Moderate)
        } else if temp > 0.6 && temp <= 1.0 {
            Some(TempBucket::Warm)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TempBucket::Cold => "Cold",
            TempBucket::Moderate => "Moderate",
            TempBucket::Warm => "Warm",
        }
    }
}

macro_rules! display_via_label {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(Season, Weather, TempBucket);

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short month name for a 1-based month number.
pub fn month_label(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_LABELS.get(i as usize))
        .copied()
        .unwrap_or("?")
}

pub fn working_day_label(is_working_day: bool) -> &'static str {
    if is_working_day {
        "Working day"
    } else {
        "Weekend / Holiday"
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One row of the daily table.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub season: Season,
    /// Year offset from the start of the collection period (0 or 1).
    pub year: u8,
    pub month: u32,
    pub is_holiday: bool,
    /// 0 = Sunday … 6 = Saturday.
    pub weekday: u8,
    pub is_working_day: bool,
    pub weather: Weather,
    /// Normalised temperature in `[0, 1]`.
    pub temperature: f64,
    /// Normalised "feels like" temperature.
    pub feeling_temperature: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub casual_count: u32,
    pub registered_count: u32,
    pub total_count: u32,
    /// Derived once at load time from `temperature`.
    pub temp_bucket: Option<TempBucket>,
}

/// One row of the hourly table.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    pub hour: u8,
    pub season: Season,
    pub year: u8,
    pub month: u32,
    pub is_holiday: bool,
    pub weekday: u8,
    pub is_working_day: bool,
    pub weather: Weather,
    pub temperature: f64,
    pub feeling_temperature: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub casual_count: u32,
    pub registered_count: u32,
    pub total_count: u32,
}

/// Fields shared by daily and hourly rows that the filter predicate reads.
pub trait RentalRecord {
    fn date(&self) -> NaiveDate;
    fn season(&self) -> Season;
    fn weather(&self) -> Weather;
    fn total_count(&self) -> u32;
}

impl RentalRecord for DailyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn season(&self) -> Season {
        self.season
    }
    fn weather(&self) -> Weather {
        self.weather
    }
    fn total_count(&self) -> u32 {
        self.total_count
    }
}

impl RentalRecord for HourlyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn season(&self) -> Season {
        self.season
    }
    fn weather(&self) -> Weather {
        self.weather
    }
    fn total_count(&self) -> u32 {
        self.total_count
    }
}

// ---------------------------------------------------------------------------
// Numeric columns
// ---------------------------------------------------------------------------

/// Numeric columns, in source-table order.  Used by the descriptive
/// statistics and the correlation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericField {
    Season,
    Year,
    Month,
    /// Hourly table only.
    Hour,
    Holiday,
    Weekday,
    WorkingDay,
    Weather,
    Temperature,
    FeelingTemperature,
    Humidity,
    Windspeed,
    Casual,
    Registered,
    Total,
}

impl NumericField {
    /// Numeric columns of the daily table.
    pub const ALL: [NumericField; 14] = [
        NumericField::Season,
        NumericField::Year,
        NumericField::Month,
        NumericField::Holiday,
        NumericField::Weekday,
        NumericField::WorkingDay,
        NumericField::Weather,
        NumericField::Temperature,
        NumericField::FeelingTemperature,
        NumericField::Humidity,
        NumericField::Windspeed,
        NumericField::Casual,
        NumericField::Registered,
        NumericField::Total,
    ];

    /// Numeric columns of the hourly table.
    pub const HOURLY: [NumericField; 15] = [
        NumericField::Season,
        NumericField::Year,
        NumericField::Month,
        NumericField::Hour,
        NumericField::Holiday,
        NumericField::Weekday,
        NumericField::WorkingDay,
        NumericField::Weather,
        NumericField::Temperature,
        NumericField::FeelingTemperature,
        NumericField::Humidity,
        NumericField::Windspeed,
        NumericField::Casual,
        NumericField::Registered,
        NumericField::Total,
    ];

    /// Columns shown in the compact numeric summary.
    pub const MEASUREMENTS: [NumericField; 6] = [
        NumericField::Temperature,
        NumericField::Humidity,
        NumericField::Windspeed,
        NumericField::Casual,
        NumericField::Registered,
        NumericField::Total,
    ];

    /// Source column name.
    pub fn column(self) -> &'static str {
        match self {
            NumericField::Season => "season",
            NumericField::Year => "yr",
            NumericField::Month => "mnth",
            NumericField::Hour => "hr",
            NumericField::Holiday => "holiday",
            NumericField::Weekday => "weekday",
            NumericField::WorkingDay => "workingday",
            NumericField::Weather => "weathersit",
            NumericField::Temperature => "temp",
            NumericField::FeelingTemperature => "atemp",
            NumericField::Humidity => "hum",
            NumericField::Windspeed => "windspeed",
            NumericField::Casual => "casual",
            NumericField::Registered => "registered",
            NumericField::Total => "cnt",
        }
    }
}

/// Rows whose numeric columns can be summarised.
pub trait NumericRow {
    /// `None` when the row's table has no such column.
    fn numeric(&self, field: NumericField) -> Option<f64>;
}

impl NumericRow for DailyRecord {
    fn numeric(&self, field: NumericField) -> Option<f64> {
        let v = match field {
            NumericField::Season => self.season.code() as f64,
            NumericField::Year => self.year as f64,
            NumericField::Month => self.month as f64,
            NumericField::Hour => return None,
            NumericField::Holiday => self.is_holiday as u8 as f64,
            NumericField::Weekday => self.weekday as f64,
            NumericField::WorkingDay => self.is_working_day as u8 as f64,
            NumericField::Weather => self.weather.code() as f64,
            NumericField::Temperature => self.temperature,
            NumericField::FeelingTemperature => self.feeling_temperature,
            NumericField::Humidity => self.humidity,
            NumericField::Windspeed => self.windspeed,
            NumericField::Casual => self.casual_count as f64,
            NumericField::Registered => self.registered_count as f64,
            NumericField::Total => self.total_count as f64,
        };
        Some(v)
    }
}

impl NumericRow for HourlyRecord {
    fn numeric(&self, field: NumericField) -> Option<f64> {
        let v = match field {
            NumericField::Season => self.season.code() as f64,
            NumericField::Year => self.year as f64,
            NumericField::Month => self.month as f64,
            NumericField::Hour => self.hour as f64,
            NumericField::Holiday => self.is_holiday as u8 as f64,
            NumericField::Weekday => self.weekday as f64,
            NumericField::WorkingDay => self.is_working_day as u8 as f64,
            NumericField::Weather => self.weather.code() as f64,
            NumericField::Temperature => self.temperature,
            NumericField::FeelingTemperature => self.feeling_temperature,
            NumericField::Humidity => self.humidity,
            NumericField::Windspeed => self.windspeed,
            NumericField::Casual => self.casual_count as f64,
            NumericField::Registered => self.registered_count as f64,
            NumericField::Total => self.total_count as f64,
        };
        Some(v)
    }
}

// ---------------------------------------------------------------------------
// Datasets – the loaded collections
// ---------------------------------------------------------------------------

/// The daily collection, sorted ascending by date.
#[derive(Debug, Clone, Default)]
pub struct DailyDataset {
    pub records: Vec<DailyRecord>,
}

impl DailyDataset {
    /// Sort by date and derive the temperature bucket of every record.
    pub fn from_records(mut records: Vec<DailyRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        for r in &mut records {
            r.temp_bucket = TempBucket::from_temperature(r.temperature);
        }
        DailyDataset { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First and last date present, or `None` for an empty collection.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.records.first()?.date, self.records.last()?.date))
    }
}

/// The hourly collection, sorted by (date, hour).
#[derive(Debug, Clone, Default)]
pub struct HourlyDataset {
    pub records: Vec<HourlyRecord>,
}

impl HourlyDataset {
    pub fn from_records(mut records: Vec<HourlyRecord>) -> Self {
        records.sort_by_key(|r| (r.date, r.hour));
        HourlyDataset { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Both collections, loaded once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub daily: DailyDataset,
    pub hourly: HourlyDataset,
}

// ---------------------------------------------------------------------------
// Test fixtures
// ---------------------------------------------------------------------------
