use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Fixed public holidays (month, day).
const HOLIDAYS: [(u32, u32); 6] = [(1, 1), (1, 17), (5, 30), (7, 4), (11, 24), (12, 25)];

#[derive(Serialize)]
struct DayRow {
    instant: usize,
    dteday: String,
    season: u8,
    yr: u8,
    mnth: u32,
    holiday: u8,
    weekday: u32,
    workingday: u8,
    weathersit: u8,
    temp: f64,
    atemp: f64,
    hum: f64,
    windspeed: f64,
    casual: u32,
    registered: u32,
    cnt: u32,
}

#[derive(Serialize)]
struct HourRow {
    instant: usize,
    dteday: String,
    season: u8,
    yr: u8,
    mnth: u32,
    hr: u32,
    holiday: u8,
    weekday: u32,
    workingday: u8,
    weathersit: u8,
    temp: f64,
    atemp: f64,
    hum: f64,
    windspeed: f64,
    casual: u32,
    registered: u32,
    cnt: u32,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Winter-to-spring months map to 1, like the original collection.
fn season_of(date: NaiveDate) -> u8 {
    let (m, d) = (date.month(), date.day());
    match (m, d) {
        (1..=2, _) | (3, 1..=20) => 1,
        (3, _) | (4..=5, _) | (6, 1..=20) => 2,
        (6, _) | (7..=8, _) | (9, 1..=22) => 3,
        (9, _) | (10..=11, _) | (12, 1..=20) => 4,
        _ => 1,
    }
}

fn weather_draw(rng: &mut SimpleRng, allow_heavy: bool) -> u8 {
    match rng.next_f64() {
        p if p < 0.62 => 1,
        p if p < 0.94 => 2,
        p if p < 0.995 || !allow_heavy => 3,
        _ => 4,
    }
}

/// Relative demand for one hour; commute peaks on working days.
fn hour_profile(hour: u32, working: bool) -> (f64, f64) {
    let h = hour as f64;
    let bump = |centre: f64, width: f64| (-(h - centre).powi(2) / (2.0 * width * width)).exp();
    let casual = 0.02 + bump(14.0, 3.5);
    let registered = if working {
        0.03 + 1.6 * bump(8.0, 1.0) + 1.9 * bump(17.5, 1.2) + 0.4 * bump(12.5, 1.5)
    } else {
        0.03 + bump(13.0, 3.5)
    };
    (casual, registered)
}

fn main() -> Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);
    let start = NaiveDate::from_ymd_opt(2011, 1, 1).context("start date")?;
    let end = NaiveDate::from_ymd_opt(2012, 12, 31).context("end date")?;

    let day_path = out_dir.join("day.csv");
    let hour_path = out_dir.join("hour.csv");
    let mut day_writer = csv::Writer::from_path(&day_path)
        .with_context(|| format!("creating {}", day_path.display()))?;
    let mut hour_writer = csv::Writer::from_path(&hour_path)
        .with_context(|| format!("creating {}", hour_path.display()))?;

    let mut n_days = 0;
    let mut n_hours = 0;
    for (i, date) in start.iter_days().take_while(|d| *d <= end).enumerate() {
        let yr = (date.year() - start.year()) as u8;
        let weekday = date.weekday().num_days_from_sunday();
        let holiday = HOLIDAYS.contains(&(date.month(), date.day()));
        let working = !holiday && !matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        let season = season_of(date);

        // annual cycle peaking mid-July
        let phase = (date.ordinal() as f64 - 196.0) / 365.25 * 2.0 * std::f64::consts::PI;
        let temp = (0.5 + 0.32 * phase.cos() + rng.gauss(0.0, 0.05)).clamp(0.06, 0.86);
        let atemp = (temp * 0.93 + 0.03 + rng.gauss(0.0, 0.02)).clamp(0.0, 1.0);
        let hum = rng.gauss(0.63, 0.14).clamp(0.0, 0.97);
        let windspeed = rng.gauss(0.19, 0.07).clamp(0.02, 0.51);
        let day_weather = weather_draw(&mut rng, false);

        // demand rises with warmth, falls with bad weather, grows in year two
        let comfort = 1.0 - (temp - 0.7).abs() * 1.1;
        let weather_factor = [1.0, 0.82, 0.4, 0.15][day_weather as usize - 1];
        let growth = if yr == 0 { 1.0 } else { 1.6 };
        let scale = (comfort * weather_factor * growth).max(0.05);

        let (mut day_casual, mut day_registered) = (0u32, 0u32);
        for hr in 0..24u32 {
            let (pc, pr) = hour_profile(hr, working);
            let leisure = if working { 1.0 } else { 2.4 };
            let casual = (pc * 55.0 * scale * leisure * rng.gauss(1.0, 0.15).max(0.0)).round() as u32;
            let registered = (pr * 210.0 * scale * rng.gauss(1.0, 0.12).max(0.0)).round() as u32;
            let hour_weather = if rng.next_f64() < 0.8 {
                day_weather
            } else {
                weather_draw(&mut rng, true)
            };
            let diurnal = -0.06 * ((hr as f64 - 15.0) / 24.0 * 2.0 * std::f64::consts::PI).cos();

            hour_writer.serialize(HourRow {
                instant: n_hours + 1,
                dteday: date.to_string(),
                season,
                yr,
                mnth: date.month(),
                hr,
                holiday: holiday as u8,
                weekday,
                workingday: working as u8,
                weathersit: hour_weather,
                temp: round4((temp + diurnal).clamp(0.02, 1.0)),
                atemp: round4((atemp + diurnal).clamp(0.0, 1.0)),
                hum: round4((hum + rng.gauss(0.0, 0.05)).clamp(0.0, 1.0)),
                windspeed: round4((windspeed + rng.gauss(0.0, 0.04)).clamp(0.0, 0.85)),
                casual,
                registered,
                cnt: casual + registered,
            })?;
            day_casual += casual;
            day_registered += registered;
            n_hours += 1;
        }

        day_writer.serialize(DayRow {
            instant: i + 1,
            dteday: date.to_string(),
            season,
            yr,
            mnth: date.month(),
            holiday: holiday as u8,
            weekday,
            workingday: working as u8,
            weathersit: day_weather,
            temp: round4(temp),
            atemp: round4(atemp),
            hum: round4(hum),
            windspeed: round4(windspeed),
            casual: day_casual,
            registered: day_registered,
            cnt: day_casual + day_registered,
        })?;
        n_days += 1;
    }

    day_writer.flush()?;
    hour_writer.flush()?;

    println!(
        "Wrote {n_days} daily rows to {} and {n_hours} hourly rows to {}",
        day_path.display(),
        hour_path.display()
    );
    Ok(())
}
