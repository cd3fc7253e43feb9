use super::model::{DailyRecord, HourlyRecord, RentalRecord, Season, TempBucket, Weather};
use super::stats::grouped_mean;

/// Ordered `(key, mean)` pairs ready for a table or chart.
pub type Series<K> = Vec<(K, f64)>;

/// Mean daily total per month (1–12), in month order.
pub fn monthly_trend<'a>(view: impl IntoIterator<Item = &'a DailyRecord>) -> Series<u32> {
    grouped_mean(view, |r| Some(r.month), |r| r.total_count as f64)
}

/// Monthly trend sorted by descending mean; ties keep month order.
pub fn monthly_ranking<'a>(view: impl IntoIterator<Item = &'a DailyRecord>) -> Series<u32> {
    let mut ranked = monthly_trend(view);
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Mean total per season, for either table.
pub fn seasonal_trend<'a, R>(records: impl IntoIterator<Item = &'a R>) -> Series<Season>
where
    R: RentalRecord + 'a,
{
    grouped_mean(records, |r| Some(r.season()), |r| r.total_count() as f64)
}

/// Mean total per weather situation, for either table.
pub fn weather_effect<'a, R>(records: impl IntoIterator<Item = &'a R>) -> Series<Weather>
where
    R: RentalRecord + 'a,
{
    grouped_mean(records, |r| Some(r.weather()), |r| r.total_count() as f64)
}

/// Mean hourly total per hour of day (0–23).
pub fn hourly_trend<'a>(records: impl IntoIterator<Item = &'a HourlyRecord>) -> Series<u8> {
    grouped_mean(records, |r| Some(r.hour), |r| r.total_count as f64)
}

/// Mean daily total per temperature bucket.  Records without a bucket are ignored.
pub fn temperature_effect<'a>(
    records: impl IntoIterator<Item = &'a DailyRecord>,
) -> Series<TempBucket> {
    grouped_mean(records, |r| r.temp_bucket, |r| r.total_count as f64)
}

/// Casual and registered means for one working-day group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkdayEffect {
    pub is_working_day: bool,
    pub casual: f64,
    pub registered: f64,
}

/// Rider-type means grouped by the working-day flag (`false` first).
pub fn workday_effect<'a>(view: impl IntoIterator<Item = &'a DailyRecord>) -> Vec<WorkdayEffect> {
    let view: Vec<&DailyRecord> = view.into_iter().collect();
    let casual = grouped_mean(
        view.iter().copied(),
        |r| Some(r.is_working_day),
        |r| r.casual_count as f64,
    );
    let registered = grouped_mean(view, |r| Some(r.is_working_day), |r| {
        r.registered_count as f64
    });
    casual
        .into_iter()
        .zip(registered)
        .map(|((is_working_day, casual), (_, registered))| WorkdayEffect {
            is_working_day,
            casual,
            registered,
        })
        .collect()
}

/// Daily and hourly seasonal means side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonComparison {
    pub season: Season,
    pub daily: Option<f64>,
    pub hourly: Option<f64>,
}

/// Outer join of two seasonal series on season.
pub fn seasonal_comparison(
    daily: &Series<Season>,
    hourly: &Series<Season>,
) -> Vec<SeasonComparison> {
    let lookup = |series: &Series<Season>, s: Season| {
        series.iter().find(|(k, _)| *k == s).map(|(_, v)| *v)
    };
    Season::ALL
        .into_iter()
        .map(|season| SeasonComparison {
            season,
            daily: lookup(daily, season),
            hourly: lookup(hourly, season),
        })
        .filter(|row| row.daily.is_some() || row.hourly.is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::{day, hour};

    #[test]
    fn two_record_month_and_season_average() {
        let records = [day((2011, 1, 1), 40, 60), day((2011, 1, 2), 50, 150)];
        assert_eq!(records[0].season, Season::Spring);

        assert_eq!(monthly_trend(&records), vec![(1, 150.0)]);
        assert_eq!(seasonal_trend(&records), vec![(Season::Spring, 150.0)]);
    }

    #[test]
    fn workday_effect_has_exact_group_means() {
        let mut weekend = day((2011, 1, 1), 50, 20);
        weekend.is_working_day = false;
        let workday = day((2011, 1, 3), 10, 90);

        let effect = workday_effect(&[workday, weekend]);
        assert_eq!(
            effect,
            vec![
                WorkdayEffect { is_working_day: false, casual: 50.0, registered: 20.0 },
                WorkdayEffect { is_working_day: true, casual: 10.0, registered: 90.0 },
            ]
        );
    }

    #[test]
    fn seasonal_means_satisfy_weighted_mean_identity() {
        let mut records = Vec::new();
        for (i, season) in [
            Season::Spring,
            Season::Summer,
            Season::Summer,
            Season::Fall,
            Season::Winter,
            Season::Winter,
            Season::Winter,
        ]
        .into_iter()
        .enumerate()
        {
            let mut r = day((2011, 1, 1 + i as u32), 7 * i as u32 + 3, 100 + 13 * i as u32);
            r.season = season;
            records.push(r);
        }

        let overall =
            records.iter().map(|r| r.total_count as f64).sum::<f64>() / records.len() as f64;
        let weighted: f64 = seasonal_trend(&records)
            .iter()
            .map(|(s, m)| m * records.iter().filter(|r| r.season == *s).count() as f64)
            .sum::<f64>()
            / records.len() as f64;
        assert!((overall - weighted).abs() < 1e-9);
    }

    #[test]
    fn monthly_ranking_sorts_descending() {
        let mut records = Vec::new();
        for (m, total) in [(1, 100), (2, 300), (3, 200)] {
            records.push(day((2011, m, 1), 0, total));
        }
        let ranked = monthly_ranking(&records);
        assert_eq!(ranked, vec![(2, 300.0), (3, 200.0), (1, 100.0)]);
        assert_eq!(monthly_trend(&records)[0], (1, 100.0));
    }

    #[test]
    fn hourly_trend_groups_by_hour() {
        let hours = [
            hour((2011, 1, 1), 8, 100),
            hour((2011, 1, 2), 8, 300),
            hour((2011, 1, 1), 0, 10),
        ];
        assert_eq!(hourly_trend(&hours), vec![(0, 10.0), (8, 200.0)]);
    }

    #[test]
    fn weather_effect_in_severity_order() {
        let mut mist = day((2011, 1, 1), 0, 40);
        mist.weather = Weather::Mist;
        let clear = day((2011, 1, 2), 0, 80);
        assert_eq!(
            weather_effect(&[mist, clear]),
            vec![(Weather::Clear, 80.0), (Weather::Mist, 40.0)]
        );
    }

    #[test]
    fn temperature_effect_uses_inclusive_upper_bounds() {
        let mut at_boundary = day((2011, 1, 1), 0, 100);
        at_boundary.temp_bucket = TempBucket::from_temperature(0.3);
        let mut just_above = day((2011, 1, 2), 0, 200);
        just_above.temp_bucket = TempBucket::from_temperature(0.30000001);
        let mut unbucketed = day((2011, 1, 3), 0, 999);
        unbucketed.temp_bucket = None;

        assert_eq!(
            temperature_effect(&[at_boundary, just_above, unbucketed]),
            vec![(TempBucket::Cold, 100.0), (TempBucket::Moderate, 200.0)]
        );
    }

    #[test]
    fn empty_input_gives_empty_series() {
        let none: [DailyRecord; 0] = [];
        assert!(monthly_trend(&none).is_empty());
        assert!(monthly_ranking(&none).is_empty());
        assert!(seasonal_trend(&none).is_empty());
        assert!(weather_effect(&none).is_empty());
        assert!(temperature_effect(&none).is_empty());
        assert!(workday_effect(&none).is_empty());
        assert!(hourly_trend(&[] as &[HourlyRecord]).is_empty());
        assert!(seasonal_comparison(&Vec::new(), &Vec::new()).is_empty());
    }

    #[test]
    fn seasonal_comparison_outer_joins() {
        let daily = vec![(Season::Spring, 2000.0), (Season::Fall, 5000.0)];
        let hourly = vec![(Season::Spring, 100.0), (Season::Summer, 200.0)];
        let rows = seasonal_comparison(&daily, &hourly);
        assert_eq!(
            rows,
            vec![
                SeasonComparison { season: Season::Spring, daily: Some(2000.0), hourly: Some(100.0) },
                SeasonComparison { season: Season::Summer, daily: None, hourly: Some(200.0) },
                SeasonComparison { season: Season::Fall, daily: Some(5000.0), hourly: None },
            ]
        );
    }
}
