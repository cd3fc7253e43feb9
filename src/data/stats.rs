use std::collections::BTreeMap;

use super::model::{NumericField, NumericRow};

// ---------------------------------------------------------------------------
// Grouped mean
// ---------------------------------------------------------------------------

/// Arithmetic mean of `value` within each distinct `key`, ordered by key.
///
/// Items whose key is `None` are skipped.  Groups without members never
/// appear in the output.
pub fn grouped_mean<T, K, FK, FV>(
    items: impl IntoIterator<Item = T>,
    key: FK,
    value: FV,
) -> Vec<(K, f64)>
where
    K: Ord,
    FK: Fn(&T) -> Option<K>,
    FV: Fn(&T) -> f64,
{
    let mut groups: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for item in items {
        if let Some(k) = key(&item) {
            let slot = groups.entry(k).or_insert((0.0, 0));
            slot.0 += value(&item);
            slot.1 += 1;
        }
    }
    groups
        .into_iter()
        .map(|(k, (sum, n))| (k, sum / n as f64))
        .collect()
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// Per-column summary in the usual count / mean / std / quartiles layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub field: NumericField,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; undefined for fewer than two rows.
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Summaries for `fields` over the view.  An empty view yields no rows, and
/// fields the row type does not carry are skipped.
pub fn describe<R: NumericRow>(view: &[&R], fields: &[NumericField]) -> Vec<Summary> {
    if view.is_empty() {
        return Vec::new();
    }
    columns(view, fields)
        .into_iter()
        .map(|(field, mut values)| {
            values.sort_by(f64::total_cmp);
            let n = values.len();
            let mean = values.iter().sum::<f64>() / n as f64;
            let std = (n > 1).then(|| {
                let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
                (ss / (n - 1) as f64).sqrt()
            });
            Summary {
                field,
                count: n,
                mean,
                std,
                min: values[0],
                q25: quantile_sorted(&values, 0.25),
                median: quantile_sorted(&values, 0.5),
                q75: quantile_sorted(&values, 0.75),
                max: values[n - 1],
            }
        })
        .collect()
}

/// Values of each field the row type carries, in `fields` order.
fn columns<R: NumericRow>(view: &[&R], fields: &[NumericField]) -> Vec<(NumericField, Vec<f64>)> {
    fields
        .iter()
        .filter_map(|&field| {
            let values = view
                .iter()
                .map(|r| r.numeric(field))
                .collect::<Option<Vec<f64>>>()?;
            Some((field, values))
        })
        .collect()
}

/// Linear interpolation between the closest ranks.  `sorted` must be non-empty.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

// ---------------------------------------------------------------------------
// Correlation
// ---------------------------------------------------------------------------

/// Pairwise Pearson correlation between numeric columns.
///
/// A cell is `None` when either column has zero variance or the view has
/// fewer than two rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorrelationMatrix {
    pub fields: Vec<NumericField>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, a: NumericField, b: NumericField) -> Option<f64> {
        let i = self.fields.iter().position(|f| *f == a)?;
        let j = self.fields.iter().position(|f| *f == b)?;
        self.values[i][j]
    }
}

pub fn correlation_matrix<R: NumericRow>(
    view: &[&R],
    fields: &[NumericField],
) -> CorrelationMatrix {
    if view.is_empty() {
        return CorrelationMatrix::default();
    }
    let (fields, columns): (Vec<NumericField>, Vec<Vec<f64>>) =
        columns(view, fields).into_iter().unzip();

    let k = fields.len();
    let mut values = vec![vec![None; k]; k];
    for i in 0..k {
        for j in i..k {
            let r = if i == j {
                has_variance(&columns[i]).then_some(1.0)
            } else {
                pearson(&columns[i], &columns[j])
            };
            values[i][j] = r;
            values[j][i] = r;
        }
    }
    CorrelationMatrix { fields, values }
}

fn has_variance(xs: &[f64]) -> bool {
    xs.len() > 1 && xs.iter().any(|x| *x != xs[0])
}

fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || !has_variance(xs) || !has_variance(ys) {
        return None;
    }
    let mx = mean(xs)?;
    let my = mean(ys)?;
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mx, y - my);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    let denom = (sxx * syy).sqrt();
    (denom > 0.0).then(|| (sxy / denom).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::{day, hour};
    use crate::data::model::{DailyRecord, HourlyRecord};

    #[test]
    fn grouped_mean_orders_by_key_and_skips_none() {
        let items = [(3, 10.0), (1, 2.0), (3, 20.0), (2, 99.0), (1, 4.0)];
        let out = grouped_mean(items, |(k, _)| (*k != 2).then_some(*k), |(_, v)| *v);
        assert_eq!(out, vec![(1, 3.0), (3, 15.0)]);
    }

    #[test]
    fn grouped_mean_of_nothing_is_empty() {
        let out = grouped_mean(Vec::<(u8, f64)>::new(), |(k, _)| Some(*k), |(_, v)| *v);
        assert!(out.is_empty());
    }

    #[test]
    fn describe_matches_linear_quantiles() {
        let records: Vec<_> = [1, 2, 3, 4].iter().map(|&c| day((2011, 1, c), c * 10, 0)).collect();
        let view: Vec<&DailyRecord> = records.iter().collect();

        let s = &describe(&view, &[NumericField::Casual])[0];
        assert_eq!(s.count, 4);
        assert_eq!(s.mean, 25.0);
        assert_eq!(s.min, 10.0);
        assert_eq!(s.q25, 17.5);
        assert_eq!(s.median, 25.0);
        assert_eq!(s.q75, 32.5);
        assert_eq!(s.max, 40.0);
        let std = s.std.unwrap();
        assert!((std - 12.909944487358056).abs() < 1e-12);
    }

    #[test]
    fn describe_single_row_has_no_std() {
        let records = [day((2011, 1, 1), 5, 5)];
        let view: Vec<&DailyRecord> = records.iter().collect();
        let s = &describe(&view, &[NumericField::Total])[0];
        assert_eq!(s.std, None);
        assert_eq!(s.median, 10.0);
        assert!(describe::<DailyRecord>(&[], &NumericField::ALL).is_empty());
    }

    #[test]
    fn correlation_is_symmetric_with_unit_diagonal() {
        let mut records = Vec::new();
        for (i, (casual, registered, temp)) in
            [(10, 90, 0.2), (50, 20, 0.4), (30, 60, 0.9), (80, 10, 0.5)].into_iter().enumerate()
        {
            let mut r = day((2011, 1, 1 + i as u32), casual, registered);
            r.temperature = temp;
            records.push(r);
        }
        let view: Vec<&DailyRecord> = records.iter().collect();
        let m = correlation_matrix(&view, &NumericField::ALL);

        for (i, a) in m.fields.iter().enumerate() {
            for (j, b) in m.fields.iter().enumerate() {
                assert_eq!(m.values[i][j], m.values[j][i], "{a:?}/{b:?}");
            }
        }
        for f in [
            NumericField::Casual,
            NumericField::Registered,
            NumericField::Total,
            NumericField::Temperature,
        ] {
            assert_eq!(m.get(f, f), Some(1.0));
        }
        // constant columns have no defined correlation
        assert_eq!(m.get(NumericField::Season, NumericField::Season), None);
        assert_eq!(m.get(NumericField::Season, NumericField::Total), None);

        let r = m.get(NumericField::Casual, NumericField::Registered).unwrap();
        assert!(r < 0.0 && r >= -1.0);
    }

    #[test]
    fn perfectly_linear_columns_correlate_to_one() {
        let records: Vec<_> = (1..=5).map(|i| day((2011, 2, i), i * 3, i * 7)).collect();
        let view: Vec<&DailyRecord> = records.iter().collect();
        let m = correlation_matrix(&view, &[NumericField::Casual, NumericField::Registered]);
        let r = m.get(NumericField::Casual, NumericField::Registered).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn correlation_of_empty_view_is_empty() {
        assert!(correlation_matrix::<DailyRecord>(&[], &NumericField::ALL).is_empty());
    }

    #[test]
    fn describe_hourly_rows_includes_hour() {
        let records = [
            hour((2011, 1, 1), 0, 16),
            hour((2011, 1, 1), 6, 40),
            hour((2011, 1, 1), 12, 88),
        ];
        let view: Vec<&HourlyRecord> = records.iter().collect();

        let summary = describe(&view, &NumericField::HOURLY);
        assert_eq!(summary.len(), NumericField::HOURLY.len());
        let hr = summary.iter().find(|s| s.field == NumericField::Hour).unwrap();
        assert_eq!((hr.min, hr.median, hr.max), (0.0, 6.0, 12.0));
        assert_eq!(hr.mean, 6.0);
    }

    #[test]
    fn fields_missing_from_the_row_type_are_skipped() {
        let records = [day((2011, 1, 1), 1, 2), day((2011, 1, 2), 3, 5)];
        let view: Vec<&DailyRecord> = records.iter().collect();

        let summary = describe(&view, &NumericField::HOURLY);
        assert_eq!(summary.len(), NumericField::ALL.len());
        assert!(summary.iter().all(|s| s.field != NumericField::Hour));

        let m = correlation_matrix(&view, &[NumericField::Hour, NumericField::Casual]);
        assert_eq!(m.fields, vec![NumericField::Casual]);
    }
}
