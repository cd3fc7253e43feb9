/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  day.csv / hour.csv (.parquet)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse files → Datasets (daily + hourly)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  date range / season / weather → filtered view
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ pipeline  │  grouped means, describe, correlation → ViewBundle
///   └──────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod stats;
