/// Data layer: core types, loading, and summarising.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Row>, column names
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ summarize  │  filters + dedup + group-count → Summary
///   └────────────┘
/// ```

pub mod loader;
pub mod model;
pub mod summarize;
