/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RentalDataset (sorted by date)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ RentalDataset │  Vec<RentalRecord>, date bounds
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌────────────┐
///   │  filter   │ ───▶ │ aggregate  │  daily sums, seasonal means,
///   └──────────┘      └────────────┘  working-day box stats
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
