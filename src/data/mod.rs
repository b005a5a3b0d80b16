/// Data layer: core types, loading, splitting and writing.
///
/// Architecture:
/// ```text
///   candidate paths
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  first existing file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  header + rows, verbatim cell text
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  split    │  seeded shuffle → (train, test)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  data.csv / train.csv / test.csv
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod split;
pub mod writer;
