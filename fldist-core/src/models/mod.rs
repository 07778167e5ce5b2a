pub mod distribution;
pub mod format;
pub mod table;

// re-export for cleaner imports
pub use self::distribution::LengthDistribution;
pub use self::format::SourceFormat;
pub use self::table::{FragmentLength, LengthFrequencyTable, RawCountAccumulator};
