pub mod error;
pub use error::Result;
pub use error::Error;

pub mod filter;
pub use filter::FilterFlag;
pub use filter::FilterList;

pub mod config;
pub use config::PkFilterOptions;

pub mod inspector;
pub use inspector::PackageInspector;
pub use inspector::PermissiveInspector;

pub mod accumulator;
pub use accumulator::PackageFilter;
pub use accumulator::ResultEntry;
pub use accumulator::Origin;

pub mod iterator;
pub use iterator::FilterMatchesExt;
