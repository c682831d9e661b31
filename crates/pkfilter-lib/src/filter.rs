//! Filter flags and requests built from them.

mod flag;
pub use flag::FilterFlag;
pub use flag::FilterGroup;

mod list;
pub use list::FilterList;
