use crate::filter::FilterList;
use crate::inspector::PackageInspector;

pub struct FilterMatches<'a, I, N>
where
	I: Iterator,
	N: PackageInspector<I::Item> + ?Sized,
{
	filters: &'a FilterList,
	inspector: &'a N,
	underlying: I,
}

impl<'a, I, N> Iterator for FilterMatches<'a, I, N>
where
	I: Iterator,
	N: PackageInspector<I::Item> + ?Sized,
{
	type Item = I::Item;

	fn next(&mut self) -> Option<Self::Item> {
		for package in self.underlying.by_ref() {
			if self.filters.matches(self.inspector, &package) {
				return Some(package)
			}
		}
		None
	}
}

pub trait FilterMatchesExt: Iterator {
	/// Filters the iterator to packages passing every flag in `filters`.
	///
	/// No deduplication is done, use [`PackageFilter`](crate::PackageFilter) for that.
	fn filter_matches<'a, N>(self, filters: &'a FilterList, inspector: &'a N) -> FilterMatches<'a, Self, N>
	where
		Self: Sized,
		N: PackageInspector<Self::Item> + ?Sized,
	{
		FilterMatches { filters, inspector, underlying: self }
	}
}

impl<I: Iterator> FilterMatchesExt for I {}
