//! Accumulation of filtered installed and available packages.

use std::collections::{HashMap, HashSet};
use serde::*;

use crate::filter::FilterList;
use crate::inspector::PackageInspector;

/// Why a package ended up in the results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
	Installed,
	Available,
	/// Added on its own with caller supplied info.
	Custom(String),
}

impl std::fmt::Display for Origin {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Origin::Installed => f.write_str("installed"),
			Origin::Available => f.write_str("available"),
			Origin::Custom(info) => f.write_str(info),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry<P> {
	pub package: P,
	pub origin: Origin,
}

/// Collects packages that pass a [`FilterList`].
///
/// Installed packages must be added before available ones, an available package is only
/// suppressed by installed packages that were added earlier.
/// The filter is read with [`post_process()`](PackageFilter::post_process) and consumed.
pub struct PackageFilter<P, I>
where
	I: PackageInspector<P>,
{
	filters: FilterList,
	inspector: I,
	results: Vec<ResultEntry<P>>,
	installed: HashMap<I::Id, P>,
}

impl<P, I> PackageFilter<P, I>
where
	P: Clone,
	I: PackageInspector<P>,
{
	pub fn new(filters: FilterList, inspector: I) -> Self {
		if filters.is_contradictory() {
			log::debug!("Filter `{}` requests both sides of a pair, nothing will match", filters);
		}
		Self {
			filters,
			inspector,
			results: Vec::new(),
			installed: HashMap::new(),
		}
	}

	/// Adds packages that are already installed.
	///
	/// Every package is indexed by identity even when the filters reject it, so its
	/// available counterpart is still suppressed later.
	pub fn add_installed(&mut self, packages: impl IntoIterator<Item = P>) {
		let mut seen = 0usize;
		let mut added = 0usize;
		for package in packages {
			seen += 1;
			let id = self.inspector.identity(&package);
			if self.pre_process(&package) {
				self.results.push(ResultEntry { package: package.clone(), origin: Origin::Installed });
				added += 1;
			}
			self.installed.insert(id, package);
		}
		log::debug!("Added {} of {} installed packages", added, seen);
	}

	/// Adds packages that are available, skipping any already seen as installed.
	pub fn add_available(&mut self, packages: impl IntoIterator<Item = P>) {
		let mut seen = 0usize;
		let mut added = 0usize;
		for package in packages {
			seen += 1;
			let id = self.inspector.identity(&package);
			if self.installed.contains_key(&id) {
				log::trace!("Package {:?} is installed, skipping available copy", id);
				continue;
			}
			if self.pre_process(&package) {
				self.results.push(ResultEntry { package, origin: Origin::Available });
				added += 1;
			}
		}
		log::debug!("Added {} of {} available packages", added, seen);
	}

	/// Adds a single package with its own origin.
	///
	/// Returns if the package was added.
	pub fn add_custom(&mut self, package: P, origin: Origin) -> bool {
		let id = self.inspector.identity(&package);
		if self.installed.contains_key(&id) {
			log::trace!("Package {:?} is installed, skipping {} copy", id, origin);
			return false
		}
		if self.pre_process(&package) {
			self.results.push(ResultEntry { package, origin });
			true
		} else {
			false
		}
	}

	/// Checks a package against the requested filters, stopping at the first failing one.
	pub fn pre_process(&self, package: &P) -> bool {
		match self.filters.first_rejecting(&self.inspector, package) {
			Some(flag) => {
				if log::log_enabled!(log::Level::Trace) {
					log::trace!("Package {:?} rejected by filter `{}`", self.inspector.identity(package), flag);
				}
				false
			}
			None => true,
		}
	}

	/// Finishes the filter, giving the inspector a last pass over the results.
	pub fn post_process(self) -> Vec<ResultEntry<P>> {
		self.inspector.post_process(self.results)
	}

	pub fn filters(&self) -> &FilterList {
		&self.filters
	}

	pub fn inspector(&self) -> &I {
		&self.inspector
	}

	/// Results gathered so far, before post-processing.
	pub fn results(&self) -> &[ResultEntry<P>] {
		&self.results
	}

	pub fn len(&self) -> usize {
		self.results.len()
	}

	pub fn is_empty(&self) -> bool {
		self.results.is_empty()
	}

	/// The installed package recorded under `id`, filtered out or not.
	pub fn installed(&self, id: &I::Id) -> Option<&P> {
		self.installed.get(id)
	}
}

/// Keeps the first entry for each name reported by [`PackageInspector::name`].
///
/// Entries without a name are always kept. Meant to be called from an inspector's
/// [`post_process`](PackageInspector::post_process).
pub fn dedup_by_name<P, I>(results: Vec<ResultEntry<P>>, inspector: &I) -> Vec<ResultEntry<P>>
where
	I: PackageInspector<P> + ?Sized,
{
	let mut names = HashSet::<String>::new();
	results.into_iter()
		.filter(|entry| match inspector.name(&entry.package) {
			Some(name) => names.insert(name),
			None => true,
		})
		.collect()
}
