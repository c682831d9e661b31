//! Various helpers for testing
//!
//! functions in this module should use results and not use any panics to avoid confusion in callers

use pkfilter::PackageInspector;

/// A package with every property spelled out.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FakePackage {
	pub id: String,
	pub name: Option<String>,
	pub installed: bool,
	pub devel: bool,
	pub gui: bool,
	pub free: bool,
	pub same_arch: bool,
}

impl FakePackage {
	/// A free package for the machine's architecture with no other properties.
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			free: true,
			same_arch: true,
			..Default::default()
		}
	}

	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}
	pub fn installed(mut self, installed: bool) -> Self {
		self.installed = installed;
		self
	}
	pub fn devel(mut self, devel: bool) -> Self {
		self.devel = devel;
		self
	}
	pub fn gui(mut self, gui: bool) -> Self {
		self.gui = gui;
		self
	}
	pub fn free(mut self, free: bool) -> Self {
		self.free = free;
		self
	}
	pub fn same_arch(mut self, same_arch: bool) -> Self {
		self.same_arch = same_arch;
		self
	}
}

/// Reads the fields straight off a [`FakePackage`].
///
/// Counts predicate calls so tests can check how much work filtering did.
#[derive(Debug, Default)]
pub struct FakeInspector {
	calls: std::cell::Cell<usize>,
	dedup_names: bool,
}

impl FakeInspector {
	pub fn new() -> Self {
		Self::default()
	}

	/// An inspector whose post-processing keeps one entry per name.
	pub fn deduplicating_names() -> Self {
		Self { dedup_names: true, ..Default::default() }
	}

	/// Number of predicate calls made so far.
	pub fn calls(&self) -> usize {
		self.calls.get()
	}

	fn answer(&self, value: bool) -> bool {
		self.calls.set(self.calls.get() + 1);
		value
	}
}

impl PackageInspector<FakePackage> for FakeInspector {
	type Id = String;

	fn identity(&self, package: &FakePackage) -> String {
		package.id.clone()
	}

	fn name(&self, package: &FakePackage) -> Option<String> {
		package.name.clone()
	}

	fn is_installed(&self, package: &FakePackage) -> bool { self.answer(package.installed) }
	fn is_devel(&self, package: &FakePackage) -> bool { self.answer(package.devel) }
	fn is_gui(&self, package: &FakePackage) -> bool { self.answer(package.gui) }
	fn is_free(&self, package: &FakePackage) -> bool { self.answer(package.free) }
	fn is_same_arch(&self, package: &FakePackage) -> bool { self.answer(package.same_arch) }

	fn post_process(&self, results: Vec<pkfilter::ResultEntry<FakePackage>>) -> Vec<pkfilter::ResultEntry<FakePackage>> {
		if self.dedup_names {
			pkfilter::accumulator::dedup_by_name(results, self)
		} else {
			results
		}
	}
}

/// Reads a JSON array of [`FakePackage`]s, missing fields take their default.
pub fn packages_from_json(json: &str) -> Result<Vec<FakePackage>, serde_json::Error> {
	serde_json::from_str(json)
}

/// Gets the ids and origins of a result list, which is what most assertions need.
pub fn summarize(results: &[pkfilter::ResultEntry<FakePackage>]) -> Vec<(String, pkfilter::Origin)> {
	results.iter().map(|e| (e.package.id.clone(), e.origin.clone())).collect()
}
