//! Package listings read from JSON files.

use serde::*;

/// One entry of a listing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPackage {
	pub id: String,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub installed: bool,
	#[serde(default)]
	pub devel: bool,
	#[serde(default)]
	pub gui: bool,
	#[serde(default = "default_free")]
	pub free: bool,
	#[serde(default = "default_arch")]
	pub arch: String,
}

fn default_free() -> bool {
	true
}

fn default_arch() -> String {
	"noarch".to_string()
}

/// Architectures that run on any machine.
const ANY_ARCH: [&str; 3] = ["noarch", "all", "any"];

/// Answers from the listing fields, comparing `arch` against the machine.
pub struct ListingInspector {
	machine_arch: String,
	dedup_names: bool,
}

impl ListingInspector {
	pub fn new(machine_arch: impl Into<String>) -> Self {
		Self { machine_arch: machine_arch.into(), dedup_names: false }
	}

	pub fn machine_arch(&self) -> &str {
		&self.machine_arch
	}

	/// When set only the first entry for each package name is kept.
	pub fn set_dedup_names(&mut self, dedup_names: bool) {
		self.dedup_names = dedup_names;
	}
}

impl pkfilter::PackageInspector<ListingPackage> for ListingInspector {
	type Id = String;

	fn identity(&self, package: &ListingPackage) -> String {
		package.id.clone()
	}

	fn name(&self, package: &ListingPackage) -> Option<String> {
		package.name.clone()
	}

	fn is_installed(&self, package: &ListingPackage) -> bool { package.installed }
	fn is_devel(&self, package: &ListingPackage) -> bool { package.devel }
	fn is_gui(&self, package: &ListingPackage) -> bool { package.gui }
	fn is_free(&self, package: &ListingPackage) -> bool { package.free }

	fn is_same_arch(&self, package: &ListingPackage) -> bool {
		package.arch == self.machine_arch || ANY_ARCH.contains(&package.arch.as_str())
	}

	fn post_process(&self, results: Vec<pkfilter::ResultEntry<ListingPackage>>) -> Vec<pkfilter::ResultEntry<ListingPackage>> {
		if self.dedup_names {
			pkfilter::accumulator::dedup_by_name(results, self)
		} else {
			results
		}
	}
}

/// Reads a JSON array of [`ListingPackage`]s from `path`.
pub fn read_listing(path: impl AsRef<std::path::Path>) -> Result<Vec<ListingPackage>, crate::Error> {
	let path = path.as_ref();
	log::debug!("Reading listing {}", path.display());
	let f = std::fs::File::open(path)?;
	let packages = serde_json::from_reader(std::io::BufReader::new(f))?;
	Ok(packages)
}
