use serde::*;

/// A single filter criterion requested by the caller.
///
/// Flags come in pairs, one for each polarity of a [`FilterGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterFlag {
	#[serde(rename = "installed")] Installed,
	#[serde(rename = "~installed")] NotInstalled,
	#[serde(rename = "gui")] Gui,
	#[serde(rename = "~gui")] NotGui,
	#[serde(rename = "devel")] Development,
	#[serde(rename = "~devel")] NotDevelopment,
	#[serde(rename = "free")] Free,
	#[serde(rename = "~free")] NotFree,
	#[serde(rename = "arch")] Arch,
	#[serde(rename = "~arch")] NotArch,
}

/// The property of a package a [`FilterFlag`] tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterGroup {
	Installed,
	Gui,
	Development,
	Free,
	Arch,
}

impl FilterFlag {
	pub const ALL: [FilterFlag; 10] = [
		FilterFlag::Installed,
		FilterFlag::NotInstalled,
		FilterFlag::Gui,
		FilterFlag::NotGui,
		FilterFlag::Development,
		FilterFlag::NotDevelopment,
		FilterFlag::Free,
		FilterFlag::NotFree,
		FilterFlag::Arch,
		FilterFlag::NotArch,
	];

	pub fn group(&self) -> FilterGroup {
		match self {
			FilterFlag::Installed | FilterFlag::NotInstalled => FilterGroup::Installed,
			FilterFlag::Gui | FilterFlag::NotGui => FilterGroup::Gui,
			FilterFlag::Development | FilterFlag::NotDevelopment => FilterGroup::Development,
			FilterFlag::Free | FilterFlag::NotFree => FilterGroup::Free,
			FilterFlag::Arch | FilterFlag::NotArch => FilterGroup::Arch,
		}
	}

	/// The predicate result a package needs for this flag to accept it.
	pub fn wants(&self) -> bool {
		matches!(self,
			FilterFlag::Installed
			| FilterFlag::Gui
			| FilterFlag::Development
			| FilterFlag::Free
			| FilterFlag::Arch
		)
	}

	/// The other flag of the same pair.
	pub fn negated(&self) -> FilterFlag {
		match self {
			FilterFlag::Installed => FilterFlag::NotInstalled,
			FilterFlag::NotInstalled => FilterFlag::Installed,
			FilterFlag::Gui => FilterFlag::NotGui,
			FilterFlag::NotGui => FilterFlag::Gui,
			FilterFlag::Development => FilterFlag::NotDevelopment,
			FilterFlag::NotDevelopment => FilterFlag::Development,
			FilterFlag::Free => FilterFlag::NotFree,
			FilterFlag::NotFree => FilterFlag::Free,
			FilterFlag::Arch => FilterFlag::NotArch,
			FilterFlag::NotArch => FilterFlag::Arch,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			FilterFlag::Installed => "installed",
			FilterFlag::NotInstalled => "~installed",
			FilterFlag::Gui => "gui",
			FilterFlag::NotGui => "~gui",
			FilterFlag::Development => "devel",
			FilterFlag::NotDevelopment => "~devel",
			FilterFlag::Free => "free",
			FilterFlag::NotFree => "~free",
			FilterFlag::Arch => "arch",
			FilterFlag::NotArch => "~arch",
		}
	}
}

impl std::fmt::Display for FilterFlag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for FilterFlag {
	type Err = crate::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		FilterFlag::ALL.iter()
			.find(|f| f.as_str() == s)
			.copied()
			.ok_or_else(|| crate::Error::InvalidFilter(s.to_string()))
	}
}
