use serde::*;

use super::FilterFlag;
use crate::inspector::PackageInspector;

/// An ordered set of requested [`FilterFlag`]s.
///
/// Insertion order is kept, inserting a flag that is already present does nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<FilterFlag>", into = "Vec<FilterFlag>")]
pub struct FilterList {
	flags: Vec<FilterFlag>,
}

impl FilterList {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a `;` separated request such as `installed;~devel`.
	///
	/// Empty tokens and `none` are skipped. Unknown tokens are skipped with a warning
	/// unless [`reject_unknown_filters`](crate::PkFilterOptions::reject_unknown_filters) is set.
	/// # Errors
	/// - [`InvalidFilter`](crate::Error::InvalidFilter) for the first unknown token when rejecting.
	pub fn from_text(text: &str, options: &crate::PkFilterOptions) -> crate::Result<Self> {
		let mut list = Self::new();
		for token in text.split(';').map(str::trim) {
			if token.is_empty() || token == "none" {
				continue;
			}
			match token.parse::<FilterFlag>() {
				Ok(flag) => { list.insert(flag); },
				Err(e) => {
					if options.reject_unknown_filters() {
						return Err(e)
					}
					log::warn!("Ignoring unknown filter `{}`", token);
				}
			}
		}
		Ok(list)
	}

	/// Returns `false` when the flag was already present.
	pub fn insert(&mut self, flag: FilterFlag) -> bool {
		if self.flags.contains(&flag) {
			false
		} else {
			self.flags.push(flag);
			true
		}
	}

	pub fn contains(&self, flag: FilterFlag) -> bool {
		self.flags.contains(&flag)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, FilterFlag> {
		self.flags.iter()
	}

	pub fn len(&self) -> usize {
		self.flags.len()
	}

	pub fn is_empty(&self) -> bool {
		self.flags.is_empty()
	}

	/// Checks if both flags of any pair were requested, such a list accepts nothing.
	pub fn is_contradictory(&self) -> bool {
		self.flags.iter().any(|f| self.contains(f.negated()))
	}

	/// Finds the first flag, in request order, that `package` fails.
	///
	/// Flags after the failing one are not evaluated.
	pub fn first_rejecting<P, I>(&self, inspector: &I, package: &P) -> Option<FilterFlag>
	where
		I: PackageInspector<P> + ?Sized,
	{
		self.flags.iter()
			.find(|f| inspector.check(f.group(), package) != f.wants())
			.copied()
	}

	/// Checks `package` against every flag. An empty list accepts everything.
	pub fn matches<P, I>(&self, inspector: &I, package: &P) -> bool
	where
		I: PackageInspector<P> + ?Sized,
	{
		self.first_rejecting(inspector, package).is_none()
	}

	/// Formats the list back into request text, `none` when empty.
	pub fn to_text(&self) -> String {
		if self.flags.is_empty() {
			return "none".to_string()
		}
		self.flags.iter().map(FilterFlag::as_str).collect::<Vec<_>>().join(";")
	}
}

impl std::fmt::Display for FilterList {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_text())
	}
}

impl FromIterator<FilterFlag> for FilterList {
	fn from_iter<T: IntoIterator<Item = FilterFlag>>(iter: T) -> Self {
		let mut list = Self::new();
		for flag in iter {
			list.insert(flag);
		}
		list
	}
}

impl From<Vec<FilterFlag>> for FilterList {
	fn from(value: Vec<FilterFlag>) -> Self {
		value.into_iter().collect()
	}
}

impl From<FilterList> for Vec<FilterFlag> {
	fn from(value: FilterList) -> Self {
		value.flags
	}
}

impl<'a> IntoIterator for &'a FilterList {
	type Item = &'a FilterFlag;
	type IntoIter = std::slice::Iter<'a, FilterFlag>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
