//! The backend capability used to question packages.

use crate::accumulator::ResultEntry;
use crate::filter::FilterGroup;

/// Answers questions about packages of type `P` for a specific backend.
///
/// Only [`identity`](PackageInspector::identity) is required, every predicate defaults to `true`.
/// A backend that doesn't override the predicates accepts every package for every flag.
pub trait PackageInspector<P> {
	/// Key used to recognise the same package in the installed and available sets.
	type Id: Eq + std::hash::Hash + Clone + std::fmt::Debug;

	fn identity(&self, package: &P) -> Self::Id;

	/// Name used when removing duplicates across providers.
	fn name(&self, _package: &P) -> Option<String> {
		None
	}

	fn is_installed(&self, _package: &P) -> bool {
		true
	}

	fn is_devel(&self, _package: &P) -> bool {
		true
	}

	/// If the package is a GUI program.
	fn is_gui(&self, _package: &P) -> bool {
		true
	}

	/// If the package is free software.
	fn is_free(&self, _package: &P) -> bool {
		true
	}

	/// If the package is built for the same architecture as the machine.
	fn is_same_arch(&self, _package: &P) -> bool {
		true
	}

	/// Evaluates the predicate belonging to `group`.
	fn check(&self, group: FilterGroup, package: &P) -> bool {
		match group {
			FilterGroup::Installed => self.is_installed(package),
			FilterGroup::Gui => self.is_gui(package),
			FilterGroup::Development => self.is_devel(package),
			FilterGroup::Free => self.is_free(package),
			FilterGroup::Arch => self.is_same_arch(package),
		}
	}

	/// Filtering that can only be done on the complete result list.
	///
	/// The default returns `results` untouched.
	fn post_process(&self, results: Vec<ResultEntry<P>>) -> Vec<ResultEntry<P>> {
		results
	}
}

impl<P, T> PackageInspector<P> for &T
where
	T: PackageInspector<P> + ?Sized,
{
	type Id = T::Id;

	fn identity(&self, package: &P) -> Self::Id { (**self).identity(package) }
	fn name(&self, package: &P) -> Option<String> { (**self).name(package) }
	fn is_installed(&self, package: &P) -> bool { (**self).is_installed(package) }
	fn is_devel(&self, package: &P) -> bool { (**self).is_devel(package) }
	fn is_gui(&self, package: &P) -> bool { (**self).is_gui(package) }
	fn is_free(&self, package: &P) -> bool { (**self).is_free(package) }
	fn is_same_arch(&self, package: &P) -> bool { (**self).is_same_arch(package) }
	fn check(&self, group: FilterGroup, package: &P) -> bool { (**self).check(group, package) }
	fn post_process(&self, results: Vec<ResultEntry<P>>) -> Vec<ResultEntry<P>> { (**self).post_process(results) }
}

/// Stand-in inspector that knows nothing about packages.
///
/// Every predicate is `true` and every package has the same identity, so once anything
/// is added as installed all available packages are suppressed. Not for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveInspector;

impl<P> PackageInspector<P> for PermissiveInspector {
	type Id = ();

	fn identity(&self, _package: &P) -> Self::Id {}
}
