/// Options controlling how filter requests are interpreted.
#[derive(Debug, Clone, Default)]
pub struct PkFilterOptions {
	reject_unknown_filters: bool,
}

impl PkFilterOptions {
	/// When `false` unknown filter tokens are skipped with a warning.
	pub fn reject_unknown_filters(&self) -> bool {
		self.reject_unknown_filters
	}
	pub fn set_reject_unknown_filters(&mut self, reject_unknown_filters: bool) {
		self.reject_unknown_filters = reject_unknown_filters;
	}
}
