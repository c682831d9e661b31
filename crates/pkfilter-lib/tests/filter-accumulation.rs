use pkfilter::{FilterFlag, FilterList, Origin, PackageFilter, PkFilterOptions};
use pkfilter_test_utils::{FakeInspector, FakePackage, summarize};

fn init() {
	let _ = env_logger::builder().is_test(true).try_init();
}

fn flags(text: &str) -> FilterList {
	FilterList::from_text(text, &PkFilterOptions::default()).expect("default options never reject")
}

#[test]
fn no_filters_accept_everything() {
	init();
	let inspector = FakeInspector::new();
	let mut filter = PackageFilter::new(FilterList::new(), &inspector);
	filter.add_installed([FakePackage::new("a").installed(true).devel(true)]);
	filter.add_available([FakePackage::new("b").free(false).same_arch(false), FakePackage::new("c").gui(true)]);
	assert_eq!(filter.len(), 3);
	assert_eq!(inspector.calls(), 0);
}

#[test]
fn installed_wins_over_available_duplicate() {
	init();
	let mut filter = PackageFilter::new(FilterList::new(), FakeInspector::new());
	filter.add_installed([FakePackage::new("vim;9.0;x86_64").installed(true)]);
	filter.add_available([FakePackage::new("vim;9.0;x86_64"), FakePackage::new("nano;7.2;x86_64")]);
	assert_eq!(summarize(&filter.post_process()), vec![
		("vim;9.0;x86_64".to_string(), Origin::Installed),
		("nano;7.2;x86_64".to_string(), Origin::Available),
	]);
}

#[test]
fn installed_come_first_in_input_order() {
	init();
	let mut filter = PackageFilter::new(FilterList::new(), FakeInspector::new());
	filter.add_installed([FakePackage::new("z"), FakePackage::new("m")]);
	filter.add_available([FakePackage::new("b"), FakePackage::new("m"), FakePackage::new("a")]);
	filter.add_custom(FakePackage::new("c"), Origin::Custom("blocked".to_string()));
	let ids: Vec<_> = filter.results().iter().map(|e| e.package.id.as_str()).collect();
	assert_eq!(ids, vec!["z", "m", "b", "a", "c"]);
}

#[test]
fn not_development_example() {
	init();
	let mut filter = PackageFilter::new(flags("~devel"), FakeInspector::new());
	filter.add_installed([FakePackage::new("pkgA").installed(true)]);
	filter.add_available([FakePackage::new("pkgA"), FakePackage::new("pkgB").devel(true)]);
	assert_eq!(summarize(&filter.post_process()), vec![("pkgA".to_string(), Origin::Installed)]);
}

#[test]
fn contradictory_pair_rejects_everything() {
	init();
	let mut filter = PackageFilter::new(flags("installed;~installed"), FakeInspector::new());
	filter.add_installed([FakePackage::new("a").installed(true)]);
	filter.add_available([FakePackage::new("b").installed(false)]);
	assert!(filter.is_empty());
}

#[test]
fn every_group_filters_in_both_directions() {
	init();
	let packages = vec![
		FakePackage::new("all").installed(true).gui(true).devel(true).free(true).same_arch(true),
		FakePackage::new("none").installed(false).gui(false).devel(false).free(false).same_arch(false),
	];
	for flag in FilterFlag::ALL {
		let filters: FilterList = [flag].into_iter().collect();
		let mut filter = PackageFilter::new(filters, FakeInspector::new());
		filter.add_available(packages.clone());
		let expected = if flag.wants() { "all" } else { "none" };
		let ids: Vec<_> = filter.results().iter().map(|e| e.package.id.as_str()).collect();
		assert_eq!(ids, vec![expected], "filter {}", flag);
	}
}

#[test]
fn rejection_stops_at_first_failing_flag() {
	init();
	let inspector = FakeInspector::new();
	let filter = PackageFilter::new(flags("gui;free;arch;devel"), &inspector);
	assert!(!filter.pre_process(&FakePackage::new("cli").gui(false)));
	assert_eq!(inspector.calls(), 1);
	assert!(!filter.pre_process(&FakePackage::new("tool").gui(true).devel(false)));
	assert_eq!(inspector.calls(), 5);
}

#[test]
fn unknown_tokens_impose_no_constraint() {
	init();
	let mut filter = PackageFilter::new(flags("visible;newest;gui"), FakeInspector::new());
	assert_eq!(filter.filters().to_text(), "gui");
	filter.add_available([FakePackage::new("a").gui(true), FakePackage::new("b")]);
	assert_eq!(filter.len(), 1);
}

#[test]
fn post_process_hook_dedups_names() {
	init();
	let mut filter = PackageFilter::new(flags("none"), FakeInspector::deduplicating_names());
	filter.add_installed([FakePackage::new("firefox;128;x86_64").named("firefox")]);
	filter.add_available([
		FakePackage::new("firefox;130;x86_64").named("firefox"),
		FakePackage::new("blob;1;x86_64"),
		FakePackage::new("blob;2;x86_64"),
	]);
	assert_eq!(filter.len(), 4);
	let ids: Vec<_> = filter.post_process().into_iter().map(|e| e.package.id).collect();
	assert_eq!(ids, vec!["firefox;128;x86_64", "blob;1;x86_64", "blob;2;x86_64"]);
}

#[test]
fn packages_from_json_listing() {
	init();
	let installed = pkfilter_test_utils::packages_from_json(r#"[{"id": "gimp", "installed": true, "gui": true, "free": true, "same_arch": true}]"#).unwrap();
	let available = pkfilter_test_utils::packages_from_json(r#"[{"id": "gimp"}, {"id": "steam", "gui": true, "same_arch": true}]"#).unwrap();
	let mut filter = PackageFilter::new(flags("gui;~free"), FakeInspector::new());
	filter.add_installed(installed);
	filter.add_available(available);
	assert_eq!(summarize(filter.results()), vec![("steam".to_string(), Origin::Available)]);
}
