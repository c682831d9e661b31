use pkfilter::{FilterList, PackageFilter, PkFilterOptions, ResultEntry};

mod listing;
use listing::{ListingInspector, ListingPackage};

fn main() {
	let mut opts;

	/* Parse console input */
	let parsed_options = {
		let args: Vec<String> = std::env::args().collect();

		opts = getopts::Options::new();
		opts.optflag( "h", "help",       "Show help");
		opts.optflag( "v", "verbose",    "Increased vebosity");
		opts.optopt(  "f", "filter",     "Filters to apply, e.g. \"installed;~devel\"", "FILTERS");
		opts.optopt(  "a", "arch",       "Machine architecture used by the arch filters", "ARCH");
		opts.optflag( "",  "strict",     "Fail on unknown filters instead of ignoring them");
		opts.optflag( "",  "dedup-names","Keep only the first package for each name");
		opts.optflag( "",  "json",       "Print results as JSON");
		opts.parsing_style(getopts::ParsingStyle::FloatingFrees);

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m)  => { m }
			Err(e) => { println!("Unable to parse options: {}", e); return }
		};

		if parsed_options.opt_present("h") {
			eprintln!("{}", opts.usage("Usage: pkfilter-terminal [options] INSTALLED.json [AVAILABLE.json]"));
			return;
		}

		parsed_options
	};

	{
		let mut logger = env_logger::Builder::from_default_env();
		if parsed_options.opt_present("v") {
			logger.filter_level(log::LevelFilter::Debug);
		}
		logger.init();
	}

	let filters = match parse_filters(parsed_options.opt_str("f").as_deref().unwrap_or("none"), parsed_options.opt_present("strict")) {
		Ok(f) => f,
		Err(e) => { log::error!("Failed to parse filters: {}", e); std::process::exit(2) }
	};

	let Some(installed_path) = parsed_options.free.first() else {
		log::error!("Installed listing not provided.");
		std::process::exit(2)
	};
	let available_path = parsed_options.free.get(1);

	let mut inspector = ListingInspector::new(parsed_options.opt_str("a").unwrap_or_else(|| std::env::consts::ARCH.to_string()));
	inspector.set_dedup_names(parsed_options.opt_present("dedup-names"));

	let results = match filter_listings(filters, inspector, installed_path, available_path) {
		Ok(r) => r,
		Err(e) => { log::error!("Failed to filter packages: {}", e); std::process::exit(1) }
	};

	if parsed_options.opt_present("json") {
		match serde_json::to_string_pretty(&results) {
			Ok(s) => println!("{}", s),
			Err(e) => { log::error!("Failed to serialize results: {}", e); std::process::exit(1) }
		}
	} else {
		for entry in &results {
			println!("{}\t{}", entry.origin, entry.package.id);
		}
	}
}

fn parse_filters(text: &str, strict: bool) -> Result<FilterList, Error> {
	let mut options = PkFilterOptions::default();
	options.set_reject_unknown_filters(strict);
	Ok(FilterList::from_text(text, &options)?)
}

/// Reads both listings and runs them through a [`PackageFilter`].
fn filter_listings(
	filters: FilterList,
	inspector: ListingInspector,
	installed_path: impl AsRef<std::path::Path>,
	available_path: Option<impl AsRef<std::path::Path>>,
) -> Result<Vec<ResultEntry<ListingPackage>>, Error> {
	log::info!("Filtering with `{}` for architecture {}", filters, inspector.machine_arch());

	let mut filter = PackageFilter::new(filters, inspector);
	filter.add_installed(listing::read_listing(installed_path)?);
	if let Some(path) = available_path {
		filter.add_available(listing::read_listing(path)?);
	}
	Ok(filter.post_process())
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("pkfilter error: {0}")]
	PkFilter(#[from] pkfilter::Error),
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
}
