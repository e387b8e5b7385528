//! Built-in option table.
//!
//! Names, defaults and constraints of every setting. The three logging
//! options carry [`configure_logging`] so that routing follows them
//! immediately.

use std::sync::{Arc, LazyLock};

use phiconf_settings::{Schema, Setting, SettingValue, validators};

use crate::logging::{LEVEL_NAMES, configure_logging};

/// The schema shared by every registry built from this crate.
pub static SCHEMA: LazyLock<Arc<Schema>> = LazyLock::new(|| Arc::new(schema()));

fn level_values() -> Vec<SettingValue> {
	let mut values = vec![SettingValue::Null, SettingValue::from("")];
	values.extend(LEVEL_NAMES.iter().map(|&name| SettingValue::from(name)));
	values
}

fn table<const N: usize>(entries: [(&str, SettingValue); N]) -> SettingValue {
	SettingValue::Map(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

fn schema() -> Schema {
	Schema::new([
		// Approximations and theoretical options
		(
			"ASSUME_CUTS_CANNOT_CREATE_NEW_CONCEPTS",
			Setting::new(false).description(
				"Assume that making a cut never turns a reducible concept into an irreducible one. \
				 Faster, but results are not strictly accurate.",
			),
		),
		(
			"CUT_ONE_APPROXIMATION",
			Setting::new(false).description(
				"Only consider system cuts that sever the inputs or outputs of a single node. \
				 The restricted set grows linearly with system size instead of exponentially.",
			),
		),
		(
			"MEASURE",
			Setting::new("EMD").description(
				"Distance measure between repertoires and concepts. Asymmetric measures cannot \
				 be used for system-level integration.",
			),
		),
		(
			"PARTITION_TYPE",
			Setting::new("BI").values(["BI", "TRI", "ALL"]).description(
				"Partition scheme for mechanism-level integration: bipartitions, tripartitions \
				 (which also prefer the smallest purview on ties), or every partition.",
			),
		),
		(
			"PICK_SMALLEST_PURVIEW",
			Setting::new(false).description(
				"On ties between candidate partitions, pick the one with the smallest purview \
				 instead of the largest.",
			),
		),
		(
			"USE_SMALL_PHI_DIFFERENCE_FOR_CONSTELLATION_DISTANCE",
			Setting::new(false).description(
				"Measure constellation distance as the difference of summed small phi instead \
				 of the extended EMD.",
			),
		),
		(
			"SYSTEM_CUTS",
			Setting::new("3.0_STYLE")
				.values(["3.0_STYLE", "CONCEPT_STYLE"])
				.description("Use traditional 3.0 cuts or experimental concept-style system cuts."),
		),
		// System resources
		(
			"PARALLEL_CONCEPT_EVALUATION",
			Setting::new(false).description("Evaluate concepts in parallel when computing constellations."),
		),
		(
			"PARALLEL_CUT_EVALUATION",
			Setting::new(true).description(
				"Evaluate system cuts in parallel. Faster, but keeps more intermediate results \
				 in memory.",
			),
		),
		(
			"PARALLEL_COMPLEX_EVALUATION",
			Setting::new(false).description("Evaluate candidate systems in parallel when computing complexes."),
		),
		(
			"NUMBER_OF_CORES",
			Setting::new(-1).description(
				"CPU cores used for parallel evaluation. Negative values count back from the \
				 number of available cores; -1 uses all of them.",
			),
		),
		(
			"MAXIMUM_CACHE_MEMORY_PERCENTAGE",
			Setting::new(50)
				.validator(validators::int_range::<0, 100>)
				.description("Upper bound on the share of system memory the in-memory caches may use."),
		),
		// Caching
		(
			"CACHE_BIGMIPS",
			Setting::new(false).description("Cache system-level results and reuse them automatically."),
		),
		(
			"CACHE_POTENTIAL_PURVIEWS",
			Setting::new(true).description(
				"Cache the potential purviews of each mechanism. Saves repeated reducibility \
				 checks at the cost of memory.",
			),
		),
		(
			"CACHING_BACKEND",
			Setting::new("fs")
				.values(["fs", "db"])
				.description("Store precomputed results on the local filesystem ('fs') or in a database ('db')."),
		),
		(
			"FS_CACHE_VERBOSITY",
			Setting::new(0)
				.validator(validators::int_range::<0, 11>)
				.description("How much caching information the filesystem cache prints, from 0 to 11."),
		),
		(
			"FS_CACHE_DIRECTORY",
			Setting::new("__phi_cache__").description(
				"Directory of the filesystem cache, relative to the working directory. It can be \
				 copied to reuse results elsewhere.",
			),
		),
		(
			"MONGODB_CONFIG",
			Setting::new(table([
				("host", SettingValue::from("localhost")),
				("port", SettingValue::Int(27017)),
				("database_name", SettingValue::from("phi")),
				("collection_name", SettingValue::from("cache")),
			]))
			.validator(validators::map)
			.description("Connection settings for the database cache backend (only used when CACHING_BACKEND is 'db')."),
		),
		(
			"REDIS_CACHE",
			Setting::new(false).description("Use Redis to cache mechanism-level results."),
		),
		(
			"REDIS_CONFIG",
			Setting::new(table([
				("host", SettingValue::from("localhost")),
				("port", SettingValue::Int(6379)),
			]))
			.validator(validators::map)
			.description("Connection settings for the Redis cache."),
		),
		// Logging
		(
			"LOG_FILE",
			Setting::new("phiconf.log")
				.on_change(configure_logging)
				.description("Path of the log file."),
		),
		(
			"LOG_FILE_LEVEL",
			Setting::new("INFO")
				.values(level_values())
				.on_change(configure_logging)
				.description(
					"Minimum level written to the log file. Takes the same values as \
					 LOG_STDOUT_LEVEL; blank disables the file sink.",
				),
		),
		(
			"LOG_STDOUT_LEVEL",
			Setting::new("WARNING")
				.values(level_values())
				.on_change(configure_logging)
				.description(
					"Minimum level written to standard output: DEBUG, INFO, WARNING, ERROR or \
					 CRITICAL. DEBUG shows the most, CRITICAL only fatal errors; blank or null \
					 disables console logging.",
				),
		),
		(
			"LOG_CONFIG_ON_IMPORT",
			Setting::new(true).description(
				"Log the version and the full configuration during bootstrap. With a file level \
				 of INFO or lower the log file records which settings produced a result.",
			),
		),
		(
			"PROGRESS_BARS",
			Setting::new(true).description(
				"Show progress bars on the console. Consider disabling when iterating over many \
				 small computations.",
			),
		),
		(
			"REPR_VERBOSITY",
			Setting::new(2).values([0, 1, 2]).description(
				"Verbosity of debug representations: 0 for plain, 1 for readable without \
				 repertoires, 2 for readable with repertoires.",
			),
		),
		(
			"PRINT_FRACTIONS",
			Setting::new(true).description(
				"Print numbers as fractions when the denominator is small. Only applies when \
				 REPR_VERBOSITY is above 0.",
			),
		),
		// Numerical precision
		(
			"PRECISION",
			Setting::new(6).description(
				"Decimal places to which distance computations are trusted. Values below \
				 10^-PRECISION are treated as zero.",
			),
		),
		// Miscellaneous
		(
			"VALIDATE_SUBSYSTEM_STATES",
			Setting::new(true).description(
				"Check that a subsystem's state is reachable given its transition matrix. \
				 Disabling this can yield results for impossible states.",
			),
		),
		(
			"VALIDATE_CONDITIONAL_INDEPENDENCE",
			Setting::new(true).description("Check that a system's transition matrix is conditionally independent."),
		),
		(
			"SINGLE_MICRO_NODES_WITH_SELFLOOPS_HAVE_PHI",
			Setting::new(false).description(
				"Give single micro-node subsystems with a self-loop a non-zero value; otherwise \
				 their value is defined as zero.",
			),
		),
	])
}
