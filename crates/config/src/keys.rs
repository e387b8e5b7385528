//! Typed handles for built-in settings.

use phiconf_settings::{SettingKey, SettingValue};

pub const ASSUME_CUTS_CANNOT_CREATE_NEW_CONCEPTS: SettingKey<bool> =
	SettingKey::new("ASSUME_CUTS_CANNOT_CREATE_NEW_CONCEPTS");
pub const CUT_ONE_APPROXIMATION: SettingKey<bool> = SettingKey::new("CUT_ONE_APPROXIMATION");
pub const MEASURE: SettingKey<String> = SettingKey::new("MEASURE");
pub const PARTITION_TYPE: SettingKey<String> = SettingKey::new("PARTITION_TYPE");
pub const PICK_SMALLEST_PURVIEW: SettingKey<bool> = SettingKey::new("PICK_SMALLEST_PURVIEW");
pub const USE_SMALL_PHI_DIFFERENCE_FOR_CONSTELLATION_DISTANCE: SettingKey<bool> =
	SettingKey::new("USE_SMALL_PHI_DIFFERENCE_FOR_CONSTELLATION_DISTANCE");
pub const SYSTEM_CUTS: SettingKey<String> = SettingKey::new("SYSTEM_CUTS");

pub const PARALLEL_CONCEPT_EVALUATION: SettingKey<bool> = SettingKey::new("PARALLEL_CONCEPT_EVALUATION");
pub const PARALLEL_CUT_EVALUATION: SettingKey<bool> = SettingKey::new("PARALLEL_CUT_EVALUATION");
pub const PARALLEL_COMPLEX_EVALUATION: SettingKey<bool> = SettingKey::new("PARALLEL_COMPLEX_EVALUATION");
pub const NUMBER_OF_CORES: SettingKey<i64> = SettingKey::new("NUMBER_OF_CORES");
pub const MAXIMUM_CACHE_MEMORY_PERCENTAGE: SettingKey<i64> = SettingKey::new("MAXIMUM_CACHE_MEMORY_PERCENTAGE");

pub const CACHE_BIGMIPS: SettingKey<bool> = SettingKey::new("CACHE_BIGMIPS");
pub const CACHE_POTENTIAL_PURVIEWS: SettingKey<bool> = SettingKey::new("CACHE_POTENTIAL_PURVIEWS");
pub const CACHING_BACKEND: SettingKey<String> = SettingKey::new("CACHING_BACKEND");
pub const FS_CACHE_VERBOSITY: SettingKey<i64> = SettingKey::new("FS_CACHE_VERBOSITY");
pub const FS_CACHE_DIRECTORY: SettingKey<String> = SettingKey::new("FS_CACHE_DIRECTORY");
pub const MONGODB_CONFIG: SettingKey<SettingValue> = SettingKey::new("MONGODB_CONFIG");
pub const REDIS_CACHE: SettingKey<bool> = SettingKey::new("REDIS_CACHE");
pub const REDIS_CONFIG: SettingKey<SettingValue> = SettingKey::new("REDIS_CONFIG");

pub const LOG_FILE: SettingKey<String> = SettingKey::new("LOG_FILE");
pub const LOG_FILE_LEVEL: SettingKey<Option<String>> = SettingKey::new("LOG_FILE_LEVEL");
pub const LOG_STDOUT_LEVEL: SettingKey<Option<String>> = SettingKey::new("LOG_STDOUT_LEVEL");
pub const LOG_CONFIG_ON_IMPORT: SettingKey<bool> = SettingKey::new("LOG_CONFIG_ON_IMPORT");
pub const PROGRESS_BARS: SettingKey<bool> = SettingKey::new("PROGRESS_BARS");
pub const REPR_VERBOSITY: SettingKey<i64> = SettingKey::new("REPR_VERBOSITY");
pub const PRINT_FRACTIONS: SettingKey<bool> = SettingKey::new("PRINT_FRACTIONS");

pub const PRECISION: SettingKey<i64> = SettingKey::new("PRECISION");

pub const VALIDATE_SUBSYSTEM_STATES: SettingKey<bool> = SettingKey::new("VALIDATE_SUBSYSTEM_STATES");
pub const VALIDATE_CONDITIONAL_INDEPENDENCE: SettingKey<bool> =
	SettingKey::new("VALIDATE_CONDITIONAL_INDEPENDENCE");
pub const SINGLE_MICRO_NODES_WITH_SELFLOOPS_HAVE_PHI: SettingKey<bool> =
	SettingKey::new("SINGLE_MICRO_NODES_WITH_SELFLOOPS_HAVE_PHI");
