// Core configuration types
mod core;
mod loader;
pub mod presets;

pub use self::core::{
    default_max, default_max_fraction_digits, default_max_integer_digits, default_min,
    BmiScaleConfig, InputLimits, RangeLimits, MAX_FRACTION_DIGITS_LIMIT,
};
pub use loader::{
    candidate_paths, directory_ancestors, load_config, load_config_file, load_config_from_dir,
    parse_and_validate_config, user_config_path, write_default_config, CONFIG_FILE_NAME,
};
pub use presets::PresetLevel;
