use super::*;

/// Get the current configuration.
pub fn build_config() -> Result<MasterConfig, Box<dyn Error>> {
    build_config_with(real_filesystem(), std::env::args().collect())
}

/// Defaults, then the TOML file (if there is one), then command line arguments. Later sources
/// override earlier ones.
pub fn build_config_with(fs: Filesystem, args: Vec<String>) -> Result<MasterConfig, Box<dyn Error>> {
    let mut builder = ConfigBuilder::new(config_entries())?;
    if let Some(contents) = fs.read_if_present(DEFAULT_TOML_PATH)? {
        load_toml(DEFAULT_TOML_PATH, &contents, &mut builder)?;
    }
    parse_args(&mut builder, args)?;
    let mut conf = MasterConfig::default();
    builder.apply_to(&mut conf)?;
    Ok(conf)
}
