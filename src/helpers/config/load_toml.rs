use super::*;

pub const DEFAULT_TOML_PATH: &str = "flotilla.toml";

/// Sets an entry for every top level key. `path` is only used in messages.
pub fn load_toml(
    path: &str,
    contents: &str,
    builder: &mut ConfigBuilder,
) -> Result<(), Box<dyn Error>> {
    let table = match contents.parse::<toml::Value>()? {
        toml::Value::Table(table) => table,
        _ => return Err(format!("toplevel value of {} is not a table", path).into()),
    };
    for (name, value) in table {
        builder
            .entry(&name)
            .ok_or_else(|| format!("{} is not a valid option in {}", name, path))?
            .set_toml(value, format!("{} in {}", name, path))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ConfigBuilder {
        ConfigBuilder::new(config_entries()).unwrap()
    }

    #[test]
    fn sets_every_key() {
        let mut builder = builder();
        load_toml("a.toml", "bot_count = 3\nextension = \"exclusive\"", &mut builder).unwrap();
        let mut conf = MasterConfig::default();
        builder.apply_to(&mut conf).unwrap();
        assert_eq!(conf.bot_count, 3);
        assert_eq!(conf.extension_strategy, ExtensionStrategy::Exclusive);
    }

    #[test]
    fn bad_values_and_syntax_are_errors() {
        assert!(load_toml("a.toml", "bot_count = [1, 2]", &mut builder()).is_err());
        assert!(load_toml("a.toml", "not toml at all", &mut builder()).is_err());
    }
}
