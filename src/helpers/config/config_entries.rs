use super::*;

/// These entries will be applied in order of returned vec (NOT in the order the user specifies the entry). All entries
/// Will always be applied.
pub fn config_entries() -> Vec<Box<dyn ConfigEntry>> {
    // We concat! long strings so the vec can be formatted by rustfmt (see https://github.com/rust-lang/rustfmt/issues/3863)
    vec![
        <dyn ConfigEntry>::new_bool(
            "help",
            "show this help message and exit",
            false,
            |conf, show_help, _| {
                if show_help {
                    println!("{}", help_message(&config_entries()));
                    conf.happy_exit = true;
                }
                Ok(())
            },
        ),
        <dyn ConfigEntry>::new_float(
            "max_game_seconds",
            "seconds to run the game before exiting, or 0 to run until process is killed",
            60.0 * 60.0,
            |conf, time, source| {
                if time > 0.0 {
                    conf.max_game_time = Some(time);
                    Ok(())
                } else if time == 0.0 {
                    conf.max_game_time = None;
                    Ok(())
                } else {
                    Err(format!("{} should not be negative", source.unwrap_or("default")).into())
                }
            },
        ),
        <dyn ConfigEntry>::new_float(
            "tick_seconds",
            concat!(
                "real time each simulation tick takes, the simulation assumes ",
                "0.1 so other values speed it up or slow it down"
            ),
            1.0 / Ticks::FREQUENCY_HZ as f64,
            |conf, seconds, source| {
                if seconds > 0.0 {
                    conf.tick_seconds = seconds;
                    Ok(())
                } else {
                    Err(format!("{} should be greater than 0", source.unwrap_or("default")).into())
                }
            },
        ),
        <dyn ConfigEntry>::new_enum(
            "extension",
            "how per-entity extension state is stored",
            vec![
                <dyn ConfigEntry>::new_enum_variant(
                    "sharing",
                    "entities alias their type's initial state until they first write to it",
                    |conf, _| conf.extension_strategy = ExtensionStrategy::Sharing,
                ),
                <dyn ConfigEntry>::new_enum_variant(
                    "exclusive",
                    "every entity always owns its state, each write path copies it",
                    |conf, _| conf.extension_strategy = ExtensionStrategy::Exclusive,
                ),
            ],
        ),
        <dyn ConfigEntry>::new_string(
            "entity_types_path",
            "path to the TOML file that defines entity types",
            DEFAULT_TYPES_PATH,
            |conf, path, source| {
                if path.is_empty() {
                    Err(format!("{} is empty", source.unwrap_or("default")).into())
                } else {
                    conf.entity_types_path = path;
                    Ok(())
                }
            },
        ),
        <dyn ConfigEntry>::new_int(
            "bot_count",
            "number of bot controlled entities to spawn",
            12,
            |conf, count, source| {
                if count >= 0 {
                    conf.bot_count = count as usize;
                    Ok(())
                } else {
                    Err(format!("{} should not be negative", source.unwrap_or("default")).into())
                }
            },
        ),
    ]
}

pub fn help_message(entries: &[Box<dyn ConfigEntry>]) -> String {
    let mut message = String::from("flotilla-server options (set in flotilla.toml or as --option value):");
    for entry in entries {
        message.push_str(&format!("\n--{}\n  {}", entry.name(), entry.help()));
    }
    message
}
