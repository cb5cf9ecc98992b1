use anyhow::Result;

use crate::config::{ConfigFile, ConfigManager, DEFAULT_SOURCE, ResolveOptions, resolve_config};
use crate::translation::{Backend, DEFAULT_DELAY, DEFAULT_RETRIES};
use crate::ui::Style;

/// Prints the config file location and the defaults a run would use.
pub fn show_config() -> Result<()> {
    let manager = ConfigManager::new()?;
    let path = manager.config_path();
    let config = manager.load_or_default()?;

    let state = if path.exists() {
        String::new()
    } else {
        format!(" {}", Style::hint("(not found, using built-in defaults)"))
    };

    println!("{}", Style::header("Configuration"));
    println!("  {:12} {}{state}", Style::label("file"), Style::path(path.display()));
    println!();

    for (key, value) in effective_defaults(&config) {
        let value = value.map_or_else(|| Style::hint("(not set)"), Style::value);
        println!("  {:12} {value}", Style::label(key));
    }

    Ok(())
}

fn effective_defaults(config: &ConfigFile) -> Vec<(&'static str, Option<String>)> {
    let defaults = &config.defaults;
    let target = resolve_config(&ResolveOptions::default(), config)
        .ok()
        .map(|resolved| resolved.target);

    vec![
        (
            "source",
            Some(defaults.source.clone().unwrap_or_else(|| DEFAULT_SOURCE.to_string())),
        ),
        ("target", target),
        (
            "translator",
            Some(defaults.translator.unwrap_or(Backend::Google).to_string()),
        ),
        (
            "delay",
            Some(format!(
                "{}s",
                defaults.delay.unwrap_or(DEFAULT_DELAY.as_secs())
            )),
        ),
        (
            "retries",
            Some(defaults.retries.unwrap_or(DEFAULT_RETRIES).to_string()),
        ),
        ("email", config.mymemory.email.clone()),
    ]
}
