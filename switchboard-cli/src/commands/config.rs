use crate::config::{ConfigLayer, ConfigLoader};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the merged configuration and the layers it came from
    Show,
    /// Show configuration file paths and whether each exists
    Path,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(),
        ConfigCommands::Path => show_paths(),
    }
}

fn show_config() -> Result<()> {
    let config = ConfigLoader::load()?;
    let loaded: Vec<_> = ConfigLoader::layers()
        .into_iter()
        .filter(|layer| layer.present)
        .map(|layer| layer.path.display().to_string())
        .collect();

    if loaded.is_empty() {
        println!("# No config files found, showing defaults");
    } else {
        println!("# Merged from: {}", loaded.join(", "));
    }
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn show_paths() -> Result<()> {
    for layer in ConfigLoader::layers() {
        println!("{}", describe(&layer));
    }
    Ok(())
}

fn describe(layer: &ConfigLayer) -> String {
    let label = match layer.scope {
        "user" => "User config:",
        _ => "Project config:",
    };
    let status = if layer.present { "" } else { " (not found)" };
    format!("{label:<16}{}{status}", layer.path.display())
}
