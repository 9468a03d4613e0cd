//! Model selection commands.
//!
//! Provides commands for resolving the live model, listing picker options,
//! and inspecting a single model against a provider catalog.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use switchboard_models::{
    Catalog, PersonaOverride, SessionSelection, find_model_configuration, find_provider_for_model,
    list_distinct_model_options, resolve_effective, resolve_persona_override_descriptor,
};
use tracing::debug;

use crate::config::{ConfigLoader, SwitchboardConfig};

/// Catalog location shared by every models subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Provider catalog JSON (defaults to `catalog.path` from config)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

/// Models arguments.
#[derive(Args, Debug)]
pub struct ModelsArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(subcommand)]
    pub command: ModelsCommands,
}

/// Models subcommands.
#[derive(Subcommand, Debug)]
pub enum ModelsCommands {
    /// Resolve the live provider and model
    Resolve {
        /// Persona provider pin (catalog entry name)
        #[arg(long)]
        persona_provider: Option<String>,

        /// Persona model pin
        #[arg(long)]
        persona_model: Option<String>,

        /// Session provider kind
        #[arg(long)]
        session_provider: Option<String>,

        /// Session model
        #[arg(long)]
        session_model: Option<String>,
    },
    /// List distinct model options
    List {
        /// Only show models that accept image input
        #[arg(long)]
        vision: bool,
    },
    /// Show which provider serves a model
    Info {
        /// Model name (e.g., gpt-4o)
        model: String,

        /// Restrict lookup to a provider kind
        #[arg(long)]
        provider: Option<String>,
    },
}

/// Run models command.
pub fn run(args: ModelsArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let path = args.catalog.catalog.unwrap_or_else(|| config.catalog.path.clone());
    let catalog = load_catalog(&path)?;

    match args.command {
        ModelsCommands::Resolve {
            persona_provider,
            persona_model,
            session_provider,
            session_model,
        } => {
            let persona = persona_from(&config, persona_provider, persona_model);
            let session = (session_provider.is_some() || session_model.is_some()).then(|| {
                SessionSelection {
                    provider_kind: session_provider,
                    model_name: session_model,
                }
            });
            resolve(&catalog, persona.as_ref(), session.as_ref());
            Ok(())
        }
        ModelsCommands::List { vision } => list_options(&catalog, vision),
        ModelsCommands::Info { model, provider } => {
            show_model_info(&catalog, &model, provider.as_deref())
        }
    }
}

/// Read and validate a catalog file.
fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_json(&contents)
        .with_context(|| format!("Invalid catalog {}", path.display()))?;
    debug!("Loaded {} providers from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Build the persona pin from flags, falling back to config.
///
/// Flags replace the configured pin as a whole so a single flag never mixes
/// with a stale half of the configured one.
fn persona_from(
    config: &SwitchboardConfig,
    provider: Option<String>,
    model: Option<String>,
) -> Option<PersonaOverride> {
    if provider.is_some() || model.is_some() {
        return Some(PersonaOverride {
            provider_name_override: provider,
            model_name_override: model,
        });
    }

    let pinned = &config.persona;
    if pinned.provider_override.is_none() && pinned.model_override.is_none() {
        return None;
    }
    Some(PersonaOverride {
        provider_name_override: pinned.provider_override.clone(),
        model_name_override: pinned.model_override.clone(),
    })
}

fn resolve(
    catalog: &Catalog,
    persona: Option<&PersonaOverride>,
    session: Option<&SessionSelection>,
) {
    let live = resolve_effective(catalog, persona, session);

    println!("Provider: {}", or_dash(&live.provider_kind));
    println!("Model: {}", or_dash(&live.model_name));

    if let Some(persona) = persona {
        println!();
        match resolve_persona_override_descriptor(catalog, persona) {
            Some(pin) => println!(
                "Persona pin: {} ({}/{})",
                pin.name, pin.provider_kind, pin.model_name
            ),
            None => println!("Persona pin: not available in this catalog"),
        }
    }
}

/// List picker options.
fn list_options(catalog: &Catalog, vision_only: bool) -> Result<()> {
    let options: Vec<_> = list_distinct_model_options(catalog)
        .into_iter()
        .filter(|o| !vision_only || o.supports_image_input)
        .collect();

    if options.is_empty() {
        if vision_only {
            println!("No models accept image input.");
        } else {
            println!("No models configured.");
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Model").fg(Color::Cyan),
        Cell::new("Token").fg(Color::Cyan),
        Cell::new("Images").fg(Color::Cyan),
    ]);

    for option in options {
        table.add_row(vec![
            Cell::new(&option.display_label),
            Cell::new(option.token.as_str()),
            Cell::new(yes_no(option.supports_image_input)),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Show which provider serves a model and what it supports.
fn show_model_info(catalog: &Catalog, model_name: &str, provider: Option<&str>) -> Result<()> {
    let Some(model) = find_model_configuration(catalog, model_name, provider) else {
        match provider {
            Some(kind) => bail!("Model '{}' not offered by '{}'", model_name, kind),
            None => bail!("Model '{}' not found", model_name),
        }
    };

    let kind = match provider {
        Some(kind) => kind.to_string(),
        None => find_provider_for_model(catalog, model_name),
    };

    println!("Model: {}", model.name);
    println!("Label: {}", switchboard_models::display_name_for_model(&model.name));
    println!("Provider: {}", kind);
    println!("Image input: {}", yes_no(model.supports_image_input));

    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
