//! Model token commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use switchboard_models::token::{self, ModelToken};

use crate::config::ConfigLoader;

#[derive(Args, Debug)]
pub struct TokenArgs {
    #[command(subcommand)]
    pub command: TokenCommands,
}

#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// Encode a display name, provider kind and model name
    Encode {
        display_name: String,
        provider_kind: String,
        model_name: String,
    },
    /// Decode a token into its fields
    Decode {
        token: String,

        /// Reject tokens without exactly three fields
        #[arg(long)]
        strict: bool,
    },
}

pub fn run(args: TokenArgs) -> Result<()> {
    let strict_default = ConfigLoader::load()?.tokens.strict;

    match args.command {
        TokenCommands::Encode {
            display_name,
            provider_kind,
            model_name,
        } => {
            let token = if strict_default {
                ModelToken::try_new(&display_name, &provider_kind, &model_name)?
            } else {
                token::encode(&display_name, &provider_kind, &model_name)
            };
            println!("{token}");
        }
        TokenCommands::Decode { token, strict } => {
            let decoded = if strict || strict_default {
                ModelToken::parse(&token)?
            } else {
                token::decode(&token)
            };
            println!("Display name: {}", decoded.display_name);
            println!("Provider: {}", decoded.provider_kind);
            println!("Model: {}", decoded.model_name);
        }
    }

    Ok(())
}
