pub mod build;
pub mod completions;
pub mod hues;
pub mod init;
pub mod shadows;

use clap::{Parser, Subcommand};

/// swatch - Design token generator for colour scales and shadows
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the full token table as JSON
    Build(build::BuildArgs),

    /// List hue families and their primary colours
    Hues(hues::HuesArgs),

    /// Print the shadow token table
    Shadows(shadows::ShadowsArgs),

    /// Initialize a swatch project (generates swatch.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::parse_from([
            "swatch", "build", "--mix", "resolved", "--shadows", "static", "--only", "red,blue",
        ]);
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.mix, Some(crate::scale::MixMode::Resolved));
                assert_eq!(args.shadows, Some(crate::shadow::ShadowOutput::Static));
                assert_eq!(args.only, vec!["red", "blue"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_shadows_static() {
        let cli = Cli::parse_from(["swatch", "shadows", "--static"]);
        assert!(matches!(cli.command, Commands::Shadows(args) if args.static_values));
    }
}
