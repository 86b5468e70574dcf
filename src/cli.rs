//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for folio using the
//! `clap` crate, plus the conversion from listing flags to an engine
//! [`Selection`].
//!
//! # Commands
//!
//! - **browse**: Interactive listing browser (default)
//! - **works** / **articles**: Filtered listings on stdout
//! - **career**: Chronological career timeline
//! - **tags**: Tag universe of a listing with usage counts
//! - **config**: Inspect or change stored settings
//!
//! # Examples
//!
//! ```bash
//! # Browse works interactively (default command)
//! folio
//! folio browse articles
//!
//! # Filtered listings
//! folio works -t React -t Rust
//! folio works --kind dev --search shop
//! folio articles --search "game jam"
//!
//! # Tag universe
//! folio tags articles
//!
//! # Quiet mode (only output results)
//! folio -q works
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::ThemeMode;
use crate::content::ContentKind;
use crate::engine::Selection;

/// Listing screen addressed by a command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenArg {
    /// Projects and artworks
    #[default]
    Works,
    /// Blog posts and event reports
    Articles,
}

/// Kind filter for the works listing
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    /// Development projects
    Dev,
    /// Illustrations
    Art,
}

impl From<KindArg> for ContentKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Dev => Self::Development,
            KindArg::Art => Self::Illustration,
        }
    }
}

/// Theme selector for `config theme`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeArg {
    /// Dark terminal palette
    Dark,
    /// Light terminal palette
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Light => Self::Light,
        }
    }
}

/// Filtering options shared by the listing commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Select a tag (repeatable); default is all tags
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Free-text query matched against title, tags and description
    #[arg(short = 's', long = "search", value_name = "QUERY")]
    pub query: Option<String>,
}

impl FilterArgs {
    /// Build the engine selection equivalent to these flags.
    ///
    /// Tags are toggled in, so repeating a tag on the command line leaves
    /// it selected exactly once and `--tag all` clears the set.
    #[must_use]
    pub fn to_selection(&self) -> Selection {
        let mut selection = Selection::new();

        for tag in &self.tags {
            if !selection.is_selected(tag) {
                selection = selection.toggle_tag(tag);
            }
        }

        if let Some(query) = &self.query {
            selection.query = query.clone();
        }

        selection
    }
}

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Retro-styled terminal browser for a headless-CMS portfolio"
)]
pub struct Cli {
    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The selected command, defaulting to an interactive works browse.
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            screen: ScreenArg::Works,
        })
    }
}

/// Top-level commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Browse a listing interactively (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Which listing to open
        #[arg(value_enum, default_value = "works")]
        screen: ScreenArg,
    },

    /// List works, optionally filtered
    #[command(visible_alias = "w")]
    Works {
        #[command(flatten)]
        filter: FilterArgs,

        /// Restrict the listing to one kind of work
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },

    /// List articles, optionally filtered
    #[command(visible_alias = "a")]
    Articles {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show the career timeline
    Career,

    /// List every tag used by a listing
    Tags {
        /// Which listing to derive tags from
        #[arg(value_enum, default_value = "works")]
        screen: ScreenArg,
    },

    /// Inspect or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the config path and current settings
    Show,

    /// Set the display theme
    Theme {
        /// Theme to activate
        #[arg(value_enum)]
        mode: ThemeArg,
    },

    /// Re-run the interactive setup
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ALL_TAG, TagSelection};
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_works_browse() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(matches!(
            cli.get_command(),
            Commands::Browse {
                screen: ScreenArg::Works
            }
        ));
    }

    #[test]
    fn test_parse_works_with_filters() {
        let cli =
            Cli::try_parse_from(["folio", "works", "-t", "React", "-s", "shop", "--kind", "dev"])
                .unwrap();

        match cli.get_command() {
            Commands::Works { filter, kind } => {
                assert_eq!(filter.tags, ["React"]);
                assert_eq!(filter.query.as_deref(), Some("shop"));
                assert_eq!(kind, Some(KindArg::Dev));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_quiet_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "works", "-q"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_to_selection_deduplicates_tags() {
        let filter = FilterArgs {
            tags: vec!["React".to_string(), "React".to_string(), "Rust".to_string()],
            query: None,
        };

        let selection = filter.to_selection();
        assert_eq!(
            selection.tags,
            TagSelection::Tags(vec!["React".to_string(), "Rust".to_string()])
        );
    }

    #[test]
    fn test_to_selection_all_tag_clears_set() {
        let filter = FilterArgs {
            tags: vec!["React".to_string(), ALL_TAG.to_string()],
            query: None,
        };

        assert!(filter.to_selection().tags.is_all());
    }

    #[test]
    fn test_to_selection_carries_query() {
        let filter = FilterArgs {
            tags: Vec::new(),
            query: Some(" game".to_string()),
        };

        // Whitespace survives as typed; matching never trims.
        assert_eq!(filter.to_selection().query, " game");
    }

    #[test]
    fn test_kind_arg_conversion() {
        assert_eq!(ContentKind::from(KindArg::Dev), ContentKind::Development);
        assert_eq!(ContentKind::from(KindArg::Art), ContentKind::Illustration);
    }
}
