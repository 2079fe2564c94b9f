//! Command-line front end for the Completionist progress tracker.
//!
//! Each invocation loads the configuration, opens one profile from the
//! JSON profile directory, runs a single command against it, and prints
//! the result together with any notifications the progression engine
//! queued.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `completionist.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Open the profile directory
//! 4. Build the built-in collection
//! 5. Select a profile and run the command

mod error;
mod render;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use completionist_catalog::{CatalogError, super_mario_galaxy};
use completionist_core::{Tracker, TrackerConfig};
use completionist_progress::PlayerProfile;
use completionist_store::{JsonFileStorage, StorageService};
use completionist_types::{AreaId, CharacterMode, ItemId, ProfileId, SectionId};

use crate::error::CliError;

/// Default configuration file, relative to the working directory.
const CONFIG_FILE: &str = "completionist.yaml";

#[derive(Parser)]
#[command(name = "completionist")]
#[command(about = "Track collectible progress across two character modes", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Profile id to operate on
    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage player profiles
    Profiles {
        #[command(subcommand)]
        action: ProfileAction,
    },

    #[command(flatten)]
    Session(SessionCommand),
}

/// Commands that run against one opened profile.
#[derive(Subcommand)]
enum SessionCommand {
    /// Show overall progress and every section
    Status,

    /// Show one area and its visible items
    Area {
        /// Area id (e.g. "good-egg")
        id: String,
    },

    /// Collect an item in the active mode
    Collect {
        /// Item id
        item: String,
    },

    /// Uncollect an item in the active mode
    Uncollect {
        /// Item id
        item: String,
    },

    /// Collect or uncollect a whole area or section (requires spoilers)
    Toggle {
        /// Area id
        #[arg(long, conflicts_with = "section", required_unless_present = "section")]
        area: Option<String>,

        /// Section id
        #[arg(long)]
        section: Option<String>,
    },

    /// Reveal a hidden item
    Reveal {
        /// Item id
        item: String,
    },

    /// Hide a previously revealed item
    Hide {
        /// Item id
        item: String,
    },

    /// Set or clear a note (no text clears it)
    Note {
        /// Item id
        item: String,

        /// Note text
        text: Vec<String>,
    },

    /// Rate an item's difficulty from 1 to 5, or "clear"
    Rate {
        /// Item id
        item: String,

        /// Rating 1-5 or "clear"
        value: String,
    },

    /// Switch the active character mode ("mario" or "luigi" also accepted)
    Mode {
        /// Target mode
        mode: CharacterMode,
    },

    /// Turn spoilers on or off
    Spoilers {
        /// New state
        state: OnOff,
    },

    /// List every note in the active mode
    Notes,

    /// Add or remove star bits
    StarBits {
        /// Amount to add
        #[arg(long, conflicts_with = "remove", required_unless_present = "remove")]
        add: Option<u32>,

        /// Amount to remove
        #[arg(long)]
        remove: Option<u32>,
    },

    /// Log play time in minutes
    Play {
        /// Minutes played
        minutes: u64,
    },

    /// Rename the profile
    Rename {
        /// New display name
        name: Vec<String>,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// List stored profiles
    List,

    /// Create a profile
    Create {
        /// Display name
        name: Vec<String>,
    },

    /// Delete a profile
    Delete {
        /// Profile id
        id: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OnOff {
    On,
    Off,
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, storage, or the command fails.
fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    // 1. Load configuration.
    let (config, found) = load_config(cli.config.as_deref())?;

    // 2. Initialize structured logging. `RUST_LOG` overrides the config.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if !found {
        info!("Config file not found, using defaults");
    }
    info!(
        profiles_dir = %config.storage.profiles_dir.display(),
        alternate_unlock_threshold = config.modes.alternate_unlock_threshold,
        "Configuration loaded"
    );

    // 3. Open the profile directory.
    let storage = JsonFileStorage::open(&config.storage.profiles_dir)?;

    // 4. Run the command.
    let lines = run(cli.command, cli.profile.as_deref(), storage, config)?;
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Load configuration from `path`, or `completionist.yaml` when absent.
///
/// A missing file yields the defaults. The flag reports whether a file
/// was read.
fn load_config(path: Option<&Path>) -> Result<(TrackerConfig, bool), CliError> {
    let config_path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
    if config_path.exists() {
        let config = TrackerConfig::from_file(config_path)?;
        Ok((config, true))
    } else {
        let mut config = TrackerConfig::default();
        config.storage.apply_env_overrides();
        Ok((config, false))
    }
}

/// Execute one command and return the lines to print.
fn run<S: StorageService>(
    command: Commands,
    profile: Option<&str>,
    storage: S,
    config: TrackerConfig,
) -> Result<Vec<String>, CliError> {
    match command {
        Commands::Profiles { action } => profiles(action, storage, config),
        Commands::Session(command) => session(command, profile, storage, config),
    }
}

/// Open the selected profile and run `command` against it.
fn session<S: StorageService>(
    command: SessionCommand,
    profile: Option<&str>,
    storage: S,
    config: TrackerConfig,
) -> Result<Vec<String>, CliError> {
    let id = select_profile(&storage, profile, config.storage.default_profile.as_deref())?;
    let mut tracker = Tracker::open(super_mario_galaxy()?, storage, &id, config)?;

    let mut lines = match command {
        SessionCommand::Status => render::status(&tracker),
        SessionCommand::Area { id } => {
            let id = AreaId::new(id);
            let area = tracker
                .collection()
                .find_area(&id)
                .ok_or_else(|| CatalogError::AreaNotFound(id.clone()))?;
            render::area(&tracker.overlay(), true, area)
        }
        SessionCommand::Collect { item } => {
            let item = ItemId::new(item);
            let mode = tracker.active_mode();
            if tracker.mark_collected(&item)? {
                vec![format!("Collected {item} in {mode} mode")]
            } else {
                vec![format!("{item} was already collected")]
            }
        }
        SessionCommand::Uncollect { item } => {
            let item = ItemId::new(item);
            if tracker.mark_uncollected(&item)? {
                vec![format!("Uncollected {item}")]
            } else {
                vec![format!("{item} was not collected")]
            }
        }
        SessionCommand::Toggle { area, section } => {
            let collected = match (area, section) {
                (Some(area), _) => tracker.toggle_area(&AreaId::new(area))?,
                (None, Some(section)) => tracker.toggle_section(&SectionId::new(section))?,
                (None, None) => {
                    return Err(CliError::InvalidArgument {
                        message: "pass --area or --section".to_owned(),
                    });
                }
            };
            vec![if collected { "Collected all" } else { "Uncollected all" }.to_owned()]
        }
        SessionCommand::Reveal { item } => {
            tracker.set_revealed(&ItemId::new(item.as_str()), true)?;
            vec![format!("Revealed {item}")]
        }
        SessionCommand::Hide { item } => {
            tracker.set_revealed(&ItemId::new(item.as_str()), false)?;
            vec![format!("Hid {item}")]
        }
        SessionCommand::Note { item, text } => {
            let text = text.join(" ");
            let note = (!text.trim().is_empty()).then_some(text);
            let cleared = note.is_none();
            tracker.set_note(&ItemId::new(item.as_str()), note)?;
            vec![if cleared {
                format!("Cleared note on {item}")
            } else {
                format!("Saved note on {item}")
            }]
        }
        SessionCommand::Rate { item, value } => {
            let rating = parse_rating(&value)?;
            tracker.set_difficulty_rating(&ItemId::new(item.as_str()), rating)?;
            vec![format!("Rated {item}")]
        }
        SessionCommand::Mode { mode } => {
            tracker.switch_mode(mode)?;
            let name = tracker.config().modes.display_name(mode);
            vec![format!("Now playing as {name}")]
        }
        SessionCommand::Spoilers { state } => {
            let enabled = matches!(state, OnOff::On);
            tracker.set_spoilers(enabled)?;
            vec![format!("Spoilers {}", if enabled { "on" } else { "off" })]
        }
        SessionCommand::Notes => render::notes(&tracker.overlay()),
        SessionCommand::StarBits { add, remove } => {
            match (add, remove) {
                (Some(amount), _) => tracker.add_star_bits(amount)?,
                (None, Some(amount)) => tracker.remove_star_bits(amount)?,
                (None, None) => {
                    return Err(CliError::InvalidArgument {
                        message: "pass --add or --remove".to_owned(),
                    });
                }
            }
            vec![format!("Star bits: {}", tracker.profile().star_bits())]
        }
        SessionCommand::Play { minutes } => {
            tracker.log_play_time(minutes)?;
            vec![format!("Play time: {}", tracker.profile().formatted_play_time())]
        }
        SessionCommand::Rename { name } => {
            let name = non_empty_name(&name)?;
            tracker.rename(&name)?;
            vec![format!("Renamed to {name}")]
        }
    };

    lines.extend(render::notifications(tracker.notifications()));
    Ok(lines)
}

fn profiles<S: StorageService>(
    action: ProfileAction,
    mut storage: S,
    config: TrackerConfig,
) -> Result<Vec<String>, CliError> {
    match action {
        ProfileAction::List => {
            let profiles = storage
                .list()?
                .iter()
                .map(|id| storage.load(id))
                .collect::<Result<Vec<PlayerProfile>, _>>()?;
            Ok(render::profiles(&profiles))
        }
        ProfileAction::Create { name } => {
            let name = non_empty_name(&name)?;
            let tracker = Tracker::create(super_mario_galaxy()?, storage, &name, config)?;
            Ok(vec![format!(
                "Created profile {} ({})",
                tracker.profile().display_name(),
                tracker.profile().id()
            )])
        }
        ProfileAction::Delete { id } => {
            let id = ProfileId::from(id);
            if !storage.exists(&id) {
                return Err(CliError::UnknownProfile { id });
            }
            storage.delete(&id)?;
            Ok(vec![format!("Deleted profile {id}")])
        }
    }
}

/// Pick the profile to open: the named one, the configured default, or
/// the only stored profile.
fn select_profile<S: StorageService>(
    storage: &S,
    requested: Option<&str>,
    default: Option<&str>,
) -> Result<ProfileId, CliError> {
    if let Some(id) = requested.or(default) {
        let id = ProfileId::from(id);
        if !storage.exists(&id) {
            return Err(CliError::UnknownProfile { id });
        }
        return Ok(id);
    }
    let mut ids = storage.list()?;
    match ids.len() {
        0 => Err(CliError::NoProfile),
        1 => ids.pop().ok_or(CliError::NoProfile),
        count => Err(CliError::AmbiguousProfile { count }),
    }
}

/// Parse a difficulty argument: `1` to `5`, or `clear`.
fn parse_rating(value: &str) -> Result<Option<u8>, CliError> {
    if value.eq_ignore_ascii_case("clear") {
        return Ok(None);
    }
    value
        .parse::<u8>()
        .map(Some)
        .map_err(|e| CliError::InvalidArgument {
            message: format!("rating must be 1-5 or \"clear\", got {value:?}: {e}"),
        })
}

fn non_empty_name(words: &[String]) -> Result<String, CliError> {
    let name = words.join(" ");
    if name.trim().is_empty() {
        return Err(CliError::InvalidArgument {
            message: "name must not be empty".to_owned(),
        });
    }
    Ok(name.trim().to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use completionist_store::MemoryStorage;

    use super::*;

    fn storage_with(names: &[&str]) -> (MemoryStorage, Vec<ProfileId>) {
        let mut storage = MemoryStorage::new();
        let ids = names
            .iter()
            .map(|name| {
                let profile = PlayerProfile::new(*name);
                storage.save(&profile).unwrap();
                profile.id().clone()
            })
            .collect();
        (storage, ids)
    }

    #[test]
    fn single_profile_is_chosen() {
        let (storage, ids) = storage_with(&["Solo"]);
        let id = select_profile(&storage, None, None).unwrap();
        assert_eq!(Some(&id), ids.first());
    }

    #[test]
    fn no_or_many_profiles_need_a_name() {
        let (storage, _) = storage_with(&[]);
        assert!(matches!(select_profile(&storage, None, None), Err(CliError::NoProfile)));

        let (storage, ids) = storage_with(&["A", "B"]);
        assert!(matches!(
            select_profile(&storage, None, None),
            Err(CliError::AmbiguousProfile { count: 2 })
        ));
        let first = ids.first().unwrap();
        assert_eq!(&select_profile(&storage, Some(first.as_str()), None).unwrap(), first);
        assert_eq!(&select_profile(&storage, None, Some(first.as_str())).unwrap(), first);
    }

    #[test]
    fn unknown_profile_is_reported() {
        let (storage, _) = storage_with(&["A"]);
        assert!(matches!(
            select_profile(&storage, Some("missing"), None),
            Err(CliError::UnknownProfile { .. })
        ));
    }

    #[test]
    fn rating_argument() {
        assert_eq!(parse_rating("clear").unwrap(), None);
        assert_eq!(parse_rating("4").unwrap(), Some(4));
        assert!(matches!(parse_rating("four"), Err(CliError::InvalidArgument { .. })));
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, found) = load_config(Some(&dir.path().join("absent.yaml"))).unwrap();
        assert!(!found);
        assert_eq!(config.modes.alternate_unlock_threshold, 120);
    }

    #[test]
    fn commands_run_against_a_profile() {
        let (storage, ids) = storage_with(&["Runner"]);
        let config = TrackerConfig::default();
        let lines = run(
            Commands::Session(SessionCommand::Collect {
                item: "gateway-grand-star".to_owned(),
            }),
            None,
            storage.clone(),
            config.clone(),
        )
        .unwrap();
        assert_eq!(lines, vec!["Collected gateway-grand-star in primary mode"]);

        let err = run(
            Commands::Session(SessionCommand::Mode {
                mode: CharacterMode::Alternate,
            }),
            ids.first().map(ProfileId::as_str),
            storage,
            config,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "alternate mode is locked");
    }

    #[test]
    fn profile_commands_do_not_need_a_selected_profile() {
        let (storage, _) = storage_with(&["A", "B"]);
        let lines = run(
            Commands::Profiles {
                action: ProfileAction::List,
            },
            None,
            storage.clone(),
            TrackerConfig::default(),
        )
        .unwrap();
        assert_eq!(lines.len(), 2);

        let err = run(
            Commands::Session(SessionCommand::Status),
            None,
            storage,
            TrackerConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::AmbiguousProfile { count: 2 }));
    }

    #[test]
    fn blank_note_text_clears() {
        let (storage, _) = storage_with(&["Notes"]);
        let note = |text: &[&str]| {
            run(
                Commands::Session(SessionCommand::Note {
                    item: "good-egg-snack".to_owned(),
                    text: text.iter().map(ToString::to_string).collect(),
                }),
                None,
                storage.clone(),
                TrackerConfig::default(),
            )
            .unwrap()
        };
        assert_eq!(note(&["pull", "the", "bomb"]), vec!["Saved note on good-egg-snack"]);
        assert_eq!(note(&["  "]), vec!["Cleared note on good-egg-snack"]);
        assert_eq!(note(&[]), vec!["Cleared note on good-egg-snack"]);
    }
}
