use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pantry",
    about = "Pantry: track what you have and when it expires",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Inventory data file
    #[arg(long, global = true, default_value = "pantry.json")]
    pub data: PathBuf,

    /// Settings file
    #[arg(long, global = true, default_value = "pantry.toml")]
    pub config: PathBuf,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List storage locations
    Locations,
    /// Add, rename, or remove a storage location
    Location(LocationArgs),
    /// Add an item
    Add(AddArgs),
    /// Edit an item
    Edit(EditArgs),
    /// Remove an item
    Remove(RemoveArgs),
    /// List items, soonest to expire first
    List(ListArgs),
    /// Show, get, or set a setting
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct LocationArgs {
    #[command(subcommand)]
    pub action: LocationAction,
}

#[derive(Subcommand)]
pub enum LocationAction {
    /// Create a location
    Add { name: String },
    /// Rename a location
    Rename { name: String, new_name: String },
    /// Delete a location; its items become uncategorized
    Remove { name: String },
}

/// Item fields shared by `add` and `edit`.
#[derive(Args, Default)]
pub struct ItemOptions {
    /// Quantity, e.g. 2 or 1.5
    #[arg(short, long)]
    pub qty: Option<String>,
    /// Location name
    #[arg(short, long)]
    pub location: Option<String>,
    /// Expiration date (YYYY-MM-DD)
    #[arg(short, long)]
    pub expires: Option<NaiveDate>,
    /// Date obtained (YYYY-MM-DD); defaults to today for new items
    #[arg(long)]
    pub obtained: Option<NaiveDate>,
    #[arg(short, long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    pub name: String,
    #[command(flatten)]
    pub item: ItemOptions,
}

#[derive(Args)]
pub struct EditArgs {
    /// Item id or its short form
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[command(flatten)]
    pub item: ItemOptions,
    /// Clear the expiration date
    #[arg(long, conflicts_with = "expires")]
    pub no_expiry: bool,
    /// Remove the item from its location
    #[arg(long, conflicts_with = "location")]
    pub uncategorized: bool,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Item id or its short form
    pub id: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only items in this location
    #[arg(short, long, conflicts_with = "uncategorized")]
    pub location: Option<String>,
    /// Only items without a location
    #[arg(long)]
    pub uncategorized: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    pub key: Option<String>,
    #[arg(requires = "key")]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_locations() {
        let cli = Cli::try_parse_from(["pantry", "locations"]).unwrap();
        assert!(matches!(cli.command, Command::Locations));
        assert_eq!(cli.data, PathBuf::from("pantry.json"));
        assert_eq!(cli.config, PathBuf::from("pantry.toml"));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn parse_global_flags_after_command() {
        let cli = Cli::try_parse_from([
            "pantry", "list", "--data", "/tmp/p.json", "--format", "json", "-v",
        ])
        .unwrap();
        assert_eq!(cli.data, PathBuf::from("/tmp/p.json"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_location_rename() {
        let cli = Cli::try_parse_from(["pantry", "location", "rename", "Fridge", "Cooler"]).unwrap();
        if let Command::Location(args) = cli.command {
            assert!(matches!(
                args.action,
                LocationAction::Rename { ref name, ref new_name } if name == "Fridge" && new_name == "Cooler"
            ));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_add_with_options() {
        let cli = Cli::try_parse_from([
            "pantry", "add", "Milk", "--qty", "1.5", "-l", "Fridge", "--expires", "2025-07-20",
            "--notes", "2%",
        ])
        .unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.name, "Milk");
            assert_eq!(args.item.qty.as_deref(), Some("1.5"));
            assert_eq!(args.item.location.as_deref(), Some("Fridge"));
            assert_eq!(args.item.expires, NaiveDate::from_ymd_opt(2025, 7, 20));
            assert_eq!(args.item.obtained, None);
            assert_eq!(args.item.notes.as_deref(), Some("2%"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_add_rejects_bad_date() {
        assert!(Cli::try_parse_from(["pantry", "add", "Milk", "--expires", "tomorrow"]).is_err());
    }

    #[test]
    fn parse_edit_flags() {
        let cli = Cli::try_parse_from(["pantry", "edit", "1a2b3c4d", "--no-expiry", "--uncategorized"]).unwrap();
        if let Command::Edit(args) = cli.command {
            assert_eq!(args.id, "1a2b3c4d");
            assert!(args.no_expiry);
            assert!(args.uncategorized);
            assert_eq!(args.name, None);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_edit_conflicts() {
        assert!(Cli::try_parse_from([
            "pantry", "edit", "x", "--no-expiry", "--expires", "2025-01-01",
        ])
        .is_err());
        assert!(Cli::try_parse_from(["pantry", "edit", "x", "--uncategorized", "-l", "Fridge"]).is_err());
    }

    #[test]
    fn parse_list_filters() {
        let cli = Cli::try_parse_from(["pantry", "list", "--uncategorized"]).unwrap();
        if let Command::List(args) = cli.command {
            assert!(args.uncategorized);
            assert_eq!(args.location, None);
        } else { panic!("wrong command"); }

        assert!(Cli::try_parse_from(["pantry", "list", "-l", "Fridge", "--uncategorized"]).is_err());
    }

    #[test]
    fn parse_config_set() {
        let cli = Cli::try_parse_from(["pantry", "config", "expiring_soon_days", "5"]).unwrap();
        if let Command::Config(args) = cli.command {
            assert_eq!(args.key.as_deref(), Some("expiring_soon_days"));
            assert_eq!(args.value.as_deref(), Some("5"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_remove() {
        let cli = Cli::try_parse_from(["pantry", "remove", "deadbeef"]).unwrap();
        assert!(matches!(cli.command, Command::Remove(RemoveArgs { ref id }) if id == "deadbeef"));
    }
}
