use std::path::Path;

use anyhow::bail;
use colored::{ColoredString, Colorize};
use pantry_sdk::{
    Highlight, ItemFields, ItemFilter, ItemRow, Pantry, Settings, MAX_CUSTOM_LOCATIONS,
};
use serde_json::json;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let json = cli.format == OutputFormat::Json;
    let open = || open_pantry(&cli.data, &cli.config);
    match cli.command {
        Command::Locations => cmd_locations(&open()?, json),
        Command::Location(args) => cmd_location(&open()?, args.action, json),
        Command::Add(args) => cmd_add(&open()?, args, json),
        Command::Edit(args) => cmd_edit(&open()?, args, json),
        Command::Remove(args) => cmd_remove(&open()?, args, json),
        Command::List(args) => cmd_list(&open()?, args, json),
        // Settings are edited without touching the data file.
        Command::Config(args) => cmd_config(&cli.config, args, json),
    }
}

fn open_pantry(data: &Path, config: &Path) -> anyhow::Result<Pantry> {
    let settings = Settings::load(config)?;
    Ok(Pantry::open_file(data, settings)?)
}

fn cmd_locations(pantry: &Pantry, json: bool) -> anyhow::Result<()> {
    let mut listed = Vec::new();
    for location in pantry.locations()? {
        let count = pantry.items(ItemFilter::for_location(&location))?.len();
        listed.push((location, count));
    }

    if json {
        let out: Vec<_> = listed
            .iter()
            .map(|(l, count)| {
                json!({
                    "id": l.id,
                    "name": l.name,
                    "is_default": l.is_default,
                    "is_protected": l.is_protected,
                    "items": count,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (location, count) in &listed {
        let marker = if location.is_protected {
            "protected".dimmed()
        } else if location.is_default {
            "default".dimmed()
        } else {
            "".normal()
        };
        println!("  {:<16} {:>4}  {}", location.name.bold(), count, marker);
    }
    Ok(())
}

fn cmd_location(pantry: &Pantry, action: LocationAction, json: bool) -> anyhow::Result<()> {
    match action {
        LocationAction::Add { name } => {
            if !pantry.can_add_location()? {
                bail!("at most {MAX_CUSTOM_LOCATIONS} locations are allowed besides \"All\"");
            }
            let location = pantry.create_location(&name)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&location)?);
            } else {
                println!("{} Created location {}", "✓".green().bold(), location.name.yellow());
            }
        }
        LocationAction::Rename { name, new_name } => {
            let location = pantry.find_location(&name)?;
            let renamed = pantry.rename_location(&location.id, &new_name)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&renamed)?);
            } else {
                println!(
                    "{} Renamed {} to {}",
                    "✓".green().bold(),
                    location.name.yellow(),
                    renamed.name.yellow()
                );
            }
        }
        LocationAction::Remove { name } => {
            let location = pantry.find_location(&name)?;
            let detached = pantry.delete_location(&location.id)?;
            if json {
                println!("{}", json!({ "removed": location.id, "uncategorized": detached }));
            } else {
                println!("{} Removed location {}", "✓".green().bold(), location.name.yellow());
                if detached > 0 {
                    println!("  {detached} item(s) are now uncategorized");
                }
            }
        }
    }
    Ok(())
}

/// Apply `options` on top of `fields`, resolving the location by name.
fn apply_options(
    pantry: &Pantry,
    mut fields: ItemFields,
    options: ItemOptions,
) -> anyhow::Result<ItemFields> {
    if let Some(qty) = options.qty {
        fields.quantity_text = qty;
    }
    if let Some(name) = options.location {
        fields.location = Some(pantry.find_location(&name)?.id);
    }
    if let Some(date) = options.expires {
        fields.expiration_date = Some(date);
    }
    if let Some(date) = options.obtained {
        fields.obtained_date = Some(date);
    }
    if let Some(notes) = options.notes {
        fields.notes = Some(notes);
    }
    Ok(fields)
}

fn cmd_add(pantry: &Pantry, args: AddArgs, json: bool) -> anyhow::Result<()> {
    let fields = apply_options(pantry, ItemFields::new(args.name, "1"), args.item)?;

    let duplicates = pantry.duplicate_warning(&fields)?;
    if !duplicates.is_empty() {
        eprintln!(
            "{} {} already exists in this location ({} entr{})",
            "warning:".yellow().bold(),
            fields.trimmed_name().bold(),
            duplicates.len(),
            if duplicates.len() == 1 { "y" } else { "ies" }
        );
    }

    let item = pantry.add_item(&fields)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        println!(
            "{} Added {} x{} [{}]",
            "✓".green().bold(),
            item.display_name().bold(),
            item.quantity,
            item.id.short_id().dimmed()
        );
    }
    Ok(())
}

fn cmd_edit(pantry: &Pantry, args: EditArgs, json: bool) -> anyhow::Result<()> {
    let item = pantry.resolve_item(&args.id)?;
    let mut fields = ItemFields::from_item(&item);
    if let Some(name) = args.name {
        fields.name = name;
    }
    if args.no_expiry {
        fields.expiration_date = None;
    }
    if args.uncategorized {
        fields.location = None;
    }
    let fields = apply_options(pantry, fields, args.item)?;

    let updated = pantry.update_item(&item.id, &fields)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!("{} Updated {}", "✓".green().bold(), updated.display_name().bold());
    }
    Ok(())
}

fn cmd_remove(pantry: &Pantry, args: RemoveArgs, json: bool) -> anyhow::Result<()> {
    let item = pantry.resolve_item(&args.id)?;
    let removed = pantry.delete_item(&item.id)?;
    if json {
        println!("{}", json!({ "removed": removed.id }));
    } else {
        println!("{} Removed {}", "✓".green().bold(), removed.display_name().bold());
    }
    Ok(())
}

fn cmd_list(pantry: &Pantry, args: ListArgs, json: bool) -> anyhow::Result<()> {
    let filter = if args.uncategorized {
        ItemFilter::Uncategorized
    } else if let Some(name) = &args.location {
        ItemFilter::for_location(&pantry.find_location(name)?)
    } else {
        ItemFilter::All
    };
    let rows = pantry.rows(filter)?;
    let banner = pantry.banner(filter)?;

    if json {
        let out = json!({ "items": rows, "banner": banner });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if let Some(banner) = banner {
        println!("{}\n", banner.red().bold());
    }
    if rows.is_empty() {
        println!("No items.");
        return Ok(());
    }
    for row in &rows {
        println!("{}", paint(row, format_row(row)));
    }
    Ok(())
}

fn format_row(row: &ItemRow) -> String {
    let mut line = format!(
        "{}  {:<20} {:>8}  {:<14} expires {}",
        row.short_id, row.name, row.quantity, row.location, row.expiration
    );
    if let Some(obtained) = &row.obtained {
        line.push_str(&format!("  obtained {obtained}"));
    }
    if let Some(notes) = &row.notes {
        line.push_str(&format!("  ({notes})"));
    }
    line
}

fn paint(row: &ItemRow, line: String) -> ColoredString {
    match row.highlight {
        Some(Highlight::Expired) => line.red(),
        Some(Highlight::ExpiringSoon) => line.yellow(),
        None => line.normal(),
    }
}

fn cmd_config(path: &Path, args: ConfigArgs, json: bool) -> anyhow::Result<()> {
    let mut settings = Settings::load(path)?;
    match (args.key, args.value) {
        (Some(key), Some(value)) => {
            settings.set(&key, &value)?;
            settings.save(path)?;
            let value = settings.get(&key)?;
            if json {
                println!("{}", json!({ key: value }));
            } else {
                println!("Set {} = {}", key.bold(), value);
            }
        }
        (Some(key), None) => {
            let value = settings.get(&key)?;
            if json {
                println!("{}", json!({ key: value }));
            } else {
                println!("{} = {}", key.bold(), value);
            }
        }
        _ => {
            if json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                for (key, value) in settings.entries() {
                    println!("{} = {}", key.bold(), value);
                }
            }
        }
    }
    Ok(())
}
