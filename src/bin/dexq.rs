//! Query CLI over a creature-catalog dataset directory.
//!
//! Thin wiring around the library: loads the four tables, answers one
//! query, prints plain text. The dataset directory comes from `--data DIR`
//! or `MONDEX_DATA_DIR`.

use anyhow::{Result, bail};
use mondex::{
    Dex, DirSource, TypeTag, detail, load_dex, selected_ability, selected_move, selected_species,
};
use std::collections::BTreeSet;
use std::env;

const USAGE: &str = "usage: dexq [--data DIR] <command>\n\
  list [QUERY] [--type TAG]...   filtered species list\n\
  ability KEY                    species carrying an ability\n\
  move KEY                       learners of a move\n\
  species ID                     one species in full";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let source = match take_flag_value(&mut args, "--data") {
        Some(dir) => DirSource::new(dir),
        None => DirSource::from_env()?,
    };
    let dex = load_dex(&source).await?;

    if args.is_empty() {
        bail!("{USAGE}");
    }
    let command = args.remove(0);
    match command.as_str() {
        "list" => cmd_list(&dex, args),
        "ability" => cmd_ability(&dex, args.first().map(String::as_str)),
        "move" => cmd_move(&dex, args.first().map(String::as_str)),
        "species" => cmd_species(&dex, args.first().map(String::as_str)),
        other => bail!("unknown command '{other}'\n{USAGE}"),
    }
}

fn take_flag_value(args: &mut Vec<String>, flag: &str) -> Option<String> {
    let position = args.iter().position(|arg| arg == flag)?;
    if position + 1 >= args.len() {
        args.remove(position);
        return None;
    }
    let value = args.remove(position + 1);
    args.remove(position);
    Some(value)
}

fn cmd_list(dex: &Dex, mut args: Vec<String>) -> Result<()> {
    let mut selected = BTreeSet::new();
    while let Some(tag) = take_flag_value(&mut args, "--type") {
        selected.insert(TypeTag::from_str(&tag));
    }
    let query = args.first().map(String::as_str).unwrap_or("");

    let matches = dex.filter_species(query, &selected);
    for species in &matches {
        println!(
            "#{} {}  {}",
            species.id.padded(),
            species.display_name(),
            type_line(&species.types)
        );
    }
    println!("{} species", matches.len());
    Ok(())
}

fn cmd_ability(dex: &Dex, token: Option<&str>) -> Result<()> {
    let Some((key, ability)) = selected_ability(dex.catalog(), token) else {
        println!("Nothing selected.");
        return Ok(());
    };

    let display = if ability.name.is_empty() { &key.0 } else { &ability.name };
    println!("{display}");
    if !ability.desc.is_empty() {
        println!("{}", ability.desc);
    }

    let holders = dex.species_with_ability(&key);
    println!("Species with this ability ({})", holders.len());
    for holder in holders {
        let marker = if holder.hidden { "  (Hidden)" } else { "" };
        println!(
            "  #{} {}{marker}",
            holder.species.id.padded(),
            holder.species.display_name()
        );
    }
    Ok(())
}

fn cmd_move(dex: &Dex, token: Option<&str>) -> Result<()> {
    let Some((key, entry)) = selected_move(dex.catalog(), token) else {
        println!("Nothing selected.");
        return Ok(());
    };

    let display = if entry.name.is_empty() { &key.0 } else { &entry.name };
    println!("{display}");
    println!("{}", detail::move_meta(entry));
    if !entry.desc.is_empty() {
        println!("{}", entry.desc);
    }

    let learners = dex.learners_of_move(&key);
    println!("Species that learn this move ({})", learners.len());
    for learner in learners {
        println!(
            "  #{} {}  {}",
            learner.species.id.padded(),
            learner.species.display_name(),
            learner.label()
        );
    }
    Ok(())
}

fn cmd_species(dex: &Dex, token: Option<&str>) -> Result<()> {
    let Some(species) = selected_species(dex.catalog(), token) else {
        println!("Nothing selected.");
        return Ok(());
    };
    let catalog = dex.catalog();

    println!(
        "#{} {}  {}",
        species.id.padded(),
        species.display_name(),
        type_line(&species.types)
    );

    println!("Stats");
    for (label, value) in species.base_stats.rows() {
        match value {
            Some(value) => println!("  {label}: {value}"),
            None => println!("  {label}: N/A"),
        }
    }
    println!("  TOTAL: {}", species.base_stats.total());

    println!("Abilities");
    let slots = detail::ability_slots(catalog, species);
    if slots.is_empty() {
        println!("  N/A");
    }
    for slot in slots {
        println!(
            "  {} ({}): {}",
            slot.display_name(),
            slot.kind.as_str(),
            slot.description()
        );
    }

    println!("Level-up moves");
    let level_rows = detail::level_move_rows(catalog, species);
    if level_rows.is_empty() {
        println!("  N/A");
    }
    for row in level_rows {
        println!("  Lv {:>3}  {}  {}", row.level, row.row.display_name(), row.row.meta());
    }

    print_move_rows("Egg moves", detail::egg_move_rows(catalog, species));
    print_move_rows("Teachable moves", detail::teachable_move_rows(catalog, species));

    println!("Evolutions");
    let links = dex.resolve_evolutions(species);
    if links.is_empty() {
        println!("  N/A");
    }
    for link in links {
        let target = match link.target {
            Some(target) => format!("#{} {}", target.id.padded(), target.display_name()),
            None => format!("{} (not in dataset)", link.target_name()),
        };
        println!("  {} [{}] -> {}", link.method_text(), link.param_text(), target);
    }
    Ok(())
}

fn print_move_rows(title: &str, rows: Vec<detail::MoveRow<'_>>) {
    println!("{title}");
    if rows.is_empty() {
        println!("  N/A");
    }
    for row in rows {
        println!("  {}  {}", row.display_name(), row.meta());
    }
}

fn type_line(types: &[TypeTag]) -> String {
    if types.is_empty() {
        return "N/A".to_string();
    }
    types.iter().map(TypeTag::as_str).collect::<Vec<_>>().join("/")
}
