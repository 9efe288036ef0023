use checklist::application::{init::init, ListService};
use checklist::cli::{format_items, format_list_overview, Cli, Commands};
use checklist::domain::Outcome;
use checklist::error::{ChecklistError, Result};
use checklist::infrastructure::logging::{init_logging, init_stderr_logging};
use checklist::infrastructure::ui_state::{read_ui_state, write_ui_state};
use checklist::infrastructure::{DirectoryStore, ListRepository, UiState};
use clap::Parser;
use log::warn;
use std::path::{Path, PathBuf};

type Service = ListService<DirectoryStore>;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::Config { key, value, list } => configure(key, value, list),
        Commands::Lists => with_service(|service| {
            print!(
                "{}",
                format_list_overview(service.lists(), service.selected())
            );
            if service.lists().is_empty() {
                println!();
            }
            Ok(())
        }),
        Commands::New { name } => with_service(|service| {
            match service.create_list(&name) {
                Outcome::Applied(_) => println!("Created list '{}'", name.trim()),
                Outcome::Rejected(reason) => println!("Skipped: {}", reason),
            }
            Ok(())
        }),
        Commands::Delete { list } => with_service(|service| {
            let index = resolve_list(service, &list)?;
            let name = list_name(service, index);
            if service.delete_list(index).is_applied() {
                println!("Deleted list '{}'", name);
            }
            Ok(())
        }),
        Commands::Select { list } => with_service(|service| {
            let index = resolve_list(service, &list)?;
            if service.select(index).is_applied() {
                println!("Selected '{}'", list_name(service, index));
            }
            Ok(())
        }),
        Commands::Add { list, text } => with_service(|service| {
            let index = target_list(service, list.as_deref())?;
            let name = list_name(service, index);
            for entry in &text {
                match service.add_item(index, entry) {
                    Outcome::Applied(_) => println!("Added '{}' to {}", entry.trim(), name),
                    Outcome::Rejected(reason) => println!("Skipped: {}", reason),
                }
            }
            Ok(())
        }),
        Commands::Toggle { list, positions } => with_service(|service| {
            let index = target_list(service, list.as_deref())?;
            let name = list_name(service, index);
            let len = service.lists().get(index).map_or(0, |l| l.items.len());

            if let Some(bad) = positions.iter().find(|&&pos| pos == 0 || pos > len) {
                return Err(ChecklistError::InvalidIndex(format!(
                    "{} (list '{}' has {} items)",
                    bad, name, len
                )));
            }

            for pos in positions {
                if !service.toggle_item(index, pos - 1).is_applied() {
                    continue;
                }
                if let Some(item) = service
                    .lists()
                    .get(index)
                    .and_then(|l| l.items.get(pos - 1))
                {
                    let verb = if item.checked { "Checked" } else { "Unchecked" };
                    println!("{} '{}'", verb, item.text);
                }
            }
            Ok(())
        }),
        Commands::Show { list } => with_service(|service| {
            let index = target_list(service, list.as_deref())?;
            let name = list_name(service, index);
            let items = service.display_items(index).unwrap_or_default();
            print!("{}", format_items(&name, &items));
            Ok(())
        }),
    }
}

/// Open the store, run `action`, then flush writes and remember the selection
fn with_service<F>(action: F) -> Result<()>
where
    F: FnOnce(&mut Service) -> Result<()>,
{
    let (root, mut service) = open_service()?;
    let result = action(&mut service);

    service.flush();
    save_selection(&root, &service);

    result
}

fn open_service() -> Result<(PathBuf, Service)> {
    let store = DirectoryStore::discover()?;
    let config = store.load_config()?;

    let level = config.effective_log_level();
    if let Err(e) = init_logging(&level, &store.marker_dir().join("logs")) {
        eprintln!("Warning: log files disabled: {}", e);
        if let Err(e) = init_stderr_logging(&level) {
            eprintln!("Warning: logging disabled: {}", e);
        }
    }

    let root = store.root.clone();
    let repository = ListRepository::new(store).with_pretty_json(config.pretty_json);
    let mut service = ListService::open(repository, config.write_policy);

    if let Some(name) = read_ui_state(&root).and_then(|state| state.selected) {
        if let Some(index) = service.position_of(&name) {
            service.select(index);
        }
    }

    Ok((root, service))
}

fn save_selection(root: &Path, service: &Service) {
    let state = UiState {
        selected: service.selected_list().map(|list| list.name.clone()),
    };
    if let Err(e) = write_ui_state(root, &state) {
        warn!("event=save_selection status=error error={}", e);
    }
}

/// Resolve a list by exact name, falling back to its 1-based position
fn resolve_list(service: &Service, list: &str) -> Result<usize> {
    if let Some(index) = service.position_of(list) {
        return Ok(index);
    }

    match list.trim().parse::<usize>() {
        Ok(pos) if pos >= 1 && pos <= service.lists().len() => Ok(pos - 1),
        _ => Err(ChecklistError::ListNotFound(list.to_string())),
    }
}

fn target_list(service: &Service, list: Option<&str>) -> Result<usize> {
    match list {
        Some(list) => resolve_list(service, list),
        None => service
            .selected()
            .ok_or_else(|| ChecklistError::Config("No list selected".to_string())),
    }
}

fn list_name(service: &Service, index: usize) -> String {
    service
        .lists()
        .get(index)
        .map(|list| list.name.clone())
        .unwrap_or_default()
}

fn configure(key: Option<String>, value: Option<String>, list: bool) -> Result<()> {
    let store = DirectoryStore::discover()?;
    let mut config = store.load_config()?;

    if list {
        println!("write_policy = {}", config.write_policy);
        println!("pretty_json = {}", config.pretty_json);
        println!("log_level = {}", config.log_level);
        return Ok(());
    }

    match (key, value) {
        (Some(k), Some(v)) => {
            config.set(&k, &v)?;
            store.save_config(&config)?;
            println!("Set {} = {}", k, config.get(&k)?);
        }
        (Some(k), None) => println!("{}", config.get(&k)?),
        (None, _) => {
            println!("Usage: checklist config [--list | <key> [<value>]]");
            println!("Valid keys: write_policy, pretty_json, log_level");
        }
    }
    Ok(())
}
