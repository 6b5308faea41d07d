use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use rolegate::{
    PermissionCatalog, RoleAggregator, SelectionEngine, builtin_presentation, resolve_portal_key,
};
use rolegate_cli::{
    can_delete_json, module_state_json, module_states_json, modules_json, parse_counts,
    parse_permission_set, render_can_delete, render_modules, render_portal, render_states,
    render_summary, summary_json,
};
use rolegate_config::{LogConfig, SummaryConfig};
use rolegate_observability::init_logging;

#[derive(Parser)]
#[command(name = "rolegate-cli")]
#[command(about = "Rolegate CLI - Inspect the permission catalog and role selections", long_about = None)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List modules and their permissions
    Modules,
    /// Show the checkbox state of one module, or of every module
    ModuleState {
        /// Comma-separated permission ids
        #[arg(short = 'p', long, default_value = "")]
        permissions: String,

        /// Module id (all modules when omitted)
        #[arg(short = 'm', long)]
        module: Option<String>,
    },
    /// Summarise a permission selection per module
    Summary {
        /// Comma-separated permission ids
        #[arg(short = 'p', long, default_value = "")]
        permissions: String,

        /// Modules listed before "+N more" (PERMISSION_SUMMARY_MAX_MODULES when omitted)
        #[arg(long)]
        max: Option<usize>,
    },
    /// Resolve a portal key (godMode, dashboard, clientPortal)
    Portal {
        key: String,
    },
    /// Check whether a resource with the given reference counts can be deleted
    CanDelete {
        /// Comma-separated counts, e.g. "3,0"
        #[arg(short = 'c', long)]
        counts: String,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    init_logging(&LogConfig::from_env())?;

    let cli = Cli::parse();
    let catalog = PermissionCatalog::builtin();

    match cli.command {
        Commands::Modules => handle_modules(&catalog, cli.json),
        Commands::ModuleState {
            permissions,
            module,
        } => handle_module_state(&catalog, &permissions, module.as_deref(), cli.json),
        Commands::Summary { permissions, max } => {
            handle_summary(&catalog, &permissions, max, cli.json)
        }
        Commands::Portal { key } => handle_portal(&key, cli.json),
        Commands::CanDelete { counts } => handle_can_delete(&counts, cli.json),
    }
}

fn handle_modules(catalog: &PermissionCatalog, as_json: bool) -> Result<()> {
    let presentation = builtin_presentation();
    if as_json {
        let body = modules_json(catalog, &presentation);
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", render_modules(catalog, &presentation));
    }
    Ok(())
}

fn handle_module_state(
    catalog: &PermissionCatalog,
    permissions: &str,
    module: Option<&str>,
    as_json: bool,
) -> Result<()> {
    let engine = SelectionEngine::new(catalog);
    let selected = parse_permission_set(permissions);

    for id in selected.iter().filter(|id| !catalog.contains(id.as_str())) {
        tracing::warn!(permission_id = %id, "Permission is not in the catalog");
    }

    match module {
        Some(module_id) => {
            let state = engine.module_state(&selected, module_id)?;
            if as_json {
                println!("{}", module_state_json(module_id, state));
            } else {
                println!("{}", state);
            }
        }
        None if as_json => {
            let states = module_states_json(&engine, &selected);
            println!("{}", serde_json::to_string_pretty(&states)?);
        }
        None => print!("{}", render_states(&engine, &selected)),
    }
    Ok(())
}

fn handle_summary(
    catalog: &PermissionCatalog,
    permissions: &str,
    max: Option<usize>,
    as_json: bool,
) -> Result<()> {
    let aggregator = RoleAggregator::new(catalog);
    let selected = parse_permission_set(permissions);
    let max_modules = max.unwrap_or_else(|| SummaryConfig::from_env().max_modules);

    let summary = aggregator.summarize(&selected, max_modules);
    let total = aggregator.total_selected(&selected);

    if as_json {
        let body = summary_json(&summary, total);
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", render_summary(&summary, total));
    }
    Ok(())
}

fn handle_portal(key: &str, as_json: bool) -> Result<()> {
    let portal = resolve_portal_key(key)?;
    if as_json {
        println!("{}", serde_json::to_string(&portal)?);
    } else {
        println!("{}", render_portal(&portal));
    }
    Ok(())
}

fn handle_can_delete(counts: &str, as_json: bool) -> Result<()> {
    let usage = parse_counts(counts)?;
    if as_json {
        println!("{}", can_delete_json(&usage));
    } else {
        println!("{}", render_can_delete(&usage));
    }
    Ok(())
}
