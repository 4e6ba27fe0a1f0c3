use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use mig_engine::report::{render_analysis, render_plan, render_progress};
use mig_engine::{ConfigError, Engine, EngineConfig, Inventory, InventoryError, LogConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn inventory_arg() -> Arg {
    Arg::new("inventory")
        .long("inventory")
        .short('i')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Inventory JSON file")
}

fn cli() -> Command {
    Command::new("mig-engine")
        .version(mig_engine::VERSION)
        .about("Resolve and plan org-to-org component migrations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Engine config TOML file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging"),
        )
        .subcommand(
            Command::new("analyze")
                .about("Expand a selection and categorize what it requires")
                .arg(inventory_arg())
                .arg(
                    Arg::new("select")
                        .long("select")
                        .short('s')
                        .required(true)
                        .num_args(1..)
                        .action(ArgAction::Append)
                        .help("Selected component ids"),
                ),
        )
        .subcommand(
            Command::new("plan")
                .about("Order the whole inventory and report cycles")
                .arg(inventory_arg()),
        )
        .subcommand(
            Command::new("ready")
                .about("Show migration progress and what can start now")
                .arg(inventory_arg()),
        )
}

fn init_tracing(log: &LogConfig, verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if let Ok(filter) = EnvFilter::try_from_default_env() {
        filter
    } else {
        EnvFilter::try_new(&log.filter).map_err(|_| ConfigError::LogFilter {
            filter: log.filter.clone(),
        })?
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let installed = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| anyhow::anyhow!("failed to install logger: {err}"))
}

fn load_inventory(args: &ArgMatches) -> anyhow::Result<Inventory> {
    let path = args
        .get_one::<PathBuf>("inventory")
        .context("missing --inventory")?;
    Inventory::from_path(path).with_context(|| format!("loading inventory {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Exit code for malformed input documents, as opposed to I/O or usage failures
const EXIT_BAD_INVENTORY: u8 = 2;

fn exit_code(err: &anyhow::Error) -> ExitCode {
    let content_error = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<InventoryError>())
        .any(InventoryError::is_content_error);
    if content_error {
        ExitCode::from(EXIT_BAD_INVENTORY)
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            exit_code(&err)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    let Some((command, args)) = matches.subcommand() else {
        anyhow::bail!("no command given");
    };

    let config = match args.get_one::<PathBuf>("config") {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    init_tracing(&config.log, args.get_flag("verbose"))?;

    let json = args.get_flag("json");
    let engine = Engine::new(config);
    let inventory = load_inventory(args)?;

    match command {
        "analyze" => {
            let selected: Vec<&String> = args
                .get_many::<String>("select")
                .context("missing --select")?
                .collect();
            let result = engine.analyze(&selected, inventory.components());
            if json {
                print_json(&result)?;
            } else {
                print!(
                    "{}",
                    render_analysis(&result, engine.config().resolver.naming.separator)
                );
            }
        }
        "plan" => {
            let plan = engine.plan_order(inventory.components());
            if json {
                print_json(&plan)?;
            } else {
                print!("{}", render_plan(&plan));
            }
        }
        "ready" => {
            let progress = engine.graph(inventory.components()).progress();
            if json {
                print_json(&progress)?;
            } else {
                print!("{}", render_progress(&progress));
            }
        }
        other => anyhow::bail!("unknown command `{other}`"),
    }

    Ok(())
}
