//! Order workbook command line
//!
//! One subcommand per item of the workbook's order menu, plus `init` to
//! create an empty workbook.

use clap::{Arg, ArgMatches, Command};
use orderflow_core::{
    store::JsonWorkbookStore,
    workflow::{ActionContext, MenuAction, OrderWorkflow},
    OrderServerClient, OrderflowConfig,
};
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("orderflow")
        .version("1.0.0")
        .about("Approve requested items and turn them into orders")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .env("ORDERFLOW_CONFIG")
                .global(true)
                .help("Configuration file path (defaults are used when omitted)")
        )
        .arg(
            Arg::new("workbook")
                .long("workbook")
                .short('w')
                .value_name("FILE")
                .global(true)
                .help("Workbook file, overrides the configured path")
        )
        .subcommand(
            Command::new("init")
                .about("Create an empty workbook with the four order tables")
                .arg(
                    Arg::new("item-header")
                        .long("item-header")
                        .value_name("NAME")
                        .action(clap::ArgAction::Append)
                        .help("Item column header, repeat for each column")
                )
        )
        .subcommand(Command::new("menu").about("List the order menu actions"))
        .subcommand(Command::new("approve").about(MenuAction::ApproveChecked.label()))
        .subcommand(
            Command::new("download")
                .about(MenuAction::DownloadCsv.label())
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .short('o')
                        .value_name("DIR")
                        .help("Directory the order CSV is written to")
                )
        )
        .subcommand(Command::new("send").about(MenuAction::SendToServer.label()))
}

fn load_config(matches: &ArgMatches) -> Result<OrderflowConfig, Box<dyn std::error::Error + Send + Sync>> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => {
            let config = OrderflowConfig::from_file(path)?;
            log::info!("Loaded configuration from {}", path);
            config
        }
        None => {
            log::info!("No configuration file given, using defaults");
            OrderflowConfig::default()
        }
    };

    if let Some(workbook) = matches.get_one::<String>("workbook") {
        config.workbook.path = PathBuf::from(workbook);
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let matches = cli().get_matches();
    let config = load_config(&matches)?;

    let (action, sub_matches) = match matches.subcommand() {
        Some(("init", sub)) => {
            let headers: Vec<&str> = sub
                .get_many::<String>("item-header")
                .map(|values| values.map(String::as_str).collect())
                .unwrap_or_default();
            JsonWorkbookStore::create(&config.workbook.path, &headers)?;
            println!("Created workbook {}", config.workbook.path.display());
            return Ok(());
        }
        Some(("menu", _)) => {
            for action in MenuAction::ALL {
                println!("{}", action.label());
            }
            return Ok(());
        }
        Some(("approve", sub)) => (MenuAction::ApproveChecked, sub),
        Some(("download", sub)) => (MenuAction::DownloadCsv, sub),
        Some(("send", sub)) => (MenuAction::SendToServer, sub),
        _ => unreachable!("subcommand is required"),
    };

    let out_dir = sub_matches
        .try_get_one::<String>("out-dir")
        .ok()
        .flatten()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.export.out_dir.clone());

    let store = JsonWorkbookStore::open(&config.workbook.path)?;
    log::info!("Using workbook {}", store.path().display());

    let sender = OrderServerClient::new(config.order_server.clone())?;
    let ctx = ActionContext {
        out_dir: &out_dir,
        sender: &sender,
    };

    let mut workflow = OrderWorkflow::new(store, config.tables.clone());
    let outcome = workflow.run_action(action, &ctx).await;

    println!("{}", outcome.message);
    if outcome.is_failure() {
        std::process::exit(1);
    }

    Ok(())
}
