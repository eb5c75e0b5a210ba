use std::io;
use std::path::PathBuf;

use citylist::{
    CityList, CityStore, DoublyLinkedList, ListVariant, LoadOptions, MalformedRowPolicy, Result,
    Session, SinglyLinkedList,
};
use clap::{Parser, ValueEnum};
use log::info;

#[derive(Parser)]
#[command(
    name = "citylist",
    about = "Rank the most populous cities from a CSV file and edit them as a linked list",
    version
)]
struct Cli {
    /// CSV file with a header row (city at field 0, region at 2, population at 8)
    #[arg(default_value = "uscities.csv")]
    input: PathBuf,

    /// How many of the most populous cities to load into the list
    #[arg(short = 'k', long, default_value_t = 20)]
    top: usize,

    /// List implementation to run the session on
    #[arg(long, value_enum, default_value_t = VariantArg::Singly)]
    variant: VariantArg,

    /// Fail on the first malformed row instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Maximum number of data rows to read
    #[arg(long = "max-rows", default_value_t = LoadOptions::DEFAULT_MAX_ROWS)]
    max_rows: usize,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum VariantArg {
    Singly,
    Doubly,
}

impl From<VariantArg> for ListVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Singly => ListVariant::Singly,
            VariantArg::Doubly => ListVariant::Doubly,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = LoadOptions {
        max_rows: Some(cli.max_rows),
        on_malformed: if cli.strict {
            MalformedRowPolicy::Abort
        } else {
            MalformedRowPolicy::Skip
        },
        ..LoadOptions::default()
    };

    let store = CityStore::open(&cli.input, &options)?;
    let ranked = store.top_k(cli.top)?;

    let variant = ListVariant::from(cli.variant);
    info!("Building {} list from the top {} cities", variant, ranked.len());
    match variant {
        ListVariant::Singly => run_session(SinglyLinkedList::from_ranked(ranked)),
        ListVariant::Doubly => run_session(DoublyLinkedList::from_ranked(ranked)),
    }
}

fn run_session<'a, L: CityList<'a>>(list: L) -> Result<()> {
    let mut session = Session::new(list, io::stdin().lock(), io::stdout().lock());
    session.run()
}
