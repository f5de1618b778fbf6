use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bingo::commands::{self, EditOptions, NewOptions};
use bingo::error_fmt::{AppError, SettingsResultExt};
use bingo::GlobalConfig;

#[derive(Parser)]
#[command(name = "bingo")]
#[command(about = "Build bingo cards and share them as self-contained links")]
struct Cli {
    /// Settings file (default: ~/.config/bingo/config.yml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Card field arguments shared by `new` and `edit`
#[derive(Args, Clone, Default)]
struct CardFields {
    /// Title shown above the grid
    #[arg(long, short)]
    title: Option<String>,
    /// Text of the center cell
    #[arg(long, short)]
    center: Option<String>,
    /// File with one entry per line (`-` reads stdin)
    #[arg(long, short = 'f')]
    entries_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a card and print its share link
    New {
        #[command(flatten)]
        fields: CardFields,
        /// An entry (repeat for each entry)
        #[arg(long, short)]
        entry: Vec<String>,
        /// Shuffle the entries before sharing
        #[arg(long, short)]
        shuffle: bool,
        /// Also copy the link to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Draw a card in the terminal
    Show {
        /// Share link or token (shows the default card if omitted)
        link: Option<String>,
        /// Print the card as JSON
        #[arg(long)]
        json: bool,
    },
    /// Shuffle a card's entries and print the new link
    Shuffle {
        /// Share link or token
        link: String,
        /// Also copy the link to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Change a card and print the new link
    Edit {
        /// Share link or token
        link: String,
        #[command(flatten)]
        fields: CardFields,
        /// Edit the entries in an editor (optionally specify editor name)
        #[arg(long, short)]
        editor: Option<Option<String>>,
        /// Also copy the link to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Copy a card's share link to the clipboard
    Share {
        /// Share link or token (shares the default card if omitted)
        link: Option<String>,
    },
    /// Play a card interactively, marking cells as they come up
    Play {
        /// Share link or token (plays the default card if omitted)
        link: Option<String>,
    },
    /// Export a card as a standalone HTML page
    Html {
        /// Share link or token (exports the default card if omitted)
        link: Option<String>,
        /// Write the page to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "bingo=debug" } else { "bingo=error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(explicit: Option<&PathBuf>) -> Result<GlobalConfig, AppError> {
    let path = GlobalConfig::resolve_path(explicit.map(PathBuf::as_path));
    tracing::debug!(path = %path.display(), "loading settings");
    GlobalConfig::load(&path).with_path(&path.display().to_string())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprint!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = load_config(cli.config.as_ref())?;
    let color = config.color && !cli.no_color;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::New {
            fields,
            entry,
            shuffle,
            copy,
        } => {
            let opts = NewOptions {
                title: fields.title,
                center: fields.center,
                entries: entry,
                entries_file: fields.entries_file,
                shuffle,
                copy,
            };
            commands::new(&config, &opts, &mut stdout)
        }
        Commands::Show { link, json } => {
            commands::show(&config, link.as_deref(), json, color, &mut stdout)
        }
        Commands::Shuffle { link, copy } => commands::shuffle(&config, &link, copy, &mut stdout),
        Commands::Edit {
            link,
            fields,
            editor,
            copy,
        } => {
            let opts = EditOptions {
                title: fields.title,
                center: fields.center,
                entries_file: fields.entries_file,
                editor,
                copy,
            };
            commands::edit(&config, &link, &opts, &mut stdout)
        }
        Commands::Share { link } => commands::share(&config, link.as_deref(), &mut stdout),
        Commands::Play { link } => {
            let stdin = io::stdin().lock();
            commands::play(&config, link.as_deref(), color, stdin, &mut stdout).map(|_| ())
        }
        Commands::Html { link, output } => {
            commands::html(&config, link.as_deref(), output.as_deref(), &mut stdout)
        }
    }
}
