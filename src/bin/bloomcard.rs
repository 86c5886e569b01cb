use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bloomcard", version, about = "Compose the gradient flower card as a PNG")]
struct Cli {
    /// Project root; default input and output locations are resolved against it.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Logo image [default: <root>/images/front_image.png].
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Left-top placeholder image [default: <root>/images/1.png].
    #[arg(long)]
    image1: Option<PathBuf>,

    /// Left-bottom placeholder image [default: <root>/images/2.png].
    #[arg(long)]
    image2: Option<PathBuf>,

    /// Right-top placeholder image [default: <root>/images/3.png].
    #[arg(long)]
    image3: Option<PathBuf>,

    /// Right-bottom placeholder image [default: <root>/images/4.png].
    #[arg(long)]
    image4: Option<PathBuf>,

    /// Font used for table text [default: <root>/font/Comic Sans MS Bold.ttf].
    #[arg(long)]
    font: Option<PathBuf>,

    /// Table JSON; a missing or malformed file yields an empty table [default: <root>/data/data.json].
    #[arg(long)]
    table: Option<PathBuf>,

    /// Directory the PNG is written into [default: <root>].
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print the solved layout as JSON to stderr before rendering.
    #[arg(long)]
    dump_layout: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = match cli.root.clone() {
        Some(root) => root,
        None => std::env::current_dir().context("resolve current directory")?,
    };

    let mut inputs = bloomcard::CardInputs::from_root(&root);
    let overrides = [cli.image1, cli.image2, cli.image3, cli.image4];
    for (slot, path) in inputs.placeholders.iter_mut().zip(overrides) {
        if let Some(path) = path {
            *slot = path;
        }
    }
    if let Some(logo) = cli.logo {
        inputs.logo = logo;
    }
    if let Some(font) = cli.font {
        inputs.font = font;
    }
    if let Some(table) = cli.table {
        inputs.table = table;
    }
    let out_dir = cli.out_dir.unwrap_or(root);

    if cli.dump_layout {
        let layout = bloomcard::CardLayout::solve(&bloomcard::CardStyle::default())?;
        eprintln!("{}", layout.to_json_pretty()?);
    }

    let path = bloomcard::compose_card(&inputs, &out_dir)?;
    println!("The image has been saved to: {}", path.display());
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
