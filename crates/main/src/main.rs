use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bio_pdf::{export, ProfileStore};

/// Exports the locally stored career bio profile as a PDF.
///
/// The profile lives in a JSON file (by default `bioFormData.json` in the
/// current directory); `export` renders it into `<Name>_bio.pdf` next to it.
#[derive(Parser)]
#[command(author, version, about = "Career bio PDF exporter")]
struct Cli {
    /// Path of the stored profile JSON.
    #[arg(long, default_value = "bioFormData.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the stored profile to a PDF in the given directory.
    #[command(name = "export")]
    Export {
        /// Directory the PDF is written into.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Print the stored profile as JSON.
    #[command(name = "show")]
    Show,

    /// Delete the stored profile.
    #[command(name = "reset")]
    Reset {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let store = ProfileStore::new(&cli.data);

    let result = match cli.command {
        Commands::Export { out_dir } => run_export(&store, &out_dir),
        Commands::Show => run_show(&store),
        Commands::Reset { yes } => run_reset(&store, yes),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn run_export(store: &ProfileStore, out_dir: &std::path::Path) -> Result<(), Box<dyn Error>> {
    let record = store.load()?;
    let exported = export(&record, out_dir)?;
    println!(
        "Generated {} ({} bytes)",
        exported.path.display(),
        exported.bytes_written
    );
    Ok(())
}

fn run_show(store: &ProfileStore) -> Result<(), Box<dyn Error>> {
    let record = store.load()?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn run_reset(store: &ProfileStore, yes: bool) -> Result<(), Box<dyn Error>> {
    if !yes {
        return Err("refusing to delete the stored profile without --yes".into());
    }
    store.reset()?;
    println!("Removed {}", store.path().display());
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
