//! typefolio CLI
//!
//! Show a personal portfolio in the terminal, headed by a typewriter line.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use humansize::{format_size, BINARY};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use typefolio::config::{self, default_page_path};
use typefolio::driver::{self, Driver};
use typefolio::logging::{self, LogTarget};
use typefolio::report::format_page;
use typefolio::resume::{self, default_download_dir};
use typefolio::tui;
use typefolio::tui::theme::CARET;
use typefolio::types::OutputFormat;
use typefolio::typewriter::Typewriter;

#[derive(Parser)]
#[command(name = "typefolio")]
#[command(about = "Terminal personal portfolio with a typewriter headline")]
#[command(version)]
struct Cli {
    /// Page file (default: <config dir>/typefolio/page.toml, else built-in page)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at info level (override with TYPEFOLIO_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the portfolio interactively (default)
    Show {
        /// Where downloaded files go (default: Downloads folder)
        #[arg(long)]
        download_dir: Option<PathBuf>,
    },

    /// Print the page and exit
    Render {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Play the typewriter headline on a single line
    Type {
        /// Stop after this many seconds (default: wait for Enter)
        #[arg(long)]
        seconds: Option<u64>,

        /// Don't draw the caret after the text
        #[arg(long)]
        no_caret: bool,
    },

    /// Copy the resume into the downloads folder
    ///
    /// Without a page file, the resume is read from the typefolio config
    /// directory (next to where `init` writes page.toml).
    Resume {
        /// Destination directory (default: Downloads folder)
        #[arg(long)]
        dest: Option<PathBuf>,
    },

    /// Write the built-in page to the page file for editing
    Init {
        /// Overwrite an existing page file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Show { download_dir: None });

    // The TUI owns the terminal, so its logs go to a file
    let log_target = match command {
        Commands::Show { .. } => LogTarget::File(logging::default_log_path()),
        _ => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(log_target, cli.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let page_file = cli.config;
    let result = match command {
        Commands::Show { download_dir } => cmd_show(page_file, download_dir),
        Commands::Render { format } => cmd_render(page_file, format.into()),
        Commands::Type { seconds, no_caret } => cmd_type(page_file, seconds, no_caret),
        Commands::Resume { dest } => cmd_resume(page_file, dest),
        Commands::Init { force } => cmd_init(page_file, force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_show(page_file: Option<PathBuf>, download_dir: Option<PathBuf>) -> Result<(), String> {
    let loaded = config::load(page_file.as_deref()).map_err(|e| e.to_string())?;
    let download_dir = download_dir.unwrap_or_else(default_download_dir);

    tui::run(loaded, download_dir).map_err(|e| e.to_string())
}

fn cmd_render(page_file: Option<PathBuf>, format: OutputFormat) -> Result<(), String> {
    let loaded = config::load(page_file.as_deref()).map_err(|e| e.to_string())?;
    print!("{}", format_page(&loaded.page, format));
    Ok(())
}

fn cmd_type(page_file: Option<PathBuf>, seconds: Option<u64>, no_caret: bool) -> Result<(), String> {
    let loaded = config::load(page_file.as_deref()).map_err(|e| e.to_string())?;
    let typewriter = Typewriter::new(&loaded.page.typewriter).map_err(|e| e.to_string())?;
    info!(
        cycle_ms = typewriter.cycle_duration().as_millis() as u64,
        "typing headline"
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{prefix:.bold}  {msg:.cyan}").unwrap());
    pb.set_prefix(loaded.page.name.clone());

    let caret = if no_caret { "" } else { CARET };
    let line = pb.clone();
    let driver = Driver::start(
        typewriter,
        driver::from_fn(move |text: &str| line.set_message(format!("{}{}", text, caret))),
    );

    match seconds {
        Some(secs) => thread::sleep(Duration::from_secs(secs)),
        None => {
            pb.println("Press Enter to stop.");
            let mut input = String::new();
            io::stdin()
                .lock()
                .read_line(&mut input)
                .map_err(|e| e.to_string())?;
        }
    }

    let stopped = driver.stop();
    pb.finish_and_clear();

    match stopped {
        Some(typewriter) => info!(
            cycles = typewriter.cycles(),
            phrase = typewriter.current_phrase(),
            "typewriter stopped"
        ),
        None => warn!("typewriter timer panicked"),
    }
    Ok(())
}

fn cmd_resume(page_file: Option<PathBuf>, dest: Option<PathBuf>) -> Result<(), String> {
    let loaded = config::load(page_file.as_deref()).map_err(|e| e.to_string())?;
    let dest = dest.unwrap_or_else(default_download_dir);

    let done = resume::download(loaded.page.resume.as_ref(), &dest).map_err(|e| e.to_string())?;

    println!(
        "Saved {} ({})",
        done.path.display(),
        format_size(done.bytes, BINARY)
    );
    Ok(())
}

fn cmd_init(page_file: Option<PathBuf>, force: bool) -> Result<(), String> {
    let path = page_file.unwrap_or_else(default_page_path);
    config::write_builtin(&path, force).map_err(|e| e.to_string())?;

    println!("Wrote {}", path.display());
    println!();
    println!("Edit it, then run `typefolio` to view your page.");

    // What we just wrote must load back
    config::load_file(&path)
        .map(|_| ())
        .map_err(|e| format!("Written page does not load: {}", e))
}
