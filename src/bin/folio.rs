//! Command-line front end for the portfolio model.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use console::{style, Term};
use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::debug;

use folio::effect::{palette, EffectParticle, Lcg};
use folio::{
    rgb_to_ansi256, AppearanceMode, ClickTarget, Config, EffectEmitter, Field,
    PointerButton, PointerEvent, Portfolio, Section,
};

const LOG_ENV: &str = "FOLIO_LOG";

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Render and drive a single-page portfolio")]
struct Cli {
    /// Configuration file (YAML). Defaults to $FOLIO_CONFIG.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the page to HTML.
    Render(RenderArgs),
    /// Inspect or change the persisted appearance.
    #[command(subcommand)]
    Theme(ThemeCommand),
    /// Submit the contact form.
    Contact(ContactArgs),
    /// Simulate one click and report the particles it spawns.
    Burst(BurstArgs),
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Write to a file instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Section to mark active.
    #[arg(long)]
    section: Option<Section>,

    /// Render with the mobile menu open.
    #[arg(long)]
    menu: bool,
}

#[derive(Debug, Subcommand)]
enum ThemeCommand {
    /// Print the mode the page would start in.
    Show,
    /// Flip the mode and persist it.
    Toggle,
    /// Persist an explicit mode.
    Set { mode: AppearanceMode },
}

#[derive(Debug, Args)]
struct ContactArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    message: String,
}

#[derive(Debug, Args)]
struct BurstArgs {
    #[arg(long, default_value_t = 0.0)]
    x: f64,
    #[arg(long, default_value_t = 0.0)]
    y: f64,
    /// DOM button index: 0 primary, 1 auxiliary, 2 secondary.
    #[arg(long, default_value_t = 0)]
    button: u16,
    /// Seed for reproducible bursts.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the particles as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Folio(#[from] folio::Error),

    #[error("logger setup failed: {0}")]
    Logger(#[from] FlexiLoggerError),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown pointer button {0}; expected 0 to 4")]
    Button(u16),
}

impl From<folio::ConfigError> for CliError {
    fn from(err: folio::ConfigError) -> Self {
        CliError::Folio(err.into())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let config = Config::discover(cli.config.as_deref())?;
    let _logger = init_logging(cli.verbose, &config.log_level)?;
    debug!("running {:?}", cli.command);

    match cli.command {
        Command::Render(args) => render(&config, args),
        Command::Theme(command) => theme(&config, command),
        Command::Contact(args) => contact(&config, args),
        Command::Burst(args) => burst(&config, args),
    }
}

fn init_logging(verbose: u8, configured: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    let level = match verbose {
        0 => std::env::var(LOG_ENV).unwrap_or_else(|_| configured.to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    Logger::try_with_str(level)?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
}

fn render(config: &Config, args: RenderArgs) -> Result<ExitCode, CliError> {
    let mut page = Portfolio::from_config(config)?;
    if let Some(section) = args.section {
        page.navigation_mut().select(section);
    }
    if args.menu {
        page.navigation_mut().open_menu();
    }
    let html = page.render_html()?;

    match args.out {
        Some(path) => {
            std::fs::write(&path, html)?;
            println!("wrote {}", path.display());
        }
        None => std::io::stdout().write_all(html.as_bytes())?,
    }
    Ok(ExitCode::SUCCESS)
}

fn theme(config: &Config, command: ThemeCommand) -> Result<ExitCode, CliError> {
    let mut page = Portfolio::from_config(config)?;
    let mode = match command {
        ThemeCommand::Show => page.appearance(),
        ThemeCommand::Toggle => page.toggle_theme(),
        ThemeCommand::Set { mode } => {
            page.set_theme(mode);
            mode
        }
    };
    println!("{mode}");
    Ok(ExitCode::SUCCESS)
}

fn contact(config: &Config, args: ContactArgs) -> Result<ExitCode, CliError> {
    let mut page = Portfolio::from_config(config)?;
    page.set_field(Field::Name, args.name);
    page.set_field(Field::Email, args.email);
    page.set_field(Field::Message, args.message);

    let result = page.submit_contact();
    let width = usize::from(Term::stdout().size().1).clamp(24, 72);
    if let Some(notice) = page.toaster().latest() {
        println!("{}", notice.to_terminal(width));
    }

    Ok(match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{err}");
            ExitCode::FAILURE
        }
    })
}

fn burst(config: &Config, args: BurstArgs) -> Result<ExitCode, CliError> {
    let button = PointerButton::from_index(args.button).ok_or(CliError::Button(args.button))?;
    let mut page = Portfolio::from_config(config)?;
    if let Some(seed) = args.seed {
        let emitter = EffectEmitter::with_rng(config.effects.clone(), Box::new(Lcg::seeded(seed)));
        page = page.with_effects(Some(emitter));
    }

    let event = PointerEvent::new(button, args.x, args.y, ClickTarget::Background);
    page.click(event, Duration::ZERO);
    // Let the fade start so every particle has its drift target.
    page.advance(config.effects.start_delay);

    let particles: Vec<EffectParticle> = page
        .effects()
        .map(|effects| effects.live().cloned().collect())
        .unwrap_or_default();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&particles)?);
    } else {
        for particle in &particles {
            print_particle(particle);
        }
    }

    let settled = config.effects.lifetime;
    page.advance(settled);
    if !args.json {
        println!(
            "{} spawned, {} left after {}ms",
            particles.len(),
            page.document().element_count(),
            settled.as_millis()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn print_particle(particle: &EffectParticle) {
    let swatch = style("\u{25cf}").color256(rgb_to_ansi256(particle.color.rgb()));
    let name = palette::name_of(&particle.color).unwrap_or("custom");
    let (dx, dy) = particle
        .motion
        .map(|motion| (motion.target.translate_x, motion.target.translate_y))
        .unwrap_or_default();
    println!(
        "{swatch} {:<7} {:>2}px  drift ({dx:+.1}, {dy:+.1})",
        name, particle.size
    );
}
