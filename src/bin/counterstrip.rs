use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use counterstrip::{
    CounterGenerator, CounterOutput, CounterRequest, DigitString, MAX_DIGITS, RenderOpts,
    SpeedMultiplier, default_file_stem, default_output_dir, ensure_dir,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "counterstrip", version)]
struct Cli {
    /// Directory holding one subdirectory per theme.
    #[arg(long, global = true, default_value = "theme")]
    themes: PathBuf,

    /// Log progress to stderr (overridden by `RUST_LOG`).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available themes.
    Themes(ThemesArgs),
    /// Render a counter non-interactively.
    Render(RenderArgs),
    /// Prompt for theme, digits and output directory.
    Interactive,
}

#[derive(Parser, Debug)]
struct ThemesArgs {
    /// Print the theme list as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Digits to render (0-9 only).
    digits: String,

    /// Theme name.
    #[arg(long)]
    theme: String,

    /// Output directory (default: `output/` beside the executable).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output file stem (default: `<first 10 digits>_<theme>`).
    #[arg(long)]
    name: Option<String>,

    /// Playback speed for animated themes; durations are divided by it.
    #[arg(long, default_value_t = SpeedMultiplier::DEFAULT.get())]
    speed: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::Themes(args) => cmd_themes(&cli.themes, args),
        Command::Render(args) => cmd_render(&cli.themes, args),
        Command::Interactive => {
            let generator = CounterGenerator::new(&cli.themes)?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_interactive(&generator, stdin.lock(), stdout.lock())
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_themes(root: &std::path::Path, args: ThemesArgs) -> anyhow::Result<()> {
    let generator = CounterGenerator::new(root)?;
    let themes = generator.registry().describe();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&themes).context("serialize theme list")?
        );
    } else {
        let mut stdout = std::io::stdout().lock();
        print_theme_list(&generator, &mut stdout)?;
    }
    Ok(())
}

fn cmd_render(root: &std::path::Path, args: RenderArgs) -> anyhow::Result<()> {
    let generator = CounterGenerator::new(root)?;
    let digits = DigitString::parse_bounded(&args.digits, MAX_DIGITS)?;
    let opts = RenderOpts {
        speed: SpeedMultiplier::new(args.speed)?,
    };
    let out_dir = match args.out {
        Some(dir) => {
            ensure_dir(&dir)?;
            dir
        }
        None => default_output_dir()?,
    };
    let stem = args
        .name
        .unwrap_or_else(|| default_file_stem(&digits, &args.theme));

    let req = CounterRequest::new(digits, args.theme, out_dir)
        .with_filename(stem)
        .with_opts(opts);
    let output = generator.run(&req)?;
    report(&output, &mut std::io::stdout().lock())?;
    Ok(())
}

fn print_theme_list(generator: &CounterGenerator, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Available themes:")?;
    for info in generator.registry().describe() {
        writeln!(out, "{}. {}({})", info.index, info.name, info.extension)?;
    }
    Ok(())
}

fn report(output: &CounterOutput, out: &mut impl Write) -> anyhow::Result<()> {
    for path in output.paths() {
        writeln!(out, "wrote {}", path.display())?;
    }
    Ok(())
}

fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    question: &str,
) -> anyhow::Result<String> {
    write!(out, "{question}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("read from stdin")?;
    Ok(line.trim().to_string())
}

/// Prompt-driven flow. Bad input and render failures are reported, never propagated.
fn run_interactive(
    generator: &CounterGenerator,
    mut input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    print_theme_list(generator, &mut out)?;

    let choice = prompt(&mut input, &mut out, "\nTheme number: ")?;
    let theme = match choice
        .parse::<usize>()
        .ok()
        .and_then(|i| generator.registry().by_index(i))
    {
        Some(theme) => theme.name.clone(),
        None => {
            writeln!(out, "Invalid theme choice. Enter one of the listed numbers.")?;
            return Ok(());
        }
    };

    let raw = prompt(&mut input, &mut out, "Digits: ")?;
    let digits = match DigitString::parse_bounded(&raw, MAX_DIGITS) {
        Ok(digits) => digits,
        Err(_) => {
            writeln!(
                out,
                "Invalid number. Enter digits only (at most {MAX_DIGITS})."
            )?;
            return Ok(());
        }
    };

    let custom = prompt(
        &mut input,
        &mut out,
        "Output directory (blank for default): ",
    )?;
    let out_dir = if custom.is_empty() {
        default_output_dir()
    } else {
        let dir = PathBuf::from(custom);
        ensure_dir(&dir).map(|()| dir)
    };
    let out_dir = match out_dir {
        Ok(dir) => dir,
        Err(err) => {
            writeln!(out, "Could not create output directory: {err}")?;
            return Ok(());
        }
    };

    let stem = default_file_stem(&digits, &theme);
    let req = CounterRequest::new(digits, theme, out_dir).with_filename(stem);
    match generator.run(&req) {
        Ok(output) => report(&output, &mut out)?,
        Err(err) => {
            tracing::warn!(error = %err, "render failed");
            writeln!(out, "Generation failed: {err}")?;
            writeln!(out, "Check that the theme has every digit, or try another theme.")?;
        }
    }
    Ok(())
}
