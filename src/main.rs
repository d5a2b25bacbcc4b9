use anyhow::Context;
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use pali_translit::{
    detect_script, fix_xsl_name, ConversionRequest, RomanStyle, Script, Transliterator,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Files to convert; reads stdin and writes stdout when omitted
    inputs: Vec<PathBuf>,

    /// Source script, or "auto" to detect it from each input
    #[arg(short, long)]
    from: Option<String>,

    /// Target script
    #[arg(short, long)]
    to: Option<Script>,

    /// Roman output style (iso, iast, common, least, unique)
    #[arg(short, long)]
    style: Option<RomanStyle>,

    /// Route through an intermediate script
    #[arg(long)]
    via: Option<Script>,

    /// Keep digits in their source form
    #[arg(long)]
    no_numerals: bool,

    /// Read Roman input with Sanskrit conventions
    #[arg(long)]
    sanskrit: bool,

    /// How input text is structured
    #[arg(short, long, value_enum, default_value_t = Mode::Plain)]
    mode: Mode,

    /// JSON request file; command-line flags override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for converted files (defaults to each input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Log route resolution and per-file details
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Text or XML; markup is left alone
    Plain,
    /// Convert everything, markup included
    Quick,
    /// BJT JSON records: only "text" values
    Bjt,
    /// SC JSON records: every "key": "value" value
    Sc,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Config file first, then flags on top. `None` source means detect per input.
fn build_request(args: &Args) -> anyhow::Result<(ConversionRequest, Option<Script>)> {
    let mut request = match &args.config {
        Some(path) => ConversionRequest::from_json_file(path)?,
        None => ConversionRequest::default(),
    };

    let source = match args.from.as_deref() {
        Some(from) if from.eq_ignore_ascii_case("auto") => None,
        Some(from) => Some(from.parse::<Script>()?),
        None if args.config.is_some() => Some(request.source),
        None => None,
    };

    if let Some(to) = args.to {
        request.target = to;
    }
    if let Some(style) = args.style {
        request.roman_style = style;
    }
    if let Some(via) = args.via {
        request.via = Some(via);
    }
    if args.no_numerals {
        request.include_numerals = false;
    }
    if args.sanskrit {
        request.sanskrit = true;
    }

    Ok((request, source))
}

/// Convert line by line in parallel; no supported markup spans a line break.
fn convert_text(text: &str, transliterator: &Transliterator, mode: Mode) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    lines
        .par_iter()
        .map(|line| match mode {
            Mode::Plain => transliterator.convert(line),
            Mode::Quick => transliterator.convert_quick(line),
            Mode::Bjt => transliterator.convert_bjt(line),
            Mode::Sc => transliterator.convert_sc(line),
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn output_path(input: &Path, target: Script, output_dir: Option<&Path>) -> anyhow::Result<PathBuf> {
    let file_name = input
        .file_name()
        .with_context(|| format!("{} has no file name", input.display()))?
        .to_string_lossy();
    let name = format!("{}_{}", target.name().to_lowercase(), file_name);
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    Ok(dir.join(name))
}

/// Returns the written path, or `None` when the file was skipped.
fn process_file(
    input: &Path,
    base: &ConversionRequest,
    source: Option<Script>,
    mode: Mode,
    output_dir: Option<&Path>,
) -> anyhow::Result<Option<PathBuf>> {
    let text = fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;

    let source = source.unwrap_or_else(|| detect_script(&text));
    if source == Script::Unknown {
        warn!(file = %input.display(), "could not detect script, skipping");
        return Ok(None);
    }
    if source == base.target && source != Script::Roman {
        info!(file = %input.display(), script = %source, "already in target script, skipping");
        return Ok(None);
    }

    let transliterator = Transliterator::new(ConversionRequest { source, ..*base });
    let mut output = convert_text(&text, &transliterator, mode);
    if input.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("xml")) {
        output = fix_xsl_name(&output, source, base.target);
    }

    let path = output_path(input, base.target, output_dir)?;
    let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(output.as_bytes())?;
    writer.flush()?;

    debug!(input = %input.display(), output = %path.display(), source = %source, "converted file");
    Ok(Some(path))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let (request, source) = build_request(&args)?;

    if args.inputs.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        let source = source.unwrap_or_else(|| detect_script(&text));
        info!(source = %source, target = %request.target, "converting stdin");

        let transliterator = Transliterator::new(ConversionRequest { source, ..request });
        let output = convert_text(&text, &transliterator, args.mode);
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        writer.write_all(output.as_bytes())?;
        writer.flush()?;
        return Ok(());
    }

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }

    println!("Processing {} files...", args.inputs.len());
    let start = Instant::now();

    let results: Vec<(&PathBuf, anyhow::Result<Option<PathBuf>>)> = args
        .inputs
        .par_iter()
        .map(|input| {
            let result = process_file(input, &request, source, args.mode, args.output_dir.as_deref());
            (input, result)
        })
        .collect();

    let mut written = 0usize;
    let mut failed = 0usize;
    for (input, result) in &results {
        match result {
            Ok(Some(path)) => {
                written += 1;
                println!("{} -> {}", input.display(), path.display());
            }
            Ok(None) => {}
            Err(err) => {
                failed += 1;
                warn!(file = %input.display(), "{err:#}");
            }
        }
    }

    let duration = start.elapsed();
    println!(
        "Done. Converted {} of {} files to {}",
        written,
        results.len(),
        request.target
    );
    println!("Time taken: {:.2}s", duration.as_secs_f32());

    if failed > 0 {
        anyhow::bail!("{failed} file(s) failed");
    }
    Ok(())
}
