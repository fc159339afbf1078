use anyhow::{Context, Result};
use argeval_corpus::{format_corpus, write_tsv, Corpus};
use argeval_ingest::{
    build_corpus, classify, classify_opt, classify_with_aspect, classify_with_aspect_opt,
    ArgumentReader, TableSchema,
};
use argeval_record::EvalField;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;

use crate::flags::FieldFlag;

mod flags;

#[derive(Parser)]
#[command(name = "argeval")]
#[command(about = "Balanced corpora from argumentative-span evaluations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a balanced argument/non-argument corpus
    Classify(ClassifyArgs),
    /// Export the complete corpus as a delimited table
    Export(ExportArgs),
    /// Print the verbose corpus rendering
    Show(ShowArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Source annotation file (tab-delimited, header row)
    #[arg(short, long)]
    input: PathBuf,

    /// Field=value refinements applied after the main operation (repeatable)
    #[arg(long = "filter", value_name = "FIELD=VALUE")]
    filters: Vec<String>,
}

#[derive(Args)]
struct ClassifyArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Single-pass symmetric balancing (2*min(p,q) per proposal) instead
    /// of the two-pass completion (p + min(p,q))
    #[arg(long)]
    one_pass: bool,

    /// Keep only aspect-related arguments on the positive side
    #[arg(long)]
    with_aspect: bool,

    /// Seed for the sampling RNG (omit for entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Write a delimited table here instead of printing the verbose form
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Comma-separated evaluation fields for the exported table
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = FieldFlag::ALL)]
    fields: Vec<FieldFlag>,

    /// Print a JSON summary instead of the verbose rendering
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ExportArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output table path
    #[arg(short, long)]
    output: PathBuf,

    /// Comma-separated evaluation fields for the exported table
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = FieldFlag::ALL)]
    fields: Vec<FieldFlag>,
}

#[derive(Args)]
struct ShowArgs {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Serialize)]
struct Summary {
    proposals: usize,
    arguments: usize,
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Classify(args) => run_classify(args),
        Commands::Export(args) => run_export(args),
        Commands::Show(args) => run_show(args),
    }
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    let reader = open_reader(&args.input)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let corpus = match (args.one_pass, args.with_aspect) {
        (true, true) => classify_with_aspect_opt(reader, &mut rng),
        (true, false) => classify_opt(reader, &mut rng),
        (false, true) => classify_with_aspect(reader, &mut rng),
        (false, false) => classify(reader, &mut rng),
    }
    .context("Classification failed")?;

    let corpus = apply_filters(corpus, &args.input.filters)?;
    let fields = domain_fields(&args.fields);

    if let Some(output) = &args.output {
        write_tsv(&corpus, output, &fields).context("Failed to write export")?;
    }
    if args.json {
        let summary = Summary {
            proposals: corpus.proposal_count(),
            arguments: corpus.argument_count(),
            output: args.output,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if args.output.is_none() {
        print!("{}", format_corpus(&corpus));
    }
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
    let reader = open_reader(&args.input)?;
    let corpus = build_corpus(reader).context("Failed to build corpus")?;
    let corpus = apply_filters(corpus, &args.input.filters)?;
    let fields = domain_fields(&args.fields);
    write_tsv(&corpus, &args.output, &fields).context("Failed to write export")?;
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<()> {
    let reader = open_reader(&args.input)?;
    let corpus = build_corpus(reader).context("Failed to build corpus")?;
    let corpus = apply_filters(corpus, &args.input.filters)?;
    print!("{}", format_corpus(&corpus));
    Ok(())
}

fn open_reader(args: &InputArgs) -> Result<ArgumentReader<std::io::BufReader<std::fs::File>>> {
    ArgumentReader::from_path(&args.input, &TableSchema::default())
        .with_context(|| format!("Cannot read {}", args.input.display()))
}

fn domain_fields(flags: &[FieldFlag]) -> Vec<EvalField> {
    flags.iter().map(|flag| flag.as_domain()).collect()
}

/// Chained `filter_by` refinements, e.g. `--filter persuasion=2`
fn apply_filters(corpus: Corpus, filters: &[String]) -> Result<Corpus> {
    let mut corpus = corpus;
    for spec in filters {
        let (name, value) = spec
            .split_once('=')
            .with_context(|| format!("Invalid filter '{spec}' (expected FIELD=VALUE)"))?;
        let field = name.parse::<EvalField>()?;
        let value: i32 = value
            .trim()
            .parse()
            .with_context(|| format!("Invalid filter value in '{spec}'"))?;
        corpus = corpus.filter_by(field, &[value]);
    }
    Ok(corpus)
}
