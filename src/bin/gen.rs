use std::fs::File;
use std::path::PathBuf;

use arrow::util::pretty::print_batches;
use clap::Parser;
use clap::ValueEnum;
use credit_gen::DEFAULT_RECORDS;
use credit_gen::DEFAULT_SEED;
use parquet::arrow::ArrowWriter;
use tracing::debug;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Copy, Debug, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Parquet,
}

#[derive(Copy, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
    #[arg(long, default_value_t = DEFAULT_RECORDS)]
    records: usize,
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Pretty-prints to stdout when absent.
    #[arg(long)]
    out_path: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "csv")]
    format: Format,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::from(args.log_level))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("records: {}", args.records);
    debug!("seed: {}", args.seed);
    debug!("out path: {:?} ({:?})", args.out_path, args.format);

    info!("starting data generation...");
    let batch = credit_gen::generate(args.records, args.seed)?;

    match &args.out_path {
        None => print_batches(&[batch])?,
        Some(path) => {
            let file = File::create(path)?;
            match args.format {
                Format::Csv => {
                    let mut writer = arrow::csv::WriterBuilder::new()
                        .with_header(true)
                        .build(file);
                    writer.write(&batch)?;
                }
                Format::Parquet => {
                    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
                    writer.write(&batch)?;
                    writer.close()?;
                }
            }
            info!("wrote {} records to {:?}", batch.num_rows(), path);
        }
    }

    Ok(())
}
