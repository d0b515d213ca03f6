use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kmertag::builder::BuildConfig;
use kmertag::classify::classify_fastq;
use kmertag::evaluate::evaluate;
use kmertag::model::join_organisms;
use kmertag::query::{MatchStrategy, QueryEngine};
use kmertag::simulate::MockDataGenerator;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kmertag")]
#[command(about = "Organism-tagged k-mer graphs for read attribution", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a graph from aligned FASTA files, one per organism
    Build {
        /// k-mer length; nodes hold k-1 symbols
        #[arg(short = 'k', long, default_value_t = kmertag::builder::DEFAULT_KMER_LEN)]
        kmer_len: usize,

        /// Cap on gap-free sequence length per row
        #[arg(short = 'l', long)]
        max_len: Option<usize>,

        /// Maximum number of rows used per alignment
        #[arg(short = 'a', long, default_value_t = kmertag::builder::DEFAULT_MAX_ROWS)]
        max_rows: usize,

        /// Output graph file
        #[arg(short, long)]
        output: PathBuf,

        /// Aligned FASTA files; organism ids follow this order
        #[arg(required = true)]
        alignments: Vec<PathBuf>,
    },

    /// Query reads given on the command line
    Query {
        /// Graph file
        #[arg(short, long)]
        graph: PathBuf,

        /// Use branch-resuming depth-first matching
        #[arg(long)]
        dfs: bool,

        #[arg(required = true)]
        reads: Vec<String>,
    },

    /// Classify all reads of a FASTQ file
    Classify {
        /// Graph file
        #[arg(short, long)]
        graph: PathBuf,

        /// Use branch-resuming depth-first matching
        #[arg(long)]
        dfs: bool,

        reads: PathBuf,
    },

    /// Score classification of simulated reads
    Evaluate {
        /// Graph file
        #[arg(short, long)]
        graph: PathBuf,

        /// Use branch-resuming depth-first matching
        #[arg(long)]
        dfs: bool,

        /// Organism labels in organism id order
        #[arg(short = 'L', long, value_delimiter = ',', required = true)]
        labels: Vec<String>,

        reads: PathBuf,
    },

    /// Generate mock references and reads
    Simulate {
        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Reference length
        #[arg(long, default_value_t = 500)]
        length: usize,

        /// Reads per reference
        #[arg(long, default_value_t = 50)]
        reads: usize,

        /// Read length
        #[arg(long, default_value_t = 100)]
        read_length: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        #[arg(required = true)]
        labels: Vec<String>,
    },
}

fn strategy(dfs: bool) -> MatchStrategy {
    if dfs {
        MatchStrategy::BranchResuming
    } else {
        MatchStrategy::BreadthFirst
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    match cli.command {
        Commands::Build {
            kmer_len,
            max_len,
            max_rows,
            output,
            alignments,
        } => {
            let mut config = BuildConfig::new().with_kmer_len(kmer_len).with_max_rows(max_rows);
            if let Some(max_len) = max_len {
                config = config.with_max_seq_len(max_len);
            }
            let graph = kmertag::build_graph(&alignments, config).context("Failed to build graph")?;
            let edges = kmertag::dot::write_file(&output, &graph)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!(
                "Wrote {} nodes and {} edges to {}",
                graph.num_nodes(),
                edges,
                output.display()
            );
        }
        Commands::Query { graph, dfs, reads } => {
            let graph = kmertag::load_graph(&graph)
                .with_context(|| format!("Failed to load graph {}", graph.display()))?;
            let engine = QueryEngine::new(&graph).with_strategy(strategy(dfs));
            for read in reads {
                println!("{}\t{{{}}}", read, join_organisms(&engine.query(&read)));
            }
        }
        Commands::Classify { graph, dfs, reads } => {
            let graph = kmertag::load_graph(&graph)
                .with_context(|| format!("Failed to load graph {}", graph.display()))?;
            let report = classify_fastq(&graph, &reads, strategy(dfs))
                .with_context(|| format!("Failed to classify {}", reads.display()))?;
            for prediction in &report.predictions {
                println!("{}\t{}", prediction.read_id, join_organisms(&prediction.organisms));
            }
            println!("Recognized {} of {} reads", report.recognized, report.total());
        }
        Commands::Evaluate { graph, dfs, labels, reads } => {
            let graph = kmertag::load_graph(&graph)
                .with_context(|| format!("Failed to load graph {}", graph.display()))?;
            let report = classify_fastq(&graph, &reads, strategy(dfs))
                .with_context(|| format!("Failed to classify {}", reads.display()))?;
            print!("{}", evaluate(&report.predictions, &labels));
        }
        Commands::Simulate {
            output,
            length,
            reads,
            read_length,
            seed,
            labels,
        } => {
            std::fs::create_dir_all(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            let data = MockDataGenerator::new(seed)
                .with_reference_len(length)
                .with_read_len(read_length)
                .with_reads_per_reference(reads)
                .generate(&output, &labels)
                .context("Failed to simulate data")?;
            println!("Wrote {} references and reads to {}", data.references.len(), data.reads.display());
        }
    }

    Ok(())
}
