use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::{bounded, Receiver, Sender};
use dna_counter::export::write_counts_csv;
use dna_counter::io::read_raw_input;
use dna_counter::{analyze, Analysis, HEADER_MARKER};
use env_logger::Env;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::thread;

#[derive(Parser)]
#[command(name = "dna-counter")]
#[command(about = "Count nucleotides, GC content and reverse complement of DNA sequences")]
struct Args {
    #[arg(help = "Input text/FASTA files (.gz allowed); '-' or nothing reads stdin")]
    inputs: Vec<PathBuf>,

    #[arg(short = 'm', long, default_value_t = HEADER_MARKER, value_parser = parse_marker, help = "Lines starting with this character are headers")]
    header_marker: char,

    #[arg(short = 'o', long, help = "Write <PREFIX><name>_nucleotide_counts.csv for each input")]
    csv_prefix: Option<String>,

    #[arg(short = 't', long, default_value = "4", help = "Number of worker threads")]
    threads: usize,

    #[arg(long, default_value = "false", help = "Do not print the cleaned sequence")]
    no_sequence: bool,

    #[arg(short = 'v', long, default_value = "false", help = "Verbose output")]
    verbose: bool,
}

/// Outcome of one input; each input is analyzed independently.
struct Job {
    index: usize,
    path: PathBuf,
    outcome: Result<dna_counter::Result<Analysis>>,
}

fn csv_path(prefix: &str, input: &Path, single_stdin: bool, tag: Option<usize>) -> PathBuf {
    if single_stdin {
        return PathBuf::from(format!("{prefix}nucleotide_counts.csv"));
    }
    // seq.fasta.gz -> seq
    let name = input.file_name().and_then(|s| s.to_str()).unwrap_or("stdin");
    let stem = name.split('.').next().filter(|s| !s.is_empty()).unwrap_or(name);
    match tag {
        Some(n) => PathBuf::from(format!("{prefix}{stem}_{n}_nucleotide_counts.csv")),
        None => PathBuf::from(format!("{prefix}{stem}_nucleotide_counts.csv")),
    }
}

/// One CSV path per input. Inputs sharing a name get their 1-based index appended.
fn plan_csv_paths(prefix: &str, inputs: &[PathBuf]) -> Vec<PathBuf> {
    let single_stdin = inputs.len() == 1 && inputs[0] == Path::new("-");
    let mut planned = HashSet::with_capacity(inputs.len());
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            let mut path = csv_path(prefix, input, single_stdin, None);
            let mut tag = index + 1;
            while !planned.insert(path.clone()) {
                path = csv_path(prefix, input, single_stdin, Some(tag));
                tag += inputs.len();
            }
            path
        })
        .collect()
}

/// Stdin can only be read once.
fn check_inputs(inputs: &[PathBuf]) -> Result<()> {
    let stdin_count = inputs.iter().filter(|p| p.as_path() == Path::new("-")).count();
    if stdin_count > 1 {
        anyhow::bail!("'-' (stdin) was given {stdin_count} times, it can only be read once");
    }
    Ok(())
}

fn parse_marker(s: &str) -> std::result::Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Ok(c),
        (Some(_), None) => Err("header marker cannot be whitespace".to_string()),
        _ => Err(format!("header marker must be a single character, got '{s}'")),
    }
}

fn write_report<W: Write>(out: &mut W, path: &Path, analysis: &Analysis, show_sequence: bool) -> io::Result<()> {
    writeln!(out, "== {}", path.display())?;
    if show_sequence {
        writeln!(out, "Cleaned sequence: {}", analysis.sequence)?;
    }
    writeln!(out, "Length: {} nucleotides", analysis.len())?;
    match &analysis.gc_content {
        Ok(gc) => writeln!(out, "GC content: {gc}")?,
        Err(e) => writeln!(out, "GC content: N/A ({e})")?,
    }
    writeln!(out, "Nucleotide\tCount")?;
    for (base, count) in analysis.counts.iter() {
        writeln!(out, "{base}\t{count}")?;
    }
    writeln!(out, "Reverse complement: {}", analysis.reverse_complement)?;
    writeln!(out)
}

fn export_csv(path: &Path, analysis: &Analysis) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_counts_csv(&analysis.counts, BufWriter::new(file))?;
    info!("Wrote nucleotide counts to {}", path.display());
    Ok(())
}

/// Analyzes every input on `threads` workers and returns the outcomes in input order.
fn run_jobs(inputs: &[PathBuf], threads: usize, marker: char) -> Result<Vec<Job>> {
    let threads = threads.clamp(1, inputs.len().max(1));
    debug!("Analyzing {} input(s) with {} thread(s)", inputs.len(), threads);

    let (job_tx, job_rx): (Sender<(usize, PathBuf)>, Receiver<(usize, PathBuf)>) = bounded(threads * 2);
    let (done_tx, done_rx): (Sender<Job>, Receiver<Job>) = bounded(threads * 2);

    // Feeder thread
    let feeder_inputs = inputs.to_vec();
    let feeder = thread::spawn(move || {
        for (index, path) in feeder_inputs.into_iter().enumerate() {
            if job_tx.send((index, path)).is_err() {
                break;
            }
        }
    });

    // Worker threads: no state is shared between inputs
    let mut workers = Vec::with_capacity(threads);
    for _ in 0..threads {
        let rx = job_rx.clone();
        let tx = done_tx.clone();
        workers.push(thread::spawn(move || {
            while let Ok((index, path)) = rx.recv() {
                let outcome = read_raw_input(&path).map(|raw| analyze(&raw, marker));
                if tx.send(Job { index, path, outcome }).is_err() {
                    break;
                }
            }
        }));
    }
    drop(job_rx);
    drop(done_tx);

    let mut jobs: Vec<Job> = done_rx.iter().collect();
    feeder.join().map_err(|_| anyhow::anyhow!("Feeder thread panicked"))?;
    for worker in workers {
        worker.join().map_err(|_| anyhow::anyhow!("Worker thread panicked"))?;
    }
    jobs.sort_by_key(|job| job.index);
    Ok(jobs)
}

/// Prints a report per analyzed input and exports CSVs.
///
/// Unreadable inputs, rejected sequences and failed exports are logged and
/// counted; the count is returned.
fn report_jobs<W: Write>(
    out: &mut W,
    jobs: &[Job],
    show_sequence: bool,
    csv_paths: Option<&[PathBuf]>,
) -> Result<usize> {
    let mut failed = 0usize;
    for job in jobs {
        match &job.outcome {
            Err(e) => {
                warn!("{e:#}");
                failed += 1;
            }
            Ok(Err(e)) => {
                warn!("{}: {e}", job.path.display());
                failed += 1;
            }
            Ok(Ok(analysis)) => {
                write_report(out, &job.path, analysis, show_sequence)?;
                if let Some(path) = csv_paths.and_then(|paths| paths.get(job.index)) {
                    if let Err(e) = export_csv(path, analysis) {
                        warn!("{}: {e:#}", job.path.display());
                        failed += 1;
                    }
                }
            }
        }
    }
    Ok(failed)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let inputs = if args.inputs.is_empty() { vec![PathBuf::from("-")] } else { args.inputs.clone() };
    check_inputs(&inputs)?;
    let csv_paths = args.csv_prefix.as_deref().map(|prefix| plan_csv_paths(prefix, &inputs));

    let jobs = run_jobs(&inputs, args.threads, args.header_marker)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let failed = report_jobs(&mut out, &jobs, !args.no_sequence, csv_paths.as_deref())?;
    out.flush()?;

    info!("Analyzed {} input(s), {} failed", jobs.len(), failed);
    if failed > 0 {
        anyhow::bail!("{failed} input(s) could not be analyzed");
    }
    Ok(())
}
