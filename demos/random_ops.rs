use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use circ_buff::{RingBuffer, RingBufferError};
use clap::Parser;
use gnuplot::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exercises a ring buffer with random bursts of writes and reads and logs
/// the buffer state after every operation.
#[derive(Parser, Debug)]
#[command(name = "random_ops")]
struct Args {
    /// Slots in the buffer under test
    #[arg(long, default_value_t = 20)]
    capacity: usize,

    /// Number of write-burst/read-burst rounds
    #[arg(long, default_value_t = 10)]
    rounds: usize,

    /// Upper bound (exclusive) on operations per burst
    #[arg(long, default_value_t = 10)]
    max_ops: usize,

    /// RNG seed; a random one is picked and logged if absent
    #[arg(long)]
    seed: Option<u64>,

    /// Construction is attempted for every capacity below this value
    #[arg(long, default_value_t = 100)]
    sweep_limit: usize,

    /// Log file receiving the per-operation dumps
    #[arg(long, default_value = "test_results_read_write.log")]
    log: PathBuf,

    /// Plot occupancy over time with gnuplot
    #[arg(long)]
    plot: bool,
}

fn describe(outcome: &Result<(), RingBufferError>) -> String {
    match outcome {
        Ok(()) => "ok".to_string(),
        Err(e) => e.to_string(),
    }
}

fn log_state(log: &mut impl Write, buf: &RingBuffer) -> Result<(), Box<dyn Error>> {
    buf.dump(log)?;
    writeln!(
        log,
        "read cursor: {}, write cursor: {}\ncapacity: {}, occupied: {}",
        buf.read_cursor()?,
        buf.write_cursor()?,
        buf.capacity()?,
        buf.occupancy()?
    )?;
    Ok(())
}

fn init_sweep(log: &mut impl Write, limit: usize) -> Result<(), Box<dyn Error>> {
    writeln!(log, "== construction sweep, capacity 0..{limit}\n")?;
    for capacity in 0..limit {
        let outcome = RingBuffer::new(capacity).map(|_| ());
        writeln!(log, "capacity {capacity}: {}", describe(&outcome))?;
    }
    writeln!(log)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    info!(seed, capacity = args.capacity, rounds = args.rounds, "starting run");

    let mut log = BufWriter::new(File::create(&args.log)?);
    init_sweep(&mut log, args.sweep_limit)?;

    let mut buf = RingBuffer::new(args.capacity)?;
    writeln!(log, "== random operations, seed {seed}\n\nBefore the first write:")?;
    log_state(&mut log, &buf)?;

    let mut steps = Vec::new();
    let mut occupancy = Vec::new();
    let (mut rejected_writes, mut rejected_reads) = (0usize, 0usize);

    for round in 1..=args.rounds {
        let writes = rng.random_range(0..args.max_ops.max(1));
        writeln!(log, "\nInitiating {writes} writes\n")?;
        for n in 1..=writes {
            let value = u32::from(rng.random::<u8>());
            let outcome = buf.write(value);
            if outcome.is_err() {
                rejected_writes += 1;
            }
            writeln!(log, "Round {round}, after write {n} ({value}):")?;
            log_state(&mut log, &buf)?;
            writeln!(log, "status: {}\n", describe(&outcome))?;

            steps.push(steps.len());
            occupancy.push(buf.occupancy()?);
        }

        let reads = rng.random_range(0..args.max_ops.max(1));
        writeln!(log, "\nInitiating {reads} reads\n")?;
        for n in 1..=reads {
            let outcome = buf.read();
            match &outcome {
                Ok(value) => writeln!(log, "Round {round}, after read {n}, data read: {value}")?,
                Err(_) => {
                    rejected_reads += 1;
                    writeln!(log, "Round {round}, after read {n}, no data")?
                }
            }
            log_state(&mut log, &buf)?;
            writeln!(log, "status: {}\n", describe(&outcome.map(|_| ())))?;

            steps.push(steps.len());
            occupancy.push(buf.occupancy()?);
        }
    }

    buf.destroy()?;
    log.flush()?;
    info!(
        operations = steps.len(),
        rejected_writes,
        rejected_reads,
        log = %args.log.display(),
        "run complete"
    );

    if args.plot {
        let mut fg = Figure::new();
        {
            let axes = fg.axes2d();
            axes.set_title("Ring buffer occupancy", &[]);
            axes.set_x_label("Operation", &[]);
            axes.set_y_label("Occupied slots", &[]);
            axes.lines(&steps, &occupancy, &[Color("blue"), Caption("Occupancy")]);
        }
        fg.show().map_err(|e| format!("Failed to display plot: {e}"))?;
    }

    Ok(())
}
