//! Memory access latency benchmark (`cachelat`)

// Modules
mod args;

// Imports
use {
	self::args::Args,
	anyhow::Context,
	cachelat::{Config, ReportWriter},
	cachelat_util::logger,
	clap::Parser,
	itertools::Itertools,
	rand::{rngs::StdRng, SeedableRng},
	std::{fs, io::BufWriter, time::Instant},
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	// Read the config file
	let config = match &args.config_file {
		Some(config_file) => {
			let config_file = fs::File::open(config_file).context("Unable to open config file")?;
			serde_json::from_reader::<_, Config>(config_file).context("Unable to parse config file")?
		},
		None => Config::default(),
	};
	config.validate().context("Invalid config")?;
	tracing::debug!(?config, "Loaded config");

	// Note: We create the report before running anything, so we don't
	//       spend minutes measuring just to be unable to save it.
	let report_file = fs::File::create(&args.output_file)
		.with_context(|| format!("Unable to create report file {:?}", args.output_file))?;
	let mut report = ReportWriter::new(BufWriter::new(report_file));
	report
		.write_header(&config.title)
		.context("Unable to write report header")?;

	let mut rng = match config.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_entropy(),
	};

	for &pattern in &config.patterns {
		tracing::info!(
			"Running {pattern} experiments over [{}] elements",
			config.sizes.sizes().iter().join(", ")
		);

		let start_time = Instant::now();
		let outputs = report
			.write_pattern(pattern, config.sizes.sizes(), config.iterations, &mut rng)
			.with_context(|| format!("Unable to run {pattern} experiments"))?;
		let elapsed = start_time.elapsed();

		for output in &outputs {
			tracing::info!(
				"{pattern}: {} Ki elements: {:.4} ns/access",
				output.buffer_size_kib(),
				output.nanos_per_access
			);
		}
		println!("{pattern}: {:.3} s", elapsed.as_secs_f64());
	}

	report.flush().context("Unable to flush report file")?;
	println!("Report written to {}", args.output_file.display());

	Ok(())
}
