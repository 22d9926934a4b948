//! End-to-end report tests

// Imports
use {
	cachelat::{AccessPattern, Config, ExperimentSet, ReportWriter, DEFAULT_ITERATIONS},
	rand::{rngs::StdRng, SeedableRng},
	std::{
		fs,
		io::{BufWriter, Write},
	},
};

/// Parsed report record
#[derive(Debug)]
struct Record {
	number:      usize,
	buffer_size: usize,
	duration:    f64,
}

/// Parses all records in `report`
fn parse_records(report: &str) -> Vec<Record> {
	let field = |line: &str, name: &str| -> Option<String> {
		line.trim()
			.strip_prefix(name)
			.and_then(|rest| rest.strip_prefix(':'))
			.map(|value| value.trim().to_owned())
	};

	let mut records = vec![];
	let mut lines = report.lines();
	while let Some(line) = lines.next() {
		if line != "- experiment:" {
			continue;
		}

		let mut next_field = |name: &str| {
			lines
				.by_ref()
				.find_map(|line| field(line, name))
				.unwrap_or_else(|| panic!("Missing field {name:?}"))
		};
		let number = next_field("number").parse().expect("Invalid number");
		let buffer_size = next_field("buffer_size").parse().expect("Invalid buffer size");
		let duration = next_field("duration").parse().expect("Invalid duration");
		records.push(Record {
			number,
			buffer_size,
			duration,
		});
	}

	records
}

#[test]
fn forward_report_to_file() {
	let dir = tempfile::tempdir().expect("Unable to create temporary directory");
	let path = dir.path().join("report.md");

	let mut rng = StdRng::seed_from_u64(0);
	let file = fs::File::create(&path).expect("Unable to create report file");
	let mut report = ReportWriter::new(BufWriter::new(file));
	report.write_header(Config::DEFAULT_TITLE).expect("Unable to write header");
	let outputs = report
		.write_pattern(
			AccessPattern::Forward,
			&[32 * 1024, 64 * 1024, 256 * 1024],
			DEFAULT_ITERATIONS,
			&mut rng,
		)
		.expect("Unable to write report");
	report.into_inner().flush().expect("Unable to flush report");
	assert_eq!(outputs.len(), 3);

	let report = fs::read_to_string(&path).expect("Unable to read report");
	assert!(report.starts_with(&format!("# {}\n\n## Forward\n", Config::DEFAULT_TITLE)));

	let records = parse_records(&report);
	assert_eq!(records.len(), 3, "Unexpected records: {records:?}");
	for (record, (number, buffer_size)) in records.iter().zip([(1, 32), (2, 64), (3, 256)]) {
		assert_eq!(record.number, number);
		assert_eq!(record.buffer_size, buffer_size);
		assert!(record.duration >= 0.0);
	}
}

#[test]
fn every_pattern_gets_a_section() {
	let set = ExperimentSet::new(vec![1024, 4096]);
	let mut rng = StdRng::seed_from_u64(1);

	let mut report = ReportWriter::new(vec![]);
	report.write_header("Sections").expect("Unable to write header");
	for pattern in AccessPattern::ALL {
		report
			.write_pattern(pattern, set.sizes(), 10, &mut rng)
			.expect("Unable to write report");
	}
	let report = String::from_utf8(report.into_inner()).expect("Report wasn't utf-8");

	let headings = report.lines().filter(|line| line.starts_with('#')).collect::<Vec<_>>();
	assert_eq!(headings, ["# Sections", "## Forward", "## Reverse", "## Random"]);

	// Note: Numbering restarts for each pattern
	let numbers = self::parse_records(&report).iter().map(|record| record.number).collect::<Vec<_>>();
	assert_eq!(numbers, [1, 2, 1, 2, 1, 2]);
}
