// src/main.rs
//! Elementwise parity CLI
//! Runs the pow and exp kernels on the default queue and reports deviations

use clap::{value_parser, Arg, ArgMatches, Command};
use log::debug;

use elementwise_parity::config::{HarnessConfig, DEFAULT_LEN};
use elementwise_parity::device::CpuQueue;
use elementwise_parity::report::Reporter;
use elementwise_parity::validation::ValidationSuite;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let matches = cli().get_matches();
    cmd_run(&matches)
}

fn cli() -> Command {
    Command::new("elementwise-parity")
        .version("0.1.0")
        .about("Compare device pow/exp kernels against host math references")
        .arg(Arg::new("len")
            .value_name("N")
            .help("Number of elements per array")
            .value_parser(value_parser!(usize))
            .default_value("800000"))
}

fn cmd_run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let len = matches.get_one::<usize>("len").copied().unwrap_or(DEFAULT_LEN);

    let config = HarnessConfig::with_len(len);
    config.validate()?;
    debug!("effective configuration:\n{}", config.to_toml_string()?);

    let queue = CpuQueue::new(config.dispatch.threads)?;
    let suite = ValidationSuite::new(&queue, config);

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    suite.run(&mut reporter)?;

    Ok(())
}
