use crate::cmd::{cmd_run, print_usage};
use crate::consts::DEFAULT_LOG_FILTER;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

mod cmd;
mod consts;
mod error;
mod images;
mod prelude;
mod report;
mod s3w;

#[cfg(test)]
mod _test_support;

pub use self::error::Error;
pub use self::prelude::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	init_logging();

	match cmd_run().await {
		Ok(_) => (),
		Err(Error::MissingBucketName) => {
			print_usage();
			std::process::exit(1);
		}
		Err(e) => {
			eprintln!("Error:\n  {}", e);
			std::process::exit(1);
		}
	};
}

/// Diagnostics go to stderr so stdout only carries the generated array.
fn init_logging() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(std::io::stderr().is_terminal())
		.with_target(false)
		.init();
}
