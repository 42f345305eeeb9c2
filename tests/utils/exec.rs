use anyhow::Result;
use std::process::{Command, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_bucket-images");

// Nothing listens on port 1, so any request fails before reaching a service.
const ENDPOINT_UNREACHABLE: &str = "http://127.0.0.1:1";

const ENV_CREDS: [(&str, &str); 3] = [
	("AWS_ACCESS_KEY_ID", "test-key-id"),
	("AWS_SECRET_ACCESS_KEY", "test-key-secret"),
	("AWS_REGION", "us-east-1"),
];

pub struct ExecOut {
	pub code: Option<i32>,
	pub stdout: String,
	pub stderr: String,
}

pub fn exec_bin(args: &[&str], print_exec: bool) -> Result<ExecOut> {
	exec_bin_with_endpoint(args, ENDPOINT_UNREACHABLE, print_exec)
}

pub fn exec_bin_with_endpoint(args: &[&str], endpoint: &str, print_exec: bool) -> Result<ExecOut> {
	exec_output(args, &ExecConfig { print_exec, endpoint })
}

struct ExecConfig<'a> {
	print_exec: bool,
	endpoint: &'a str,
}

fn exec_output(args: &[&str], config: &ExecConfig) -> Result<ExecOut> {
	let ExecConfig { print_exec, endpoint } = config;

	if *print_exec {
		println!("> executing: {} {}", BIN, args.join(" "));
	}

	let mut proc = Command::new(BIN);
	proc.args(args);

	for (name, val) in ENV_CREDS.iter() {
		proc.env(name, val);
	}
	proc.env("AWS_ENDPOINT", endpoint);
	proc.env_remove("AWS_SESSION_TOKEN");
	proc.env_remove("RUST_LOG");

	let output = proc.stdout(Stdio::piped()).stderr(Stdio::piped()).output()?;

	Ok(ExecOut {
		code: output.status.code(),
		stdout: String::from_utf8(output.stdout)?,
		stderr: String::from_utf8(output.stderr)?,
	})
}
