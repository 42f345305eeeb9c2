use crate::cmd::app::{cmd_app, ARG_BUCKET};
use crate::prelude::*;
use crate::report::{print_header, report_listing};
use crate::s3w::{get_sbucket, AwsCred};
use clap::ArgMatches;
use std::io;

mod app;

pub async fn cmd_run() -> Result<()> {
	let argm = cmd_app().get_matches();

	// must be checked before any client is built
	let bucket = get_bucket_name(&argm)?;

	exec_list(bucket).await
}

async fn exec_list(bucket: &str) -> Result<()> {
	let cred = AwsCred::from_env();
	let sbucket = get_sbucket(cred, bucket).await;

	let mut out = io::stdout().lock();
	let mut err = io::stderr().lock();

	print_header(&mut out, bucket)?;
	let res = sbucket.list_page().await;
	report_listing(&mut out, &mut err, res)?;

	Ok(())
}

pub fn print_usage() {
	eprintln!("{}", cmd_app().render_usage());
	eprintln!("\nExample: bucket-images my-images-bucket");
}

// region:    Args Utils
fn get_bucket_name(argm: &ArgMatches) -> Result<&str> {
	argm.get_one::<String>(ARG_BUCKET)
		.map(|s| s.as_str())
		.filter(|s| !s.is_empty())
		.ok_or(Error::MissingBucketName)
}
// endregion: Args Utils
