use clap::{crate_version, Arg, Command};

pub const ARG_BUCKET: &str = "bucket";

pub fn cmd_app() -> Command {
	Command::new("bucket-images")
		.version(crate_version!())
		.override_usage("bucket-images <BUCKET_NAME>")
		.about("List the image keys of an S3 bucket and print them as an array literal.")
		.after_help(
			"Environment:
  AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_SESSION_TOKEN (optional)
  AWS_REGION or AWS_DEFAULT_REGION (default 'us-east-1')
  AWS_ENDPOINT (optional, for S3 compatible stores)",
		)
		.arg(arg_bucket())
}

// region:    --- Args
fn arg_bucket() -> Arg {
	// Not `required`, a missing bucket is reported by `cmd_run` with its own usage and exit code.
	Arg::new(ARG_BUCKET)
		.num_args(1)
		.value_name("BUCKET_NAME")
		.help("The name of the bucket to list.")
}
// endregion: --- Args
