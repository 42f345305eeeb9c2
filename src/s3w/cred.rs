use crate::consts::DEFAULT_REGION;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Builder, Credentials, Region};
use aws_sdk_s3::Client;
use std::env;
use tracing::debug;

// Default AWS environement names
const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
const AWS_REGION: &str = "AWS_REGION";
const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
const AWS_ENDPOINT: &str = "AWS_ENDPOINT";

#[derive(Clone)]
pub struct AwsCred {
	pub key_id: Option<String>,
	pub key_secret: Option<String>,
	pub session_token: Option<String>,
	pub region: String,
	pub endpoint: Option<String>,
}

// Keep the secret out of the logs.
impl std::fmt::Debug for AwsCred {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AwsCred")
			.field("key_id", &self.key_id)
			.field("key_secret", &self.key_secret.as_ref().map(|_| "***"))
			.field("region", &self.region)
			.field("endpoint", &self.endpoint)
			.finish()
	}
}

impl AwsCred {
	/// Load from the standard AWS environment variables.
	/// - `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, `AWS_SESSION_TOKEN`
	/// - `AWS_REGION`, then `AWS_DEFAULT_REGION`, then `DEFAULT_REGION`
	/// - `AWS_ENDPOINT` (optional, for S3 compatible stores)
	///
	/// Nothing is validated here. Bad or missing credentials are reported by the service.
	pub fn from_env() -> AwsCred {
		let region = get_env(AWS_REGION)
			.or_else(|| get_env(AWS_DEFAULT_REGION))
			.unwrap_or_else(|| DEFAULT_REGION.to_string());

		AwsCred {
			key_id: get_env(AWS_ACCESS_KEY_ID),
			key_secret: get_env(AWS_SECRET_ACCESS_KEY),
			session_token: get_env(AWS_SESSION_TOKEN),
			region,
			endpoint: get_env(AWS_ENDPOINT),
		}
	}
}

/// Build a client from the given cred only (no profile files, no instance metadata).
/// Retries are disabled, so each request is a single attempt.
pub async fn new_s3_client(aws_cred: AwsCred) -> Client {
	debug!(?aws_cred, "new_s3_client");

	let AwsCred {
		key_id,
		key_secret,
		session_token,
		region,
		endpoint,
	} = aws_cred;

	let mut loader = aws_config::defaults(BehaviorVersion::latest())
		.region(Region::new(region))
		.retry_config(RetryConfig::disabled());

	loader = match (key_id, key_secret) {
		(Some(key_id), Some(key_secret)) => {
			let cred = Credentials::new(key_id, key_secret, session_token, None, "loaded-from-env");
			loader.credentials_provider(cred)
		}
		// unsigned requests, the service will answer with AccessDenied
		_ => loader.no_credentials(),
	};

	if let Some(endpoint) = &endpoint {
		loader = loader.endpoint_url(endpoint);
	}

	let sdk_config = loader.load().await;

	let mut builder = Builder::from(&sdk_config);
	if endpoint.is_some() {
		// S3 compatible stores (e.g., minio) do not do virtual hosted buckets.
		builder = builder.force_path_style(true);
	}

	Client::from_conf(builder.build())
}

// region:    Utils
fn get_env(name: &str) -> Option<String> {
	env::var(name).ok().filter(|v| !v.is_empty())
}
// endregion: Utils
