//! AWS API Wrapper

// region:    --- Modules

// -- Sub-modules
mod list;
mod sbucket;

// -- Re-exports
pub use self::cred::{new_s3_client, AwsCred};
pub use self::list::ObjectListing;
pub use self::sbucket::SBucket;

pub mod cred;

// -- Imports
use aws_sdk_s3::Client;

// endregion: --- Modules

// region:    --- SBucket factory

pub async fn get_sbucket(cred: AwsCred, bucket: &str) -> SBucket {
	let client = new_s3_client(cred).await;
	get_sbucket_from_client(client, bucket)
}

fn get_sbucket_from_client(client: Client, bucket: impl Into<String>) -> SBucket {
	SBucket::from_client_and_name(client, bucket.into())
}

// endregion: --- SBucket factory
