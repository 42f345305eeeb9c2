use super::SBucket;
use crate::consts::LIST_MAX_KEYS;
use crate::prelude::*;
use tracing::debug;

// region:    --- ObjectListing
/// One page of object keys, in the order returned by the service.
#[derive(Debug)]
pub struct ObjectListing {
	pub keys: Vec<String>,
	/// The service had more keys than the page cap.
	pub truncated: bool,
}

impl ObjectListing {
	pub fn new(keys: Vec<String>, truncated: bool) -> ObjectListing {
		ObjectListing { keys, truncated }
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}
}
// endregion: --- ObjectListing

impl SBucket {
	/// Single list request, capped at `LIST_MAX_KEYS`. No continuation token is sent.
	pub async fn list_page(&self) -> Result<ObjectListing> {
		// BUILD - the aws S3 list request
		let builder = self.client.list_objects_v2().bucket(&self.name).max_keys(LIST_MAX_KEYS);

		// EXECUTE - the AWS S3 request
		debug!(bucket = %self.name, max_keys = LIST_MAX_KEYS, "list_objects_v2");
		let resp = builder.send().await?;

		let keys: Vec<String> = resp
			.contents()
			.iter()
			.filter_map(|o| o.key().map(|k| k.to_string()))
			.collect();

		let truncated = resp.is_truncated().unwrap_or_default();
		debug!(count = keys.len(), truncated, "list_objects_v2 done");

		Ok(ObjectListing::new(keys, truncated))
	}
}
