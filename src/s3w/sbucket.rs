use aws_sdk_s3::Client;

/// A bucket name bound to an explicitly constructed client.
pub struct SBucket {
	pub client: Client,
	pub name: String,
}

impl SBucket {
	/// Constructor
	pub fn from_client_and_name(client: Client, name: String) -> SBucket {
		SBucket { client, name }
	}
}
