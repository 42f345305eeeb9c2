//! Canned S3 `ListObjectsV2` responses served by a mockito server.

use mockito::{Matcher, Mock, ServerGuard};

pub const XML_NO_SUCH_BUCKET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>NoSuchBucket</Code><Message>The specified bucket does not exist</Message><BucketName>my-bucket</BucketName></Error>"#;

pub const XML_ACCESS_DENIED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>AccessDenied</Code><Message>Access Denied</Message></Error>"#;

/// Mock the path-style list request on `my-bucket`. Expects exactly one call (no retries).
pub fn mock_list_response(server: &mut ServerGuard, status: usize, body: &str) -> Mock {
	server
		.mock("GET", Matcher::Regex(r"^/my-bucket".to_string()))
		.with_status(status)
		.with_header("content-type", "application/xml")
		.with_body(body)
		.expect(1)
		.create()
}

/// A `ListBucketResult` body with the given keys.
pub fn fx_list_body(keys: &[&str], truncated: bool) -> String {
	let contents: String = keys
		.iter()
		.map(|k| format!("<Contents><Key>{k}</Key><Size>1</Size><StorageClass>STANDARD</StorageClass></Contents>"))
		.collect();

	format!(
		r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/"><Name>my-bucket</Name><Prefix></Prefix><KeyCount>{}</KeyCount><MaxKeys>1000</MaxKeys><IsTruncated>{truncated}</IsTruncated>{contents}</ListBucketResult>"#,
		keys.len()
	)
}
