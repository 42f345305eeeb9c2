pub type Result<T> = core::result::Result<T, Error>;
pub type Error = Box<dyn std::error::Error>; // For early dev.

use crate::report::report_listing;
use crate::s3w::ObjectListing;
use aws_sdk_s3::error::{ErrorMetadata, SdkError};
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
use aws_smithy_runtime_api::http::{Response as HttpResponse, StatusCode};
use aws_smithy_types::body::SdkBody;

/// Captured stdout / stderr of a report.
pub struct Captured {
	pub out: String,
	pub err: String,
}

pub fn fx_listing(keys: &[&str]) -> ObjectListing {
	ObjectListing::new(keys.iter().map(|k| k.to_string()).collect(), false)
}

pub fn fx_service_error(code: &str, message: &str) -> crate::Error {
	crate::Error::AwsServiceError {
		code: code.to_string(),
		message: message.to_string(),
	}
}

/// Run `report_listing` against in-memory writers.
pub fn capture_report(res: crate::Result<ObjectListing>) -> Result<Captured> {
	let mut out: Vec<u8> = Vec::new();
	let mut err: Vec<u8> = Vec::new();

	report_listing(&mut out, &mut err, res)?;

	Ok(Captured {
		out: String::from_utf8(out)?,
		err: String::from_utf8(err)?,
	})
}

pub fn fx_error_meta(code: &str, message: Option<&str>) -> ErrorMetadata {
	let mut builder = ErrorMetadata::builder().code(code);
	if let Some(message) = message {
		builder = builder.message(message);
	}
	builder.build()
}

/// A service error as the SDK hands it back from `send()`.
pub fn fx_sdk_service_error(err: ListObjectsV2Error, status: u16) -> SdkError<ListObjectsV2Error> {
	let status = StatusCode::try_from(status).expect("valid http status");
	SdkError::service_error(err, HttpResponse::new(status, SdkBody::empty()))
}
