use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;

pub const CODE_NO_SUCH_BUCKET: &str = "NoSuchBucket";
pub const CODE_ACCESS_DENIED: &str = "AccessDenied";

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Missing bucket name. Usage: bucket-images <bucket-name>")]
	MissingBucketName,

	#[error("{message}")]
	AwsServiceError { code: String, message: String },

	/// SDK failures that never reached the service (dispatch, timeout, response parsing, ...).
	#[error("{0}")]
	AwsSdk(String),

	#[error(transparent)]
	IO(#[from] std::io::Error),
}

/// How a failed listing is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListErrorKind {
	NoSuchBucket,
	AccessDenied,
	Other,
}

impl Error {
	pub fn kind(&self) -> ListErrorKind {
		match self {
			Error::AwsServiceError { code, .. } => match code.as_str() {
				CODE_NO_SUCH_BUCKET => ListErrorKind::NoSuchBucket,
				CODE_ACCESS_DENIED => ListErrorKind::AccessDenied,
				_ => ListErrorKind::Other,
			},
			_ => ListErrorKind::Other,
		}
	}
}

/// For better CLI error reporting.
/// Note: Service errors keep their code so the reporter can add a hint.
impl From<SdkError<ListObjectsV2Error>> for Error {
	fn from(val: SdkError<ListObjectsV2Error>) -> Self {
		match val.as_service_error() {
			Some(se) => {
				let code = se.code().unwrap_or_default().to_string();
				let message = se.message().map(|m| m.to_string()).unwrap_or_else(|| code.clone());
				Error::AwsServiceError { code, message }
			}
			None => Error::AwsSdk(DisplayErrorContext(&val).to_string()),
		}
	}
}

#[cfg(test)]
#[path = "_tests/test-error.rs"]
mod tests;
