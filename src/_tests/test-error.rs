use crate::_test_support::{fx_error_meta, fx_sdk_service_error, fx_service_error};
use crate::error::ListErrorKind;
use crate::Error;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
use aws_sdk_s3::types::error::NoSuchBucket;

#[test]
fn test_error_from_sdk_no_such_bucket() {
	// -- Setup & Fixtures
	let fx_meta = fx_error_meta("NoSuchBucket", Some("The specified bucket does not exist"));
	let fx_err = ListObjectsV2Error::NoSuchBucket(NoSuchBucket::builder().meta(fx_meta).build());

	// -- Exec
	let err = Error::from(fx_sdk_service_error(fx_err, 404));

	// -- Check
	assert_eq!(err.kind(), ListErrorKind::NoSuchBucket);
	assert_eq!(err.to_string(), "The specified bucket does not exist");
}

#[test]
fn test_error_from_sdk_access_denied() {
	// -- Setup & Fixtures
	let fx_err = ListObjectsV2Error::generic(fx_error_meta("AccessDenied", Some("Access Denied")));

	// -- Exec
	let err = Error::from(fx_sdk_service_error(fx_err, 403));

	// -- Check
	assert_eq!(err.kind(), ListErrorKind::AccessDenied);
	assert_eq!(err.to_string(), "Access Denied");
}

#[test]
fn test_error_from_sdk_message_falls_back_to_code() {
	let fx_err = ListObjectsV2Error::generic(fx_error_meta("SlowDown", None));

	let err = Error::from(fx_sdk_service_error(fx_err, 503));

	assert_eq!(err.kind(), ListErrorKind::Other);
	assert_eq!(err.to_string(), "SlowDown");
}

#[test]
fn test_error_from_sdk_non_service() {
	let fx_err: SdkError<ListObjectsV2Error> = SdkError::timeout_error("request timed out");

	let err = Error::from(fx_err);

	assert!(matches!(err, Error::AwsSdk(_)), "expected AwsSdk, got {err:?}");
	assert_eq!(err.kind(), ListErrorKind::Other);
}

#[test]
fn test_error_kind_from_code() {
	assert_eq!(
		fx_service_error("NoSuchBucket", "The specified bucket does not exist").kind(),
		ListErrorKind::NoSuchBucket
	);
	assert_eq!(fx_service_error("AccessDenied", "Access Denied").kind(), ListErrorKind::AccessDenied);
	assert_eq!(
		fx_service_error("InternalError", "We encountered an internal error").kind(),
		ListErrorKind::Other
	);
}

#[test]
fn test_error_kind_non_service() {
	assert_eq!(Error::AwsSdk("dispatch failure".to_string()).kind(), ListErrorKind::Other);
	assert_eq!(Error::MissingBucketName.kind(), ListErrorKind::Other);
}
