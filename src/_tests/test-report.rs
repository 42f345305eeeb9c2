use crate::_test_support::{capture_report, fx_listing, fx_service_error, Result};
use crate::images::ImageSet;
use crate::report::{render_array, HINT_ACCESS_DENIED, HINT_NO_SUCH_BUCKET, MSG_NO_FILES, MSG_SUCCESS};
use crate::s3w::ObjectListing;
use crate::Error;

#[test]
fn test_report_no_files() -> Result<()> {
	// -- Exec
	let res = capture_report(Ok(fx_listing(&[])))?;

	// -- Check
	assert_eq!(res.out.trim(), MSG_NO_FILES);
	assert!(!res.out.contains("const images"));
	assert!(res.err.is_empty());

	Ok(())
}

#[test]
fn test_report_images() -> Result<()> {
	// -- Setup & Fixtures
	let fx_keys = ["cover.jpg", "notes.txt", "gallery/2024/beach.PNG", "anim.gif"];

	// -- Exec
	let res = capture_report(Ok(fx_listing(&fx_keys)))?;

	// -- Check
	assert!(res.out.contains("Found 3 images (out of 4 objects)"));
	assert!(res.out.contains("const images = [\n  'cover.jpg',\n  'gallery/2024/beach.PNG',\n  'anim.gif'\n];\n"));
	assert!(!res.out.contains("notes.txt"));
	assert!(res.out.contains(&"=".repeat(60)));
	assert!(res.out.trim_end().ends_with(MSG_SUCCESS));
	assert!(res.err.is_empty());

	Ok(())
}

#[test]
fn test_report_objects_without_images() -> Result<()> {
	let res = capture_report(Ok(fx_listing(&["a.txt", "b.csv"])))?;

	// not the "no files" case, the (empty) array is still printed
	assert!(!res.out.contains(MSG_NO_FILES));
	assert!(res.out.contains("Found 0 images (out of 2 objects)"));
	assert!(res.out.contains("const images = [\n];\n"));

	Ok(())
}

#[test]
fn test_report_truncated_warns() -> Result<()> {
	let listing = ObjectListing::new(vec!["a.png".to_string()], true);

	let res = capture_report(Ok(listing))?;

	assert!(res.err.contains("more than 1000 objects"));
	assert!(res.out.contains("  'a.png'\n"));

	Ok(())
}

#[test]
fn test_report_no_such_bucket() -> Result<()> {
	// -- Exec
	let res = capture_report(Err(fx_service_error(
		"NoSuchBucket",
		"The specified bucket does not exist",
	)))?;

	// -- Check
	assert_eq!(res.err.trim(), "Error: The specified bucket does not exist");
	assert_eq!(res.out.trim(), HINT_NO_SUCH_BUCKET);

	Ok(())
}

#[test]
fn test_report_access_denied() -> Result<()> {
	let res = capture_report(Err(fx_service_error("AccessDenied", "Access Denied")))?;

	assert_eq!(res.err.trim(), "Error: Access Denied");
	assert_eq!(res.out.trim(), HINT_ACCESS_DENIED);

	Ok(())
}

#[test]
fn test_report_other_error_no_hint() -> Result<()> {
	let res = capture_report(Err(Error::AwsSdk("dispatch failure: connection refused".to_string())))?;

	assert_eq!(res.err.trim(), "Error: dispatch failure: connection refused");
	assert!(res.out.is_empty());

	Ok(())
}

#[test]
fn test_render_array_separators() {
	// -- Setup & Fixtures
	let images = ImageSet::from_keys(["1.png", "2.png", "3.png"]);

	// -- Exec
	let txt = render_array(&images);

	// -- Check
	let lines: Vec<&str> = txt.lines().collect();
	assert_eq!(lines.first(), Some(&"const images = ["));
	assert_eq!(lines.last(), Some(&"];"));
	let key_lines = &lines[1..lines.len() - 1];
	assert_eq!(key_lines.len(), images.len());
	assert!(key_lines[..2].iter().all(|l| l.ends_with(',')));
	assert!(!key_lines[2].ends_with(','));
}

#[test]
fn test_render_array_escapes_quotes() {
	let images = ImageSet::from_keys([r"it's.png", r"back\slash.jpg"]);

	let txt = render_array(&images);

	assert!(txt.contains(r"  'it\'s.png',"));
	assert!(txt.contains(r"  'back\\slash.jpg'"));
}
