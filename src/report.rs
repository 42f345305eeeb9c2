//! Console rendering of a listing: the array literal, the summary banner, and the error hints.

use crate::consts::{BANNER_WIDTH, LIST_MAX_KEYS};
use crate::error::ListErrorKind;
use crate::images::ImageSet;
use crate::prelude::*;
use crate::s3w::ObjectListing;
use std::io::Write;

const ARRAY_OPEN: &str = "const images = [";
const ARRAY_CLOSE: &str = "];";
const ARRAY_INDENT: &str = "  ";

pub const MSG_NO_FILES: &str = "⚠ No files found in bucket";
pub const MSG_SUCCESS: &str = "✔ Copy the array above into your script.";
pub const HINT_NO_SUCH_BUCKET: &str = "Hint: the bucket does not exist, check the bucket name.";
pub const HINT_ACCESS_DENIED: &str =
	"Hint: access denied, check that the AWS credentials have permission to list this bucket (s3:ListBucket).";

pub fn print_header(out: &mut impl Write, bucket: &str) -> Result<()> {
	writeln!(out, "Listing images in bucket: {bucket}\n")?;
	Ok(())
}

/// Report the outcome of the list request.
///
/// A failed listing is reported here and never returned, only write failures are.
pub fn report_listing(out: &mut impl Write, err: &mut impl Write, res: Result<ObjectListing>) -> Result<()> {
	match res {
		Ok(listing) => report_images(out, err, &listing),
		Err(ex) => report_error(out, err, &ex),
	}
}

fn report_images(out: &mut impl Write, err: &mut impl Write, listing: &ObjectListing) -> Result<()> {
	if listing.is_empty() {
		writeln!(out, "{MSG_NO_FILES}")?;
		return Ok(());
	}

	if listing.truncated {
		writeln!(
			err,
			"⚠ The bucket has more than {LIST_MAX_KEYS} objects, only the first {LIST_MAX_KEYS} were listed."
		)?;
	}

	let images = ImageSet::from_keys(&listing.keys);

	writeln!(
		out,
		"Found {} images (out of {} objects)\n",
		images.len(),
		listing.keys.len()
	)?;
	write!(out, "{}", render_array(&images))?;
	writeln!(out, "\n{}", "=".repeat(BANNER_WIDTH))?;
	writeln!(out, "{MSG_SUCCESS}")?;

	Ok(())
}

fn report_error(out: &mut impl Write, err: &mut impl Write, ex: &Error) -> Result<()> {
	writeln!(err, "Error: {ex}")?;

	match ex.kind() {
		ListErrorKind::NoSuchBucket => writeln!(out, "{HINT_NO_SUCH_BUCKET}")?,
		ListErrorKind::AccessDenied => writeln!(out, "{HINT_ACCESS_DENIED}")?,
		ListErrorKind::Other => (),
	}

	Ok(())
}

/// Render the image keys as an array literal, one quoted key per line.
pub fn render_array(images: &ImageSet) -> String {
	let mut buf = f!("{ARRAY_OPEN}\n");

	let last_idx = images.len().saturating_sub(1);
	for (idx, key) in images.keys().iter().enumerate() {
		let sep = if idx < last_idx { "," } else { "" };
		buf.push_str(&f!("{ARRAY_INDENT}'{}'{sep}\n", quote_key(key)));
	}

	buf.push_str(ARRAY_CLOSE);
	buf.push('\n');
	buf
}

/// Escape for a single-quoted string literal.
fn quote_key(key: &str) -> String {
	key.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
#[path = "_tests/test-report.rs"]
mod tests;
