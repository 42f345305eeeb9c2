#![allow(unused)]

// --- Re-exports
pub use exec::{exec_bin, exec_bin_with_endpoint, ExecOut};
pub use s3_fake::{fx_list_body, mock_list_response, XML_ACCESS_DENIED, XML_NO_SUCH_BUCKET};

// --- Imports
use std::str::Lines;

// --- Sub-Modules
mod exec;
mod s3_fake;

// region:    --- String Utils
// Note: Personal best practice, "x" prefix to note that this is just private crate interface.

pub trait XString {
	fn x_lines(&self) -> Lines;
	fn x_has_line(&self, line: &str) -> bool;
}

impl XString for str {
	/// Return the str::Lines but for the trimmed text (so no starting or ending empty lines)
	fn x_lines(&self) -> Lines {
		self.trim().lines()
	}
	fn x_has_line(&self, line: &str) -> bool {
		self.x_lines().any(|l| l == line)
	}
}

impl XString for String {
	/// Return the str::Lines but for the trimmed text (so no starting or ending empty lines)
	fn x_lines(&self) -> Lines {
		str::x_lines(self)
	}

	fn x_has_line(&self, line: &str) -> bool {
		str::x_has_line(self, line)
	}
}
// endregion: --- String Utils
