//! Image key filtering.

use crate::consts::IMAGE_SUFFIXES;

/// True if the key ends with one of the recognized image suffixes (case-sensitive).
pub fn is_image_key(key: &str) -> bool {
	IMAGE_SUFFIXES.iter().any(|ext| key.ends_with(ext))
}

/// The image keys of a listing, in listing order.
#[derive(Debug)]
pub struct ImageSet {
	keys: Vec<String>,
}

// builders
impl ImageSet {
	pub fn from_keys<I, S>(keys: I) -> ImageSet
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let keys = keys
			.into_iter()
			.filter_map(|k| {
				let k = k.as_ref();
				is_image_key(k).then(|| k.to_string())
			})
			.collect();
		ImageSet { keys }
	}
}

impl ImageSet {
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	pub fn keys(&self) -> &[String] {
		&self.keys
	}
}

#[cfg(test)]
#[path = "_tests/test-images.rs"]
mod tests;
