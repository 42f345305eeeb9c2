use crate::images::{is_image_key, ImageSet};

#[test]
fn test_images_is_image_key_suffixes() {
	for key in [
		"a.jpg", "a.jpeg", "a.png", "a.gif", "a.webp", "a.JPG", "a.JPEG", "a.PNG", "dir/sub/photo.png",
	] {
		assert!(is_image_key(key), "'{key}' should be an image");
	}
}

#[test]
fn test_images_is_image_key_case_sensitive() {
	// only the exact listed forms count
	for key in ["a.Jpg", "a.GIF", "a.WEBP", "a.Png", "a.jPeg"] {
		assert!(!is_image_key(key), "'{key}' should not be an image");
	}
}

#[test]
fn test_images_is_image_key_rejects_others() {
	for key in ["notes.txt", "folder/", "archive.jpg.zip", "png", "image.svg", "jpg", ""] {
		assert!(!is_image_key(key), "'{key}' should not be an image");
	}
}

#[test]
fn test_images_set_keeps_order() {
	// -- Setup & Fixtures
	let keys = ["z.png", "readme.md", "a.jpg", "m/b.webp", "data.csv", "c.GIF", "c.gif"];

	// -- Exec
	let images = ImageSet::from_keys(keys);

	// -- Check
	assert_eq!(images.keys(), &["z.png", "a.jpg", "m/b.webp", "c.gif"]);
	assert_eq!(images.len(), 4);
}

#[test]
fn test_images_set_empty() {
	let images = ImageSet::from_keys(["a.txt", "b/"]);
	assert_eq!(images.len(), 0);
}
