//! CMS media reference resolution

const WIX_IMAGE_SCHEME: &str = "wix:image://v1/";
const WIX_STATIC_MEDIA_URL: &str = "https://static.wixstatic.com/media/";

/// Turn an image field into a URL a browser can load.
///
/// CMS media URIs (`wix:image://v1/<media-id>/<file-name>#<params>`) map to
/// the static media host; anything else is returned unchanged.
pub fn resolve_image_url(reference: &str) -> String {
    match reference.strip_prefix(WIX_IMAGE_SCHEME) {
        Some(rest) => {
            let media_id = rest.split(['/', '#']).next().unwrap_or_default();
            if media_id.is_empty() {
                reference.to_string()
            } else {
                format!("{}{}", WIX_STATIC_MEDIA_URL, media_id)
            }
        }
        None => reference.to_string(),
    }
}
