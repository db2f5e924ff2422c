//! Project images embedded at build time.
//!
//! Each [`AssetHandle`] name maps to an SVG under `assets/projects/`, served
//! to the webview as a base64 data URI.

use base64::Engine;
use portfolio_core::AssetHandle;

const K_HUB: &[u8] = include_bytes!("../assets/projects/k-hub.svg");
const HAND_GESTURE: &[u8] = include_bytes!("../assets/projects/hand-gesture.svg");
const DATA_VISUALIZER: &[u8] = include_bytes!("../assets/projects/data-visualizer.svg");
const AUG_TASK: &[u8] = include_bytes!("../assets/projects/aug-task.svg");
const NOV_TASK: &[u8] = include_bytes!("../assets/projects/nov-task.svg");

// Neutral tile for unknown handles
const PLACEHOLDER: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="360"><rect width="640" height="360" fill="#374151"/></svg>"##;

fn bytes_for(handle: AssetHandle) -> Option<&'static [u8]> {
    match handle.name {
        "k-hub" => Some(K_HUB),
        "hand-gesture" => Some(HAND_GESTURE),
        "data-visualizer" => Some(DATA_VISUALIZER),
        "aug-task" => Some(AUG_TASK),
        "nov-task" => Some(NOV_TASK),
        _ => None,
    }
}

/// Data URI for an image handle
pub fn image_uri(handle: AssetHandle) -> String {
    let (bytes, media_type) = match bytes_for(handle) {
        Some(bytes) => (bytes, handle.media_type),
        None => {
            tracing::warn!(name = handle.name, "no embedded image for asset");
            (PLACEHOLDER, "image/svg+xml")
        }
    };
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", media_type, encoded)
}

#[cfg(test)]
mod tests {
    use portfolio_core::data::PROJECTS;

    use super::*;

    #[test]
    fn every_project_has_an_image() {
        for project in PROJECTS {
            assert!(bytes_for(project.image).is_some(), "{}", project.title);
        }
    }

    #[test]
    fn unknown_handle_falls_back() {
        let uri = image_uri(AssetHandle::svg("missing"));
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
    }
}
