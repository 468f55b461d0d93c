/// Vertical scroll offset (px) past which the navbar switches to its compact style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// In-page anchors the navbar can scroll to.
pub const SECTION_FEATURES: &str = "features";
pub const SECTION_SCENARIOS: &str = "scenarios";
pub const SECTION_WHY: &str = "why";

/// Base path for the screenshot gallery. Set `PAMYO_ASSET_BASE` at build
/// time to point at a CDN instead of the static host.
pub fn get_asset_base() -> &'static str {
    option_env!("PAMYO_ASSET_BASE").unwrap_or("/screenshots")
}

pub fn asset_url(file: &str) -> String {
    format!("{}/{}", get_asset_base().trim_end_matches('/'), file)
}

/// Delays (ms) for the hero typing animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleTiming {
    pub type_ms: u32,
    pub pause_full_ms: u32,
    pub erase_ms: u32,
    pub pause_empty_ms: u32,
}

impl Default for CycleTiming {
    fn default() -> Self {
        Self {
            type_ms: 80,
            pause_full_ms: 2500,
            erase_ms: 40,
            pause_empty_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erasing_is_faster_than_typing() {
        let timing = CycleTiming::default();
        assert!(timing.erase_ms < timing.type_ms);
    }

    #[test]
    fn asset_url_joins_without_double_slash() {
        let url = asset_url("folders.png");
        assert!(url.ends_with("/folders.png"));
        assert!(!url.contains("//folders"));
    }
}
