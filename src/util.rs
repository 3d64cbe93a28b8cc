// Small helpers shared by the map wiring.

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

const MOBILE_AGENTS: [&str; 7] =
    ["android", "webos", "iphone", "ipad", "ipod", "blackberry", "windows phone"];

/// Whether a user agent string belongs to a phone or tablet.
#[must_use]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_AGENTS.iter().any(|needle| ua.contains(needle))
}

#[must_use]
pub fn is_lot_element_id(id: &str) -> bool {
    id.starts_with("id")
}

#[must_use]
pub fn is_block_element_id(id: &str) -> bool {
    id.starts_with("BLOCK_")
}
