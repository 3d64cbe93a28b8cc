use super::*;

#[test]
fn desktop_agents_are_not_mobile() {
    assert!(!is_mobile_user_agent(
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
    ));
    assert!(!is_mobile_user_agent(""));
}

#[test]
fn phone_and_tablet_agents_are_mobile() {
    assert!(is_mobile_user_agent(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
    ));
    assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
    assert!(is_mobile_user_agent("Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)"));
    assert!(is_mobile_user_agent("Mozilla/5.0 (Windows Phone 10.0; Android 6.0.1)"));
}

#[test]
fn element_id_prefixes() {
    assert!(is_lot_element_id("id12"));
    assert!(!is_lot_element_id("Group 3"));
    assert!(is_block_element_id("BLOCK_A"));
    assert!(!is_block_element_id("block_a"));
}
