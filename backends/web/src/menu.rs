use reviewkit_core::PageConfig;

use crate::{dom::Page, error::WebError};

/// Toggles the responsive navigation menu.
pub fn toggle_mobile_menu(page: &Page, config: &PageConfig) -> Result<(), WebError> {
    let menu = page.require(&config.selectors.nav_menu)?;
    let open = menu.class_list().toggle(&config.classes.mobile_active)?;
    tracing::debug!(target: "reviewkit::menu", open, "mobile menu toggled");
    Ok(())
}

/// Shows or hides the header template's collapsible menu and mirrors it in `aria-expanded`.
pub fn toggle_header_menu(page: &Page, config: &PageConfig) -> Result<(), WebError> {
    let button = page.require(&config.selectors.mobile_menu_button)?;
    let menu = page.require(&config.selectors.mobile_menu)?;
    menu.class_list().toggle(&config.classes.hidden)?;
    let expanded = flip_expanded(button.get_attribute("aria-expanded").as_deref());
    button.set_attribute("aria-expanded", expanded)?;
    Ok(())
}

/// Next `aria-expanded` value; anything but `"true"` counts as collapsed.
fn flip_expanded(current: Option<&str>) -> &'static str {
    if current == Some("true") { "false" } else { "true" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aria_expanded_flips() {
        assert_eq!(flip_expanded(Some("true")), "false");
        assert_eq!(flip_expanded(Some("false")), "true");
        assert_eq!(flip_expanded(None), "true");
    }
}
