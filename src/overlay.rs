use crate::constants::{BADGE_IDLE_TEXT, BADGE_ZONE_PREFIX, HOVER_BADGE_ID};
use web_sys as web;

pub fn badge_text(zone: Option<&str>) -> String {
    match zone {
        Some(z) => format!("{}{}", BADGE_ZONE_PREFIX, z),
        None => BADGE_IDLE_TEXT.to_string(),
    }
}

/// The "Exploring: ZONE" label over the studio canvas.
#[derive(Clone)]
pub struct HoverBadge {
    el: web::Element,
}

impl HoverBadge {
    pub fn find(document: &web::Document) -> Option<Self> {
        let el = document.get_element_by_id(HOVER_BADGE_ID)?;
        let badge = Self { el };
        badge.show(None);
        Some(badge)
    }

    pub fn show(&self, zone: Option<&str>) {
        self.el.set_text_content(Some(&badge_text(zone)));
        _ = self.el.set_attribute("data-active", if zone.is_some() { "1" } else { "0" });
    }
}
