use super::Mounted;
use crate::core::reveal::{RevealOptions, TriggerMode, VISIBLE_CLASS};
use crate::dom::{attr_lookup, set_style};
use crate::viewport::ViewportTrigger;
use web_sys as web;

pub struct RevealMount {
    _trigger: ViewportTrigger,
}

impl Mounted for RevealMount {
    fn kind(&self) -> &'static str {
        "reveal"
    }
}

pub fn mount(el: &web::HtmlElement) -> RevealMount {
    let opts = RevealOptions::from_attrs(attr_lookup(el));
    _ = el.class_list().add_1(opts.variant.class_name());
    set_style(el, "transition-delay", &opts.transition_delay_css());

    let target = el.clone();
    let trigger = ViewportTrigger::new(
        el,
        TriggerMode::OnView {
            threshold: opts.threshold,
        },
        move || {
            _ = target.class_list().add_1(VISIBLE_CLASS);
        },
    );
    RevealMount { _trigger: trigger }
}
