// Typed reads over `data-*` attributes. The lookup closure abstracts the DOM so
// option parsing can run on the host.

pub fn attr_f64(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: f64) -> f64 {
    lookup(name)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

pub fn attr_f32(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: f32) -> f32 {
    attr_f64(lookup, name, default as f64) as f32
}

pub fn attr_u32(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: u32) -> u32 {
    lookup(name)
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

/// Absent or unparseable → `default`. A bare attribute (`data-glare`) reads as true.
pub fn attr_bool(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: bool) -> bool {
    match lookup(name) {
        None => default,
        Some(v) => match v.trim().to_ascii_lowercase().as_str() {
            "" | "true" | "1" | "yes" | "on" => true,
            "false" | "0" | "no" | "off" => false,
            _ => default,
        },
    }
}

pub fn attr_string(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> String {
    lookup(name).unwrap_or_default()
}
