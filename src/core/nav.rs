use fnv::FnvHashSet;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavTableError {
    #[error("zone {0:?} is mapped more than once")]
    DuplicateZone(String),
    #[error("anchor {0:?} is targeted by more than one zone")]
    DuplicateAnchor(String),
    #[error("anchor {0:?} must be an id selector like \"#contact\"")]
    BadAnchor(String),
}

/// Scene zone → page section anchor, kept one-to-one.
#[derive(Clone, Debug, PartialEq)]
pub struct NavTable {
    entries: Vec<(String, String)>,
}

pub const STUDIO_ZONES: [(&str, &str); 5] = [
    ("SERVICES", "#services"),
    ("CASE STUDIES", "#showcases"),
    ("LABS", "#who-we-are"),
    ("STORIES", "#stories"),
    ("CONTACT", "#contact"),
];

impl NavTable {
    pub fn new<Z, A>(entries: impl IntoIterator<Item = (Z, A)>) -> Result<Self, NavTableError>
    where
        Z: Into<String>,
        A: Into<String>,
    {
        let mut zones = FnvHashSet::default();
        let mut anchors = FnvHashSet::default();
        let mut out = Vec::new();
        for (zone, anchor) in entries {
            let zone = zone.into();
            let anchor = anchor.into();
            if anchor.len() < 2 || !anchor.starts_with('#') {
                return Err(NavTableError::BadAnchor(anchor));
            }
            if !zones.insert(zone.clone()) {
                return Err(NavTableError::DuplicateZone(zone));
            }
            if !anchors.insert(anchor.clone()) {
                return Err(NavTableError::DuplicateAnchor(anchor));
            }
            out.push((zone, anchor));
        }
        Ok(Self { entries: out })
    }

    pub fn studio() -> Self {
        Self {
            entries: STUDIO_ZONES
                .iter()
                .map(|(z, a)| (z.to_string(), a.to_string()))
                .collect(),
        }
    }

    pub fn anchor_for(&self, zone: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(z, _)| z == zone)
            .map(|(_, a)| a.as_str())
    }

    pub fn zones(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(z, _)| z.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
