//! Cosmetic color/icon assignment for roles and candidates.
//!
//! Every lookup is index-modulo-length so any number of candidates cycles
//! through the palette instead of running off the end.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// A two-stop gradient used for avatars, result bars, and chart columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

impl Swatch {
    /// CSS `linear-gradient` with the given direction (e.g. `"to right"`).
    #[must_use]
    pub fn gradient(&self, direction: &str) -> String {
        format!("linear-gradient({direction}, {}, {})", self.from, self.to)
    }
}

pub const ROLE_SWATCHES: [Swatch; 5] = [
    Swatch { name: "blue", from: "#3b82f6", to: "#1d4ed8" },
    Swatch { name: "emerald", from: "#10b981", to: "#0f766e" },
    Swatch { name: "purple", from: "#a855f7", to: "#4338ca" },
    Swatch { name: "red", from: "#ef4444", to: "#be123c" },
    Swatch { name: "orange", from: "#f97316", to: "#a16207" },
];

pub const ROLE_EMOJIS: [&str; 5] = ["👨‍💼", "👩‍💼", "👨‍🎓", "👩‍🎓", "🧑‍💼"];

pub const CANDIDATE_SWATCHES: [Swatch; 3] = [ROLE_SWATCHES[0], ROLE_SWATCHES[1], ROLE_SWATCHES[2]];

pub const CANDIDATE_EMOJIS: [&str; 3] = [ROLE_EMOJIS[0], ROLE_EMOJIS[1], ROLE_EMOJIS[2]];

/// Icon for roles missing from [`ROLE_REGISTRY`].
pub const FALLBACK_ROLE_ICON: &str = "📊";

/// Known role displayed with a human title and icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleInfo {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

/// Roles offered as filter tabs, in tab order.
pub const ROLE_REGISTRY: [RoleInfo; 4] = [
    RoleInfo { key: "president", title: "President", icon: "🏛️" },
    RoleInfo { key: "vicePresident", title: "Vice President", icon: "🎖️" },
    RoleInfo { key: "secretary", title: "Secretary", icon: "📋" },
    RoleInfo { key: "treasury", title: "Treasury", icon: "💰" },
];

/// Display title + icon for a role key, borrowing the key when unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleLabel<'a> {
    pub title: &'a str,
    pub icon: &'static str,
}

#[must_use]
pub fn role_label(key: &str) -> RoleLabel<'_> {
    ROLE_REGISTRY.iter().find(|info| info.key == key).map_or(
        RoleLabel { title: key, icon: FALLBACK_ROLE_ICON },
        |info| RoleLabel { title: info.title, icon: info.icon },
    )
}

/// Gradient for the candidate at `index` within a role card.
#[must_use]
pub fn role_swatch(index: usize) -> Swatch {
    ROLE_SWATCHES[index % ROLE_SWATCHES.len()]
}

#[must_use]
pub fn role_emoji(index: usize) -> &'static str {
    ROLE_EMOJIS[index % ROLE_EMOJIS.len()]
}

/// Gradient for the candidate at `index` in the authenticated results list.
#[must_use]
pub fn candidate_swatch(index: usize) -> Swatch {
    CANDIDATE_SWATCHES[index % CANDIDATE_SWATCHES.len()]
}

#[must_use]
pub fn candidate_emoji(index: usize) -> &'static str {
    CANDIDATE_EMOJIS[index % CANDIDATE_EMOJIS.len()]
}
