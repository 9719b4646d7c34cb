//! Technology Icon Classifier
//!
//! Maps a free-text technology name to a display icon by ordered substring
//! matching. The rules are data, so evaluation order is explicit and testable.

/// Selectable icon assets (Tabler webfont classes, loaded by the host page)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Vue,
    Discord,
    Python,
    Javascript,
    Linux,
    Server,
    React,
    Github,
    Database,
    Code,
}

impl IconKind {
    /// CSS class of the glyph in the icon webfont
    pub fn class(self) -> &'static str {
        match self {
            IconKind::Vue => "ti ti-brand-vue",
            IconKind::Discord => "ti ti-brand-discord",
            IconKind::Python => "ti ti-brand-python",
            IconKind::Javascript => "ti ti-brand-javascript",
            IconKind::Linux => "ti ti-brand-ubuntu",
            IconKind::Server => "ti ti-server",
            IconKind::React => "ti ti-brand-react",
            IconKind::Github => "ti ti-brand-github",
            IconKind::Database => "ti ti-database",
            IconKind::Code => "ti ti-code",
        }
    }
}

/// A technology name paired with its selected icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechIcon {
    pub name: String,
    pub kind: IconKind,
}

/// Classification rules, evaluated top to bottom; first match wins.
///
/// Rules are not mutually exclusive ("Vue.js" matches both the vue and js
/// rules), so this order is part of the contract. The short "js" and "db"
/// needles intentionally match loosely, matching what the site has always
/// displayed.
const RULES: &[(&[&str], IconKind)] = &[
    (&["vue"], IconKind::Vue),
    (&["discord"], IconKind::Discord),
    (&["python"], IconKind::Python),
    (&["javascript", "js"], IconKind::Javascript),
    (&["linux", "ubuntu"], IconKind::Linux),
    (&["network", "server", "proxmox"], IconKind::Server),
    (&["react"], IconKind::React),
    (&["github"], IconKind::Github),
    (&["mongo", "db", "sql"], IconKind::Database),
];

/// Select an icon for a technology name.
///
/// Matching is case-insensitive substring containment; the original casing is
/// preserved in the returned pairing. Total over all inputs: anything
/// unmatched (including the empty string) gets the generic code icon.
pub fn classify(tech_name: &str) -> TechIcon {
    let lower = tech_name.to_lowercase();
    let kind = RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| lower.contains(needle)))
        .map(|(_, kind)| *kind)
        .unwrap_or(IconKind::Code);
    TechIcon {
        name: tech_name.to_string(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_preserved_verbatim() {
        assert_eq!(classify("Vue.js").name, "Vue.js");
        assert_eq!(classify("").name, "");
        assert_eq!(classify("  PYTHON  ").name, "  PYTHON  ");
    }

    #[test]
    fn test_empty_input_gets_default() {
        assert_eq!(classify("").kind, IconKind::Code);
    }

    #[test]
    fn test_unmatched_input_gets_default() {
        assert_eq!(classify("Something Unmatched").kind, IconKind::Code);
    }

    #[test]
    fn test_vue_beats_js() {
        // "Vue.js" contains "js" too; the vue rule comes first
        assert_eq!(classify("Vue.js").kind, IconKind::Vue);
    }

    #[test]
    fn test_js_beats_react() {
        // "reactjs" contains both needles; the js rule comes first
        assert_eq!(classify("reactjs").kind, IconKind::Javascript);
        assert_eq!(classify("React").kind, IconKind::React);
    }

    #[test]
    fn test_case_insensitive_matching() {
        assert_eq!(classify("GitHub Actions").kind, IconKind::Github);
        assert_eq!(classify("PYTHON").kind, IconKind::Python);
        assert_eq!(classify("Ubuntu Server 22.04").kind, IconKind::Linux);
    }

    #[test]
    fn test_database_family() {
        assert_eq!(classify("PostgreSQL").kind, IconKind::Database);
        assert_eq!(classify("MongoDB").kind, IconKind::Database);
        // known looseness: any "db" substring matches
        assert_eq!(classify("adb").kind, IconKind::Database);
    }

    #[test]
    fn test_server_family() {
        assert_eq!(classify("Proxmox VE").kind, IconKind::Server);
        assert_eq!(classify("Networking").kind, IconKind::Server);
    }

    #[test]
    fn test_discord_before_general_rules() {
        assert_eq!(classify("discord.js").kind, IconKind::Discord);
    }
}
