use serde::Serialize;

// number of modules shown in the navigation preview
pub const PREVIEW_LIMIT: usize = 4;

// the canonical module record
//
// compact contexts (the navigation preview, the catalog grid) render projections of this
// record rather than a second, shorter definition of the same content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Module {
    // rendering key only, never used for lookups
    pub id: &'static str,
    pub slug: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub headline: &'static str,
    pub description: &'static str,
    pub capabilities: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModuleSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub headline: &'static str,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModulePreview {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub href: String,
    pub sentence: String,
}

impl Module {
    pub fn href(&self) -> String {
        format!("/modules/{}", self.slug)
    }

    pub fn summary(&self) -> ModuleSummary {
        ModuleSummary {
            id: self.id,
            name: self.name,
            icon: self.icon,
            headline: self.headline,
            href: self.href(),
        }
    }

    pub fn preview(&self) -> ModulePreview {
        ModulePreview {
            id: self.id,
            name: self.name,
            icon: self.icon,
            href: self.href(),
            sentence: preview_sentence(self.description),
        }
    }
}

// the first sentence of a description, re-terminated with a period
//
// when there is no leading sentence to take (empty input, or a description that starts with
// a period) the description is returned untouched
pub fn preview_sentence(description: &str) -> String {
    let first = description.split('.').next().unwrap_or_default().trim();

    if first.is_empty() {
        return description.to_owned();
    }

    format!("{first}.")
}

// the first `limit` modules in registry order
pub fn module_previews(modules: &[Module], limit: usize) -> Vec<ModulePreview> {
    modules.iter().take(limit).map(Module::preview).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOM: Module = Module {
        id: "loom",
        slug: "loom",
        name: "loomOS",
        icon: "L",
        title: "Loom",
        headline: "Looms",
        description: "Tracks looms. Reports on them.",
        capabilities: &[],
    };

    #[test]
    fn preview_sentence_takes_first_sentence() {
        assert_eq!(preview_sentence("A. B."), "A.");
        assert_eq!(
            preview_sentence("digitises X. It harmonises Y."),
            "digitises X."
        );
    }

    #[test]
    fn preview_sentence_adds_missing_period() {
        assert_eq!(preview_sentence("No period here"), "No period here.");
        assert_eq!(preview_sentence("  padded  "), "padded.");
    }

    #[test]
    fn preview_sentence_falls_back_to_input() {
        assert_eq!(preview_sentence(""), "");
        assert_eq!(preview_sentence(". starts with a period"), ". starts with a period");
        assert_eq!(preview_sentence("   "), "   ");
    }

    #[test]
    fn summary_is_a_projection() {
        let summary = LOOM.summary();

        assert_eq!(summary.id, LOOM.id);
        assert_eq!(summary.name, LOOM.name);
        assert_eq!(summary.icon, LOOM.icon);
        assert_eq!(summary.headline, LOOM.headline);
        assert_eq!(summary.href, "/modules/loom");
    }

    #[test]
    fn previews_are_clamped_to_registry_length() {
        let short = [LOOM, Module { id: "dye", ..LOOM }];

        let previews = module_previews(&short, PREVIEW_LIMIT);
        assert_eq!(previews.len(), 2);
        assert_eq!(previews[0].id, "loom");
        assert_eq!(previews[1].id, "dye");
        assert_eq!(previews[0].sentence, "Tracks looms.");

        assert!(module_previews(&[], PREVIEW_LIMIT).is_empty());
    }
}
