use serde::Serialize;

// design tokens
//
// components read tokens through the typed field path (theme.color.accent.primary), so a
// token that does not exist is a compile error rather than a runtime fallback.  the dotted
// string form (color.accent.primary) is only used by tooling and the css variable export
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub color: ColorTokens,
    pub typography: TypographyTokens,
    pub layout: LayoutTokens,
    pub shadow: ShadowTokens,
    pub motion: MotionTokens,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ColorTokens {
    pub background: BackgroundColors,
    pub text: TextColors,
    pub accent: AccentColors,
    pub border: BorderColors,
    // alternating card backgrounds for the detailed module grid
    pub module_palette: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BackgroundColors {
    pub base: &'static str,
    pub surface: &'static str,
    pub footer: &'static str,
    pub header: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
    pub inverse: &'static str,
    pub inverse_muted: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AccentColors {
    pub primary: &'static str,
    pub subtle: &'static str,
    pub gradient_from: &'static str,
    pub gradient_to: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BorderColors {
    pub default: &'static str,
    pub strong: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TypographyTokens {
    pub family: &'static str,
    pub sizes: FontSizes,
    pub weight: FontWeights,
    pub letter_spacing: LetterSpacing,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FontSizes {
    pub overline: &'static str,
    pub hero: &'static str,
    pub subtitle: &'static str,
    pub section_title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FontWeights {
    pub regular: u16,
    pub medium: u16,
    pub semibold: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LetterSpacing {
    pub tight: &'static str,
    pub relaxed: &'static str,
    pub wide: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LayoutTokens {
    pub max_width: &'static str,
    pub gutter: Responsive,
    pub section_padding: Responsive,
    pub radius: Radii,
}

// a value that scales between a mobile and a desktop size
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Responsive {
    pub mobile: &'static str,
    pub desktop: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Radii {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub full: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShadowTokens {
    pub soft: &'static str,
    pub card: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MotionTokens {
    pub fast: &'static str,
    pub normal: &'static str,
    pub easing: &'static str,
}

pub const INDIGO: Theme = Theme {
    name: "indigo",
    color: ColorTokens {
        background: BackgroundColors {
            base: "#F8F9FB",
            surface: "#FFFFFF",
            footer: "#0F172A",
            header: "rgba(248, 249, 251, 0.85)",
        },
        text: TextColors {
            primary: "#0F172A",
            secondary: "#475569",
            tertiary: "#64748B",
            inverse: "#F8FAFF",
            inverse_muted: "rgba(248, 250, 255, 0.68)",
        },
        accent: AccentColors {
            primary: "#1E3A8A",
            subtle: "rgba(30, 58, 138, 0.08)",
            gradient_from: "#1E3A8A",
            gradient_to: "#3B82F6",
        },
        border: BorderColors {
            default: "#E2E8F0",
            strong: "#94A3B8",
        },
        module_palette: &["#FFFFFF", "#EEF2FF", "#F0F9FF"],
    },
    typography: TypographyTokens {
        family: "'Inter', system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif",
        sizes: FontSizes {
            overline: "0.75rem",
            hero: "clamp(2.5rem, 5vw, 4rem)",
            subtitle: "1.2rem",
            section_title: "clamp(1.9rem, 3.4vw, 2.6rem)",
            body: "1.05rem",
        },
        weight: FontWeights {
            regular: 400,
            medium: 500,
            semibold: 600,
        },
        letter_spacing: LetterSpacing {
            tight: "-0.02em",
            relaxed: "0.02em",
            wide: "0.18em",
        },
    },
    layout: LayoutTokens {
        max_width: "1200px",
        gutter: Responsive {
            mobile: "20px",
            desktop: "40px",
        },
        section_padding: Responsive {
            mobile: "72px",
            desktop: "120px",
        },
        radius: Radii {
            sm: "8px",
            md: "12px",
            lg: "20px",
            xl: "28px",
            full: "999px",
        },
    },
    shadow: ShadowTokens {
        soft: "0 18px 40px rgba(30, 58, 138, 0.18)",
        card: "0 16px 34px rgba(15, 23, 42, 0.06)",
    },
    motion: MotionTokens {
        fast: "150ms",
        normal: "250ms",
        easing: "cubic-bezier(0.4, 0.0, 0.2, 1)",
    },
};

pub const SLATE: Theme = Theme {
    name: "slate",
    color: ColorTokens {
        background: BackgroundColors {
            base: "#FFFFFF",
            surface: "#F4F6F8",
            footer: "#111827",
            header: "rgba(255, 255, 255, 0.9)",
        },
        text: TextColors {
            primary: "#111827",
            secondary: "#4B5563",
            tertiary: "#6B7280",
            inverse: "#FFFFFF",
            inverse_muted: "rgba(255, 255, 255, 0.7)",
        },
        accent: AccentColors {
            primary: "#0F766E",
            subtle: "rgba(15, 118, 110, 0.08)",
            gradient_from: "#0F766E",
            gradient_to: "#14B8A6",
        },
        border: BorderColors {
            default: "#E5E7EB",
            strong: "#9CA3AF",
        },
        module_palette: &["#FFFFFF", "#F0FDFA"],
    },
    typography: TypographyTokens {
        family: "system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif",
        sizes: FontSizes {
            overline: "0.7rem",
            hero: "clamp(2.25rem, 4.5vw, 3.5rem)",
            subtitle: "1.125rem",
            section_title: "clamp(1.75rem, 3vw, 2.25rem)",
            body: "1rem",
        },
        weight: FontWeights {
            regular: 400,
            medium: 500,
            semibold: 600,
        },
        letter_spacing: LetterSpacing {
            tight: "-0.01em",
            relaxed: "0.01em",
            wide: "0.16em",
        },
    },
    layout: LayoutTokens {
        max_width: "1120px",
        gutter: Responsive {
            mobile: "16px",
            desktop: "32px",
        },
        section_padding: Responsive {
            mobile: "64px",
            desktop: "104px",
        },
        radius: Radii {
            sm: "6px",
            md: "10px",
            lg: "16px",
            xl: "24px",
            full: "999px",
        },
    },
    shadow: ShadowTokens {
        soft: "0 12px 32px rgba(15, 118, 110, 0.16)",
        card: "0 10px 24px rgba(17, 24, 39, 0.06)",
    },
    motion: MotionTokens {
        fast: "120ms",
        normal: "220ms",
        easing: "cubic-bezier(0.2, 0.0, 0.0, 1)",
    },
};

impl Theme {
    // every token as (dotted path, rendered value)
    //
    // the palette is exported by position, i.e. color.module_palette.0
    pub fn entries(&self) -> Vec<(String, String)> {
        let c = &self.color;
        let t = &self.typography;
        let l = &self.layout;

        let mut entries: Vec<(String, String)> = [
            ("color.background.base", c.background.base),
            ("color.background.surface", c.background.surface),
            ("color.background.footer", c.background.footer),
            ("color.background.header", c.background.header),
            ("color.text.primary", c.text.primary),
            ("color.text.secondary", c.text.secondary),
            ("color.text.tertiary", c.text.tertiary),
            ("color.text.inverse", c.text.inverse),
            ("color.text.inverse_muted", c.text.inverse_muted),
            ("color.accent.primary", c.accent.primary),
            ("color.accent.subtle", c.accent.subtle),
            ("color.accent.gradient_from", c.accent.gradient_from),
            ("color.accent.gradient_to", c.accent.gradient_to),
            ("color.border.default", c.border.default),
            ("color.border.strong", c.border.strong),
            ("typography.family", t.family),
            ("typography.sizes.overline", t.sizes.overline),
            ("typography.sizes.hero", t.sizes.hero),
            ("typography.sizes.subtitle", t.sizes.subtitle),
            ("typography.sizes.section_title", t.sizes.section_title),
            ("typography.sizes.body", t.sizes.body),
            ("typography.letter_spacing.tight", t.letter_spacing.tight),
            ("typography.letter_spacing.relaxed", t.letter_spacing.relaxed),
            ("typography.letter_spacing.wide", t.letter_spacing.wide),
            ("layout.max_width", l.max_width),
            ("layout.gutter.mobile", l.gutter.mobile),
            ("layout.gutter.desktop", l.gutter.desktop),
            ("layout.section_padding.mobile", l.section_padding.mobile),
            ("layout.section_padding.desktop", l.section_padding.desktop),
            ("layout.radius.sm", l.radius.sm),
            ("layout.radius.md", l.radius.md),
            ("layout.radius.lg", l.radius.lg),
            ("layout.radius.xl", l.radius.xl),
            ("layout.radius.full", l.radius.full),
            ("shadow.soft", self.shadow.soft),
            ("shadow.card", self.shadow.card),
            ("motion.fast", self.motion.fast),
            ("motion.normal", self.motion.normal),
            ("motion.easing", self.motion.easing),
        ]
        .into_iter()
        .map(|(path, value)| (path.to_owned(), value.to_owned()))
        .collect();

        entries.extend([
            ("typography.weight.regular".to_owned(), t.weight.regular.to_string()),
            ("typography.weight.medium".to_owned(), t.weight.medium.to_string()),
            ("typography.weight.semibold".to_owned(), t.weight.semibold.to_string()),
        ]);

        entries.extend(
            c.module_palette
                .iter()
                .enumerate()
                .map(|(idx, color)| (format!("color.module_palette.{idx}"), (*color).to_owned())),
        );

        entries
    }

    pub fn lookup(&self, path: &str) -> Option<String> {
        self.entries()
            .into_iter()
            .find(|(key, _)| key == path)
            .map(|(_, value)| value)
    }

    // the :root block consumed by the global stylesheet
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");

        for (path, value) in self.entries() {
            css.push_str(&format!("  {}: {};\n", css_variable_name(&path), value));
        }

        css.push('}');
        css
    }

    // the cosmetic card background for position `index` in the detailed module grid
    pub fn module_background(&self, index: usize) -> &'static str {
        palette_color(self.color.module_palette, index).unwrap_or(self.color.background.surface)
    }
}

// color.accent.primary -> --color-accent-primary
pub fn css_variable_name(path: &str) -> String {
    format!("--{}", path.replace(|c: char| c == '.' || c == '_', "-"))
}

pub fn palette_color(palette: &[&'static str], index: usize) -> Option<&'static str> {
    if palette.is_empty() {
        return None;
    }

    Some(palette[index % palette.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_around() {
        let palette = INDIGO.color.module_palette;
        let len = palette.len();

        for idx in 0..=(2 * len) {
            assert_eq!(palette_color(palette, idx), Some(palette[idx % len]));
        }

        assert_eq!(palette_color(palette, len), Some(palette[0]));
        assert_eq!(palette_color(palette, 2 * len + 1), Some(palette[1]));
    }

    #[test]
    fn empty_palette_falls_back_to_surface() {
        assert_eq!(palette_color(&[], 3), None);

        let theme = Theme {
            color: ColorTokens {
                module_palette: &[],
                ..INDIGO.color
            },
            ..INDIGO
        };
        assert_eq!(theme.module_background(5), INDIGO.color.background.surface);
    }

    #[test]
    fn lookup_resolves_every_entry() {
        for theme in [INDIGO, SLATE] {
            for (path, value) in theme.entries() {
                assert_eq!(theme.lookup(&path), Some(value), "{path}");
            }
        }
    }

    #[test]
    fn lookup_reads_by_dotted_path() {
        assert_eq!(INDIGO.lookup("color.accent.primary").as_deref(), Some("#1E3A8A"));
        assert_eq!(SLATE.lookup("layout.max_width").as_deref(), Some("1120px"));
        assert_eq!(INDIGO.lookup("typography.weight.semibold").as_deref(), Some("600"));
        assert_eq!(INDIGO.lookup("color.module_palette.1").as_deref(), Some("#EEF2FF"));
    }

    #[test]
    fn lookup_rejects_unknown_paths() {
        assert_eq!(INDIGO.lookup("color.accent"), None);
        assert_eq!(INDIGO.lookup("color.accent.tertiary"), None);
        assert_eq!(INDIGO.lookup(""), None);
    }

    #[test]
    fn entry_paths_are_unique() {
        let entries = INDIGO.entries();
        let mut paths: Vec<&str> = entries.iter().map(|(path, _)| path.as_str()).collect();
        paths.sort_unstable();
        paths.dedup();

        assert_eq!(paths.len(), entries.len());
    }

    #[test]
    fn css_variables_declare_every_entry() {
        let css = SLATE.css_variables();

        assert!(css.starts_with(":root {"));
        assert!(css.contains("  --color-accent-primary: #0F766E;\n"));
        assert!(css.contains("  --typography-sizes-section-title: clamp(1.75rem, 3vw, 2.25rem);\n"));
        assert_eq!(css.matches(": ").count(), SLATE.entries().len());
    }

    #[test]
    fn variants_differ_where_expected() {
        assert_ne!(INDIGO.layout.max_width, SLATE.layout.max_width);
        assert_ne!(INDIGO.color.accent.gradient_to, SLATE.color.accent.gradient_to);
    }
}
