//! Static design tokens shared by every widget and exported for host applications.
//!
//! The token shape (palette scales with steps 50–900, semantic light/main/dark triples, spacing,
//! typography, shadows, radius, transitions) is a public contract. Renaming or restructuring a
//! field is a breaking change.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Ten-step palette scale, lightest (50) to darkest (900).
pub struct ColorScale {
    #[serde(rename = "50")]
    /// Step 50.
    pub s50: &'static str,
    #[serde(rename = "100")]
    /// Step 100.
    pub s100: &'static str,
    #[serde(rename = "200")]
    /// Step 200.
    pub s200: &'static str,
    #[serde(rename = "300")]
    /// Step 300.
    pub s300: &'static str,
    #[serde(rename = "400")]
    /// Step 400.
    pub s400: &'static str,
    #[serde(rename = "500")]
    /// Step 500, the main tone of the palette.
    pub s500: &'static str,
    #[serde(rename = "600")]
    /// Step 600.
    pub s600: &'static str,
    #[serde(rename = "700")]
    /// Step 700.
    pub s700: &'static str,
    #[serde(rename = "800")]
    /// Step 800.
    pub s800: &'static str,
    #[serde(rename = "900")]
    /// Step 900.
    pub s900: &'static str,
}

impl ColorScale {
    /// Step numbers in ascending order.
    pub const STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

    /// Looks up a step by number. Unknown steps return `None`.
    pub fn step(&self, step: u16) -> Option<&'static str> {
        match step {
            50 => Some(self.s50),
            100 => Some(self.s100),
            200 => Some(self.s200),
            300 => Some(self.s300),
            400 => Some(self.s400),
            500 => Some(self.s500),
            600 => Some(self.s600),
            700 => Some(self.s700),
            800 => Some(self.s800),
            900 => Some(self.s900),
            _ => None,
        }
    }

    /// `(step, color)` pairs in ascending order.
    pub fn steps(&self) -> impl Iterator<Item = (u16, &'static str)> + '_ {
        Self::STEPS
            .into_iter()
            .filter_map(|step| self.step(step).map(|color| (step, color)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Semantic color triple used for status surfaces, text, and borders.
pub struct SemanticColor {
    /// Background tint.
    pub light: &'static str,
    /// Primary tone.
    pub main: &'static str,
    /// Text-on-light tone.
    pub dark: &'static str,
}

impl SemanticColor {
    fn entries(&self) -> [(&'static str, &'static str); 3] {
        [("light", self.light), ("main", self.main), ("dark", self.dark)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Brand, neutral, and semantic palettes.
pub struct Colors {
    /// Brand palette.
    pub primary: ColorScale,
    /// Neutral palette.
    pub gray: ColorScale,
    /// Success triple.
    pub success: SemanticColor,
    /// Warning triple.
    pub warning: SemanticColor,
    /// Error triple.
    pub error: SemanticColor,
    /// Info triple.
    pub info: SemanticColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Spacing scale.
pub struct Spacing {
    /// Extra small.
    pub xs: &'static str,
    /// Small.
    pub sm: &'static str,
    /// Medium.
    pub md: &'static str,
    /// Large.
    pub lg: &'static str,
    /// Extra large.
    pub xl: &'static str,
    #[serde(rename = "2xl")]
    /// Double extra large.
    pub xxl: &'static str,
    #[serde(rename = "3xl")]
    /// Triple extra large.
    pub xxxl: &'static str,
}

impl Spacing {
    fn entries(&self) -> [(&'static str, &'static str); 7] {
        [
            ("xs", self.xs),
            ("sm", self.sm),
            ("md", self.md),
            ("lg", self.lg),
            ("xl", self.xl),
            ("2xl", self.xxl),
            ("3xl", self.xxxl),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Font stacks.
pub struct FontFamilies {
    /// UI text stack.
    pub sans: &'static str,
    /// Code stack.
    pub mono: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Type scale.
pub struct FontSizes {
    /// Extra small.
    pub xs: &'static str,
    /// Small.
    pub sm: &'static str,
    /// Body size.
    pub base: &'static str,
    /// Large.
    pub lg: &'static str,
    /// Extra large.
    pub xl: &'static str,
    #[serde(rename = "2xl")]
    /// Double extra large.
    pub xxl: &'static str,
    #[serde(rename = "3xl")]
    /// Triple extra large.
    pub xxxl: &'static str,
    #[serde(rename = "4xl")]
    /// Display size.
    pub xxxxl: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Numeric font weights.
pub struct FontWeights {
    /// Regular text.
    pub normal: u16,
    /// Labels.
    pub medium: u16,
    /// Headings.
    pub semibold: u16,
    /// Emphasis.
    pub bold: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Unitless line heights.
pub struct LineHeights {
    /// Headings.
    pub tight: &'static str,
    /// Body text.
    pub normal: &'static str,
    /// Long-form text.
    pub relaxed: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Typography tokens.
pub struct Typography {
    /// Font stacks.
    pub font_family: FontFamilies,
    /// Type scale.
    pub font_size: FontSizes,
    /// Weights.
    pub font_weight: FontWeights,
    /// Line heights.
    pub line_height: LineHeights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Elevation shadows.
pub struct Shadows {
    /// Subtle.
    pub sm: &'static str,
    /// Cards and dropdowns.
    pub md: &'static str,
    /// Popovers.
    pub lg: &'static str,
    /// Modals.
    pub xl: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Corner radii.
pub struct Radius {
    /// Square corners.
    pub none: &'static str,
    /// Small radius.
    pub sm: &'static str,
    /// Default radius.
    pub md: &'static str,
    /// Large radius.
    pub lg: &'static str,
    /// Pill/circle.
    pub full: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Transition timings.
pub struct Transitions {
    /// Hover/focus feedback.
    pub fast: &'static str,
    /// Default.
    pub normal: &'static str,
    /// Overlays.
    pub slow: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Complete token set.
pub struct Theme {
    /// Palettes.
    pub colors: Colors,
    /// Spacing scale.
    pub spacing: Spacing,
    /// Typography.
    pub typography: Typography,
    /// Shadows.
    pub shadows: Shadows,
    /// Radii.
    pub radius: Radius,
    /// Transitions.
    pub transitions: Transitions,
}

/// The design-system theme.
pub const THEME: Theme = Theme {
    colors: Colors {
        primary: ColorScale {
            s50: "#fff1f2",
            s100: "#ffe4e6",
            s200: "#fecdd3",
            s300: "#fda4af",
            s400: "#fb7185",
            s500: "#f43f5e",
            s600: "#e11d48",
            s700: "#be123c",
            s800: "#9f1239",
            s900: "#881337",
        },
        gray: ColorScale {
            s50: "#f9fafb",
            s100: "#f3f4f6",
            s200: "#e5e7eb",
            s300: "#d1d5db",
            s400: "#9ca3af",
            s500: "#6b7280",
            s600: "#4b5563",
            s700: "#374151",
            s800: "#1f2937",
            s900: "#111827",
        },
        success: SemanticColor {
            light: "#d1fae5",
            main: "#10b981",
            dark: "#065f46",
        },
        warning: SemanticColor {
            light: "#fef3c7",
            main: "#f59e0b",
            dark: "#92400e",
        },
        error: SemanticColor {
            light: "#fee2e2",
            main: "#ef4444",
            dark: "#991b1b",
        },
        info: SemanticColor {
            light: "#dbeafe",
            main: "#3b82f6",
            dark: "#1e3a8a",
        },
    },
    spacing: Spacing {
        xs: "0.25rem",
        sm: "0.5rem",
        md: "1rem",
        lg: "1.5rem",
        xl: "2rem",
        xxl: "3rem",
        xxxl: "4rem",
    },
    typography: Typography {
        font_family: FontFamilies {
            sans: "Inter, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif",
            mono: "'JetBrains Mono', 'SFMono-Regular', Menlo, Consolas, monospace",
        },
        font_size: FontSizes {
            xs: "0.75rem",
            sm: "0.875rem",
            base: "1rem",
            lg: "1.125rem",
            xl: "1.25rem",
            xxl: "1.5rem",
            xxxl: "1.875rem",
            xxxxl: "2.25rem",
        },
        font_weight: FontWeights {
            normal: 400,
            medium: 500,
            semibold: 600,
            bold: 700,
        },
        line_height: LineHeights {
            tight: "1.25",
            normal: "1.5",
            relaxed: "1.75",
        },
    },
    shadows: Shadows {
        sm: "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
        md: "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
        lg: "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
        xl: "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
    },
    radius: Radius {
        none: "0",
        sm: "0.25rem",
        md: "0.375rem",
        lg: "0.5rem",
        full: "9999px",
    },
    transitions: Transitions {
        fast: "150ms ease-in-out",
        normal: "250ms ease-in-out",
        slow: "350ms ease-in-out",
    },
};

impl Theme {
    /// Flattens the tokens into `--ds-*` CSS custom properties.
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let mut vars = Vec::new();
        let mut push = |name: String, value: String| vars.push((format!("--ds-{name}"), value));

        for (palette, scale) in [("primary", &self.colors.primary), ("gray", &self.colors.gray)] {
            for (step, color) in scale.steps() {
                push(format!("color-{palette}-{step}"), color.to_string());
            }
        }
        for (palette, triple) in [
            ("success", &self.colors.success),
            ("warning", &self.colors.warning),
            ("error", &self.colors.error),
            ("info", &self.colors.info),
        ] {
            for (tone, color) in triple.entries() {
                push(format!("color-{palette}-{tone}"), color.to_string());
            }
        }
        for (name, value) in self.spacing.entries() {
            push(format!("spacing-{name}"), value.to_string());
        }

        let typography = &self.typography;
        push("font-family-sans".into(), typography.font_family.sans.into());
        push("font-family-mono".into(), typography.font_family.mono.into());
        let sizes = &typography.font_size;
        for (name, value) in [
            ("xs", sizes.xs),
            ("sm", sizes.sm),
            ("base", sizes.base),
            ("lg", sizes.lg),
            ("xl", sizes.xl),
            ("2xl", sizes.xxl),
            ("3xl", sizes.xxxl),
            ("4xl", sizes.xxxxl),
        ] {
            push(format!("font-size-{name}"), value.to_string());
        }
        let weights = &typography.font_weight;
        for (name, value) in [
            ("normal", weights.normal),
            ("medium", weights.medium),
            ("semibold", weights.semibold),
            ("bold", weights.bold),
        ] {
            push(format!("font-weight-{name}"), value.to_string());
        }
        let heights = &typography.line_height;
        for (name, value) in [
            ("tight", heights.tight),
            ("normal", heights.normal),
            ("relaxed", heights.relaxed),
        ] {
            push(format!("line-height-{name}"), value.to_string());
        }

        let shadows = &self.shadows;
        for (name, value) in [
            ("sm", shadows.sm),
            ("md", shadows.md),
            ("lg", shadows.lg),
            ("xl", shadows.xl),
        ] {
            push(format!("shadow-{name}"), value.to_string());
        }
        let radius = &self.radius;
        for (name, value) in [
            ("none", radius.none),
            ("sm", radius.sm),
            ("md", radius.md),
            ("lg", radius.lg),
            ("full", radius.full),
        ] {
            push(format!("radius-{name}"), value.to_string());
        }
        let transitions = &self.transitions;
        for (name, value) in [
            ("fast", transitions.fast),
            ("normal", transitions.normal),
            ("slow", transitions.slow),
        ] {
            push(format!("transition-{name}"), value.to_string());
        }

        vars
    }

    /// Renders the custom properties as a CSS rule for `selector` (usually `:root`).
    pub fn stylesheet(&self, selector: &str) -> String {
        let body: String = self
            .css_variables()
            .into_iter()
            .map(|(name, value)| format!("  {name}: {value};\n"))
            .collect();
        format!("{selector} {{\n{body}}}\n")
    }
}

/// Serializes [`THEME`] to pretty JSON for consumers outside Rust.
///
/// # Errors
///
/// Propagates `serde_json` serialization failures.
pub fn theme_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&THEME)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;

    #[test]
    fn color_scales_expose_every_step() {
        let steps: Vec<u16> = THEME.colors.primary.steps().map(|(step, _)| step).collect();
        assert_eq!(steps, ColorScale::STEPS.to_vec());
        assert_eq!(THEME.colors.primary.step(500), Some("#f43f5e"));
        assert_eq!(THEME.colors.gray.step(900), Some("#111827"));
        assert_eq!(THEME.colors.gray.step(550), None);
    }

    #[test]
    fn json_export_keeps_public_shape() {
        let json: Value = serde_json::from_str(&theme_json().expect("json")).expect("parse");

        assert_eq!(json["colors"]["primary"]["500"], "#f43f5e");
        assert_eq!(json["colors"]["error"]["main"], "#ef4444");
        assert_eq!(json["spacing"]["2xl"], "3rem");
        assert_eq!(json["typography"]["fontSize"]["base"], "1rem");
        assert_eq!(json["typography"]["fontWeight"]["bold"], 700);
        for key in ["colors", "spacing", "typography", "shadows", "radius", "transitions"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn css_variables_cover_palettes_and_scales() {
        let vars = THEME.css_variables();
        let lookup = |name: &str| {
            vars.iter()
                .find(|(var, _)| var == name)
                .map(|(_, value)| value.as_str())
        };

        assert_eq!(lookup("--ds-color-primary-50"), Some("#fff1f2"));
        assert_eq!(lookup("--ds-color-info-dark"), Some("#1e3a8a"));
        assert_eq!(lookup("--ds-spacing-md"), Some("1rem"));
        assert_eq!(lookup("--ds-font-weight-semibold"), Some("600"));
        assert_eq!(lookup("--ds-radius-full"), Some("9999px"));
        assert_eq!(
            vars.iter().filter(|(var, _)| var.starts_with("--ds-color-")).count(),
            32
        );
    }

    #[test]
    fn stylesheet_wraps_variables_in_selector() {
        let css = THEME.stylesheet(":root");
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --ds-color-success-main: #10b981;\n"));
        assert!(css.ends_with("}\n"));
    }
}
