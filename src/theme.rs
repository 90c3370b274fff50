//! Rover design tokens.
//!
//! The table is plain constant data. Styling reads it through
//! [`css_variables`], which renders it into the `:root` custom properties the
//! page stylesheet refers to (`var(--mclaren-orange)`, `var(--spacing-md)`, ...).

use log::debug;
use serde::Serialize;
use web_sys::window;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrandColor {
    pub name: &'static str,
    pub hex: &'static str,
    pub rgb: &'static str,
    #[serde(skip)]
    channels: (u8, u8, u8),
    pub usage: &'static [&'static str],
}

impl BrandColor {
    pub fn rgba(&self, alpha: f64) -> String {
        let (r, g, b) = self.channels;
        format!("rgba({}, {}, {}, {})", r, g, b, alpha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryColors {
    pub meta_blue: BrandColor,
    pub terminal_green: BrandColor,
    pub ferrari_red: BrandColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrandColors {
    pub primary: BrandColor,
    pub secondary: SecondaryColors,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceColor {
    pub name: &'static str,
    pub hex: &'static str,
    pub rgb: &'static str,
    pub usage: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Backgrounds {
    pub primary: SurfaceColor,
    pub secondary: SurfaceColor,
    pub card: SurfaceColor,
    pub hover: SurfaceColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextColors {
    pub primary: SurfaceColor,
    pub secondary: SurfaceColor,
    pub muted: SurfaceColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Colors {
    pub brand: BrandColors,
    pub backgrounds: Backgrounds,
    pub text: TextColors,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub rem: &'static str,
    pub px: &'static str,
}

/// 8px base unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spacing {
    pub xs: Size,
    pub sm: Size,
    pub md: Size,
    pub lg: Size,
    pub xl: Size,
    #[serde(rename = "2xl")]
    pub xxl: Size,
}

impl Spacing {
    pub fn steps(&self) -> [(&'static str, Size); 6] {
        [
            ("xs", self.xs),
            ("sm", self.sm),
            ("md", self.md),
            ("lg", self.lg),
            ("xl", self.xl),
            ("2xl", self.xxl),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontSize {
    pub rem: &'static str,
    pub px: &'static str,
    pub usage: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontSizes {
    pub xs: FontSize,
    pub sm: FontSize,
    pub base: FontSize,
    pub lg: FontSize,
    pub xl: FontSize,
    #[serde(rename = "2xl")]
    pub xxl: FontSize,
    #[serde(rename = "3xl")]
    pub xxxl: FontSize,
    #[serde(rename = "4xl")]
    pub xxxxl: FontSize,
    #[serde(rename = "5xl")]
    pub xxxxxl: FontSize,
}

impl FontSizes {
    pub fn steps(&self) -> [(&'static str, FontSize); 9] {
        [
            ("xs", self.xs),
            ("sm", self.sm),
            ("base", self.base),
            ("lg", self.lg),
            ("xl", self.xl),
            ("2xl", self.xxl),
            ("3xl", self.xxxl),
            ("4xl", self.xxxxl),
            ("5xl", self.xxxxxl),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontWeights {
    pub light: u16,
    pub regular: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
    pub extrabold: u16,
    pub black: u16,
}

impl FontWeights {
    pub fn steps(&self) -> [(&'static str, u16); 7] {
        [
            ("light", self.light),
            ("regular", self.regular),
            ("medium", self.medium),
            ("semibold", self.semibold),
            ("bold", self.bold),
            ("extrabold", self.extrabold),
            ("black", self.black),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: &'static str,
    pub sizes: FontSizes,
    pub weights: FontWeights,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BorderRadius {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub full: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadows {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transitions {
    pub fast: &'static str,
    pub base: &'static str,
    pub slow: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakpoints {
    pub mobile: &'static str,
    pub tablet: &'static str,
    pub desktop: &'static str,
    pub wide: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZIndex {
    pub background: i32,
    pub base: i32,
    pub dropdown: i32,
    pub sticky: i32,
    pub fixed: i32,
    pub modal: i32,
    pub popover: i32,
    pub tooltip: i32,
    pub notification: i32,
}

impl ZIndex {
    pub fn layers(&self) -> [(&'static str, i32); 9] {
        [
            ("background", self.background),
            ("base", self.base),
            ("dropdown", self.dropdown),
            ("sticky", self.sticky),
            ("fixed", self.fixed),
            ("modal", self.modal),
            ("popover", self.popover),
            ("tooltip", self.tooltip),
            ("notification", self.notification),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarPreset {
    pub height: &'static str,
    pub background: &'static str,
    pub backdrop_filter: &'static str,
    pub border: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonPreset {
    pub background: &'static str,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<&'static str>,
    pub padding: &'static str,
    pub border_radius: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ButtonPresets {
    pub primary: ButtonPreset,
    pub secondary: ButtonPreset,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPreset {
    pub background: &'static str,
    pub border: &'static str,
    pub border_radius: &'static str,
    pub padding: &'static str,
    pub transition: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Components {
    pub navbar: NavbarPreset,
    pub button: ButtonPresets,
    pub card: CardPreset,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Animation {
    pub name: &'static str,
    pub duration: &'static str,
    pub timing: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animations {
    pub float: Animation,
    pub fade_in: Animation,
    pub fade_in_up: Animation,
    pub bounce: Animation,
    pub scroll: Animation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbGradients {
    pub blue: &'static str,
    pub orange: &'static str,
    pub green: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Glassmorphism {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
    pub border: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gradients {
    pub orbs: OrbGradients,
    pub glassmorphism: Glassmorphism,
}

/// A usage note for the tokens, with an optional counter-example.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Guideline {
    pub description: &'static str,
    pub example: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Guidelines {
    pub spacing: Guideline,
    pub colors: Guideline,
    pub typography: Guideline,
    pub transitions: Guideline,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: Colors,
    pub spacing: Spacing,
    pub typography: Typography,
    pub border_radius: BorderRadius,
    pub shadows: Shadows,
    pub transitions: Transitions,
    pub breakpoints: Breakpoints,
    pub z_index: ZIndex,
    pub components: Components,
    pub animations: Animations,
    pub gradients: Gradients,
    pub guidelines: Guidelines,
}

const MCLAREN_ORANGE: BrandColor = BrandColor {
    name: "McLaren Orange",
    hex: "#FF8000",
    rgb: "rgb(255, 128, 0)",
    channels: (255, 128, 0),
    usage: &[
        "Primary buttons",
        "CTAs (Call-to-Actions)",
        "Active states",
        "Links",
        "Important highlights",
        "Statistics numbers",
        "Badges",
        "Underlines",
    ],
};

const META_BLUE: BrandColor = BrandColor {
    name: "Meta Blue",
    hex: "#1877F2",
    rgb: "rgb(24, 119, 242)",
    channels: (24, 119, 242),
    usage: &[
        "Feature card accents",
        "Secondary highlights",
        "Hover states",
        "Social media links",
    ],
};

const TERMINAL_GREEN: BrandColor = BrandColor {
    name: "Terminal Green",
    hex: "#00FF00",
    rgb: "rgb(0, 255, 0)",
    channels: (0, 255, 0),
    usage: &[
        "Success states",
        "Code syntax highlighting",
        "Active indicators",
        "Growth metrics",
    ],
};

const FERRARI_RED: BrandColor = BrandColor {
    name: "Ferrari Red",
    hex: "#FF2800",
    rgb: "rgb(255, 40, 0)",
    channels: (255, 40, 0),
    usage: &[
        "Error messages",
        "Warnings",
        "Critical notifications",
        "Urgent actions",
    ],
};

const WHITE: SurfaceColor = SurfaceColor {
    name: "White",
    hex: "#ffffff",
    rgb: "rgb(255, 255, 255)",
    usage: "Headings, primary content",
};

const BORDER_RADIUS: BorderRadius = BorderRadius {
    sm: "8px",
    md: "12px",
    lg: "16px",
    xl: "24px",
    full: "9999px",
};

const CARD_BACKGROUND: SurfaceColor = SurfaceColor {
    name: "Card Background",
    hex: "#121212",
    rgb: "rgb(18, 18, 18)",
    usage: "Card components, elevated surfaces",
};

pub const THEME: Theme = Theme {
    colors: Colors {
        brand: BrandColors {
            primary: MCLAREN_ORANGE,
            secondary: SecondaryColors {
                meta_blue: META_BLUE,
                terminal_green: TERMINAL_GREEN,
                ferrari_red: FERRARI_RED,
            },
        },
        backgrounds: Backgrounds {
            primary: SurfaceColor {
                name: "Pure Black",
                hex: "#000000",
                rgb: "rgb(0, 0, 0)",
                usage: "Main body background",
            },
            secondary: SurfaceColor {
                name: "Dark Gray",
                hex: "#0a0a0a",
                rgb: "rgb(10, 10, 10)",
                usage: "Section backgrounds",
            },
            card: CARD_BACKGROUND,
            hover: SurfaceColor {
                name: "Hover State",
                hex: "#1a1a1a",
                rgb: "rgb(26, 26, 26)",
                usage: "Hover states for interactive elements",
            },
        },
        text: TextColors {
            primary: WHITE,
            secondary: SurfaceColor {
                name: "Light Gray",
                hex: "#b3b3b3",
                rgb: "rgb(179, 179, 179)",
                usage: "Body text, descriptions",
            },
            muted: SurfaceColor {
                name: "Gray",
                hex: "#666666",
                rgb: "rgb(102, 102, 102)",
                usage: "Labels, captions, disabled states",
            },
        },
    },
    spacing: Spacing {
        xs: Size { rem: "0.5rem", px: "8px" },
        sm: Size { rem: "1rem", px: "16px" },
        md: Size { rem: "1.5rem", px: "24px" },
        lg: Size { rem: "2rem", px: "32px" },
        xl: Size { rem: "3rem", px: "48px" },
        xxl: Size { rem: "4rem", px: "64px" },
    },
    typography: Typography {
        font_family: "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
        sizes: FontSizes {
            xs: FontSize { rem: "0.75rem", px: "12px", usage: "Small labels, captions" },
            sm: FontSize { rem: "0.875rem", px: "14px", usage: "Secondary text, buttons" },
            base: FontSize { rem: "1rem", px: "16px", usage: "Body text (default)" },
            lg: FontSize { rem: "1.125rem", px: "18px", usage: "Large body text" },
            xl: FontSize { rem: "1.25rem", px: "20px", usage: "Small headings" },
            xxl: FontSize { rem: "1.5rem", px: "24px", usage: "Section headings" },
            xxxl: FontSize { rem: "2rem", px: "32px", usage: "Page headings" },
            xxxxl: FontSize { rem: "2.5rem", px: "40px", usage: "Hero headings" },
            xxxxxl: FontSize { rem: "3rem", px: "48px", usage: "Large hero text" },
        },
        weights: FontWeights {
            light: 300,
            regular: 400,
            medium: 500,
            semibold: 600,
            bold: 700,
            extrabold: 800,
            black: 900,
        },
    },
    border_radius: BORDER_RADIUS,
    shadows: Shadows {
        sm: "0 2px 8px rgba(0, 0, 0, 0.3)",
        md: "0 4px 16px rgba(0, 0, 0, 0.4)",
        lg: "0 8px 32px rgba(0, 0, 0, 0.5)",
        xl: "0 16px 48px rgba(0, 0, 0, 0.6)",
    },
    transitions: Transitions {
        fast: "0.2s ease",
        base: "0.3s ease",
        slow: "0.5s ease",
    },
    breakpoints: Breakpoints {
        mobile: "480px",
        tablet: "768px",
        desktop: "1024px",
        wide: "1200px",
    },
    z_index: ZIndex {
        background: -1,
        base: 0,
        dropdown: 100,
        sticky: 200,
        fixed: 300,
        modal: 400,
        popover: 500,
        tooltip: 600,
        notification: 700,
    },
    components: Components {
        navbar: NavbarPreset {
            height: "60px",
            background: "rgba(0, 0, 0, 0.8)",
            backdrop_filter: "blur(20px)",
            border: "1px solid rgba(255, 255, 255, 0.1)",
        },
        button: ButtonPresets {
            primary: ButtonPreset {
                background: MCLAREN_ORANGE.hex,
                color: WHITE.hex,
                border: None,
                padding: "0.75rem 1.5rem",
                border_radius: BORDER_RADIUS.full,
                font_weight: Some(600),
            },
            secondary: ButtonPreset {
                background: "transparent",
                color: WHITE.hex,
                border: Some("1px solid rgba(255, 255, 255, 0.2)"),
                padding: "0.75rem 1.5rem",
                border_radius: BORDER_RADIUS.full,
                font_weight: None,
            },
        },
        card: CardPreset {
            background: CARD_BACKGROUND.hex,
            border: "1px solid rgba(255, 255, 255, 0.1)",
            border_radius: BORDER_RADIUS.lg,
            padding: "3rem",
            transition: "0.3s ease",
        },
    },
    animations: Animations {
        float: Animation { name: "float", duration: "20s", timing: "ease-in-out", iteration: Some("infinite") },
        fade_in: Animation { name: "fadeIn", duration: "0.6s", timing: "ease-in-out", iteration: None },
        fade_in_up: Animation { name: "fadeInUp", duration: "0.8s", timing: "ease-out", iteration: None },
        bounce: Animation { name: "bounce", duration: "2s", timing: "ease-in-out", iteration: Some("infinite") },
        scroll: Animation { name: "scroll", duration: "1.5s", timing: "ease-in-out", iteration: Some("infinite") },
    },
    gradients: Gradients {
        orbs: OrbGradients {
            blue: "radial-gradient(circle, #1877F2 0%, transparent 70%)",
            orange: "radial-gradient(circle, #FF8000 0%, transparent 70%)",
            green: "radial-gradient(circle, #00FF00 0%, transparent 70%)",
        },
        glassmorphism: Glassmorphism {
            background: "rgba(18, 18, 18, 0.8)",
            backdrop_filter: "blur(20px)",
            border: "1px solid rgba(255, 255, 255, 0.1)",
        },
    },
    guidelines: Guidelines {
        spacing: Guideline {
            description: "Use the 8px spacing scale for all margins and paddings",
            example: "padding: var(--spacing-md); /* 24px */",
            avoid: None,
        },
        colors: Guideline {
            description: "Always use CSS variables for colors",
            example: "color: var(--mclaren-orange);",
            avoid: Some("color: #FF8000;"),
        },
        typography: Guideline {
            description: "Use the defined font size scale",
            example: "font-size: var(--font-size-xl);",
            avoid: Some("font-size: 22px;"),
        },
        transitions: Guideline {
            description: "Add smooth transitions to interactive elements",
            example: "transition: var(--transition-base);",
            avoid: None,
        },
    },
};

/// Renders the token table as CSS custom properties on `:root`.
pub fn css_variables(theme: &Theme) -> String {
    let brand = &theme.colors.brand;
    let mut vars = vec![
        ("mclaren-orange".to_string(), brand.primary.hex.to_string()),
        ("meta-blue".to_string(), brand.secondary.meta_blue.hex.to_string()),
        ("terminal-green".to_string(), brand.secondary.terminal_green.hex.to_string()),
        ("ferrari-red".to_string(), brand.secondary.ferrari_red.hex.to_string()),
        ("bg-primary".to_string(), theme.colors.backgrounds.primary.hex.to_string()),
        ("bg-secondary".to_string(), theme.colors.backgrounds.secondary.hex.to_string()),
        ("bg-card".to_string(), theme.colors.backgrounds.card.hex.to_string()),
        ("bg-hover".to_string(), theme.colors.backgrounds.hover.hex.to_string()),
        ("text-primary".to_string(), theme.colors.text.primary.hex.to_string()),
        ("text-secondary".to_string(), theme.colors.text.secondary.hex.to_string()),
        ("text-muted".to_string(), theme.colors.text.muted.hex.to_string()),
        ("font-family".to_string(), theme.typography.font_family.to_string()),
        ("navbar-height".to_string(), theme.components.navbar.height.to_string()),
    ];

    for (step, size) in theme.spacing.steps() {
        vars.push((format!("spacing-{}", step), size.rem.to_string()));
    }
    for (step, size) in theme.typography.sizes.steps() {
        vars.push((format!("font-size-{}", step), size.rem.to_string()));
    }
    for (name, weight) in theme.typography.weights.steps() {
        vars.push((format!("font-weight-{}", name), weight.to_string()));
    }

    let radius = &theme.border_radius;
    for (step, value) in [("sm", radius.sm), ("md", radius.md), ("lg", radius.lg), ("xl", radius.xl), ("full", radius.full)] {
        vars.push((format!("radius-{}", step), value.to_string()));
    }
    let shadows = &theme.shadows;
    for (step, value) in [("sm", shadows.sm), ("md", shadows.md), ("lg", shadows.lg), ("xl", shadows.xl)] {
        vars.push((format!("shadow-{}", step), value.to_string()));
    }
    let transitions = &theme.transitions;
    for (step, value) in [("fast", transitions.fast), ("base", transitions.base), ("slow", transitions.slow)] {
        vars.push((format!("transition-{}", step), value.to_string()));
    }
    for (layer, value) in theme.z_index.layers() {
        vars.push((format!("z-{}", layer), value.to_string()));
    }

    let body: String = vars
        .iter()
        .map(|(name, value)| format!("    --{}: {};\n", name, value))
        .collect();
    format!(":root {{\n{}}}\n", body)
}

/// Stylesheet mounted once at startup: the tokens, plus the light palette
/// that `data-theme="light"` switches to.
pub fn global_stylesheet(theme: &Theme) -> String {
    format!(
        r#"{vars}
[data-theme="light"] {{
    --bg-primary: #ffffff;
    --bg-secondary: #f5f5f5;
    --bg-card: #ffffff;
    --bg-hover: #ededed;
    --text-primary: #0a0a0a;
    --text-secondary: #4d4d4d;
}}
"#,
        vars = css_variables(theme)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
}

impl ThemePreference {
    /// Anything other than a stored "light" means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemePreference::Light,
            _ => ThemePreference::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }
}

pub fn load_preference() -> ThemePreference {
    let stored = window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::THEME_STORAGE_KEY).ok())
        .flatten();
    ThemePreference::from_stored(stored.as_deref())
}

pub fn store_preference(preference: ThemePreference) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(config::THEME_STORAGE_KEY, preference.as_str());
        }
    }
}

/// Sets `data-theme` on the document element.
pub fn apply_preference(preference: ThemePreference) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            let _ = root.set_attribute("data-theme", preference.as_str());
        }
        None => debug!("No document element, theme not applied"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_takes_alpha_parameter() {
        let primary = THEME.colors.brand.primary;
        assert_eq!(primary.rgba(0.5), "rgba(255, 128, 0, 0.5)");
        assert_eq!(primary.rgba(1.0), "rgba(255, 128, 0, 1)");
        assert_eq!(
            THEME.colors.brand.secondary.meta_blue.rgba(0.1),
            "rgba(24, 119, 242, 0.1)"
        );
    }

    #[test]
    fn spacing_scale_runs_from_8_to_64px() {
        let px: Vec<&str> = THEME.spacing.steps().iter().map(|(_, s)| s.px).collect();
        assert_eq!(px, vec!["8px", "16px", "24px", "32px", "48px", "64px"]);
    }

    #[test]
    fn typography_has_nine_sizes_and_seven_weights() {
        assert_eq!(THEME.typography.sizes.steps().len(), 9);
        let weights: Vec<u16> = THEME.typography.weights.steps().iter().map(|(_, w)| *w).collect();
        assert_eq!(weights, vec![300, 400, 500, 600, 700, 800, 900]);
    }

    #[test]
    fn serialized_table_keeps_token_names() {
        let json = serde_json::to_value(THEME).unwrap();
        assert_eq!(json["colors"]["brand"]["primary"]["hex"], "#FF8000");
        assert_eq!(json["spacing"]["2xl"]["px"], "64px");
        assert_eq!(json["typography"]["sizes"]["5xl"]["rem"], "3rem");
        assert_eq!(json["zIndex"]["notification"], 700);
        assert_eq!(json["components"]["button"]["primary"]["fontWeight"], 600);
        assert!(json["components"]["button"]["primary"].get("border").is_none());
    }

    #[test]
    fn guidelines_point_at_css_variables() {
        let json = serde_json::to_value(THEME).unwrap();
        let guidelines = &json["guidelines"];
        assert_eq!(guidelines["colors"]["avoid"], "color: #FF8000;");
        assert!(guidelines["spacing"].get("avoid").is_none());
        for area in ["spacing", "colors", "typography", "transitions"] {
            let example = guidelines[area]["example"].as_str().unwrap();
            assert!(example.contains("var(--"), "{} example: {}", area, example);
        }
        assert!(css_variables(&THEME).contains("--transition-base:"));
    }

    #[test]
    fn css_variables_expose_brand_and_scales() {
        let css = css_variables(&THEME);
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--mclaren-orange: #FF8000;"));
        assert!(css.contains("--meta-blue: #1877F2;"));
        assert!(css.contains("--spacing-md: 1.5rem;"));
        assert!(css.contains("--font-size-2xl: 1.5rem;"));
        assert!(css.contains("--z-background: -1;"));
    }

    #[test]
    fn orb_gradients_use_brand_hex() {
        let orbs = THEME.gradients.orbs;
        assert!(orbs.orange.contains(THEME.colors.brand.primary.hex));
        assert!(orbs.blue.contains(THEME.colors.brand.secondary.meta_blue.hex));
        assert!(orbs.green.contains(THEME.colors.brand.secondary.terminal_green.hex));
    }

    #[test]
    fn preference_defaults_to_dark() {
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("sepia")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
    }

    #[test]
    fn preference_toggles_between_two_values() {
        let pref = ThemePreference::Dark.toggled();
        assert_eq!(pref.as_str(), "light");
        assert_eq!(pref.toggled(), ThemePreference::Dark);
    }
}
