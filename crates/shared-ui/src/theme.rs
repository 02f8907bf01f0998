use dioxus::prelude::*;

/// Accent palettes a school can brand its shell with.
///
/// Each school stores a color name; unknown names fall back to Indigo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Indigo,
    Emerald,
    Rose,
    Amber,
    Sky,
}

/// All palettes in display order.
pub const ALL_ACCENTS: &[Accent] = &[
    Accent::Indigo,
    Accent::Emerald,
    Accent::Rose,
    Accent::Amber,
    Accent::Sky,
];

impl Accent {
    /// Value of the `data-accent` attribute; matches the stored color name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Indigo => "indigo",
            Accent::Emerald => "emerald",
            Accent::Rose => "rose",
            Accent::Amber => "amber",
            Accent::Sky => "sky",
        }
    }

    /// Parse a school's color name (case-insensitive), falling back to Indigo.
    pub fn from_name(name: &str) -> Self {
        ALL_ACCENTS
            .iter()
            .copied()
            .find(|a| a.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    /// Base, hover and tint hex values, in that order.
    pub fn swatch(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            Accent::Indigo => ("#4f46e5", "#4338ca", "#eef2ff"),
            Accent::Emerald => ("#059669", "#047857", "#ecfdf5"),
            Accent::Rose => ("#e11d48", "#be123c", "#fff1f2"),
            Accent::Amber => ("#d97706", "#b45309", "#fffbeb"),
            Accent::Sky => ("#0284c7", "#0369a1", "#f0f9ff"),
        }
    }

    /// Inline CSS custom properties for this palette.
    pub fn css_vars(&self) -> String {
        let (base, strong, soft) = self.swatch();
        format!("--accent: {base}; --accent-strong: {strong}; --accent-soft: {soft};")
    }
}

/// Applies a school's accent to everything inside it.
#[component]
pub fn AccentScope(
    color: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let accent = Accent::from_name(&color);

    rsx! {
        div {
            class: "accent-scope {class}",
            "data-accent": accent.as_str(),
            style: accent.css_vars(),
            {children}
        }
    }
}
