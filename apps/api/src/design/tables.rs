//! Static style tables for the four design profiles and three density levels.
//!
//! Values are Tailwind utility class strings; the resolver only selects among them.
//! Every table is exhaustive over its key enum, so lookups cannot miss.

use crate::portfolio::schema::{DesignProfile, VisualDensity};

// ────────────────────────────────────────────────────────────────────────────
// Palette
// ────────────────────────────────────────────────────────────────────────────

/// Background tiers; one per surface priority plus the page itself.
#[derive(Debug)]
pub struct Backgrounds {
    pub page: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub supporting: &'static str,
}

#[derive(Debug)]
pub struct TextColors {
    pub heading: &'static str,
    pub body: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
}

#[derive(Debug)]
pub struct Palette {
    pub bg: Backgrounds,
    pub text: TextColors,
    pub border_default: &'static str,
    pub border_accent: &'static str,
    /// Tailwind colour family name, e.g. `"emerald"`.
    pub accent: &'static str,
}

const TECHNICAL_MINIMAL_PALETTE: Palette = Palette {
    bg: Backgrounds {
        page: "bg-slate-950",
        primary: "bg-slate-900/60",
        secondary: "bg-slate-900/40",
        supporting: "bg-slate-800/20",
    },
    text: TextColors {
        heading: "text-slate-100",
        body: "text-slate-400",
        muted: "text-slate-500",
        accent: "text-emerald-400",
    },
    border_default: "border-slate-700/50",
    border_accent: "border-emerald-500/30",
    accent: "emerald",
};

const PRODUCT_THINKER_PALETTE: Palette = Palette {
    bg: Backgrounds {
        page: "bg-gradient-to-br from-slate-50 via-blue-50/30 to-white",
        primary: "bg-white/80",
        secondary: "bg-slate-50/80",
        supporting: "bg-blue-50/30",
    },
    text: TextColors {
        heading: "text-slate-900",
        body: "text-slate-600",
        muted: "text-slate-500",
        accent: "text-blue-600",
    },
    border_default: "border-slate-200/50",
    border_accent: "border-blue-500/30",
    accent: "blue",
};

const PRODUCT_DESIGNER_PALETTE: Palette = Palette {
    bg: Backgrounds {
        page: "bg-gradient-to-br from-orange-50/50 via-rose-50/50 to-violet-50/50",
        primary: "bg-white/70",
        secondary: "bg-white/50",
        supporting: "bg-rose-50/30",
    },
    text: TextColors {
        heading: "text-stone-900",
        body: "text-stone-600",
        muted: "text-stone-500",
        accent: "text-rose-600",
    },
    border_default: "border-rose-200/30",
    border_accent: "border-rose-500/30",
    accent: "rose",
};

const EXECUTIVE_CLEAN_PALETTE: Palette = Palette {
    bg: Backgrounds {
        page: "bg-gradient-to-b from-neutral-50 to-white",
        primary: "bg-white/90",
        secondary: "bg-neutral-50/80",
        supporting: "bg-amber-50/20",
    },
    text: TextColors {
        heading: "text-neutral-900",
        body: "text-neutral-600",
        muted: "text-neutral-500",
        accent: "text-amber-700",
    },
    border_default: "border-neutral-200/50",
    border_accent: "border-amber-500/30",
    accent: "amber",
};

pub fn palette(profile: DesignProfile) -> &'static Palette {
    match profile {
        DesignProfile::TechnicalMinimal => &TECHNICAL_MINIMAL_PALETTE,
        DesignProfile::ProductThinker => &PRODUCT_THINKER_PALETTE,
        DesignProfile::ProductDesigner => &PRODUCT_DESIGNER_PALETTE,
        DesignProfile::ExecutiveClean => &EXECUTIVE_CLEAN_PALETTE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Typography
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Typography {
    pub font: &'static str,
    pub h1: &'static str,
    pub h2: &'static str,
    pub h3: &'static str,
    pub body: &'static str,
}

const TECHNICAL_MINIMAL_TYPE: Typography = Typography {
    font: "font-mono",
    h1: "text-4xl md:text-5xl font-bold tracking-tight",
    h2: "text-2xl md:text-3xl font-bold tracking-tight",
    h3: "text-lg font-semibold tracking-tight",
    body: "text-base leading-relaxed",
};

const PRODUCT_THINKER_TYPE: Typography = Typography {
    font: "font-sans",
    h1: "text-4xl md:text-5xl font-bold tracking-tight",
    h2: "text-2xl md:text-3xl font-semibold",
    h3: "text-lg font-medium",
    body: "text-base leading-relaxed",
};

const PRODUCT_DESIGNER_TYPE: Typography = Typography {
    font: "font-sans",
    h1: "text-4xl md:text-5xl font-semibold tracking-tight",
    h2: "text-2xl md:text-3xl font-semibold",
    h3: "text-lg font-medium",
    body: "text-base leading-relaxed",
};

const EXECUTIVE_CLEAN_TYPE: Typography = Typography {
    font: "font-serif",
    h1: "text-4xl md:text-5xl font-medium tracking-normal",
    h2: "text-2xl md:text-3xl font-medium",
    h3: "text-lg font-medium",
    body: "text-base leading-loose",
};

pub fn typography(profile: DesignProfile) -> &'static Typography {
    match profile {
        DesignProfile::TechnicalMinimal => &TECHNICAL_MINIMAL_TYPE,
        DesignProfile::ProductThinker => &PRODUCT_THINKER_TYPE,
        DesignProfile::ProductDesigner => &PRODUCT_DESIGNER_TYPE,
        DesignProfile::ExecutiveClean => &EXECUTIVE_CLEAN_TYPE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Component styles
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Components {
    pub card: &'static str,
    pub badge: &'static str,
    pub button_primary: &'static str,
    pub button_secondary: &'static str,
    pub button_outline: &'static str,
    pub input: &'static str,
    pub avatar: &'static str,
    pub separator: &'static str,
}

const TECHNICAL_MINIMAL_COMPONENTS: Components = Components {
    card: "border border-slate-700/50 bg-slate-900/60 backdrop-blur-sm rounded-2xl shadow-xl shadow-slate-950/50",
    badge: "bg-emerald-500/10 text-emerald-400 border border-emerald-500/20 font-mono text-sm rounded-full px-3 py-1",
    button_primary: "bg-emerald-600 hover:bg-emerald-500 text-white font-mono rounded-full",
    button_secondary: "bg-slate-800 hover:bg-slate-700 text-slate-200 border border-slate-700 rounded-full",
    button_outline: "border border-slate-700 hover:bg-slate-800 text-slate-300 rounded-full",
    input: "bg-slate-800/50 border-slate-700 text-slate-200 placeholder:text-slate-500 focus:border-emerald-500 rounded-xl",
    avatar: "border-2 border-emerald-500/30 rounded-full ring-4 ring-emerald-500/10",
    separator: "bg-slate-800/50",
};

const PRODUCT_THINKER_COMPONENTS: Components = Components {
    card: "border border-slate-200/50 bg-white/80 backdrop-blur-sm rounded-2xl shadow-lg shadow-slate-200/50",
    badge: "bg-blue-50 text-blue-700 border border-blue-200/50 font-medium text-sm rounded-full px-3 py-1",
    button_primary: "bg-blue-600 hover:bg-blue-700 text-white rounded-full",
    button_secondary: "bg-slate-100 hover:bg-slate-200 text-slate-700 rounded-full",
    button_outline: "border border-slate-300 hover:bg-slate-50 text-slate-700 rounded-full",
    input: "bg-white/80 border-slate-200 text-slate-900 placeholder:text-slate-400 focus:border-blue-500 rounded-xl",
    avatar: "border-2 border-blue-500/30 rounded-full ring-4 ring-blue-500/10",
    separator: "bg-slate-200/50",
};

const PRODUCT_DESIGNER_COMPONENTS: Components = Components {
    card: "border border-rose-200/30 bg-white/70 backdrop-blur-sm rounded-3xl shadow-lg shadow-rose-100/50",
    badge: "bg-gradient-to-r from-rose-50 to-orange-50 text-rose-700 border border-rose-200/50 font-medium text-sm rounded-full px-3 py-1",
    button_primary: "bg-gradient-to-r from-rose-600 to-orange-500 hover:from-rose-700 hover:to-orange-600 text-white rounded-full",
    button_secondary: "bg-stone-100 hover:bg-stone-200 text-stone-700 rounded-full",
    button_outline: "border border-stone-300 hover:bg-stone-50 text-stone-700 rounded-full",
    input: "bg-white/80 border-stone-200 text-stone-900 placeholder:text-stone-400 focus:border-rose-500 rounded-xl",
    avatar: "border-2 border-rose-400/30 rounded-full ring-4 ring-rose-400/10",
    separator: "bg-stone-200/50",
};

const EXECUTIVE_CLEAN_COMPONENTS: Components = Components {
    card: "border border-neutral-200/50 bg-white/90 backdrop-blur-sm rounded-2xl shadow-md shadow-neutral-200/30",
    badge: "bg-amber-50 text-amber-800 border border-amber-200/50 font-medium text-sm rounded-full px-3 py-1",
    button_primary: "bg-neutral-900 hover:bg-neutral-800 text-white rounded-xl",
    button_secondary: "bg-neutral-100 hover:bg-neutral-200 text-neutral-700 rounded-xl",
    button_outline: "border border-neutral-300 hover:bg-neutral-50 text-neutral-700 rounded-xl",
    input: "bg-white border-neutral-200 text-neutral-900 placeholder:text-neutral-400 focus:border-amber-500 rounded-xl",
    avatar: "border-2 border-amber-400/30 rounded-full ring-4 ring-amber-400/10",
    separator: "bg-neutral-200/50",
};

pub fn components(profile: DesignProfile) -> &'static Components {
    match profile {
        DesignProfile::TechnicalMinimal => &TECHNICAL_MINIMAL_COMPONENTS,
        DesignProfile::ProductThinker => &PRODUCT_THINKER_COMPONENTS,
        DesignProfile::ProductDesigner => &PRODUCT_DESIGNER_COMPONENTS,
        DesignProfile::ExecutiveClean => &EXECUTIVE_CLEAN_COMPONENTS,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Spacing
// ────────────────────────────────────────────────────────────────────────────

/// Spacing scale. Low density breathes; high density packs.
#[derive(Debug)]
pub struct Spacing {
    pub section: &'static str,
    pub container: &'static str,
    pub gap: &'static str,
    pub padding: &'static str,
}

pub fn spacing(density: VisualDensity) -> &'static Spacing {
    match density {
        VisualDensity::Low => &Spacing {
            section: "py-24",
            container: "max-w-3xl",
            gap: "gap-8",
            padding: "p-8",
        },
        VisualDensity::Medium => &Spacing {
            section: "py-16",
            container: "max-w-4xl",
            gap: "gap-6",
            padding: "p-6",
        },
        VisualDensity::High => &Spacing {
            section: "py-12",
            container: "max-w-5xl",
            gap: "gap-4",
            padding: "p-4",
        },
    }
}
