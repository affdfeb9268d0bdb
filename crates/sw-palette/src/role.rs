//! The ten fixed color roles of a derived palette.
//!
//! Roles are ordered: every palette carries exactly one swatch per role,
//! in the order [`Role::ALL`] lists them.

use std::fmt;

/// A color role within a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The base color itself — buttons, links, focus rings.
    Primary,
    /// High-contrast text on primary surfaces.
    PrimaryForeground,
    /// A softer companion hue for secondary surfaces.
    Secondary,
    /// The complementary hue — highlights and calls to action.
    Accent,
    /// Washed-out tint for subdued panels and placeholders.
    Muted,
    /// Page background.
    Background,
    /// Body text on the page background.
    Foreground,
    /// Fixed semantic green for positive states.
    Success,
    /// Fixed semantic amber for cautionary states.
    Warning,
    /// Fixed semantic red for errors and destructive actions.
    Destructive,
}

impl Role {
    /// All roles in palette order. The derivation and every serializer
    /// follow this order exactly.
    pub const ALL: [Self; 10] = [
        Self::Primary,
        Self::PrimaryForeground,
        Self::Secondary,
        Self::Accent,
        Self::Muted,
        Self::Background,
        Self::Foreground,
        Self::Success,
        Self::Warning,
        Self::Destructive,
    ];

    /// Human-readable display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::PrimaryForeground => "Primary Foreground",
            Self::Secondary => "Secondary",
            Self::Accent => "Accent",
            Self::Muted => "Muted",
            Self::Background => "Background",
            Self::Foreground => "Foreground",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Destructive => "Destructive",
        }
    }

    /// Kebab-case name used for CSS custom properties (`--primary`, …).
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryForeground => "primary-foreground",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Muted => "muted",
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Destructive => "destructive",
        }
    }

    /// One-line description of what the role is for.
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Primary => "Main brand color for buttons, links, and focus rings",
            Self::PrimaryForeground => "Text color on primary-colored surfaces",
            Self::Secondary => "Secondary surfaces like badges and subtle buttons",
            Self::Accent => "Complementary highlight for calls to action",
            Self::Muted => "Subdued panels, placeholders, and disabled states",
            Self::Background => "Page background",
            Self::Foreground => "Body text on the page background",
            Self::Success => "Positive confirmations and success states",
            Self::Warning => "Cautionary notices that need attention",
            Self::Destructive => "Errors and destructive actions",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
