//! Closed catalogue of icon identifiers used by the skills section.
//!
//! Skill rows store the icon as a plain string; this enum is the single
//! source of truth for which identifiers exist. Unknown identifiers are
//! rejected at validation time instead of falling back silently.

use crate::error::CoreError;

/// Icon identifiers the frontend knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Database,
    Server,
    Globe,
    Cloud,
    Terminal,
    Cpu,
    Smartphone,
    PenTool,
    Layers,
    GitBranch,
    Shield,
}

/// Every known icon, in display order.
pub const ALL_ICONS: &[Icon] = &[
    Icon::Code,
    Icon::Database,
    Icon::Server,
    Icon::Globe,
    Icon::Cloud,
    Icon::Terminal,
    Icon::Cpu,
    Icon::Smartphone,
    Icon::PenTool,
    Icon::Layers,
    Icon::GitBranch,
    Icon::Shield,
];

impl Icon {
    /// Parse from the stored identifier string.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "code" => Ok(Self::Code),
            "database" => Ok(Self::Database),
            "server" => Ok(Self::Server),
            "globe" => Ok(Self::Globe),
            "cloud" => Ok(Self::Cloud),
            "terminal" => Ok(Self::Terminal),
            "cpu" => Ok(Self::Cpu),
            "smartphone" => Ok(Self::Smartphone),
            "pen-tool" => Ok(Self::PenTool),
            "layers" => Ok(Self::Layers),
            "git-branch" => Ok(Self::GitBranch),
            "shield" => Ok(Self::Shield),
            other => Err(CoreError::Validation(format!(
                "Unknown icon '{other}'. Must be one of: {}",
                icon_names().join(", ")
            ))),
        }
    }

    /// Stored identifier value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Database => "database",
            Self::Server => "server",
            Self::Globe => "globe",
            Self::Cloud => "cloud",
            Self::Terminal => "terminal",
            Self::Cpu => "cpu",
            Self::Smartphone => "smartphone",
            Self::PenTool => "pen-tool",
            Self::Layers => "layers",
            Self::GitBranch => "git-branch",
            Self::Shield => "shield",
        }
    }
}

/// Identifier strings for every known icon, in display order.
pub fn icon_names() -> Vec<&'static str> {
    ALL_ICONS.iter().map(|i| i.name()).collect()
}
