//! Indentation configuration for rendered schemas and documents.

/// Indentation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Default schema indentation.
    pub const SCHEMA: Self = Self::Spaces(4);

    /// Two-space indentation for nested listings.
    pub const LISTING: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }

    /// The string for `level` indent levels.
    pub fn at(&self, level: usize) -> String {
        self.unit().repeat(level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SCHEMA
    }
}
