use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_spent: Decimal,
    pub total_received: Decimal,
    pub balance: Decimal,
}

/// Display color assigned to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Orange,
    Blue,
    Purple,
    Pink,
    Yellow,
    Red,
    Gray,
    /// Used for any category outside the known set
    Slate,
}

impl ColorToken {
    pub fn hex(&self) -> &'static str {
        match self {
            ColorToken::Orange => "#f97316",
            ColorToken::Blue => "#3b82f6",
            ColorToken::Purple => "#a855f7",
            ColorToken::Pink => "#ec4899",
            ColorToken::Yellow => "#eab308",
            ColorToken::Red => "#ef4444",
            ColorToken::Gray => "#6b7280",
            ColorToken::Slate => "#94a3b8",
        }
    }

    /// Terminal foreground escape for the same color
    pub fn ansi(&self) -> &'static str {
        match self {
            ColorToken::Orange => "\x1b[38;5;208m",
            ColorToken::Blue => "\x1b[34m",
            ColorToken::Purple => "\x1b[35m",
            ColorToken::Pink => "\x1b[38;5;205m",
            ColorToken::Yellow => "\x1b[33m",
            ColorToken::Red => "\x1b[31m",
            ColorToken::Gray => "\x1b[90m",
            ColorToken::Slate => "\x1b[37m",
        }
    }
}
