/// Which half of the arena a paddle or wall belongs to.
/// The human plays on the left, the bot on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Two point counters, one per side
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub left: u32,
    pub right: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one point for `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    /// Text shown above the arena
    pub fn display_text(&self) -> String {
        format!("{}    {}", self.left, self.right)
    }
}
