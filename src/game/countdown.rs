/// Pre-game gate. While counting, the simulation is frozen and only the
/// remaining seconds are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Counting(u32),
    Live,
}

impl Countdown {
    /// Gate starting at `seconds`; `None` or zero starts live
    pub fn new(seconds: Option<u32>) -> Self {
        match seconds {
            Some(n) if n > 0 => Countdown::Counting(n),
            _ => Countdown::Live,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Countdown::Live)
    }

    /// Seconds left to display, if still counting
    pub fn remaining(&self) -> Option<u32> {
        match self {
            Countdown::Counting(n) => Some(*n),
            Countdown::Live => None,
        }
    }

    /// Handle one timer firing. Returns true on the transition to Live.
    /// Once live the gate never counts again.
    pub fn tick(&mut self) -> bool {
        match *self {
            Countdown::Counting(n) if n <= 1 => {
                *self = Countdown::Live;
                true
            }
            Countdown::Counting(n) => {
                *self = Countdown::Counting(n - 1);
                false
            }
            Countdown::Live => false,
        }
    }
}
