use std::fmt;

/// The algorithms raced against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Sgd,
    Momentum,
    Adam,
}

impl Kind {
    /// Every kind, in the order a race steps them.
    pub const ALL: [Kind; 3] = [Kind::Sgd, Kind::Momentum, Kind::Adam];

    /// Returns the position of this kind in [`Kind::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Kind::Sgd => 0,
            Kind::Momentum => 1,
            Kind::Adam => 2,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Kind::Sgd => "SGD",
            Kind::Momentum => "Momentum",
            Kind::Adam => "Adam",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
