//! Card values: colors, kinds, and the `Card` value type.
//!
//! Cards are immutable values. A wild-kind card stays colorless for its
//! whole life; the color a player declares when playing it is recorded on
//! the table state, never on the card itself. That keeps the card
//! re-dealable if a discard pile is ever recycled.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four real card colors.
///
/// Wild-kind cards have no color; the matching rule treats "no color" as
/// always playable, so there is no `Wild` variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All four colors, in a fixed order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
        };
        write!(f, "{name}")
    }
}

/// Error for a color name outside the four legal colors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("not a color (expected red, blue, green, or yellow)")]
pub struct InvalidColorChoice;

impl std::str::FromStr for Color {
    type Err = InvalidColorChoice;

    /// Case-insensitive parse of a color name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            _ => Err(InvalidColorChoice),
        }
    }
}

/// The closed set of card kinds.
///
/// Equality on `CardKind` is exactly the face-value identity used by the
/// matching rule: two Skips have equal kinds regardless of color, and a
/// Number only equals a Number of the same rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// A number card with rank 0-9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardKind {
    /// Whether this kind is wild (colorless until played).
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, CardKind::Wild | CardKind::WildDrawFour)
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Number(rank) => write!(f, "{rank}"),
            CardKind::Skip => write!(f, "Skip"),
            CardKind::Reverse => write!(f, "Reverse"),
            CardKind::DrawTwo => write!(f, "Draw Two"),
            CardKind::Wild => write!(f, "Wild"),
            CardKind::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

/// An immutable card.
///
/// Invariant: non-wild kinds always carry `Some(color)`, wild kinds always
/// `None`. The constructors enforce this; there is no way to build a
/// colored Wild or a colorless Skip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The card's kind (and rank, for number cards).
    pub kind: CardKind,
    /// The printed color. `None` exactly when the kind is wild.
    pub color: Option<Color>,
}

impl Card {
    /// Create a number card.
    ///
    /// ## Panics
    ///
    /// Panics if `rank` is not 0-9.
    #[must_use]
    pub fn number(color: Color, rank: u8) -> Self {
        assert!(rank <= 9, "Number cards have ranks 0-9");
        Self {
            kind: CardKind::Number(rank),
            color: Some(color),
        }
    }

    /// Create a colored action card (Skip, Reverse, or Draw Two).
    ///
    /// ## Panics
    ///
    /// Panics if `kind` is a number or wild kind.
    #[must_use]
    pub fn action(color: Color, kind: CardKind) -> Self {
        assert!(
            matches!(kind, CardKind::Skip | CardKind::Reverse | CardKind::DrawTwo),
            "Action cards are Skip, Reverse, or Draw Two"
        );
        Self {
            kind,
            color: Some(color),
        }
    }

    /// Create a Wild card.
    #[must_use]
    pub const fn wild() -> Self {
        Self {
            kind: CardKind::Wild,
            color: None,
        }
    }

    /// Create a Wild Draw Four card.
    #[must_use]
    pub const fn wild_draw_four() -> Self {
        Self {
            kind: CardKind::WildDrawFour,
            color: None,
        }
    }

    /// Whether this card is wild-kind (colorless).
    #[must_use]
    pub const fn is_wild(&self) -> bool {
        self.kind.is_wild()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color {
            Some(color) => write!(f, "{color} {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
