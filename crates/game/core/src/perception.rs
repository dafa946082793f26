//! Perception vocabulary.
//!
//! A perception is only ever observed at the explorer's current cell. The
//! environment assembles a [`PerceptionSet`] per turn; the navigator consumes
//! it without ever seeing ground truth.
use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

/// A single observation kind.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Perception {
    /// A live Wumpus is orthogonally adjacent.
    Stench,
    /// A pit is orthogonally adjacent.
    Breeze,
    /// Gold lies in this cell.
    Glitter,
    /// The last FORWARD hit a wall.
    Bump,
    /// The arrow killed the Wumpus this turn.
    Scream,
    /// Nothing else to report.
    Safe,
}

impl Perception {
    pub const fn flag(self) -> PerceptionSet {
        match self {
            Perception::Stench => PerceptionSet::STENCH,
            Perception::Breeze => PerceptionSet::BREEZE,
            Perception::Glitter => PerceptionSet::GLITTER,
            Perception::Bump => PerceptionSet::BUMP,
            Perception::Scream => PerceptionSet::SCREAM,
            Perception::Safe => PerceptionSet::SAFE,
        }
    }
}

bitflags! {
    /// Set of perceptions reported for one turn.
    ///
    /// Flag order matches the wire order: STENCH, BREEZE, GLITTER, BUMP,
    /// SCREAM, SAFE.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PerceptionSet: u8 {
        const STENCH  = 1 << 0;
        const BREEZE  = 1 << 1;
        const GLITTER = 1 << 2;
        const BUMP    = 1 << 3;
        const SCREAM  = 1 << 4;
        const SAFE    = 1 << 5;
    }
}

impl PerceptionSet {
    /// Flags that come from the cell itself rather than from this turn's action.
    pub const CELL: Self = Self::STENCH.union(Self::BREEZE).union(Self::GLITTER);

    /// Adds SAFE if the set is otherwise empty.
    #[must_use]
    pub fn or_safe(self) -> Self {
        if self.is_empty() { Self::SAFE } else { self }
    }

    /// True if neither STENCH nor BREEZE is present.
    pub fn is_hazard_free(self) -> bool {
        !self.intersects(Self::STENCH | Self::BREEZE)
    }

    pub fn has(self, perception: Perception) -> bool {
        self.contains(perception.flag())
    }

    /// Individual perceptions in wire order.
    pub fn perceptions(self) -> impl Iterator<Item = Perception> {
        <Perception as strum::IntoEnumIterator>::iter().filter(move |p| self.has(*p))
    }
}

impl FromIterator<Perception> for PerceptionSet {
    fn from_iter<I: IntoIterator<Item = Perception>>(iter: I) -> Self {
        iter.into_iter()
            .fold(PerceptionSet::empty(), |set, perception| set | perception.flag())
    }
}

/// `;`-separated list in wire order, e.g. `STENCH;BREEZE`. Empty sets render as "".
impl fmt::Display for PerceptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, perception) in self.perceptions().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{perception}")?;
        }
        Ok(())
    }
}

/// Unknown perception token encountered while parsing a set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown perception '{token}'")]
pub struct UnknownPerception {
    pub token: String,
}

impl FromStr for PerceptionSet {
    type Err = UnknownPerception;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                Perception::from_str(part).map_err(|_| UnknownPerception {
                    token: part.to_owned(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_wire_order() {
        let set = PerceptionSet::SCREAM | PerceptionSet::STENCH | PerceptionSet::GLITTER;
        assert_eq!(set.to_string(), "STENCH;GLITTER;SCREAM");
        assert_eq!(PerceptionSet::empty().or_safe().to_string(), "SAFE");
    }

    #[test]
    fn parse_is_case_insensitive_and_rejects_unknown_tokens() {
        let parsed: PerceptionSet = "breeze; Stench".parse().unwrap();
        assert_eq!(parsed, PerceptionSet::BREEZE | PerceptionSet::STENCH);

        let err = "BREEZE;SMELLY".parse::<PerceptionSet>().unwrap_err();
        assert_eq!(err.token, "SMELLY");
    }

    #[test]
    fn hazard_free_ignores_action_flags() {
        assert!((PerceptionSet::BUMP | PerceptionSet::GLITTER).is_hazard_free());
        assert!(!(PerceptionSet::BUMP | PerceptionSet::BREEZE).is_hazard_free());
    }
}
