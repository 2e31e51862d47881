//! Progression domain: movement ability unlocks.

use bevy::prelude::*;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A locomotion ability that can be unlocked during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    DoubleJump,
    Dash,
    WallJump,
}

impl Ability {
    pub const ALL: [Ability; 3] = [Ability::DoubleJump, Ability::Dash, Ability::WallJump];

    /// Canonical config name, as written in content files.
    pub fn name(self) -> &'static str {
        match self {
            Ability::DoubleJump => "doublejump",
            Ability::Dash => "dash",
            Ability::WallJump => "walljump",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ability '{0}' (expected one of: doublejump, dash, walljump)")]
pub struct UnknownAbility(pub String);

impl FromStr for Ability {
    type Err = UnknownAbility;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Ability::ALL
            .into_iter()
            .find(|ability| ability.name() == lowered)
            .ok_or_else(|| UnknownAbility(s.to_string()))
    }
}

/// Unlock state shared by every controller. Flags only ever go from locked to
/// unlocked; the motion controller reads them and never writes.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbilityFlags {
    pub double_jump: bool,
    pub dash: bool,
    pub wall_jump: bool,
}

impl AbilityFlags {
    #[cfg(test)]
    pub fn all() -> Self {
        Self {
            double_jump: true,
            dash: true,
            wall_jump: true,
        }
    }

    pub fn has(&self, ability: Ability) -> bool {
        match ability {
            Ability::DoubleJump => self.double_jump,
            Ability::Dash => self.dash,
            Ability::WallJump => self.wall_jump,
        }
    }

    /// Unlock an ability. Returns true if it was locked before.
    pub fn unlock(&mut self, ability: Ability) -> bool {
        let flag = match ability {
            Ability::DoubleJump => &mut self.double_jump,
            Ability::Dash => &mut self.dash,
            Ability::WallJump => &mut self.wall_jump,
        };
        let newly = !*flag;
        *flag = true;
        newly
    }

    #[cfg(test)]
    pub fn with(mut self, ability: Ability) -> Self {
        self.unlock(ability);
        self
    }

    pub fn unlocked(&self) -> impl Iterator<Item = Ability> + '_ {
        Ability::ALL.into_iter().filter(|ability| self.has(*ability))
    }
}
