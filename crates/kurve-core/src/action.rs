//! Discrete steering actions.

use std::fmt;

/// One tick's steering decision.
///
/// `Left` decreases the heading by the agent's angular step, `Right`
/// increases it (clockwise on screen, see the crate-level coordinate note).
/// The derive order `Left < Straight < Right` is the order in which
/// [`ActionSet::iter`] yields actions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Left,
    Straight,
    Right,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Left, Action::Straight, Action::Right];

    /// Sign applied to the angular step: `-1`, `0`, or `+1`.
    #[inline]
    pub fn heading_sign(self) -> f64 {
        match self {
            Action::Left     => -1.0,
            Action::Straight => 0.0,
            Action::Right    => 1.0,
        }
    }

    /// The same manoeuvre seen in a mirror: `Left` ↔ `Right`.
    #[inline]
    pub fn mirrored(self) -> Action {
        match self {
            Action::Left     => Action::Right,
            Action::Straight => Action::Straight,
            Action::Right    => Action::Left,
        }
    }

    #[inline]
    pub fn is_turn(self) -> bool {
        self != Action::Straight
    }

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Action::Left     => 0b001,
            Action::Straight => 0b010,
            Action::Right    => 0b100,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Left     => "left",
            Action::Straight => "straight",
            Action::Right    => "right",
        };
        f.write_str(s)
    }
}

// ── ActionSet ─────────────────────────────────────────────────────────────────

/// A subset of {Left, Straight, Right}, stored as three bits.
///
/// Iteration always yields actions in `Left, Straight, Right` order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct ActionSet(u8);

impl ActionSet {
    pub const EMPTY: ActionSet = ActionSet(0);
    pub const ALL: ActionSet = ActionSet(0b111);
    pub const TURNS: ActionSet = ActionSet(0b101);

    #[inline]
    pub fn only(action: Action) -> Self {
        ActionSet(action.bit())
    }

    #[inline]
    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    #[inline]
    pub fn remove(&mut self, action: Action) {
        self.0 &= !action.bit();
    }

    #[inline]
    pub fn with(mut self, action: Action) -> Self {
        self.insert(action);
        self
    }

    #[inline]
    pub fn contains(self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Action> {
        Action::ALL.into_iter().filter(move |a| self.contains(*a))
    }

    /// Swap `Left` and `Right` membership.
    pub fn mirrored(self) -> Self {
        self.iter().map(Action::mirrored).collect()
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = ActionSet::EMPTY;
        for a in iter {
            set.insert(a);
        }
        set
    }
}

impl fmt::Debug for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// ── Steering ──────────────────────────────────────────────────────────────────

/// Raw two-button steering input, as produced by a keyboard or gamepad.
///
/// Key bindings are the caller's concern; this type only carries which of the
/// two steering buttons is held this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Steering {
    pub left:  bool,
    pub right: bool,
}

impl Steering {
    /// Collapse the input into one action.  Left wins when both are held.
    #[inline]
    pub fn resolve(self) -> Action {
        if self.left {
            Action::Left
        } else if self.right {
            Action::Right
        } else {
            Action::Straight
        }
    }
}

impl From<Action> for Steering {
    fn from(action: Action) -> Self {
        Steering {
            left:  action == Action::Left,
            right: action == Action::Right,
        }
    }
}
