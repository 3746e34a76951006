// rule.rs - Transition rules: (current cell, neighbor multiset) -> next cell

use std::fmt;

use crate::cell::{Cell, CellDomain};

/// The multiset of neighbor values, kept as per-value counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighborhood {
    pub dead: u8,
    pub faction_a: u8,
    pub faction_b: u8,
}

impl Neighborhood {
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut hood = Self::default();
        for cell in cells {
            hood.push(cell);
        }
        hood
    }

    #[inline]
    pub fn push(&mut self, cell: Cell) {
        match cell {
            Cell::Dead => self.dead += 1,
            Cell::FactionA => self.faction_a += 1,
            Cell::FactionB => self.faction_b += 1,
        }
    }

    /// Non-dead neighbors.
    #[inline]
    pub fn alive(&self) -> u8 {
        self.faction_a + self.faction_b
    }

    /// Neighbors that survived the boundary policy.
    #[inline]
    pub fn len(&self) -> u8 {
        self.dead + self.alive()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The faction with more members, or `current` on a tie.
    pub fn challenger(&self, current: Cell) -> Cell {
        use std::cmp::Ordering::*;
        match self.faction_b.cmp(&self.faction_a) {
            Greater => Cell::FactionB,
            Less => Cell::FactionA,
            Equal => current,
        }
    }
}

/// A set of neighbor counts in `0..=8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CountSet(u16);

impl CountSet {
    pub const EMPTY: CountSet = CountSet(0);

    pub const fn of(counts: &[u8]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < counts.len() {
            assert!(counts[i] <= 8, "neighbor counts are at most 8");
            bits |= 1 << counts[i];
            i += 1;
        }
        CountSet(bits)
    }

    #[inline]
    pub const fn contains(self, count: u8) -> bool {
        count <= 8 && self.0 & (1 << count) != 0
    }

    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..=8u8).filter(move |&n| self.contains(n))
    }
}

impl fmt::Debug for CountSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for CountSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|n| write!(f, "{n}"))
    }
}

/// A binary birth/survival rule described purely by its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LifeLike {
    pub birth: CountSet,
    pub survival: CountSet,
}

impl LifeLike {
    /// B3/S23
    pub const CONWAY: LifeLike = LifeLike::new(CountSet::of(&[3]), CountSet::of(&[2, 3]));
    /// B1/S12
    pub const B1_S12: LifeLike = LifeLike::new(CountSet::of(&[1]), CountSet::of(&[1, 2]));

    pub const fn new(birth: CountSet, survival: CountSet) -> Self {
        Self { birth, survival }
    }

    #[inline]
    pub fn apply(&self, current: Cell, neighbors: &Neighborhood) -> Cell {
        let count = neighbors.alive();
        let next = if current.is_alive() {
            self.survival.contains(count)
        } else {
            self.birth.contains(count)
        };
        Cell::from(next)
    }
}

impl fmt::Display for LifeLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.survival)
    }
}

/// The closed set of transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Threshold-driven binary rule; any non-dead neighbor counts as alive.
    LifeLike(LifeLike),
    /// Two competing factions. Survivors keep their own value.
    Immigration,
    /// Like `Immigration`, but survivors switch to the challenger.
    ImmigrationTakeover,
    /// Returns the current value unchanged.
    Identity,
}

impl Rule {
    pub const CONWAY: Rule = Rule::LifeLike(LifeLike::CONWAY);
    pub const B1_S12: Rule = Rule::LifeLike(LifeLike::B1_S12);

    pub fn apply(&self, current: Cell, neighbors: &Neighborhood) -> Cell {
        match self {
            Rule::LifeLike(rule) => rule.apply(current, neighbors),
            Rule::Immigration => immigration(current, neighbors, false),
            Rule::ImmigrationTakeover => immigration(current, neighbors, true),
            Rule::Identity => current,
        }
    }

    pub fn domain(&self) -> CellDomain {
        match self {
            Rule::LifeLike(_) => CellDomain::Binary,
            Rule::Immigration | Rule::ImmigrationTakeover | Rule::Identity => CellDomain::Ternary,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Rule::LifeLike(rule) if *rule == LifeLike::CONWAY => "conway".to_string(),
            Rule::LifeLike(rule) => rule.to_string(),
            Rule::Immigration => "immigration".to_string(),
            Rule::ImmigrationTakeover => "immigration-takeover".to_string(),
            Rule::Identity => "identity".to_string(),
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule::CONWAY
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

fn immigration(current: Cell, neighbors: &Neighborhood, takeover: bool) -> Cell {
    let challenger = neighbors.challenger(current);
    match (current.is_alive(), neighbors.alive()) {
        (true, 2 | 3) if takeover => challenger,
        (true, 2 | 3) => current,
        (false, 3) => challenger,
        _ => Cell::Dead,
    }
}
