//! Overworld sprite index translation.
//!
//! Overworld model tables number every sprite slot densely, including the
//! extra slots spliced in for alternate and cosmetic forms. Recovering the
//! species means subtracting, for each splice point at or below the queried
//! sprite, the number of extra slots it inserted.

use serde::{Deserialize, Serialize};

use crate::table::TableError;

/// Comparison applied between a sprite ID and a breakpoint threshold.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// `sprite >= threshold`
    AtLeast,
    /// `sprite > threshold`
    Above,
}

impl Edge {
    pub fn admits(self, sprite: u16, threshold: u16) -> bool {
        match self {
            Edge::AtLeast => sprite >= threshold,
            Edge::Above => sprite > threshold,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    /// Subtract a constant once the edge is crossed.
    Fixed(u16),
    /// Sprites past the threshold up to `last` collapse onto the threshold's
    /// species. Sprites beyond `last` are left to a following `Fixed` breakpoint.
    Run { last: u16 },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub threshold: u16,
    pub edge: Edge,
    pub shift: Shift,
}

impl Breakpoint {
    pub const fn fixed(edge: Edge, threshold: u16, amount: u16) -> Self {
        Breakpoint {
            threshold,
            edge,
            shift: Shift::Fixed(amount),
        }
    }

    pub const fn run(edge: Edge, threshold: u16, last: u16) -> Self {
        Breakpoint {
            threshold,
            edge,
            shift: Shift::Run { last },
        }
    }

    /// Correction contributed by this breakpoint, measured against the
    /// untouched sprite ID.
    pub fn correction(&self, sprite: u16) -> u16 {
        if !self.edge.admits(sprite, self.threshold) {
            return 0;
        }
        match self.shift {
            Shift::Fixed(amount) => amount,
            Shift::Run { last } if sprite <= last => sprite - self.threshold,
            Shift::Run { .. } => 0,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct OverworldSpriteTable {
    base_offset: u16,
    first_sprite: u16,
    last_sprite: u16,
    breakpoints: Vec<Breakpoint>,
}

impl OverworldSpriteTable {
    pub fn new(base_offset: u16, first_sprite: u16, last_sprite: u16, breakpoints: Vec<Breakpoint>) -> Self {
        OverworldSpriteTable {
            base_offset,
            first_sprite,
            last_sprite,
            breakpoints,
        }
    }

    pub fn base_offset(&self) -> u16 {
        self.base_offset
    }

    pub fn first_sprite(&self) -> u16 {
        self.first_sprite
    }

    pub fn last_sprite(&self) -> u16 {
        self.last_sprite
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn cumulative_shift(&self, sprite: u16) -> u32 {
        self.breakpoints
            .iter()
            .map(|bp| u32::from(bp.correction(sprite)))
            .sum()
    }

    /// Species for an overworld sprite. No range check: sprites outside the
    /// table produce whatever the arithmetic gives, possibly non-positive.
    pub fn convert_sprite_index_to_species(&self, sprite: u16) -> i32 {
        let start = i32::from(sprite) - i32::from(self.base_offset);
        self.breakpoints
            .iter()
            .fold(start, |species, bp| species - i32::from(bp.correction(sprite)))
    }

    pub fn checked_species(&self, sprite: u16) -> Result<u16, TableError> {
        let out_of_range = TableError::SpriteOutOfRange {
            sprite,
            first: self.first_sprite,
            last: self.last_sprite,
        };
        if !(self.first_sprite..=self.last_sprite).contains(&sprite) {
            return Err(out_of_range);
        }
        u16::try_from(self.convert_sprite_index_to_species(sprite)).map_err(|_| out_of_range)
    }

    /// Every in-range sprite that translates to `species`.
    pub fn sprites_for_species(&self, species: u16) -> Vec<u16> {
        (self.first_sprite..=self.last_sprite)
            .filter(|&sprite| self.convert_sprite_index_to_species(sprite) == i32::from(species))
            .collect()
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.first_sprite > self.last_sprite || self.first_sprite <= self.base_offset {
            return Err(TableError::BadSpriteRange {
                base_offset: self.base_offset,
                first: self.first_sprite,
                last: self.last_sprite,
            });
        }

        let mut previous: Option<u16> = None;
        for bp in &self.breakpoints {
            if let Some(previous) = previous {
                if bp.threshold <= previous {
                    return Err(TableError::UnorderedBreakpoint {
                        previous,
                        threshold: bp.threshold,
                    });
                }
            }
            if let Shift::Run { last } = bp.shift {
                if last < bp.threshold {
                    return Err(TableError::InvertedRun {
                        threshold: bp.threshold,
                        last,
                    });
                }
            }
            previous = Some(bp.threshold);
        }

        let mut prev_shift = self.cumulative_shift(self.first_sprite);
        let mut prev_species = self.convert_sprite_index_to_species(self.first_sprite);
        for sprite in (self.first_sprite..=self.last_sprite).skip(1) {
            let shift = self.cumulative_shift(sprite);
            if shift < prev_shift {
                return Err(TableError::ShiftDecreases {
                    sprite,
                    previous: prev_shift,
                    current: shift,
                });
            }
            let species = self.convert_sprite_index_to_species(sprite);
            if species < prev_species {
                return Err(TableError::SpeciesDecreases {
                    sprite,
                    species,
                    previous: prev_species,
                });
            }
            prev_shift = shift;
            prev_species = species;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 100 = species 1, one alt slot at 102, a 3-slot run at 105..=107.
    fn toy_table() -> OverworldSpriteTable {
        OverworldSpriteTable::new(
            99,
            100,
            112,
            vec![
                Breakpoint::fixed(Edge::AtLeast, 102, 1),
                Breakpoint::run(Edge::Above, 104, 107),
                Breakpoint::fixed(Edge::Above, 107, 3),
            ],
        )
    }

    #[test]
    fn edges() {
        assert!(Edge::AtLeast.admits(5, 5));
        assert!(!Edge::Above.admits(5, 5));
        assert!(Edge::Above.admits(6, 5));
        assert!(!Edge::AtLeast.admits(4, 5));
    }

    #[test]
    fn fixed_shift_collapses_single_alt_slot() {
        let table = toy_table();
        assert_eq!(table.convert_sprite_index_to_species(100), 1);
        assert_eq!(table.convert_sprite_index_to_species(101), 2);
        assert_eq!(table.convert_sprite_index_to_species(102), 2);
        assert_eq!(table.convert_sprite_index_to_species(103), 3);
    }

    #[test]
    fn run_collapses_onto_first_member() {
        let table = toy_table();
        let base = table.convert_sprite_index_to_species(104);
        assert_eq!(base, 4);
        for sprite in 105..=107 {
            assert_eq!(table.convert_sprite_index_to_species(sprite), base);
        }
        assert_eq!(table.convert_sprite_index_to_species(108), 5);
        assert_eq!(table.cumulative_shift(106), 3);
        assert_eq!(table.cumulative_shift(108), 4);
    }

    #[test]
    fn out_of_range_is_permissive_by_default() {
        let table = toy_table();
        assert_eq!(table.convert_sprite_index_to_species(0), -99);
        assert_eq!(table.convert_sprite_index_to_species(200), 97);
    }

    #[test]
    fn checked_species_rejects_out_of_range() {
        let table = toy_table();
        assert_eq!(table.checked_species(106), Ok(4));
        assert_eq!(
            table.checked_species(113),
            Err(TableError::SpriteOutOfRange {
                sprite: 113,
                first: 100,
                last: 112
            })
        );
        assert!(table.checked_species(99).is_err());
    }

    #[test]
    fn sprites_for_species_lists_collapsed_slots() {
        let table = toy_table();
        assert_eq!(table.sprites_for_species(4), vec![104, 105, 106, 107]);
        assert_eq!(table.sprites_for_species(2), vec![101, 102]);
        assert!(table.sprites_for_species(400).is_empty());
    }

    #[test]
    fn validate_accepts_consistent_table() {
        toy_table().validate().unwrap();
    }

    #[test]
    fn validate_rejects_undersized_fixed_after_run() {
        let table = OverworldSpriteTable::new(
            99,
            100,
            112,
            vec![
                Breakpoint::run(Edge::Above, 104, 107),
                Breakpoint::fixed(Edge::Above, 107, 1),
            ],
        );
        assert_eq!(
            table.validate(),
            Err(TableError::ShiftDecreases {
                sprite: 108,
                previous: 3,
                current: 1
            })
        );
    }

    #[test]
    fn validate_rejects_oversized_fixed_shift() {
        let table = OverworldSpriteTable::new(
            99,
            100,
            112,
            vec![Breakpoint::fixed(Edge::AtLeast, 105, 3)],
        );
        assert_eq!(
            table.validate(),
            Err(TableError::SpeciesDecreases {
                sprite: 105,
                species: 3,
                previous: 5
            })
        );
    }

    #[test]
    fn validate_rejects_inverted_run() {
        let table = OverworldSpriteTable::new(
            99,
            100,
            112,
            vec![Breakpoint::run(Edge::Above, 104, 103)],
        );
        assert_eq!(
            table.validate(),
            Err(TableError::InvertedRun {
                threshold: 104,
                last: 103
            })
        );
    }

    #[test]
    fn single_sprite_at_top_of_range() {
        let table = OverworldSpriteTable::new(0, u16::MAX, u16::MAX, Vec::new());
        table.validate().unwrap();
        assert_eq!(table.checked_species(u16::MAX), Ok(u16::MAX));
        assert_eq!(table.sprites_for_species(u16::MAX), vec![u16::MAX]);

        let shifted = OverworldSpriteTable::new(
            0,
            u16::MAX - 1,
            u16::MAX,
            vec![Breakpoint::run(Edge::AtLeast, u16::MAX - 1, u16::MAX)],
        );
        shifted.validate().unwrap();
        assert_eq!(shifted.convert_sprite_index_to_species(u16::MAX), i32::from(u16::MAX - 1));
    }

    #[test]
    fn breakpoints_deserialize_from_tagged_json() {
        let json = r#"[
            {"threshold": 300, "edge": "at_least", "shift": {"fixed": 1}},
            {"threshold": 322, "edge": "above", "shift": {"run": {"last": 324}}}
        ]"#;
        let parsed: Vec<Breakpoint> = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed,
            vec![
                Breakpoint::fixed(Edge::AtLeast, 300, 1),
                Breakpoint::run(Edge::Above, 322, 324),
            ]
        );
    }
}
