use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::cosmetic::CosmeticFormRegistry;
use crate::forme::FormeResolver;
use crate::sprite::OverworldSpriteTable;
use crate::Generation;

/// Composite `(species, form)` key. Form 0 is always the base species.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct FormeKey {
    pub species: u16,
    pub form: u8,
}

impl FormeKey {
    pub const fn new(species: u16, form: u8) -> Self {
        FormeKey { species, form }
    }

    pub fn is_base(self) -> bool {
        self.form == 0
    }
}

impl fmt::Display for FormeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.species, self.form)
    }
}

impl From<FormeKey> for (u16, u8) {
    fn from(key: FormeKey) -> (u16, u8) {
        (key.species, key.form)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormeEntry {
    pub key: FormeKey,
    pub suffix: String,
    /// Storage row in the base-stat/moveset tables. `None` for cosmetic forms,
    /// which share the base species' row.
    pub absolute_index: Option<u16>,
    pub cosmetic: bool,
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum TableError {
    #[error("species {species} registers form 0, which is reserved for the base species")]
    BaseFormRegistered { species: u16 },

    #[error("forme {key} is registered more than once")]
    DuplicateForme { key: FormeKey },

    #[error("absolute index {index} is shared by {first} and {second}")]
    DuplicateAbsoluteIndex {
        index: u16,
        first: FormeKey,
        second: FormeKey,
    },

    #[error("absolute index {index} of {key} falls inside the species list 1..={species_count}")]
    IndexInSpeciesRange {
        index: u16,
        key: FormeKey,
        species_count: u16,
    },

    #[error("cosmetic form {key} owns absolute index {index}")]
    CosmeticWithIndex { key: FormeKey, index: u16 },

    #[error("sprite range {first}..={last} is empty or starts at or below base offset {base_offset}")]
    BadSpriteRange {
        base_offset: u16,
        first: u16,
        last: u16,
    },

    #[error("breakpoint threshold {threshold} does not follow {previous}")]
    UnorderedBreakpoint { previous: u16, threshold: u16 },

    #[error("run starting at sprite {threshold} ends at {last}, before it starts")]
    InvertedRun { threshold: u16, last: u16 },

    #[error("cumulative shift drops from {previous} to {current} at sprite {sprite}")]
    ShiftDecreases {
        sprite: u16,
        previous: u32,
        current: u32,
    },

    #[error("sprite {sprite} translates to species {species}, below {previous} for the sprite before it")]
    SpeciesDecreases {
        sprite: u16,
        species: i32,
        previous: i32,
    },

    #[error("species {species} is outside 1..={species_count}")]
    UnknownSpecies { species: u16, species_count: u16 },

    #[error("species {species} has no registered form {form}")]
    UnregisteredForme { species: u16, form: u8 },

    #[error("sprite {sprite} is outside the overworld range {first}..={last}")]
    SpriteOutOfRange { sprite: u16, first: u16, last: u16 },
}

/// Alternate forme as written in the bundled generation data.
#[derive(Copy, Clone, Debug)]
pub(crate) struct FormeRecord {
    pub species: u16,
    pub form: u8,
    pub suffix: &'static str,
}

/// Cosmetic forms of one species, numbered from form 1 in suffix order.
#[derive(Copy, Clone, Debug)]
pub(crate) struct CosmeticRecord {
    pub species: u16,
    pub suffixes: &'static [&'static str],
}

/// Immutable per-generation identity data: alternate formes, their storage
/// rows, the cosmetic catalog and (where the games have one) the overworld
/// sprite breakpoints.
#[derive(Clone, Debug)]
pub struct IdentityTable {
    generation: Generation,
    species_count: u16,
    entries: Vec<FormeEntry>,
    by_key: HashMap<FormeKey, usize>,
    by_index: HashMap<u16, usize>,
    overworld: Option<OverworldSpriteTable>,
}

impl IdentityTable {
    pub fn builder(generation: Generation) -> IdentityTableBuilder {
        IdentityTableBuilder {
            generation,
            species_count: generation.species_count(),
            entries: Vec::new(),
            overworld: None,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn species_count(&self) -> u16 {
        self.species_count
    }

    /// Every registration in the order it was made, duplicates included.
    pub fn entries(&self) -> &[FormeEntry] {
        &self.entries
    }

    pub fn get(&self, species: u16, form: u8) -> Option<&FormeEntry> {
        self.by_key
            .get(&FormeKey::new(species, form))
            .map(|&i| &self.entries[i])
    }

    pub fn by_absolute_index(&self, index: u16) -> Option<&FormeEntry> {
        self.by_index.get(&index).map(|&i| &self.entries[i])
    }

    pub fn overworld(&self) -> Option<&OverworldSpriteTable> {
        self.overworld.as_ref()
    }

    /// Registered entries that lookups resolve to, in registration order.
    pub fn resolvable_entries(&self) -> impl Iterator<Item = &FormeEntry> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(i, e)| self.by_key.get(&e.key) == Some(i))
            .map(|(_, e)| e)
    }

    pub fn resolver(&self) -> FormeResolver<'_> {
        FormeResolver::new(self)
    }

    pub fn cosmetics(&self) -> CosmeticFormRegistry<'_> {
        CosmeticFormRegistry::new(self)
    }

    /// Strict structural check. Lookups never call this; loaders and tests do.
    pub fn validate(&self) -> Result<(), TableError> {
        for (i, entry) in self.entries.iter().enumerate() {
            let key = entry.key;
            if key.is_base() {
                return Err(TableError::BaseFormRegistered {
                    species: key.species,
                });
            }
            if self.by_key.get(&key) != Some(&i) {
                return Err(TableError::DuplicateForme { key });
            }

            let Some(index) = entry.absolute_index else {
                continue;
            };
            if entry.cosmetic {
                return Err(TableError::CosmeticWithIndex { key, index });
            }
            if (1..=self.species_count).contains(&index) {
                return Err(TableError::IndexInSpeciesRange {
                    index,
                    key,
                    species_count: self.species_count,
                });
            }
            if let Some(&owner) = self.by_index.get(&index) {
                if owner != i {
                    return Err(TableError::DuplicateAbsoluteIndex {
                        index,
                        first: self.entries[owner].key,
                        second: key,
                    });
                }
            }
        }

        if let Some(overworld) = &self.overworld {
            overworld.validate()?;
        }
        Ok(())
    }
}

pub struct IdentityTableBuilder {
    generation: Generation,
    species_count: u16,
    entries: Vec<FormeEntry>,
    overworld: Option<OverworldSpriteTable>,
}

impl IdentityTableBuilder {
    pub fn species_count(mut self, species_count: u16) -> Self {
        self.species_count = species_count;
        self
    }

    pub fn forme(mut self, species: u16, form: u8, suffix: impl Into<String>, absolute_index: u16) -> Self {
        self.entries.push(FormeEntry {
            key: FormeKey::new(species, form),
            suffix: suffix.into(),
            absolute_index: Some(absolute_index),
            cosmetic: false,
        });
        self
    }

    /// Registers formes stored one after another starting at `first_index`,
    /// which is how the ROM tables append alternate formes after the dex list.
    pub(crate) fn appended_formes(mut self, first_index: u16, records: &[FormeRecord]) -> Self {
        for (offset, record) in records.iter().enumerate() {
            let index = u16::try_from(offset)
                .ok()
                .and_then(|offset| first_index.checked_add(offset));
            let Some(index) = index else {
                log::warn!(
                    "absolute index overflow after {} formes from {}",
                    offset,
                    first_index
                );
                break;
            };
            self = self.forme(record.species, record.form, record.suffix, index);
        }
        self
    }

    pub fn cosmetic(mut self, species: u16, form: u8, suffix: impl Into<String>) -> Self {
        self.entries.push(FormeEntry {
            key: FormeKey::new(species, form),
            suffix: suffix.into(),
            absolute_index: None,
            cosmetic: true,
        });
        self
    }

    pub(crate) fn cosmetic_records(mut self, records: &[CosmeticRecord]) -> Self {
        for record in records {
            for (i, suffix) in record.suffixes.iter().enumerate() {
                let Ok(form) = u8::try_from(i + 1) else {
                    log::warn!("species {} has more than 255 cosmetic forms", record.species);
                    break;
                };
                self = self.cosmetic(record.species, form, *suffix);
            }
        }
        self
    }

    pub fn overworld(mut self, overworld: OverworldSpriteTable) -> Self {
        self.overworld = Some(overworld);
        self
    }

    /// Builds the lookup and inverse maps in one pass. The first registration
    /// of a key or absolute index wins; later ones stay visible to `validate`.
    pub fn build(self) -> IdentityTable {
        let mut by_key = HashMap::with_capacity(self.entries.len());
        let mut by_index = HashMap::new();

        for (i, entry) in self.entries.iter().enumerate() {
            if by_key.contains_key(&entry.key) {
                log::warn!(
                    "{}: dropping duplicate registration of forme {}",
                    self.generation,
                    entry.key
                );
                continue;
            }
            by_key.insert(entry.key, i);

            if let Some(index) = entry.absolute_index {
                if let Some(&owner) = by_index.get(&index) {
                    let owner: &FormeEntry = &self.entries[owner];
                    log::warn!(
                        "{}: absolute index {} already belongs to {}, not mapping it back to {}",
                        self.generation,
                        index,
                        owner.key,
                        entry.key
                    );
                } else {
                    by_index.insert(index, i);
                }
            }
        }

        log::debug!(
            "{}: built identity table with {} formes ({} with storage rows), overworld table: {}",
            self.generation,
            by_key.len(),
            by_index.len(),
            self.overworld.is_some()
        );

        IdentityTable {
            generation: self.generation,
            species_count: self.species_count,
            entries: self.entries,
            by_key,
            by_index,
            overworld: self.overworld,
        }
    }
}
