use crate::gen3::UNOWN_SUFFIXES;
use crate::table::{CosmeticRecord, FormeRecord, IdentityTable};
use crate::Generation;

/// B2W2 personal table: 649 species, then formes.
pub(crate) const FIRST_FORME_INDEX: u16 = 650;

const FORMES: &[FormeRecord] = &[
    FormeRecord { species: 386, form: 1, suffix: "-A" },
    FormeRecord { species: 386, form: 2, suffix: "-D" },
    FormeRecord { species: 386, form: 3, suffix: "-S" },
    FormeRecord { species: 413, form: 1, suffix: "-S" },
    FormeRecord { species: 413, form: 2, suffix: "-T" },
    FormeRecord { species: 492, form: 1, suffix: "-S" },
    FormeRecord { species: 487, form: 1, suffix: "-O" },
    FormeRecord { species: 479, form: 1, suffix: "-H" },
    FormeRecord { species: 479, form: 2, suffix: "-W" },
    FormeRecord { species: 479, form: 3, suffix: "-Fr" },
    FormeRecord { species: 479, form: 4, suffix: "-Fa" },
    FormeRecord { species: 479, form: 5, suffix: "-M" },
    FormeRecord { species: 351, form: 1, suffix: "-Sunny" },
    FormeRecord { species: 351, form: 2, suffix: "-Rainy" },
    FormeRecord { species: 351, form: 3, suffix: "-Snowy" },
    FormeRecord { species: 550, form: 1, suffix: "-B" },
    FormeRecord { species: 555, form: 1, suffix: "-Z" },
    FormeRecord { species: 648, form: 1, suffix: "-P" },
    FormeRecord { species: 646, form: 1, suffix: "-W" },
    FormeRecord { species: 646, form: 2, suffix: "-B" },
    FormeRecord { species: 647, form: 1, suffix: "-R" },
    FormeRecord { species: 641, form: 1, suffix: "-T" },
    FormeRecord { species: 642, form: 1, suffix: "-T" },
    FormeRecord { species: 645, form: 1, suffix: "-T" },
];

pub(crate) const ARCEUS_SUFFIXES: &[&str] = &[
    "-Fighting", "-Flying", "-Poison", "-Ground", "-Rock", "-Bug", "-Ghost", "-Steel", "-Fire",
    "-Water", "-Grass", "-Electric", "-Psychic", "-Ice", "-Dragon", "-Dark",
];

pub(crate) const SEASON_SUFFIXES: &[&str] = &["-Summer", "-Autumn", "-Winter"];

pub(crate) const GENESECT_SUFFIXES: &[&str] = &["-Douse", "-Shock", "-Burn", "-Chill"];

const COSMETIC: &[CosmeticRecord] = &[
    CosmeticRecord { species: 201, suffixes: UNOWN_SUFFIXES },
    CosmeticRecord { species: 412, suffixes: &["-S", "-T"] },
    CosmeticRecord { species: 421, suffixes: &["-Sunshine"] },
    CosmeticRecord { species: 422, suffixes: &["-E"] },
    CosmeticRecord { species: 423, suffixes: &["-E"] },
    CosmeticRecord { species: 493, suffixes: ARCEUS_SUFFIXES },
    CosmeticRecord { species: 585, suffixes: SEASON_SUFFIXES },
    CosmeticRecord { species: 586, suffixes: SEASON_SUFFIXES },
    CosmeticRecord { species: 649, suffixes: GENESECT_SUFFIXES },
];

pub(crate) fn build_table() -> IdentityTable {
    IdentityTable::builder(Generation::Gen5)
        .appended_formes(FIRST_FORME_INDEX, FORMES)
        .cosmetic_records(COSMETIC)
        .build()
}
