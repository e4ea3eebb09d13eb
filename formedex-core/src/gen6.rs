use crate::gen3::UNOWN_SUFFIXES;
use crate::gen5::{GENESECT_SUFFIXES, SEASON_SUFFIXES};
use crate::table::{CosmeticRecord, FormeRecord, IdentityTable};
use crate::Generation;

/// ORAS personal table: 721 species, then formes in dex order.
pub(crate) const FIRST_FORME_INDEX: u16 = 722;

const FORMES: &[FormeRecord] = &[
    FormeRecord { species: 3, form: 1, suffix: "-Mega" },
    FormeRecord { species: 6, form: 1, suffix: "-Mega-X" },
    FormeRecord { species: 6, form: 2, suffix: "-Mega-Y" },
    FormeRecord { species: 9, form: 1, suffix: "-Mega" },
    FormeRecord { species: 15, form: 1, suffix: "-Mega" },
    FormeRecord { species: 18, form: 1, suffix: "-Mega" },
    FormeRecord { species: 65, form: 1, suffix: "-Mega" },
    FormeRecord { species: 80, form: 1, suffix: "-Mega" },
    FormeRecord { species: 94, form: 1, suffix: "-Mega" },
    FormeRecord { species: 115, form: 1, suffix: "-Mega" },
    FormeRecord { species: 127, form: 1, suffix: "-Mega" },
    FormeRecord { species: 130, form: 1, suffix: "-Mega" },
    FormeRecord { species: 142, form: 1, suffix: "-Mega" },
    FormeRecord { species: 150, form: 1, suffix: "-Mega-X" },
    FormeRecord { species: 150, form: 2, suffix: "-Mega-Y" },
    FormeRecord { species: 181, form: 1, suffix: "-Mega" },
    FormeRecord { species: 208, form: 1, suffix: "-Mega" },
    FormeRecord { species: 212, form: 1, suffix: "-Mega" },
    FormeRecord { species: 214, form: 1, suffix: "-Mega" },
    FormeRecord { species: 229, form: 1, suffix: "-Mega" },
    FormeRecord { species: 248, form: 1, suffix: "-Mega" },
    FormeRecord { species: 254, form: 1, suffix: "-Mega" },
    FormeRecord { species: 257, form: 1, suffix: "-Mega" },
    FormeRecord { species: 260, form: 1, suffix: "-Mega" },
    FormeRecord { species: 282, form: 1, suffix: "-Mega" },
    FormeRecord { species: 302, form: 1, suffix: "-Mega" },
    FormeRecord { species: 303, form: 1, suffix: "-Mega" },
    FormeRecord { species: 306, form: 1, suffix: "-Mega" },
    FormeRecord { species: 308, form: 1, suffix: "-Mega" },
    FormeRecord { species: 310, form: 1, suffix: "-Mega" },
    FormeRecord { species: 319, form: 1, suffix: "-Mega" },
    FormeRecord { species: 323, form: 1, suffix: "-Mega" },
    FormeRecord { species: 334, form: 1, suffix: "-Mega" },
    FormeRecord { species: 351, form: 1, suffix: "-Sunny" },
    FormeRecord { species: 351, form: 2, suffix: "-Rainy" },
    FormeRecord { species: 351, form: 3, suffix: "-Snowy" },
    FormeRecord { species: 354, form: 1, suffix: "-Mega" },
    FormeRecord { species: 359, form: 1, suffix: "-Mega" },
    FormeRecord { species: 362, form: 1, suffix: "-Mega" },
    FormeRecord { species: 373, form: 1, suffix: "-Mega" },
    FormeRecord { species: 376, form: 1, suffix: "-Mega" },
    FormeRecord { species: 380, form: 1, suffix: "-Mega" },
    FormeRecord { species: 381, form: 1, suffix: "-Mega" },
    FormeRecord { species: 382, form: 1, suffix: "-Primal" },
    FormeRecord { species: 383, form: 1, suffix: "-Primal" },
    FormeRecord { species: 384, form: 1, suffix: "-Mega" },
    FormeRecord { species: 386, form: 1, suffix: "-A" },
    FormeRecord { species: 386, form: 2, suffix: "-D" },
    FormeRecord { species: 386, form: 3, suffix: "-S" },
    FormeRecord { species: 413, form: 1, suffix: "-S" },
    FormeRecord { species: 413, form: 2, suffix: "-T" },
    FormeRecord { species: 428, form: 1, suffix: "-Mega" },
    FormeRecord { species: 445, form: 1, suffix: "-Mega" },
    FormeRecord { species: 448, form: 1, suffix: "-Mega" },
    FormeRecord { species: 460, form: 1, suffix: "-Mega" },
    FormeRecord { species: 475, form: 1, suffix: "-Mega" },
    FormeRecord { species: 479, form: 1, suffix: "-H" },
    FormeRecord { species: 479, form: 2, suffix: "-W" },
    FormeRecord { species: 479, form: 3, suffix: "-Fr" },
    FormeRecord { species: 479, form: 4, suffix: "-Fa" },
    FormeRecord { species: 479, form: 5, suffix: "-M" },
    FormeRecord { species: 487, form: 1, suffix: "-O" },
    FormeRecord { species: 492, form: 1, suffix: "-S" },
    FormeRecord { species: 531, form: 1, suffix: "-Mega" },
    FormeRecord { species: 550, form: 1, suffix: "-B" },
    FormeRecord { species: 555, form: 1, suffix: "-Z" },
    FormeRecord { species: 641, form: 1, suffix: "-T" },
    FormeRecord { species: 642, form: 1, suffix: "-T" },
    FormeRecord { species: 645, form: 1, suffix: "-T" },
    FormeRecord { species: 646, form: 1, suffix: "-W" },
    FormeRecord { species: 646, form: 2, suffix: "-B" },
    FormeRecord { species: 647, form: 1, suffix: "-R" },
    FormeRecord { species: 648, form: 1, suffix: "-P" },
    FormeRecord { species: 670, form: 5, suffix: "-Eternal" },
    FormeRecord { species: 678, form: 1, suffix: "-F" },
    FormeRecord { species: 681, form: 1, suffix: "-Blade" },
    FormeRecord { species: 710, form: 1, suffix: "-Small" },
    FormeRecord { species: 710, form: 2, suffix: "-Large" },
    FormeRecord { species: 710, form: 3, suffix: "-Super" },
    FormeRecord { species: 711, form: 1, suffix: "-Small" },
    FormeRecord { species: 711, form: 2, suffix: "-Large" },
    FormeRecord { species: 711, form: 3, suffix: "-Super" },
    FormeRecord { species: 719, form: 1, suffix: "-Mega" },
    FormeRecord { species: 720, form: 1, suffix: "-Unbound" },
];

const ARCEUS_SUFFIXES: &[&str] = &[
    "-Fighting", "-Flying", "-Poison", "-Ground", "-Rock", "-Bug", "-Ghost", "-Steel", "-Fire",
    "-Water", "-Grass", "-Electric", "-Psychic", "-Ice", "-Dragon", "-Dark", "-Fairy",
];

const COSPLAY_PIKACHU_SUFFIXES: &[&str] =
    &["-Rock-Star", "-Belle", "-Pop-Star", "-PhD", "-Libre", "-Cosplay"];

const VIVILLON_SUFFIXES: &[&str] = &[
    "-Polar", "-Tundra", "-Continental", "-Garden", "-Elegant", "-Meadow", "-Modern", "-Marine",
    "-Archipelago", "-High-Plains", "-Sandstorm", "-River", "-Monsoon", "-Savanna", "-Sun",
    "-Ocean", "-Jungle", "-Fancy", "-Poke-Ball",
];

const FLOWER_SUFFIXES: &[&str] = &["-Yellow", "-Orange", "-Blue", "-White"];

const FURFROU_SUFFIXES: &[&str] = &[
    "-Heart", "-Star", "-Diamond", "-Debutante", "-Matron", "-Dandy", "-La-Reine", "-Kabuki",
    "-Pharaoh",
];

const COSMETIC: &[CosmeticRecord] = &[
    CosmeticRecord { species: 25, suffixes: COSPLAY_PIKACHU_SUFFIXES },
    CosmeticRecord { species: 201, suffixes: UNOWN_SUFFIXES },
    CosmeticRecord { species: 412, suffixes: &["-S", "-T"] },
    CosmeticRecord { species: 421, suffixes: &["-Sunshine"] },
    CosmeticRecord { species: 422, suffixes: &["-E"] },
    CosmeticRecord { species: 423, suffixes: &["-E"] },
    CosmeticRecord { species: 493, suffixes: ARCEUS_SUFFIXES },
    CosmeticRecord { species: 585, suffixes: SEASON_SUFFIXES },
    CosmeticRecord { species: 586, suffixes: SEASON_SUFFIXES },
    CosmeticRecord { species: 649, suffixes: GENESECT_SUFFIXES },
    CosmeticRecord { species: 666, suffixes: VIVILLON_SUFFIXES },
    CosmeticRecord { species: 669, suffixes: FLOWER_SUFFIXES },
    // Floette's form 5 (Eternal Flower) has its own row; 1..=4 are colours.
    CosmeticRecord { species: 670, suffixes: FLOWER_SUFFIXES },
    CosmeticRecord { species: 671, suffixes: FLOWER_SUFFIXES },
    CosmeticRecord { species: 676, suffixes: FURFROU_SUFFIXES },
    CosmeticRecord { species: 716, suffixes: &["-Active"] },
];

pub(crate) fn build_table() -> IdentityTable {
    IdentityTable::builder(Generation::Gen6)
        .appended_formes(FIRST_FORME_INDEX, FORMES)
        .cosmetic_records(COSMETIC)
        .build()
}
