use crate::gen3::UNOWN_SUFFIXES;
use crate::sprite::{Breakpoint, Edge, OverworldSpriteTable};
use crate::table::{CosmeticRecord, FormeRecord, IdentityTable};
use crate::Generation;

/// Platinum and HGSS store alternate formes right after Egg (494) and Bad Egg (495).
pub(crate) const FIRST_FORME_INDEX: u16 = 496;

const FORMES: &[FormeRecord] = &[
    FormeRecord { species: 386, form: 1, suffix: "-A" },
    FormeRecord { species: 386, form: 2, suffix: "-D" },
    FormeRecord { species: 386, form: 3, suffix: "-S" },
    FormeRecord { species: 413, form: 1, suffix: "-S" },
    FormeRecord { species: 413, form: 2, suffix: "-T" },
    FormeRecord { species: 487, form: 1, suffix: "-O" },
    FormeRecord { species: 492, form: 1, suffix: "-S" },
    FormeRecord { species: 479, form: 1, suffix: "-H" },
    FormeRecord { species: 479, form: 2, suffix: "-W" },
    FormeRecord { species: 479, form: 3, suffix: "-Fr" },
    FormeRecord { species: 479, form: 4, suffix: "-Fa" },
    FormeRecord { species: 479, form: 5, suffix: "-M" },
];

// Form 9 is the ??? type, which is gone from Gen 5 onwards.
const ARCEUS_SUFFIXES: &[&str] = &[
    "-Fighting", "-Flying", "-Poison", "-Ground", "-Rock", "-Bug", "-Ghost", "-Steel", "-???",
    "-Fire", "-Water", "-Grass", "-Electric", "-Psychic", "-Ice", "-Dragon", "-Dark",
];

const COSMETIC: &[CosmeticRecord] = &[
    CosmeticRecord { species: 172, suffixes: &["-Spiky"] },
    CosmeticRecord { species: 201, suffixes: UNOWN_SUFFIXES },
    CosmeticRecord { species: 351, suffixes: &["-Sunny", "-Rainy", "-Snowy"] },
    CosmeticRecord { species: 412, suffixes: &["-S", "-T"] },
    CosmeticRecord { species: 421, suffixes: &["-Sunshine"] },
    CosmeticRecord { species: 422, suffixes: &["-E"] },
    CosmeticRecord { species: 423, suffixes: &["-E"] },
    CosmeticRecord { species: 493, suffixes: ARCEUS_SUFFIXES },
];

/// HGSS walking-Pokemon models. Sprite 297 is Bulbasaur; every entry below
/// marks where extra model slots were spliced into the dex order.
pub(crate) const HGSS_OVERWORLD_BASE: u16 = 296;
pub(crate) const HGSS_OVERWORLD_FIRST: u16 = 297;
pub(crate) const HGSS_OVERWORLD_LAST: u16 = 862;

const HGSS_OVERWORLD_BREAKPOINTS: &[Breakpoint] = &[
    // Venusaur (299), female model at 300
    Breakpoint::fixed(Edge::AtLeast, 300, 1),
    // Pikachu (322), two variants
    Breakpoint::run(Edge::Above, 322, 324),
    Breakpoint::fixed(Edge::Above, 324, 2),
    // Spiky-eared Pichu follows Pichu (471)
    Breakpoint::fixed(Edge::AtLeast, 472, 1),
    // Unown A (501), then B..Z, ! and ?
    Breakpoint::run(Edge::AtLeast, 501, 528),
    Breakpoint::fixed(Edge::AtLeast, 529, 27),
    // Wobbuffet (529), female at 530
    Breakpoint::fixed(Edge::AtLeast, 530, 1),
    // Meditite (635), female at 636
    Breakpoint::fixed(Edge::Above, 635, 1),
    // Castform (680), three weather models
    Breakpoint::run(Edge::Above, 680, 683),
    Breakpoint::fixed(Edge::AtLeast, 684, 3),
    // Deoxys (718), Attack/Defense/Speed
    Breakpoint::run(Edge::Above, 718, 721),
    Breakpoint::fixed(Edge::Above, 721, 3),
    // Burmy (747), two cloaks
    Breakpoint::run(Edge::Above, 747, 749),
    Breakpoint::fixed(Edge::Above, 749, 2),
    // Wormadam (750), two cloaks
    Breakpoint::run(Edge::Above, 750, 752),
    Breakpoint::fixed(Edge::AtLeast, 753, 2),
    // Combee (754), female at 755
    Breakpoint::fixed(Edge::AtLeast, 755, 1),
    // Cherrim (761), Sunshine at 762
    Breakpoint::fixed(Edge::AtLeast, 762, 1),
    // Shellos (763), East Sea at 764
    Breakpoint::fixed(Edge::AtLeast, 764, 1),
    // Gastrodon (765), East Sea at 766
    Breakpoint::fixed(Edge::Above, 765, 1),
    // Hippopotas (792) and Hippowdon (794) female models
    Breakpoint::fixed(Edge::AtLeast, 793, 1),
    Breakpoint::fixed(Edge::AtLeast, 795, 1),
    // Rotom (824), five appliances
    Breakpoint::run(Edge::Above, 824, 829),
    Breakpoint::fixed(Edge::AtLeast, 830, 5),
    // Giratina (837), Origin at 838
    Breakpoint::fixed(Edge::AtLeast, 838, 1),
    // Shaymin (843), Sky at 844
    Breakpoint::fixed(Edge::AtLeast, 844, 1),
    // Arceus Normal (845), then 17 typed models
    Breakpoint::run(Edge::Above, 845, 862),
];

pub(crate) fn hgss_overworld() -> OverworldSpriteTable {
    OverworldSpriteTable::new(
        HGSS_OVERWORLD_BASE,
        HGSS_OVERWORLD_FIRST,
        HGSS_OVERWORLD_LAST,
        HGSS_OVERWORLD_BREAKPOINTS.to_vec(),
    )
}

pub(crate) fn build_table() -> IdentityTable {
    IdentityTable::builder(Generation::Gen4)
        .appended_formes(FIRST_FORME_INDEX, FORMES)
        .cosmetic_records(COSMETIC)
        .overworld(hgss_overworld())
        .build()
}
