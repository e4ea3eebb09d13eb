use crate::gen3::UNOWN_SUFFIXES;
use crate::table::{CosmeticRecord, IdentityTable};
use crate::Generation;

pub(crate) fn build_table() -> IdentityTable {
    IdentityTable::builder(Generation::Gen2)
        // Gold/Silver/Crystal only have the 26 letters; ! and ? arrive in Gen 3.
        .cosmetic_records(&[CosmeticRecord {
            species: 201,
            suffixes: &UNOWN_SUFFIXES[..25],
        }])
        .build()
}
