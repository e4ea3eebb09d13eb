use crate::table::{CosmeticRecord, IdentityTable};
use crate::Generation;

/// Unown forms 1..=27: B through Z, then ! and ?. Form 0 is A.
pub(crate) const UNOWN_SUFFIXES: &[&str] = &[
    "-B", "-C", "-D", "-E", "-F", "-G", "-H", "-I", "-J", "-K", "-L", "-M", "-N", "-O", "-P",
    "-Q", "-R", "-S", "-T", "-U", "-V", "-W", "-X", "-Y", "-Z", "-!", "-?",
];

const COSMETIC: &[CosmeticRecord] = &[CosmeticRecord {
    species: 201,
    suffixes: UNOWN_SUFFIXES,
}];

// Castform's weather forms and Deoxys' per-version formes don't get rows of
// their own in the Gen 3 base-stat table, so only Unown is listed.
pub(crate) fn build_table() -> IdentityTable {
    IdentityTable::builder(Generation::Gen3)
        .cosmetic_records(COSMETIC)
        .build()
}
