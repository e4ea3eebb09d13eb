use crate::table::{FormeKey, IdentityTable};

/// Catalog of forms that only change the sprite. They share stats, moves and
/// abilities with the base species and are never randomized on their own.
#[derive(Copy, Clone, Debug)]
pub struct CosmeticFormRegistry<'a> {
    table: &'a IdentityTable,
}

impl<'a> CosmeticFormRegistry<'a> {
    pub fn new(table: &'a IdentityTable) -> Self {
        CosmeticFormRegistry { table }
    }

    pub fn is_cosmetic_only(&self, species: u16, form: u8) -> bool {
        self.table
            .get(species, form)
            .map(|entry| entry.cosmetic)
            .unwrap_or(false)
    }

    pub fn has_cosmetic_forms(&self, species: u16) -> bool {
        self.iter().any(|key| key.species == species)
    }

    pub fn cosmetic_forms_of(&self, species: u16) -> Vec<u8> {
        let mut forms: Vec<u8> = self
            .iter()
            .filter(|key| key.species == species)
            .map(|key| key.form)
            .collect();
        forms.sort_unstable();
        forms
    }

    pub fn iter(&self) -> impl Iterator<Item = FormeKey> + 'a {
        let table: &'a IdentityTable = self.table;
        table
            .resolvable_entries()
            .filter(|entry| entry.cosmetic)
            .map(|entry| entry.key)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
