use crate::table::{FormeEntry, FormeKey, IdentityTable, TableError};

/// Resolves `(species, form)` pairs against one generation's table.
///
/// The plain lookups are total: an unregistered form resolves to an empty
/// suffix and to the base species' own storage row. The `checked_` variant
/// reports those cases as errors instead.
#[derive(Copy, Clone, Debug)]
pub struct FormeResolver<'a> {
    table: &'a IdentityTable,
}

impl<'a> FormeResolver<'a> {
    pub fn new(table: &'a IdentityTable) -> Self {
        FormeResolver { table }
    }

    pub fn lookup(&self, species: u16, form: u8) -> Option<&'a FormeEntry> {
        self.table.get(species, form)
    }

    pub fn suffix(&self, species: u16, form: u8) -> &'a str {
        self.lookup(species, form)
            .map(|entry| entry.suffix.as_str())
            .unwrap_or("")
    }

    pub fn absolute_index(&self, species: u16, form: u8) -> u16 {
        self.lookup(species, form)
            .and_then(|entry| entry.absolute_index)
            .unwrap_or(species)
    }

    /// Inverse of `absolute_index` for registered formes. Any other index is
    /// taken to be a base species row.
    pub fn base_forme(&self, absolute_index: u16) -> FormeKey {
        self.table
            .by_absolute_index(absolute_index)
            .map(|entry| entry.key)
            .unwrap_or(FormeKey::new(absolute_index, 0))
    }

    pub fn checked_absolute_index(&self, species: u16, form: u8) -> Result<u16, TableError> {
        let species_count = self.table.species_count();
        if species == 0 || species > species_count {
            return Err(TableError::UnknownSpecies {
                species,
                species_count,
            });
        }
        if form == 0 {
            return Ok(species);
        }
        self.lookup(species, form)
            .map(|entry| entry.absolute_index.unwrap_or(species))
            .ok_or(TableError::UnregisteredForme { species, form })
    }

    /// Registered forms of a species, lowest form number first.
    pub fn formes_of(&self, species: u16) -> Vec<&'a FormeEntry> {
        let mut formes: Vec<&'a FormeEntry> = self
            .table
            .resolvable_entries()
            .filter(|entry| entry.key.species == species)
            .collect();
        formes.sort_by_key(|entry| entry.key.form);
        formes
    }

    pub fn display_name(&self, base_name: &str, species: u16, form: u8) -> String {
        format!("{}{}", base_name, self.suffix(species, form))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Generation;

    fn table() -> IdentityTable {
        IdentityTable::builder(Generation::Gen4)
            .forme(386, 1, "-A", 496)
            .forme(386, 2, "-D", 497)
            .forme(386, 3, "-S", 498)
            .forme(487, 1, "-O", 501)
            .cosmetic(201, 1, "-B")
            .build()
    }

    #[test]
    fn suffix_defaults() {
        let table = table();
        let resolver = table.resolver();
        assert_eq!(resolver.suffix(386, 2), "-D");
        assert_eq!(resolver.suffix(386, 0), "");
        assert_eq!(resolver.suffix(386, 9), "");
        assert_eq!(resolver.suffix(25, 0), "");
        assert_eq!(resolver.suffix(25, 4), "");
        assert_eq!(resolver.suffix(201, 1), "-B");
    }

    #[test]
    fn absolute_index_defaults_to_species() {
        let table = table();
        let resolver = table.resolver();
        assert_eq!(resolver.absolute_index(386, 3), 498);
        assert_eq!(resolver.absolute_index(386, 0), 386);
        assert_eq!(resolver.absolute_index(386, 7), 386);
        assert_eq!(resolver.absolute_index(201, 1), 201);
        assert_eq!(resolver.absolute_index(60000, 200), 60000);
    }

    #[test]
    fn base_forme_inverts_registered_indices() {
        let table = table();
        let resolver = table.resolver();
        assert_eq!(resolver.base_forme(501), FormeKey::new(487, 1));
        let pair: (u16, u8) = resolver.base_forme(496).into();
        assert_eq!(pair, (386, 1));
        assert_eq!(resolver.base_forme(487), FormeKey::new(487, 0));
        assert_eq!(resolver.base_forme(999), FormeKey::new(999, 0));
    }

    #[test]
    fn checked_absolute_index() {
        let table = table();
        let resolver = table.resolver();
        assert_eq!(resolver.checked_absolute_index(386, 1), Ok(496));
        assert_eq!(resolver.checked_absolute_index(386, 0), Ok(386));
        assert_eq!(resolver.checked_absolute_index(201, 1), Ok(201));
        assert_eq!(
            resolver.checked_absolute_index(386, 4),
            Err(TableError::UnregisteredForme { species: 386, form: 4 })
        );
        assert_eq!(
            resolver.checked_absolute_index(0, 0),
            Err(TableError::UnknownSpecies {
                species: 0,
                species_count: 493
            })
        );
        assert!(resolver.checked_absolute_index(494, 0).is_err());
    }

    #[test]
    fn formes_of_sorted_by_form() {
        let table = IdentityTable::builder(Generation::Gen4)
            .forme(386, 3, "-S", 498)
            .forme(386, 1, "-A", 496)
            .build();
        let forms: Vec<u8> = table
            .resolver()
            .formes_of(386)
            .iter()
            .map(|entry| entry.key.form)
            .collect();
        assert_eq!(forms, vec![1, 3]);
        assert!(table.resolver().formes_of(1).is_empty());
    }

    #[test]
    fn display_name_appends_suffix() {
        let table = table();
        let resolver = table.resolver();
        assert_eq!(resolver.display_name("GIRATINA", 487, 1), "GIRATINA-O");
        assert_eq!(resolver.display_name("GIRATINA", 487, 0), "GIRATINA");
    }
}
