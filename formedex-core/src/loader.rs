//! Identity tables supplied as JSON files, optionally gzip compressed.

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::sprite::OverworldSpriteTable;
use crate::table::IdentityTable;
use crate::{FormedexError, Generation, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableFile {
    pub generation: Generation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species_count: Option<u16>,
    #[serde(default)]
    pub formes: Vec<FormeFileEntry>,
    #[serde(default)]
    pub cosmetic: Vec<CosmeticFileEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overworld: Option<OverworldSpriteTable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormeFileEntry {
    pub species: u16,
    pub form: u8,
    pub suffix: String,
    pub absolute_index: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CosmeticFileEntry {
    pub species: u16,
    pub form: u8,
    #[serde(default)]
    pub suffix: String,
}

impl TableFile {
    pub fn from_table(table: &IdentityTable) -> Self {
        let mut formes = Vec::new();
        let mut cosmetic = Vec::new();
        for entry in table.entries() {
            match entry.absolute_index {
                Some(absolute_index) if !entry.cosmetic => formes.push(FormeFileEntry {
                    species: entry.key.species,
                    form: entry.key.form,
                    suffix: entry.suffix.clone(),
                    absolute_index,
                }),
                _ => cosmetic.push(CosmeticFileEntry {
                    species: entry.key.species,
                    form: entry.key.form,
                    suffix: entry.suffix.clone(),
                }),
            }
        }

        TableFile {
            generation: table.generation(),
            species_count: Some(table.species_count()),
            formes,
            cosmetic,
            overworld: table.overworld().cloned(),
        }
    }

    pub fn into_table(self) -> IdentityTable {
        let mut builder = IdentityTable::builder(self.generation);
        if let Some(species_count) = self.species_count {
            builder = builder.species_count(species_count);
        }
        for f in self.formes {
            builder = builder.forme(f.species, f.form, f.suffix, f.absolute_index);
        }
        for c in self.cosmetic {
            builder = builder.cosmetic(c.species, c.form, c.suffix);
        }
        if let Some(overworld) = self.overworld {
            builder = builder.overworld(overworld);
        }
        builder.build()
    }
}

fn is_gz(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("gz"))
}

fn is_table_file(path: &Path) -> bool {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_ascii_lowercase(),
        None => return false,
    };
    name.ends_with(".json") || name.ends_with(".json.gz")
}

/// Parses, builds and validates a table from raw file contents.
pub fn parse_table(raw: &[u8], gzipped: bool) -> Result<IdentityTable> {
    let file: TableFile = if gzipped {
        let mut decoder = GzDecoder::new(raw);
        let mut json = Vec::new();
        decoder.read_to_end(&mut json)?;
        serde_json::from_slice(&json)?
    } else {
        serde_json::from_slice(raw)?
    };

    let table = file.into_table();
    table.validate()?;
    Ok(table)
}

pub fn load_table_file(path: &Path) -> Result<IdentityTable> {
    let raw = fs::read(path)?;
    let table = parse_table(&raw, is_gz(path))?;
    log::debug!(
        "loaded {} table from {} ({} formes)",
        table.generation(),
        path.display(),
        table.entries().len()
    );
    Ok(table)
}

/// Loads every `*.json` / `*.json.gz` under `dir`, one table per generation.
pub fn load_table_dir(dir: &Path) -> Result<BTreeMap<Generation, IdentityTable>> {
    if !dir.is_dir() {
        return Err(FormedexError::Config(format!(
            "Table directory does not exist: {}",
            dir.display()
        )));
    }

    let mut tables = BTreeMap::new();
    let mut sources: BTreeMap<Generation, PathBuf> = BTreeMap::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| FormedexError::Config(format!("walking {}: {e}", dir.display())))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_table_file(path) {
            continue;
        }

        let table = load_table_file(path)?;
        let generation = table.generation();
        if let Some(previous) = sources.get(&generation) {
            return Err(FormedexError::Config(format!(
                "{} is defined twice: {} and {}",
                generation,
                previous.display(),
                path.display()
            )));
        }
        sources.insert(generation, path.to_path_buf());
        tables.insert(generation, table);
    }

    log::info!("loaded {} identity tables from {}", tables.len(), dir.display());
    Ok(tables)
}

pub fn write_table_file(table: &IdentityTable, path: &Path) -> Result<()> {
    let json = serde_json::to_vec_pretty(&TableFile::from_table(table))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    if is_gz(path) {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&json)?;
        fs::write(path, encoder.finish()?)?;
    } else {
        fs::write(path, json)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builtin, TableError};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("formedex-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    const GEN7_SAMPLE: &str = r#"{
        "generation": 7,
        "formes": [
            {"species": 19, "form": 1, "suffix": "-Alola", "absolute_index": 810},
            {"species": 20, "form": 1, "suffix": "-Alola", "absolute_index": 811}
        ],
        "cosmetic": [
            {"species": 25, "form": 1, "suffix": "-Original-Cap"}
        ]
    }"#;

    #[test]
    fn parses_minimal_json() {
        let table = parse_table(GEN7_SAMPLE.as_bytes(), false).unwrap();
        assert_eq!(table.generation(), Generation::Gen7);
        assert_eq!(table.species_count(), 807);
        assert_eq!(table.resolver().absolute_index(20, 1), 811);
        assert!(table.cosmetics().is_cosmetic_only(25, 1));
        assert!(table.overworld().is_none());
    }

    #[test]
    fn invalid_table_is_rejected() {
        let json = r#"{"generation": 5, "formes": [
            {"species": 641, "form": 1, "suffix": "-T", "absolute_index": 671},
            {"species": 642, "form": 1, "suffix": "-T", "absolute_index": 671}
        ]}"#;
        match parse_table(json.as_bytes(), false) {
            Err(FormedexError::Table(TableError::DuplicateAbsoluteIndex { index, .. })) => {
                assert_eq!(index, 671)
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn overworld_at_top_of_sprite_range_loads() {
        let json = r#"{"generation": 4, "overworld": {
            "base_offset": 0, "first_sprite": 65535, "last_sprite": 65535, "breakpoints": []
        }}"#;
        let table = parse_table(json.as_bytes(), false).unwrap();
        let overworld = table.overworld().unwrap();
        assert_eq!(overworld.checked_species(65535), Ok(65535));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            parse_table(b"{\"generation\": 4, \"formes\": 3}", false),
            Err(FormedexError::Json(_))
        ));
        assert!(matches!(
            parse_table(b"{\"generation\": 12}", false),
            Err(FormedexError::Json(_))
        ));
    }

    #[test]
    fn gzip_round_trip_keeps_behaviour() {
        let dir = scratch_dir("gz");
        let path = dir.join("gen4.json.gz");
        let original = builtin(Generation::Gen4).unwrap();
        write_table_file(original, &path).unwrap();

        let loaded = load_table_file(&path).unwrap();
        assert_eq!(loaded.entries(), original.entries());
        assert_eq!(loaded.overworld(), original.overworld());
        assert_eq!(loaded.resolver().base_forme(507), original.resolver().base_forme(507));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn directory_load_keys_by_generation() {
        let dir = scratch_dir("dir");
        write_table_file(builtin(Generation::Gen5).unwrap(), &dir.join("gen5.json")).unwrap();
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("nested").join("gen7.json"), GEN7_SAMPLE).unwrap();
        fs::write(dir.join("README.txt"), "not a table").unwrap();

        let tables = load_table_dir(&dir).unwrap();
        assert_eq!(
            tables.keys().copied().collect::<Vec<_>>(),
            vec![Generation::Gen5, Generation::Gen7]
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn directory_with_duplicate_generation_fails() {
        let dir = scratch_dir("dup");
        fs::write(dir.join("a.json"), GEN7_SAMPLE).unwrap();
        fs::write(dir.join("b.json"), GEN7_SAMPLE).unwrap();
        assert!(matches!(load_table_dir(&dir), Err(FormedexError::Config(_))));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_directory_is_config_error() {
        let dir = std::env::temp_dir().join("formedex-does-not-exist-anywhere");
        assert!(matches!(load_table_dir(&dir), Err(FormedexError::Config(_))));
    }
}
