use crate::sprite::{Edge, Shift};
use crate::table::IdentityTable;

pub fn render_table_report(table: &IdentityTable) -> String {
    let mut log = format!("{} identity table\n", table.generation());
    log.push_str(&format!("species_count: {}\n", table.species_count()));

    let mut formes: Vec<_> = table.resolvable_entries().filter(|e| !e.cosmetic).collect();
    formes.sort_by_key(|e| e.absolute_index);
    log.push_str(&format!("formes with data rows: {}\n", formes.len()));
    for entry in formes {
        if let Some(index) = entry.absolute_index {
            log.push_str(&format!(
                "  {:>4}  {:>4}/{:<2} {}\n",
                index, entry.key.species, entry.key.form, entry.suffix
            ));
        }
    }

    let cosmetics = table.cosmetics();
    let mut species: Vec<u16> = cosmetics.iter().map(|key| key.species).collect();
    species.sort_unstable();
    species.dedup();
    log.push_str(&format!("cosmetic forms: {}\n", cosmetics.len()));
    for s in species {
        let resolver = table.resolver();
        let suffixes: Vec<&str> = cosmetics
            .cosmetic_forms_of(s)
            .into_iter()
            .map(|form| resolver.suffix(s, form))
            .collect();
        log.push_str(&format!("  {:>4}: {}\n", s, suffixes.join(" ")));
    }

    match table.overworld() {
        Some(overworld) => {
            log.push_str(&format!(
                "overworld sprites: {}..={} (base offset {})\n",
                overworld.first_sprite(),
                overworld.last_sprite(),
                overworld.base_offset()
            ));
            for bp in overworld.breakpoints() {
                let op = match bp.edge {
                    Edge::AtLeast => ">=",
                    Edge::Above => ">",
                };
                let shift = match bp.shift {
                    Shift::Fixed(amount) => format!("-{}", amount),
                    Shift::Run { last } => format!("collapse ..={} onto {}", last, bp.threshold),
                };
                log.push_str(&format!(
                    "  sprite {} {:<4} {:<28} -> species {}\n",
                    op,
                    bp.threshold,
                    shift,
                    overworld.convert_sprite_index_to_species(bp.threshold)
                ));
            }
        }
        None => log.push_str("overworld sprites: none\n"),
    }

    log
}
