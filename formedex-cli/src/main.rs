use clap::{Parser, Subcommand};
use std::path::PathBuf;

use formedex_core::{
    builtin, loader, report, FormedexError, Generation, IdentityTable, RandomizablePool, Result,
};

#[derive(Debug, Parser)]
#[command(name = "formedex", version, about = "Pokemon species/forme identity tables")]
struct Args {
    /// Generation whose bundled table is used.
    #[arg(long = "gen", default_value_t = 4, global = true)]
    generation: u8,

    /// Load this table file (.json or .json.gz) instead of the bundled one.
    #[arg(long, value_name = "FILE", global = true)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Display suffix of a forme.
    Suffix { species: u16, form: u8 },

    /// Storage row used by base-stat and moveset tables.
    Index {
        species: u16,
        form: u8,
        /// Fail on unknown species or unregistered forms.
        #[arg(long)]
        strict: bool,
    },

    /// Species and form stored at an absolute index.
    Base { index: u16 },

    /// Species shown by an overworld sprite.
    Sprite {
        sprite: u16,
        /// Fail on sprites outside the overworld table.
        #[arg(long)]
        strict: bool,
    },

    /// Whether a form is visual only.
    Cosmetic { species: u16, form: u8 },

    /// Print the whole table.
    Dump,

    /// Check the table's structural invariants.
    Validate {
        /// Validate every table file under this directory instead.
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Write the table as JSON (gzip when OUTPUT ends in .gz).
    Export { output: PathBuf },

    /// Draw randomizable species/formes.
    Sample {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 6)]
        count: usize,
    },
}

enum TableSource {
    Bundled(&'static IdentityTable),
    Loaded(IdentityTable),
}

impl TableSource {
    fn get(&self) -> &IdentityTable {
        match self {
            TableSource::Bundled(table) => *table,
            TableSource::Loaded(table) => table,
        }
    }
}

fn select_table(args: &Args) -> Result<TableSource> {
    if let Some(path) = &args.table {
        return Ok(TableSource::Loaded(loader::load_table_file(path)?));
    }

    let generation = Generation::from_num(args.generation).ok_or_else(|| {
        FormedexError::Config(format!("unknown generation {}", args.generation))
    })?;
    builtin(generation).map(TableSource::Bundled).ok_or_else(|| {
        FormedexError::Config(format!(
            "no bundled table for {generation}; pass one with --table"
        ))
    })
}

fn run(args: Args) -> Result<()> {
    if let Command::Validate { dir: Some(dir) } = &args.command {
        let tables = loader::load_table_dir(dir)?;
        for generation in tables.keys() {
            println!("{generation}: ok");
        }
        return Ok(());
    }

    let source = select_table(&args)?;
    let table = source.get();
    let resolver = table.resolver();

    match args.command {
        Command::Suffix { species, form } => {
            println!("{:?}", resolver.suffix(species, form));
        }
        Command::Index {
            species,
            form,
            strict,
        } => {
            let index = if strict {
                resolver.checked_absolute_index(species, form)?
            } else {
                resolver.absolute_index(species, form)
            };
            println!("{index}");
        }
        Command::Base { index } => {
            let key = resolver.base_forme(index);
            println!("{} {}", key.species, key.form);
        }
        Command::Sprite { sprite, strict } => {
            let overworld = table.overworld().ok_or_else(|| {
                FormedexError::Config(format!("{} has no overworld sprite table", table.generation()))
            })?;
            if strict {
                println!("{}", overworld.checked_species(sprite)?);
            } else {
                println!("{}", overworld.convert_sprite_index_to_species(sprite));
            }
        }
        Command::Cosmetic { species, form } => {
            println!("{}", table.cosmetics().is_cosmetic_only(species, form));
        }
        Command::Dump => {
            print!("{}", report::render_table_report(table));
        }
        Command::Validate { .. } => {
            table.validate()?;
            println!("{}: ok", table.generation());
        }
        Command::Export { output } => {
            loader::write_table_file(table, &output)?;
            log::info!("wrote {} table to {}", table.generation(), output.display());
        }
        Command::Sample { seed, count } => {
            let pool = RandomizablePool::new(table);
            log::info!("{} randomizable entries in {}", pool.len(), table.generation());
            for key in pool.sample(seed, count) {
                println!(
                    "{}{}\t(row {})",
                    key.species,
                    resolver.suffix(key.species, key.form),
                    resolver.absolute_index(key.species, key.form)
                );
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter(Some("formedex"), log::LevelFilter::Info)
        .filter(Some("formedex_core"), log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
