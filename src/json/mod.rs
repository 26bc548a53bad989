//! JSON Import/Export für Tile-Maps.
//!
//! Das Format ist ein Array von Zeilen (`height` Zeilen mit je `width` Ganzzahlen),
//! zeilenweise von oben nach unten, `-1` für leere Zellen. Benannte Layer und
//! der Regionsbaum werden nicht gespeichert.

pub mod parser;
pub mod writer;

pub use parser::parse_tile_map;
pub use writer::write_tile_map;
