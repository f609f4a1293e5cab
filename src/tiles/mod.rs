//! Tile coding: an index hash table plus a tiling generator that maps scaled
//! continuous features and integer discriminators onto a fixed number of
//! bounded indices, suitable as sparse features for linear models.

pub mod config;
pub mod coords;
pub mod hash_table;
pub mod tiling;
pub mod value_function;

pub use config::TileCodingConfig;
pub use coords::TileCoords;
pub use hash_table::IndexHashTable;
pub use tiling::{tile_coordinates, tiles, HashTarget};
pub use value_function::TiledValueFunction;
