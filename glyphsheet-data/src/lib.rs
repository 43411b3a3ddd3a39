mod document;
mod geometry;
mod layout;
mod table;

pub use document::FontDocument;
pub use geometry::{FontVariant, GlyphGeometry};
pub use layout::AtlasLayout;
pub use table::{CharacterRecord, MissingVariant, PackedGeometryTable};
