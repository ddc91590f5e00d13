//! Well-known frame property keys.

use std::fmt;

/// Reserved frame properties written by the engine and its standard filters.
///
/// Each member maps to its canonical key string, so a `PropKey` is accepted
/// anywhere the accessors take a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropKey {
    ColorRange,
    Matrix,
    Transfer,
    Primaries,
    ChromaLocation,
    /// Interlacing: progressive, or which field comes first.
    FieldBased,
    AbsoluteTime,
    DurationNum,
    DurationDen,
    SarNum,
    SarDen,
    Combed,
    Field,
    /// Single-character picture type as reported by the decoder (I/P/B).
    PictType,
    SceneChangeNext,
    SceneChangePrev,
}

impl PropKey {
    /// Canonical key string in the property container.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PropKey::ColorRange => "_ColorRange",
            PropKey::Matrix => "_Matrix",
            PropKey::Transfer => "_Transfer",
            PropKey::Primaries => "_Primaries",
            PropKey::ChromaLocation => "_ChromaLocation",
            PropKey::FieldBased => "_FieldBased",
            PropKey::AbsoluteTime => "_AbsoluteTime",
            PropKey::DurationNum => "_DurationNum",
            PropKey::DurationDen => "_DurationDen",
            PropKey::SarNum => "_SARNum",
            PropKey::SarDen => "_SARDen",
            PropKey::Combed => "_Combed",
            PropKey::Field => "_Field",
            PropKey::PictType => "_PictType",
            PropKey::SceneChangeNext => "_SceneChangeNext",
            PropKey::SceneChangePrev => "_SceneChangePrev",
        }
    }
}

impl AsRef<str> for PropKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PropKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
