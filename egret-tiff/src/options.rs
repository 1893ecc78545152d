/// Decoding options
///
/// The defaults decode standards-conforming streams. The toggles exist for
/// TIFF-derived raw formats and for one known non-standard producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Enforce the magic number 42 at offset 2. Some derived formats carry
    /// a different value there; the byte-order check is never skipped.
    pub enforce_magic: bool,
    /// Accept a zero tag id as genuine for entry 0 of the directory at this
    /// offset. One producer stores a GPS directory at a fixed offset whose
    /// first entry (GPSVersionID) legitimately has tag id 0.
    pub zero_tag_offset: Option<u32>,
    /// Probe for a JSON sidecar record next to the image on open and serve
    /// the root directory from it instead of decoding.
    pub use_sidecar: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            enforce_magic: true,
            zero_tag_offset: None,
            use_sidecar: true,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enforce_magic(mut self, enforce: bool) -> Self {
        self.enforce_magic = enforce;
        self
    }

    pub fn zero_tag_offset(mut self, offset: Option<u32>) -> Self {
        self.zero_tag_offset = offset;
        self
    }

    pub fn use_sidecar(mut self, use_sidecar: bool) -> Self {
        self.use_sidecar = use_sidecar;
        self
    }
}
