use egret_common::math::MathError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source failed header identification; wraps the underlying
    /// mismatch and names the offending file.
    #[error("'{path}' is not recognized as a TIFF file: {source}")]
    NotATiff { path: String, source: Box<Error> },

    #[error("Unknown byte order marker {0:?}")]
    UnknownByteOrder([u8; 2]),

    #[error("Magic number {0} where 42 was expected")]
    WrongMagicNumber(u16),

    /// Fewer bytes available than the read requested
    #[error("Unexpected end of data")]
    TruncatedRead,

    /// Type code outside the TIFF 6.0 range; drops the entry, not the IFD
    #[error("Unknown tag type code {0}")]
    UnknownTagType(u16),

    #[error("Arithmetic overflow: {0}")]
    Math(#[from] MathError),

    #[error("Sidecar record: {0}")]
    Sidecar(#[from] serde_json::Error),

    #[error("IO: {0}")]
    Io(std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::TruncatedRead
        } else {
            Self::Io(err)
        }
    }
}

impl Error {
    /// Attach the offending path to a header-identification failure
    ///
    /// Only failures that mean "this is not a TIFF stream" are wrapped;
    /// everything else passes through unchanged.
    pub(crate) fn for_path(self, path: &std::path::Path) -> Self {
        match self {
            err @ (Self::UnknownByteOrder(_) | Self::WrongMagicNumber(_) | Self::TruncatedRead) => {
                Self::NotATiff {
                    path: path.display().to_string(),
                    source: Box::new(err),
                }
            }
            other => other,
        }
    }
}

pub(crate) trait ResultExt<T> {
    fn e(self, err: Error) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E> {
    fn e(self, err: Error) -> Result<T> {
        self.map_err(|_| err)
    }
}

impl<T> ResultExt<T> for Option<T> {
    fn e(self, err: Error) -> Result<T> {
        match self {
            Some(v) => Ok(v),
            None => Err(err),
        }
    }
}
