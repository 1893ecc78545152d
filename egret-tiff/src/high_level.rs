use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use egret_common::math::ToUsize;
use egret_common::tag::Tag;

use crate::error::Result;
use crate::internal::{ByteOrder, TiffRaw};
use crate::{Ifd, Options, Value};

/// A decoding session over one TIFF-family byte source
///
/// Owns the source for its lifetime; directories decode lazily on first
/// access and stay cached by offset until the session is dropped. The
/// decoder sits behind a `RefCell`, so a session is not `Sync`; sharing one
/// across threads needs an external lock around the whole session.
#[derive(Debug)]
pub struct Tiff<R = BufReader<File>> {
    decoder: RefCell<TiffRaw<R>>,
    sidecar: Option<Arc<Ifd>>,
}

impl Tiff<BufReader<File>> {
    /// Open `path` and validate its header
    ///
    /// When a sidecar record exists next to the image it is loaded and the
    /// root directory is served from it (see [`Options::use_sidecar`]).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, Options::default())
    }

    pub fn open_with(path: impl AsRef<Path>, options: Options) -> Result<Self> {
        let path = path.as_ref();
        let use_sidecar = options.use_sidecar;

        let file = BufReader::new(File::open(path)?);
        let mut tiff = Self::from_reader(file, options).map_err(|err| err.for_path(path))?;

        if use_sidecar {
            let record = sidecar_path(path);
            if record.is_file() {
                match Self::load_sidecar(&record) {
                    Ok(ifd) => {
                        tracing::debug!("serving root directory from {}", record.display());
                        tiff.sidecar = Some(Arc::new(ifd));
                    }
                    Err(err) => {
                        tracing::info!("ignoring unreadable sidecar {}: {err}", record.display());
                    }
                }
            }
        }

        Ok(tiff)
    }

    /// Load a previously written sidecar record without touching the image
    pub fn load_sidecar(path: &Path) -> Result<Ifd> {
        let file = BufReader::new(File::open(path)?);
        let record: BTreeMap<String, Value> = serde_json::from_reader(file)?;
        Ok(Ifd::from_record(record))
    }
}

impl Tiff<Cursor<Vec<u8>>> {
    /// Decode from an in-memory buffer
    pub fn from_vec(data: Vec<u8>) -> Result<Self> {
        Self::from_reader(Cursor::new(data), Options::default())
    }

    pub fn from_vec_with(data: Vec<u8>, options: Options) -> Result<Self> {
        Self::from_reader(Cursor::new(data), options)
    }
}

impl<R: Read + Seek> Tiff<R> {
    /// Validate the header of an arbitrary seekable source
    pub fn from_reader(reader: R, options: Options) -> Result<Self> {
        let mut decoder = TiffRaw::new(reader, options);
        decoder.decode_header()?;

        Ok(Self {
            decoder: RefCell::new(decoder),
            sidecar: None,
        })
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.decoder.borrow().byte_order()
    }

    /// Absolute offset of the first IFD, from the header
    pub fn first_ifd_offset(&self) -> u32 {
        self.decoder.borrow().first_ifd_offset
    }

    /// The first directory; served from the sidecar record when one was
    /// loaded at open
    pub fn root_directory(&self) -> Result<Arc<Ifd>> {
        if let Some(sidecar) = &self.sidecar {
            return Ok(Arc::clone(sidecar));
        }

        let offset = self.first_ifd_offset();
        self.directory_at(offset)
    }

    /// Decode the directory at an absolute byte offset, cached per session
    pub fn directory_at(&self, offset: u32) -> Result<Arc<Ifd>> {
        self.decoder.borrow_mut().decode_ifd(offset)
    }

    fn pointer_directory(&self, parent: &Ifd, tag: Tag) -> Result<Option<Arc<Ifd>>> {
        let Some(name) = tag.name() else {
            return Ok(None);
        };
        let Some(offset) = parent.uint(name) else {
            return Ok(None);
        };

        self.directory_at(offset).map(Some)
    }

    /// The EXIF directory pointed to by the parent's `Exif_IFD` tag
    pub fn exif_directory(&self, parent: &Ifd) -> Result<Option<Arc<Ifd>>> {
        self.pointer_directory(parent, Tag::EXIF_IFD_POINTER)
    }

    /// The GPS directory pointed to by the parent's `GPSInfo` tag
    pub fn gps_directory(&self, parent: &Ifd) -> Result<Option<Arc<Ifd>>> {
        self.pointer_directory(parent, Tag::GPS_INFO_IFD_POINTER)
    }

    pub fn interoperability_directory(&self, parent: &Ifd) -> Result<Option<Arc<Ifd>>> {
        self.pointer_directory(parent, Tag::INTEROPERABILITY_IFD_POINTER)
    }

    /// Decode every directory listed by the parent's `SubIFDs` tag
    pub fn sub_ifds(&self, parent: &Ifd) -> Result<Vec<Arc<Ifd>>> {
        let Some(offsets) = parent.get(named(Tag::SUB_IFDS)).and_then(Value::uint_items) else {
            return Ok(Vec::new());
        };

        offsets
            .into_iter()
            .map(|offset| self.directory_at(offset))
            .collect()
    }

    /// Capture timestamp, split into the components of the Exif
    /// `YYYY:MM:DD HH:MM:SS` form
    ///
    /// Looked up in the root directory first (where NEF keeps it), then in
    /// the EXIF directory.
    pub fn capture_datetime(&self) -> Result<Option<CaptureDateTime>> {
        let root = self.root_directory()?;
        if let Some(text) = root.text("DateTimeOriginal") {
            return Ok(CaptureDateTime::parse(text));
        }

        if let Some(exif) = self.exif_directory(&root)? {
            if let Some(text) = exif.text("DateTimeOriginal") {
                return Ok(CaptureDateTime::parse(text));
            }
        }

        Ok(None)
    }

    /// Camera model from the root directory
    pub fn device_model(&self) -> Result<Option<String>> {
        Ok(self.root_directory()?.text("Model").map(str::to_owned))
    }

    /// Serialize the root directory's record to the sidecar path for
    /// `image_path`, creating the `JSON` directory as needed
    pub fn write_sidecar(&self, image_path: &Path) -> Result<PathBuf> {
        let record = self.root_directory()?.export_record();

        let path = sidecar_path(image_path);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(file, &record)?;

        Ok(path)
    }

    /// Strip payload bytes addressed by `StripOffsets`/`StripByteCounts`,
    /// concatenated in strip order and returned as stored (no
    /// decompression)
    pub fn strip_data(&self, ifd: &Ifd) -> Result<Option<Vec<u8>>> {
        let offsets = ifd.get(named(Tag::STRIP_OFFSETS)).and_then(Value::uint_items);
        let counts = ifd.get(named(Tag::STRIP_BYTE_COUNTS)).and_then(Value::uint_items);
        let (Some(offsets), Some(counts)) = (offsets, counts) else {
            return Ok(None);
        };
        if offsets.len() != counts.len() {
            tracing::info!(
                "{} strip offsets but {} byte counts, skipping payload",
                offsets.len(),
                counts.len()
            );
            return Ok(None);
        }

        let mut decoder = self.decoder.borrow_mut();
        let mut data = Vec::new();
        for (offset, count) in offsets.into_iter().zip(counts) {
            decoder.raw.seek_start(offset)?;
            data.extend(decoder.raw.read_bytes(count.usize()?)?);
        }

        Ok(Some(data))
    }

    /// Embedded JPEG bytes addressed by `JPEGInterchangeFormat`, when the
    /// directory carries a thumbnail
    pub fn jpeg_thumbnail(&self, ifd: &Ifd) -> Result<Option<Vec<u8>>> {
        let offset = ifd.uint(named(Tag::JPEG_INTERCHANGE_FORMAT));
        let len = ifd.uint(named(Tag::JPEG_INTERCHANGE_FORMAT_LENGTH));
        let (Some(offset), Some(len)) = (offset, len) else {
            return Ok(None);
        };

        let mut decoder = self.decoder.borrow_mut();
        decoder.raw.seek_start(offset)?;
        Ok(Some(decoder.raw.read_bytes(len.usize()?)?))
    }

    /// Render every directory decoded so far
    pub fn debug_dump(&self) -> String {
        self.decoder.borrow().debug_dump()
    }
}

fn named(tag: Tag) -> &'static str {
    tag.name().unwrap_or_default()
}

/// Sidecar record path for an image: `<dir>/JSON/<stem>.JSON`
pub fn sidecar_path(image_path: impl AsRef<Path>) -> PathBuf {
    let image_path = image_path.as_ref();
    let mut name = image_path.file_stem().unwrap_or_default().to_os_string();
    name.push(".JSON");

    image_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("JSON")
        .join(name)
}

/// Components of an Exif `YYYY:MM:DD HH:MM:SS` timestamp, kept as the
/// strings found in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureDateTime {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub second: String,
}

impl CaptureDateTime {
    pub fn parse(text: &str) -> Option<Self> {
        let (date, time) = text.trim().split_once(' ')?;

        let mut date = date.splitn(3, ':');
        let (year, month, day) = (date.next()?, date.next()?, date.next()?);

        let mut time = time.splitn(3, ':');
        let (hour, minute, second) = (time.next()?, time.next()?, time.next()?);

        Some(Self {
            year: year.to_owned(),
            month: month.to_owned(),
            day: day.to_owned(),
            hour: hour.to_owned(),
            minute: minute.to_owned(),
            second: second.to_owned(),
        })
    }
}
