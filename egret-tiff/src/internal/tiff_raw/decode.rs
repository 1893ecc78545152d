use super::*;

impl<R: Read + Seek> TiffRaw<R> {
    /// Validate the header and locate the first IFD
    ///
    /// No directory content is read; directories decode lazily through
    /// [`TiffRaw::decode_ifd`].
    pub fn decode_header(&mut self) -> Result<()> {
        self.raw.seek_start(0)?;

        self.read_byte_order()?;
        self.read_magic_42()?;

        self.first_ifd_offset = self.raw.read_u32()?;

        Ok(())
    }

    fn read_byte_order(&mut self) -> Result<()> {
        let byte_order = match &self.raw.read_exact()? {
            b"II" => ByteOrder::LittleEndian,
            b"MM" => ByteOrder::BigEndian,
            marker => return Err(Error::UnknownByteOrder(*marker)),
        };

        self.raw.byte_order = byte_order;

        Ok(())
    }

    /// The magic-number check is advisory in some TIFF-derived raw formats;
    /// the u16 is consumed either way so the header layout stays fixed.
    fn read_magic_42(&mut self) -> Result<()> {
        let magic = self.raw.read_u16()?;
        if magic != 42 && self.options.enforce_magic {
            return Err(Error::WrongMagicNumber(magic));
        }
        Ok(())
    }

    /// Decode the directory at `offset`, serving repeats from the cache
    ///
    /// Failures reading the entry count are structural and propagate;
    /// failures inside a single entry drop that entry and continue.
    pub fn decode_ifd(&mut self, offset: u32) -> Result<Arc<Ifd>> {
        if let Some(ifd) = self.ifds.get(&offset) {
            tracing::trace!("serving IFD at {offset} from cache");
            return Ok(Arc::clone(ifd));
        }

        self.raw.seek_start(offset)?;
        let n_entries = self.raw.read_u16()?;
        tracing::debug!("reading IFD at {offset} with {n_entries} entries");

        let mut entries = BTreeMap::new();
        for index in 0..n_entries {
            let position = entry_position(offset, index)?;
            self.raw.seek_start(position)?;
            match self.decode_entry(offset, index, position) {
                Ok(Some((name, value))) => {
                    entries.insert(name.to_owned(), value);
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::info!("dropping entry {index} of IFD at {offset}: {err}");
                }
            }
        }

        self.raw.seek_start(entry_position(offset, n_entries)?)?;
        let next_ifd_offset = match self.raw.read_u32() {
            Ok(0) | Err(_) => None,
            Ok(next) => Some(next),
        };

        let ifd = Arc::new(Ifd::new(offset, n_entries, next_ifd_offset, entries));
        self.ifds.insert(offset, Arc::clone(&ifd));

        Ok(ifd)
    }

    /// Decode one entry into its well-known name and value
    ///
    /// `Ok(None)` drops the entry silently: padding (zero tag id) and tag
    /// ids absent from the name table.
    fn decode_entry(
        &mut self,
        ifd_offset: u32,
        index: u16,
        position: u32,
    ) -> Result<Option<(&'static str, Value)>> {
        let (tag, entry) = self.read_entry(position)?;

        // A zero tag id is a padding artifact, not a cue to scan forward.
        // The exemption covers one producer whose GPS directory starts with
        // GPSVersionID, which legitimately has tag id 0.
        if tag == Tag(0) && !self.zero_tag_exempt(ifd_offset, index) {
            tracing::info!("zero tag id at entry {index} of IFD at {ifd_offset}, dropping as padding");
            return Ok(None);
        }

        if let Type::Unknown(code) = entry.data_type {
            return Err(Error::UnknownTagType(code));
        }

        let value = self.decode_value(&entry)?;

        match tag.name() {
            Some(name) => Ok(Some((name, value))),
            None => {
                tracing::trace!("tag {:#06X} has no table entry, dropping", tag.0);
                Ok(None)
            }
        }
    }

    fn zero_tag_exempt(&self, ifd_offset: u32, index: u16) -> bool {
        index == 0 && self.options.zero_tag_offset == Some(ifd_offset)
    }

    /// Read the fixed 12-byte entry record at `position`
    pub fn read_entry(&mut self, position: u32) -> Result<(Tag, EntryRef)> {
        let tag = Tag(self.raw.read_u16()?);
        let data_type = Type::from(self.raw.read_u16()?);
        let count = self.raw.read_u32()?;
        let value_offset = ValueOffset::new(data_type, count, self.raw.read_u32()?)?;

        Ok((
            tag,
            EntryRef {
                position,
                data_type,
                count,
                value_offset,
            },
        ))
    }
}

/// Byte position of entry `index` in the directory at `offset`: the u16
/// entry count, then fixed 12-byte records.
fn entry_position(offset: u32, index: u16) -> Result<u32> {
    Ok(offset
        .safe_add(2)?
        .safe_add(u32::from(index).safe_mul(ENTRY_SIZE)?)?)
}
