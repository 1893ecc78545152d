use std::io::{Read, Seek};

use super::TiffRaw;

impl<R: Read + Seek> TiffRaw<R> {
    /// Render every directory decoded so far
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();

        for (offset, ifd) in self.cached_ifds() {
            out.push_str(&format!(
                "\nIFD at byte {offset} - {} entries declared, {} decoded\n",
                ifd.declared_entries(),
                ifd.len()
            ));
            out.push_str("------------------------------\n");
            for (name, value) in ifd.iter() {
                out.push_str(&format!("{name}: {value:?}\n"));
            }
            if let Some(next) = ifd.next_ifd_offset() {
                out.push_str(&format!("(next IFD at byte {next})\n"));
            }
        }

        out
    }
}
