use std::io;
use std::io::SeekFrom;

/// A wrapper around a seekable reader that reads the big-endian words a TFM
/// file is made of.
///
/// Running out of input in the middle of a read is not an error here: the
/// bytes that couldn't be read are treated as zeros and counted in
/// `missing_bytes()`, so the caller can decide whether the shortfall matters.
pub struct TeXFileReader<T: io::Read + io::Seek> {
    reader: T,
    missing_bytes: u64,
}

impl<T: io::Read + io::Seek> TeXFileReader<T> {
    pub fn new(reader: T) -> TeXFileReader<T> {
        TeXFileReader {
            reader,
            missing_bytes: 0,
        }
    }

    /// The total number of bytes that were requested but couldn't be read
    /// because the stream ended.
    pub fn missing_bytes(&self) -> u64 {
        self.missing_bytes
    }

    // Reads as many bytes as are available into buf, stopping early only at
    // the end of the stream.
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(ref err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
        Ok(filled)
    }

    /// Reads an unsigned integer made of `num_bytes` bytes (at most 4), most
    /// significant byte first. Bytes past the end of the stream read as 0.
    pub fn read_unsigned(&mut self, num_bytes: usize) -> io::Result<u32> {
        debug_assert!(
            num_bytes <= 4,
            "Can't read {} bytes into a u32",
            num_bytes
        );

        let mut buf = [0; 4];
        let read = self.fill(&mut buf[..num_bytes])?;
        self.missing_bytes += (num_bytes - read) as u64;

        Ok(buf[..num_bytes]
            .iter()
            .fold(0, |acc, &byte| (acc << 8) | (byte as u32)))
    }

    pub fn read_32bit_int(&mut self) -> io::Result<u32> {
        self.read_unsigned(4)
    }

    pub fn read_16bit_int(&mut self) -> io::Result<u16> {
        Ok(self.read_unsigned(2)? as u16)
    }

    /// Replaces the contents of `words` with the next `count` 4-byte words.
    pub fn read_words(
        &mut self,
        words: &mut Vec<u32>,
        count: usize,
    ) -> io::Result<()> {
        words.clear();
        words.reserve(count);
        for _ in 0..count {
            words.push(self.read_32bit_int()?);
        }
        Ok(())
    }

    /// Moves to an absolute byte offset from the start of the stream.
    pub fn seek_to(&mut self, offset: u64) -> io::Result<()> {
        self.reader.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    /// Returns the total length of the stream, leaving the position where it
    /// was.
    pub fn stream_len(&mut self) -> io::Result<u64> {
        let position = self.reader.seek(SeekFrom::Current(0))?;
        let len = self.reader.seek(SeekFrom::End(0))?;
        self.reader.seek(SeekFrom::Start(position))?;
        Ok(len)
    }
}
