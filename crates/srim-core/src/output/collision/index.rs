use std::io::{self, Read, Seek, SeekFrom};

/// Absolute offsets of every occurrence of `needle`, scanning `buffer_size` bytes at a time.
///
/// Consecutive buffers overlap by `needle.len() - 1` bytes so matches that
/// straddle a buffer boundary are found exactly once. Memory use is bounded by
/// the buffer, not the stream length.
pub fn find_all_buffered<R: Read + Seek>(
    reader: &mut R,
    needle: &[u8],
    buffer_size: usize,
) -> io::Result<Vec<u64>> {
    if needle.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "search needle must not be empty",
        ));
    }
    let buffer_size = buffer_size.max(needle.len());
    let overlap = needle.len() - 1;

    let mut offsets = Vec::new();
    let mut position = reader.seek(SeekFrom::Start(0))?;
    let mut buffer = Vec::with_capacity(buffer_size);
    loop {
        buffer.clear();
        reader
            .by_ref()
            .take(buffer_size as u64)
            .read_to_end(&mut buffer)?;
        if buffer.len() < needle.len() {
            break;
        }

        offsets.extend(
            buffer
                .windows(needle.len())
                .enumerate()
                .filter(|(_, window)| *window == needle)
                .map(|(offset, _)| position + offset as u64),
        );

        if buffer.len() < buffer_size {
            break;
        }
        position += (buffer.len() - overlap) as u64;
        reader.seek(SeekFrom::Start(position))?;
    }
    Ok(offsets)
}

#[cfg(test)]
mod tests {
    use super::find_all_buffered;
    use std::io::Cursor;

    fn naive(haystack: &[u8], needle: &[u8]) -> Vec<u64> {
        haystack
            .windows(needle.len())
            .enumerate()
            .filter(|(_, window)| *window == needle)
            .map(|(offset, _)| offset as u64)
            .collect()
    }

    #[test]
    fn matches_straddling_buffers_are_found_once() {
        let haystack = b"xxABCxxxxABCABCxABxC ABC".repeat(7);
        let expected = naive(&haystack, b"ABC");
        for buffer_size in [3, 4, 5, 7, 16, 4096] {
            let found = find_all_buffered(&mut Cursor::new(&haystack), b"ABC", buffer_size)
                .expect("scan");
            assert_eq!(found, expected, "buffer size {buffer_size}");
        }
    }

    #[test]
    fn short_and_empty_inputs() {
        assert!(
            find_all_buffered(&mut Cursor::new(b"AB"), b"ABC", 4096)
                .expect("scan")
                .is_empty()
        );
        assert!(find_all_buffered(&mut Cursor::new(b"ABC"), b"", 4096).is_err());
        assert_eq!(
            find_all_buffered(&mut Cursor::new(b"ABC"), b"ABC", 1).expect("scan"),
            vec![0]
        );
    }
}
