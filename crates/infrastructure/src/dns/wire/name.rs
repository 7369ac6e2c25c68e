use super::{WireError, WireReader};
use bytes::BufMut;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;
/// Upper bound on pointers followed while decoding a single name.
pub const MAX_POINTER_HOPS: usize = 64;

const POINTER_MASK: u8 = 0xC0;

/// Writes `name` as length-prefixed labels closed by a zero byte.
///
/// `""` and `"."` are the root name. A single trailing dot is ignored.
/// Nothing is written when the name is rejected.
pub fn encode_name<B: BufMut>(name: &str, buf: &mut B) -> Result<(), WireError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        buf.put_u8(0);
        return Ok(());
    }

    let mut wire_len = 1;
    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(WireError::EmptyLabel {
                name: name.to_string(),
            });
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(WireError::LabelTooLong {
                length: label.len(),
            });
        }
        if !label.is_ascii() {
            return Err(WireError::InvalidLabel {
                label: label.to_string(),
            });
        }
        wire_len += 1 + label.len();
    }
    if wire_len > MAX_NAME_LEN {
        return Err(WireError::NameTooLong { length: wire_len });
    }

    for label in trimmed.split('.') {
        buf.put_u8(label.len() as u8);
        buf.put_slice(label.as_bytes());
    }
    buf.put_u8(0);
    Ok(())
}

/// Reads a possibly compressed name starting at the reader's position.
///
/// On return the reader sits right after the name as it appears at the
/// starting position, i.e. two bytes past the first pointer if one was
/// followed. Each pointer must target an offset lower than the start of the
/// label run it interrupts, so every hop moves strictly backwards.
pub fn decode_name(reader: &mut WireReader<'_>) -> Result<String, WireError> {
    let data = reader.data();
    let mut pos = reader.position();
    let mut floor = pos;
    let mut resume_at: Option<usize> = None;
    let mut hops = 0;
    let mut wire_len = 1;
    let mut name = String::new();

    loop {
        let len = *data.get(pos).ok_or(WireError::UnexpectedEof { offset: pos })?;

        match len & POINTER_MASK {
            POINTER_MASK => {
                let low = *data
                    .get(pos + 1)
                    .ok_or(WireError::UnexpectedEof { offset: pos + 1 })?;
                let target = (usize::from(len & !POINTER_MASK) << 8) | usize::from(low);
                if target >= floor {
                    return Err(WireError::ForwardPointer {
                        offset: pos,
                        target,
                    });
                }
                hops += 1;
                if hops > MAX_POINTER_HOPS {
                    return Err(WireError::TooManyPointers {
                        max: MAX_POINTER_HOPS,
                    });
                }
                resume_at.get_or_insert(pos + 2);
                floor = target;
                pos = target;
            }
            0x00 if len == 0 => {
                pos += 1;
                break;
            }
            0x00 => {
                let len = usize::from(len);
                let start = pos + 1;
                let label = data
                    .get(start..start + len)
                    .ok_or(WireError::UnexpectedEof { offset: start + len })?;

                wire_len += 1 + len;
                if wire_len > MAX_NAME_LEN {
                    return Err(WireError::NameTooLong { length: wire_len });
                }
                // A dot inside a label would not survive the text form.
                if !label.is_ascii() || label.contains(&b'.') {
                    return Err(WireError::InvalidLabel {
                        label: String::from_utf8_lossy(label).into_owned(),
                    });
                }

                if !name.is_empty() {
                    name.push('.');
                }
                name.extend(label.iter().map(|&b| char::from(b)));
                pos = start + len;
            }
            _ => return Err(WireError::UnsupportedLabelType(len)),
        }
    }

    reader.set_position(resume_at.unwrap_or(pos));
    Ok(name)
}
