use relay_dns_domain::RecordType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("unexpected end of data at offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("label too long: {length} bytes exceeds maximum of 63")]
    LabelTooLong { length: usize },

    #[error("empty label in name '{name}'")]
    EmptyLabel { name: String },

    #[error("label '{label}' is not ASCII")]
    InvalidLabel { label: String },

    #[error("name too long: {length} bytes exceeds maximum of 255")]
    NameTooLong { length: usize },

    #[error("compression pointer at offset {offset} targets {target}, which is not behind the name")]
    ForwardPointer { offset: usize, target: usize },

    #[error("more than {max} compression pointers in one name")]
    TooManyPointers { max: usize },

    #[error("unsupported label type 0x{0:02x}")]
    UnsupportedLabelType(u8),

    #[error("{record_type} rdata must be {expected} bytes, got {actual}")]
    BadRdataLength {
        record_type: RecordType,
        expected: usize,
        actual: usize,
    },

    #[error("rdata length {declared} does not match the {consumed} bytes decoded")]
    RdataLengthMismatch { declared: usize, consumed: usize },

    #[error("rdata of {length} bytes does not fit a 16-bit length")]
    RdataTooLong { length: usize },

    #[error("section of {count} entries does not fit a 16-bit count")]
    TooManyEntries { count: usize },
}

