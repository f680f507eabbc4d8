//! Error taxonomy for the pure schema/codec/boundary math shared by the store crate.
//!
//! Kernel-style numeric codes, grouped into ranges by category, so a caller can
//! classify a failure without matching on every variant.

/// Errors raised while validating or planning against a schema, independent of
/// any particular storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CoreError {
    // argument-invalid - 1-15
    /// Rank of supplied arrays does not match the declared rank.
    RankMismatch = 1,
    /// A dimension's declared extent is zero.
    DimensionExtentZero = 2,
    /// A dimension's label vocabulary length does not equal its extent.
    LabelCountMismatch = 3,
    /// Caller-supplied chunk sizes array length does not equal the rank.
    ChunkSizeCountMismatch = 4,
    /// A coordinate component lies outside `[0, size_d)`.
    CoordinateOutOfRange = 5,
    /// A dimension marked fixed has no accompanying constraint.
    FixedDimensionUnconstrained = 6,
    /// A constraint value lies outside `[0, size_d)`.
    ConstraintOutOfRange = 7,
    /// A batch's coordinate count does not match its value count.
    BatchLengthMismatch = 8,

    // format-corrupt - 16-31
    /// An expected dataset or attribute is missing.
    MissingDataset = 16,
    /// An expected scalar attribute is missing.
    MissingAttribute = 17,
    /// A dataset's shape does not match what the schema requires.
    UnexpectedShape = 18,
    /// A dataset's rank does not match what the schema requires.
    UnexpectedRank = 19,

    // resource-exhausted - 48-63
    /// The planned hyperslab volume overflows or exceeds what can be allocated.
    HyperslabTooLarge = 48,
}

impl CoreError {
    /// The error category this code belongs to.
    pub const fn category(&self) -> ErrorCategory {
        match *self as u8 {
            1..=15 => ErrorCategory::ArgumentInvalid,
            16..=31 => ErrorCategory::FormatCorrupt,
            48..=63 => ErrorCategory::ResourceExhausted,
            _ => ErrorCategory::Unknown,
        }
    }

    /// The numeric error code.
    pub const fn code(&self) -> u8 {
        *self as u8
    }
}

/// Error categories from the external error handling design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller-supplied argument violates a schema or range invariant.
    ArgumentInvalid,
    /// On-disk structure does not match the expected schema.
    FormatCorrupt,
    /// The underlying storage backend reported a failure.
    StorageBackend,
    /// An operation could not be completed within resource limits.
    ResourceExhausted,
    /// Unrecognized code; reserved for forward compatibility.
    Unknown,
}

impl core::fmt::Display for CoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            CoreError::RankMismatch => "rank of supplied arrays does not match declared rank",
            CoreError::DimensionExtentZero => "dimension extent must be at least 1",
            CoreError::LabelCountMismatch => "label vocabulary length does not match dimension extent",
            CoreError::ChunkSizeCountMismatch => "chunk size array length does not match rank",
            CoreError::CoordinateOutOfRange => "coordinate component out of range for its dimension",
            CoreError::FixedDimensionUnconstrained => "dimension marked fixed has no constraint value",
            CoreError::ConstraintOutOfRange => "constraint value out of range for its dimension",
            CoreError::BatchLengthMismatch => "batch coordinate count does not match its value count",
            CoreError::MissingDataset => "expected dataset is missing",
            CoreError::MissingAttribute => "expected attribute is missing",
            CoreError::UnexpectedShape => "dataset shape does not match schema",
            CoreError::UnexpectedRank => "dataset rank does not match schema",
            CoreError::HyperslabTooLarge => "planned hyperslab volume exceeds allocation limits",
        };
        write!(f, "{msg}")
    }
}

/// Result type for pure core operations.
pub type Result<T> = core::result::Result<T, CoreError>;
