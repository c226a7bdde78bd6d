use rand_core::{OsRng, RngCore};

/// The secure random source could not produce a value
#[derive(Debug, thiserror::Error)]
#[error("secure random source unavailable: {reason}")]
pub struct RandomSourceError {
    reason: String,
}

impl RandomSourceError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl From<rand_core::Error> for RandomSourceError {
    fn from(e: rand_core::Error) -> Self {
        Self::new(e.to_string())
    }
}

/// Source of unpredictable 32-bit words.
///
/// Implementations must be safe to share across concurrent requests without
/// locking. Failures are reported, never papered over with a weaker generator.
pub trait RandomSource: Send + Sync {
    fn next_u32(&self) -> Result<u32, RandomSourceError>;

    /// Uniform index in `0..bound` using rejection sampling
    fn next_index(&self, bound: usize) -> Result<usize, RandomSourceError> {
        if bound == 0 {
            return Err(RandomSourceError::new("empty range"));
        }
        let bound = u32::try_from(bound)
            .map_err(|_| RandomSourceError::new("range exceeds 32 bits"))?;

        // Largest multiple of `bound` that fits; values past it would skew the modulo.
        let zone = u32::MAX - (u32::MAX % bound) - 1;
        loop {
            let value = self.next_u32()?;
            if value <= zone {
                return Ok((value % bound) as usize);
            }
        }
    }
}

/// Operating system CSPRNG (getrandom)
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomSource;

impl RandomSource for OsRandomSource {
    fn next_u32(&self) -> Result<u32, RandomSourceError> {
        let mut buf = [0u8; 4];
        OsRng.try_fill_bytes(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }
}
