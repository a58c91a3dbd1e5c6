//! Translating user-typed text: candidate passwords back to indices, and
//! decimal strings into start indices.

use tracing::debug;

use crate::codec::Codec;
use crate::error::{FormatError, InputError};
use crate::index::GlobalIndex;

/// Find the global index of `candidate`, ignoring surrounding whitespace.
pub fn find_index(codec: &Codec, candidate: &str) -> Result<GlobalIndex, FormatError> {
    let result = codec.decode(candidate.trim());
    if let Err(ref e) = result {
        debug!(error = %e, "lookup rejected");
    }
    result
}

/// Parse decimal text (surrounding whitespace allowed) into a positive index.
pub fn parse_positive_integer(text: &str) -> Result<GlobalIndex, InputError> {
    text.trim().parse()
}
