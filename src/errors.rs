//! Validation errors

/// All the validation issues we might encounter while building a mesh.
///
/// Per the reference behavior, numeric inputs are *not* validated: NaN,
/// zero or negative dimensions flow through as degenerate geometry. The
/// only signaled failure is structural.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A face refers to a vertex index outside the point array.
    #[error("face {face} references vertex {index}, but only {len} points were given")]
    IndexOutOfRange {
        /// Position of the offending face in the input face list
        face: usize,
        /// The out-of-range vertex index
        index: usize,
        /// Number of points supplied
        len: usize,
    },
}
