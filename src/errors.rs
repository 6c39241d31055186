/// Error type representing the ways an operation on an instructor queue can fail.
///
/// Every variant is raised before any state is changed, so a failed call leaves the
/// queue exactly as it was.
#[derive(Debug)]
pub enum QueueError {
    /// Malformed input to a constructor or operation.
    ///
    /// Contains a description of the rejected argument, such as an empty name,
    /// a negative course count, a zero capacity or an out-of-range sort bound.
    InvalidArgument(String),

    /// An instructor was enqueued while the queue already held `capacity` entries.
    CapacityExceeded { capacity: usize },

    /// A dequeue was attempted on an empty queue.
    EmptyCollection,

    /// A swap referenced a position outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },

    /// Represents underlying I/O errors from the standard library.
    ///
    /// Only produced by the interactive front end while reading input or writing prompts.
    IoError(std::io::Error),
}

impl From<std::io::Error> for QueueError {
    /// Converts a [`std::io::Error`] into a [`QueueError`].
    ///
    /// # Examples
    /// ```
    /// use std::io::{self, Read};
    /// use instructor_queue::errors::QueueError;
    ///
    /// fn read_all(mut input: impl Read) -> Result<String, QueueError> {
    ///     let mut buf = String::new();
    ///     input.read_to_string(&mut buf)?; // Will convert io::Error to QueueError
    ///     Ok(buf)
    /// }
    /// assert_eq!(read_all(io::empty()).unwrap(), "");
    /// ```
    fn from(err: std::io::Error) -> Self {
        QueueError::IoError(err)
    }
}

impl std::fmt::Display for QueueError {
    /// # Examples
    /// ```
    /// use instructor_queue::errors::QueueError;
    /// let err = QueueError::CapacityExceeded { capacity: 3 };
    /// assert_eq!(format!("{}", err), "Queue is full! Cannot add more than 3 instructors.");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueError::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
            QueueError::CapacityExceeded { capacity } => write!(
                f,
                "Queue is full! Cannot add more than {} instructors.",
                capacity
            ),
            QueueError::EmptyCollection => write!(f, "Queue is empty! Cannot remove instructors."),
            QueueError::IndexOutOfRange { index, len } => write!(
                f,
                "Invalid index for swapping: {} (queue holds {} instructors)",
                index, len
            ),
            QueueError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QueueError {
    /// Returns the lower-level source of this error, if any.
    ///
    /// Only [`QueueError::IoError`] wraps another error type.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueueError::IoError(e) => Some(e),
            _ => None,
        }
    }
}
