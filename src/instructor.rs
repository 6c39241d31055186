use crate::errors::QueueError;
use std::fmt;

/// An instructor entry: first and last name plus the number of courses taught.
///
/// Instructors are validated once at construction and never change afterwards.
///
/// # Examples
///
/// ```
/// # use instructor_queue::Instructor;
/// let ada = Instructor::new("Ada", "Lovelace", 4).unwrap();
/// assert_eq!(ada.last_name(), "Lovelace");
/// assert_eq!(ada.to_string(), "Ada Lovelace, Courses: 4");
///
/// assert!(Instructor::new("Ada", "   ", 4).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    first_name: String,
    last_name: String,
    num_courses: u32,
}

impl Instructor {
    /// Creates a new instructor.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] if either name is empty or only whitespace.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        num_courses: u32,
    ) -> Result<Self, QueueError> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        if first_name.trim().is_empty() {
            return Err(QueueError::InvalidArgument(
                "First name cannot be empty".to_string(),
            ));
        }
        if last_name.trim().is_empty() {
            return Err(QueueError::InvalidArgument(
                "Last name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            first_name,
            last_name,
            num_courses,
        })
    }

    /// Creates a new instructor from a signed course count.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] if either name is blank, if `num_courses`
    /// is negative, or if it does not fit in a `u32`.
    ///
    /// ```
    /// # use instructor_queue::Instructor;
    /// assert!(Instructor::try_new_signed("Bob", "Adams", -1).is_err());
    /// assert_eq!(Instructor::try_new_signed("Bob", "Adams", 2).unwrap().num_courses(), 2);
    /// ```
    pub fn try_new_signed(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        num_courses: i64,
    ) -> Result<Self, QueueError> {
        if num_courses < 0 {
            return Err(QueueError::InvalidArgument(
                "Number of courses cannot be negative".to_string(),
            ));
        }
        let num_courses = u32::try_from(num_courses).map_err(|_| {
            QueueError::InvalidArgument(format!(
                "Number of courses cannot exceed {}",
                u32::MAX
            ))
        })?;

        Self::new(first_name, last_name, num_courses)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn num_courses(&self) -> u32 {
        self.num_courses
    }
}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, Courses: {}",
            self.first_name, self.last_name, self.num_courses
        )
    }
}
