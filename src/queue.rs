use crate::errors::QueueError;
use crate::instructor::Instructor;
use std::fmt;

/// The field an [`InstructorQueue`] can be sorted on.
///
/// Both keys sort in descending order: the instructor with the larger key comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    /// Ordinal (byte-wise) comparison of last names.
    LastName,
    /// Number of courses taught.
    Courses,
}

impl SortKey {
    /// Returns `true` when `a` belongs strictly before `b` in a descending sort on this key.
    ///
    /// ```
    /// # use instructor_queue::{Instructor, SortKey};
    /// let doe = Instructor::new("John", "Doe", 3).unwrap();
    /// let smith = Instructor::new("Jane", "Smith", 5).unwrap();
    /// assert!(SortKey::LastName.ranks_above(&smith, &doe));
    /// assert!(!SortKey::Courses.ranks_above(&doe, &doe));
    /// ```
    pub fn ranks_above(self, a: &Instructor, b: &Instructor) -> bool {
        match self {
            SortKey::LastName => a.last_name() > b.last_name(),
            SortKey::Courses => a.num_courses() > b.num_courses(),
        }
    }

    /// Human-readable name of the key, used in report headings.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::LastName => "Last Name",
            SortKey::Courses => "Number of Courses",
        }
    }
}

/// A fixed-capacity queue of instructors.
///
/// Instructors are appended at the back and removed from the front. Positions are
/// contiguous, so `get(0)` is always the front of the queue. The queue can be reordered
/// in place with a descending quicksort on either [`SortKey`].
///
/// # Examples
///
/// ```
/// # use instructor_queue::{Instructor, InstructorQueue, SortKey};
/// let mut queue = InstructorQueue::new(5).unwrap();
/// queue.enqueue(Instructor::new("John", "Doe", 3).unwrap()).unwrap();
/// queue.enqueue(Instructor::new("Jane", "Smith", 5).unwrap()).unwrap();
/// queue.enqueue(Instructor::new("Bob", "Adams", 2).unwrap()).unwrap();
///
/// queue.sort_by_courses_desc(0, queue.len() - 1).unwrap();
/// assert_eq!(queue.get(0).unwrap().last_name(), "Smith");
/// assert_eq!(queue.get(2).unwrap().last_name(), "Adams");
/// assert!(queue.get(3).is_none());
/// ```
#[derive(Debug)]
pub struct InstructorQueue {
    instructors: Vec<Instructor>,
    capacity: usize,
}

impl InstructorQueue {
    /// Creates an empty queue that can hold up to `capacity` instructors.
    ///
    /// Storage for every slot is reserved up front; the queue never grows past it.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::InvalidArgument(
                "Queue capacity must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            instructors: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Appends an instructor to the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::CapacityExceeded`] if the queue is full. The queue is left unchanged.
    pub fn enqueue(&mut self, instructor: Instructor) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        log::debug!(
            "Enqueueing {} at position {}",
            instructor,
            self.instructors.len()
        );
        self.instructors.push(instructor);
        Ok(())
    }

    /// Removes and returns the instructor at the front of the queue.
    ///
    /// Every remaining instructor moves one position towards the front, keeping its
    /// relative order.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyCollection`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<Instructor, QueueError> {
        if self.instructors.is_empty() {
            return Err(QueueError::EmptyCollection);
        }

        let instructor = self.instructors.remove(0);
        log::debug!("Dequeued {}, {} remaining", instructor, self.instructors.len());
        Ok(instructor)
    }

    /// Returns the instructor at `index`, or `None` if no instructor occupies that position.
    pub fn get(&self, index: usize) -> Option<&Instructor> {
        self.instructors.get(index)
    }

    /// Exchanges the instructors at positions `i` and `j`.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::IndexOutOfRange`] if either index is not below [`len`](Self::len).
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), QueueError> {
        let len = self.instructors.len();
        if let Some(&index) = [i, j].iter().find(|&&index| index >= len) {
            return Err(QueueError::IndexOutOfRange { index, len });
        }

        self.instructors.swap(i, j);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.instructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructors.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.instructors.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over the instructors from front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, Instructor> {
        self.instructors.iter()
    }

    /// Renders the queue as one numbered line per instructor, front first.
    ///
    /// ```
    /// # use instructor_queue::{Instructor, InstructorQueue};
    /// let mut queue = InstructorQueue::new(2).unwrap();
    /// assert_eq!(queue.display(), "Queue is empty!");
    ///
    /// queue.enqueue(Instructor::new("John", "Doe", 3).unwrap()).unwrap();
    /// queue.enqueue(Instructor::new("Jane", "Smith", 5).unwrap()).unwrap();
    /// assert_eq!(queue.display(), "1. John Doe, Courses: 3\n2. Jane Smith, Courses: 5");
    /// ```
    pub fn display(&self) -> String {
        self.to_string()
    }

    /// Sorts positions `low..=high` by last name, descending.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] if `high` is not below [`len`](Self::len).
    pub fn sort_by_last_name_desc(&mut self, low: usize, high: usize) -> Result<(), QueueError> {
        self.sort_range(SortKey::LastName, low, high)
    }

    /// Sorts positions `low..=high` by number of courses, descending.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] if `high` is not below [`len`](Self::len).
    pub fn sort_by_courses_desc(&mut self, low: usize, high: usize) -> Result<(), QueueError> {
        self.sort_range(SortKey::Courses, low, high)
    }

    /// Sorts positions `low..=high` in descending order of `key` using quicksort with
    /// the last element of each range as pivot.
    ///
    /// The sort is unstable: instructors with equal keys end up in whatever order the
    /// partitioning leaves them. A range with `low >= high` is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] if `high` is not below [`len`](Self::len).
    pub fn sort_range(&mut self, key: SortKey, low: usize, high: usize) -> Result<(), QueueError> {
        if high >= self.instructors.len() {
            return Err(QueueError::InvalidArgument(format!(
                "Invalid sorting range {}..={} for a queue of {} instructors",
                low,
                high,
                self.instructors.len()
            )));
        }

        log::debug!("Sorting positions {}..={} by {:?}", low, high, key);
        self.quick_sort(key, low, high);
        Ok(())
    }

    /// Sorts the whole queue in descending order of `key`. Does nothing on an empty queue.
    pub fn sort_all(&mut self, key: SortKey) {
        if let Some(high) = self.instructors.len().checked_sub(1) {
            log::debug!("Sorting all {} instructors by {:?}", self.instructors.len(), key);
            self.quick_sort(key, 0, high);
        }
    }

    // Recurses into the smaller partition and loops over the larger one to keep the
    // stack depth logarithmic. The partitions are disjoint, so the resulting order is
    // the same as recursing into both.
    fn quick_sort(&mut self, key: SortKey, mut low: usize, mut high: usize) {
        while low < high {
            let pivot = self.partition(key, low, high);

            if pivot - low < high - pivot {
                if pivot > low {
                    self.quick_sort(key, low, pivot - 1);
                }
                low = pivot + 1;
            } else {
                if pivot < high {
                    self.quick_sort(key, pivot + 1, high);
                }
                if pivot == 0 {
                    break;
                }
                high = pivot - 1;
            }
        }
    }

    /// Lomuto partition of `low..=high` around the instructor at `high`.
    ///
    /// Returns the final position of the pivot. Everything before it ranks strictly above
    /// the pivot; everything after it does not.
    fn partition(&mut self, key: SortKey, low: usize, high: usize) -> usize {
        let mut boundary = low;

        for j in low..high {
            if key.ranks_above(&self.instructors[j], &self.instructors[high]) {
                self.instructors.swap(boundary, j);
                boundary += 1;
            }
        }

        self.instructors.swap(boundary, high);
        boundary
    }
}

impl fmt::Display for InstructorQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instructors.is_empty() {
            return write!(f, "Queue is empty!");
        }

        for (i, instructor) in self.instructors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {}", i + 1, instructor)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a InstructorQueue {
    type Item = &'a Instructor;
    type IntoIter = std::slice::Iter<'a, Instructor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
