use std::error::Error;
use std::io::{BufRead, Write};

pub mod args;
pub mod config;
pub mod errors;
pub mod instructor;
pub mod prompt;
pub mod queue;


pub use config::Config;
pub use errors::QueueError;
pub use instructor::Instructor;
pub use queue::{InstructorQueue, SortKey};

/// Builds a sorted copy of `source` without touching it.
///
/// A new queue sized to hold exactly the instructors of `source` is filled in the
/// source's current order and then sorted descending by `key`.
///
/// ```
/// # use instructor_queue::{sorted_copy, Instructor, InstructorQueue, SortKey};
/// let mut queue = InstructorQueue::new(5).unwrap();
/// queue.enqueue(Instructor::new("John", "Doe", 3).unwrap()).unwrap();
/// queue.enqueue(Instructor::new("Jane", "Smith", 5).unwrap()).unwrap();
///
/// let sorted = sorted_copy(&queue, SortKey::Courses).unwrap();
/// assert_eq!(sorted.get(0).unwrap().last_name(), "Smith");
/// assert_eq!(queue.get(0).unwrap().last_name(), "Doe");
/// ```
pub fn sorted_copy(source: &InstructorQueue, key: SortKey) -> Result<InstructorQueue, QueueError> {
    // A queue cannot have zero capacity, so an empty source still gets one slot.
    let mut copy = InstructorQueue::new(source.len().max(1))?;
    for instructor in source {
        copy.enqueue(instructor.clone())?;
    }

    copy.sort_all(key);
    Ok(copy)
}

/// Collects instructors from `reader`, then prints the queue as entered followed by one
/// sorted view per configured [`SortKey`].
///
/// Prompts and the report are written to `writer`.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    reader: &mut R,
    writer: &mut W,
) -> Result<(), Box<dyn Error>> {
    writeln!(
        writer,
        "Please enter information for {} instructors.",
        config.num_instructors
    )?;

    log::debug!(
        "Collecting {} instructors into a queue of capacity {}",
        config.num_instructors,
        config.capacity
    );
    let instructors = prompt::read_instructors(reader, writer, config.num_instructors)?;

    let mut queue = InstructorQueue::new(config.capacity)?;
    for instructor in instructors {
        queue.enqueue(instructor)?;
    }
    log::info!("Collected {} instructors", queue.len());

    writeln!(writer, "\nOriginal Queue Contents:")?;
    writeln!(writer, "{}", queue)?;

    for &key in &config.sort_keys {
        let sorted = sorted_copy(&queue, key)?;
        writeln!(writer, "\nQueue Sorted by {} (Descending):", key.label())?;
        writeln!(writer, "{}", sorted)?;
    }

    Ok(())
}
