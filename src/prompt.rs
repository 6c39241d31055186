use crate::errors::QueueError;
use crate::instructor::Instructor;
use std::io::{self, BufRead, Write};

/// Interactively collects `count` instructors.
///
/// Each instructor is prompted for a first name, a last name and a number of courses.
/// Invalid input prints an error and restarts the same instructor from the first name.
///
/// # Errors
///
/// Returns [`QueueError::IoError`] if writing a prompt fails, or with
/// [`io::ErrorKind::UnexpectedEof`] if input ends before `count` instructors were entered.
///
/// ```
/// # use instructor_queue::prompt::read_instructors;
/// let mut input = "Ada\nLovelace\n4\n".as_bytes();
/// let mut output = Vec::new();
/// let instructors = read_instructors(&mut input, &mut output, 1).unwrap();
/// assert_eq!(instructors[0].to_string(), "Ada Lovelace, Courses: 4");
/// ```
pub fn read_instructors<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    count: usize,
) -> Result<Vec<Instructor>, QueueError> {
    let mut instructors = Vec::with_capacity(count);

    while instructors.len() < count {
        writeln!(writer, "\nInstructor #{}", instructors.len() + 1)?;

        match read_instructor(reader, writer)? {
            Ok(instructor) => instructors.push(instructor),
            Err(message) => {
                log::warn!("Rejected instructor #{}: {}", instructors.len() + 1, message);
                writeln!(writer, "Error: {}. Please try again.", message)?;
            }
        }
    }

    Ok(instructors)
}

// Outer error aborts the whole session, inner error is a message for the user.
fn read_instructor<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<Result<Instructor, String>, QueueError> {
    let first_name = prompt_line(reader, writer, "Enter first name: ")?;
    if first_name.trim().is_empty() {
        return Ok(Err("First name cannot be empty".to_string()));
    }

    let last_name = prompt_line(reader, writer, "Enter last name: ")?;
    if last_name.trim().is_empty() {
        return Ok(Err("Last name cannot be empty".to_string()));
    }

    let courses = prompt_line(reader, writer, "Enter number of courses teaching: ")?;
    let num_courses: i64 = match courses.trim().parse() {
        Ok(n) => n,
        Err(_) => return Ok(Err("Please enter a valid number for courses".to_string())),
    };
    if num_courses < 0 {
        return Ok(Err("Number of courses cannot be negative".to_string()));
    }

    let num_courses = match u32::try_from(num_courses) {
        Ok(n) => n,
        Err(_) => return Ok(Err("Please enter a valid number for courses".to_string())),
    };

    Ok(
        Instructor::new(first_name, last_name, num_courses).map_err(|e| match e {
            QueueError::InvalidArgument(message) => message,
            other => other.to_string(),
        }),
    )
}

fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<String, QueueError> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(QueueError::IoError(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before all instructors were entered",
        )));
    }

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str, count: usize) -> (Result<Vec<Instructor>, QueueError>, String) {
        let mut reader = input.as_bytes();
        let mut output = Vec::new();
        let result = read_instructors(&mut reader, &mut output, count);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_reads_requested_number_of_instructors() {
        let (result, output) = collect("John\nDoe\n3\nJane\nSmith\n5\n", 2);
        let instructors = result.unwrap();

        assert_eq!(instructors.len(), 2);
        assert_eq!(instructors[0], Instructor::new("John", "Doe", 3).unwrap());
        assert_eq!(instructors[1], Instructor::new("Jane", "Smith", 5).unwrap());
        assert!(output.contains("Instructor #1"));
        assert!(output.contains("Instructor #2"));
        assert!(output.contains("Enter number of courses teaching: "));
    }

    #[test]
    fn test_empty_first_name_retries_same_instructor() {
        let (result, output) = collect("   \nJohn\nDoe\n3\n", 1);

        assert_eq!(result.unwrap()[0].first_name(), "John");
        assert!(output.contains("Error: First name cannot be empty. Please try again."));
        assert_eq!(output.matches("Instructor #1").count(), 2);
        assert!(!output.contains("Instructor #2"));
    }

    #[test]
    fn test_empty_last_name_retries_from_first_name() {
        let (result, output) = collect("John\n\nJohn\nDoe\n3\n", 1);

        assert_eq!(result.unwrap()[0].last_name(), "Doe");
        assert!(output.contains("Error: Last name cannot be empty. Please try again."));
    }

    #[test]
    fn test_invalid_and_negative_course_counts_are_rejected() {
        let (result, output) = collect("A\nB\nthree\nA\nB\n-1\nA\nB\n 2 \n", 1);

        assert_eq!(result.unwrap()[0].num_courses(), 2);
        assert!(output.contains("Error: Please enter a valid number for courses. Please try again."));
        assert!(output.contains("Error: Number of courses cannot be negative. Please try again."));
    }

    #[test]
    fn test_course_count_beyond_u32_is_not_a_valid_number() {
        let (result, output) = collect("A\nB\n4294967296\nA\nB\n99999999999999999999\nA\nB\n7\n", 1);

        assert_eq!(result.unwrap()[0].num_courses(), 7);
        assert_eq!(
            output
                .matches("Error: Please enter a valid number for courses. Please try again.")
                .count(),
            2
        );
        assert!(!output.contains("Invalid argument"));
    }

    #[test]
    fn test_windows_line_endings_are_stripped() {
        let (result, _) = collect("John\r\nDoe\r\n3\r\n", 1);
        assert_eq!(result.unwrap()[0].to_string(), "John Doe, Courses: 3");
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let (result, _) = collect("John\nDoe\n", 1);

        match result {
            Err(QueueError::IoError(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected an unexpected EOF error, got {:?}", other),
        }
    }
}
