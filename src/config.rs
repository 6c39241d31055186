use crate::args::Args;
use crate::errors::QueueError;
use crate::queue::SortKey;
use log::LevelFilter;
use std::error::Error;

/// Configuration structure containing runtime settings.
///
/// # Fields
///
/// * `capacity` - Maximum number of instructors the input queue can hold
/// * `num_instructors` - Number of instructors to collect before printing the report
/// * `sort_keys` - Sorted views to print, in order
/// * `verbose` - Bool to determine if debug logging is enabled
///
#[derive(Clone, Debug)]
pub struct Config {
    pub capacity: usize,
    pub num_instructors: usize,
    pub sort_keys: Vec<SortKey>,
    pub verbose: bool,
}

impl Config {
    /// Builds a new Config instance from provided command line arguments.
    ///
    /// # Parameters
    ///
    /// * `args` - Reference to Args structure containing command line arguments
    ///
    /// # Details
    ///
    /// 1. Rejects a zero capacity
    /// 2. Rejects collecting zero instructors, or more than the queue can hold
    /// 3. Falls back to both sorted views (last name, then courses) when none was requested
    ///
    /// # Errors
    ///
    /// Returns an [`QueueError::InvalidArgument`] if any of the checks above fail.
    ///
    /// ```
    /// use clap::Parser;
    /// use instructor_queue::{args::Args, config::Config, SortKey};
    ///
    /// let args = Args::parse_from(["instructor-queue", "-n", "3"]);
    /// let config = Config::build(&args).unwrap();
    /// assert_eq!(config.capacity, 10);
    /// assert_eq!(config.sort_keys, vec![SortKey::LastName, SortKey::Courses]);
    ///
    /// let args = Args::parse_from(["instructor-queue", "-c", "2", "-n", "3"]);
    /// assert!(Config::build(&args).is_err());
    /// ```
    pub fn build(args: &Args) -> Result<Config, Box<dyn Error>> {
        if args.capacity == 0 {
            return Err(Box::new(QueueError::InvalidArgument(
                "Queue capacity must be greater than 0".to_string(),
            )));
        }

        if args.num_instructors == 0 || args.num_instructors > args.capacity {
            return Err(Box::new(QueueError::InvalidArgument(format!(
                "Number of instructors must be between 1 and the queue capacity ({}), got {}",
                args.capacity, args.num_instructors
            ))));
        }

        let sort_keys = if args.sort_keys.is_empty() {
            vec![SortKey::LastName, SortKey::Courses]
        } else {
            args.sort_keys.clone()
        };

        Ok(Config {
            capacity: args.capacity,
            num_instructors: args.num_instructors,
            sort_keys,
            verbose: args.verbose,
        })
    }

    /// Default log level for the binary: `Debug` when verbose, otherwise `Warn`.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}
