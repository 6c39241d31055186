use crate::queue::SortKey;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// (optional) Maximum number of instructors the queue can hold
    #[arg(short = 'c', long = "capacity", default_value_t = 10)]
    pub capacity: usize,

    /// (optional) Number of instructors to enter
    #[arg(short = 'n', long = "num-instructors", default_value_t = 5)]
    pub num_instructors: usize,

    /// (optional) Sorted views to print, may be repeated; defaults to last-name then courses
    #[arg(short = 's', long = "sort", value_enum)]
    pub sort_keys: Vec<SortKey>,

    #[arg(short, long)]
    pub verbose: bool,
}
