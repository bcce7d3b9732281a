pub mod print_output;

pub use print_output::{print_error, print_output, Layout};
