mod detail;
mod header;
mod input;
mod list;

pub use detail::todo_detail;
pub use header::header;
pub use input::todo_input;
pub use list::todo_list;
