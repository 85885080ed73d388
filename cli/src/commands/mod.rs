pub mod inspect;
pub mod list;
pub mod parse;

pub use inspect::inspect_mounts;
pub use list::list_mounts;
pub use parse::print_mounts;
