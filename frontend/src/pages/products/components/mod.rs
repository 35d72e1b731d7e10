pub mod grid;
pub mod pager;
