pub mod reading_lists;
pub mod stubs;
