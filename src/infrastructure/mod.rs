pub mod google_books;
pub mod reading_list_file;
