//! Address book file I/O

mod storage;

pub use storage::{
    DEFAULT_BOOK_FILE, FORMAT_NAME, FORMAT_VERSION, StorageError, decode_book, encode_book,
    read_book, write_book,
};
