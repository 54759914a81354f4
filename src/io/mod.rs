pub mod store_io;
