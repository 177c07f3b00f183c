pub mod record_writer;
pub mod request_reader;
