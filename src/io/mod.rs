pub(crate) mod payload_reader;
