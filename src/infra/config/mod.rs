pub mod table_options;
