pub mod dataset;
pub mod sales_file;
