mod root_operation_types_tests;
mod utils;
