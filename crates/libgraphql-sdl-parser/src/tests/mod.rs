mod determinism_proptests;
mod document_merge_tests;
mod graphql_parser_directive_tests;
mod graphql_token_stream_tests;
mod str_token_source_tests;
mod utils;
