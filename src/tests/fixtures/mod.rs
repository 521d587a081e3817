pub mod cognito;
pub mod commands;
pub mod dynamodb;
pub mod shared_buffer;
