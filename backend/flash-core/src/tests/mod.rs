mod credential;
mod error;
mod prompt;
mod response_buffer;
