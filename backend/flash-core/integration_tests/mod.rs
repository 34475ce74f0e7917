mod chat_client;
mod helpers;
mod pipeline;
