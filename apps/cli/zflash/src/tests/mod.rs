mod cli;
mod notes;
