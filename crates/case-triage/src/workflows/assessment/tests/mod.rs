mod common;
mod matcher;
