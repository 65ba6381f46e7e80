mod common;
mod engine;
mod scoring;
