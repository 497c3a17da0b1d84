// Prompt Generator: a static catalog of experiment prompts.
// No inputs, no randomization. Output is always the same 12 records.

pub mod catalog;
pub mod prompts;
