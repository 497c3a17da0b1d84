// Experiment Runner: prompts.jsonl → completion capability → results.jsonl.

pub mod runner;
