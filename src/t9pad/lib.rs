//! # t9pad Architecture
//!
//! t9pad is a **T9 keypad library** with a small command-line client on top. The keypad
//! itself ([`keypad::KeypadMap`]) knows nothing about files, terminals or configuration;
//! everything around it is there to seed it and to ask it questions.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads config, builds the keypad, normalizes input        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (keypad.rs, error.rs)                                 │
//! │  - KeypadMap, Key, Code: pure in-memory data, no I/O        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Using the keypad directly
//!
//! ```
//! use t9pad::keypad::KeypadMap;
//!
//! let mut pad = KeypadMap::new();
//! pad.add_mapping(4, "ghi").unwrap();
//! pad.add_mapping(6, "mno").unwrap();
//! pad.add_mapping(3, "def").unwrap();
//!
//! assert_eq!(pad.word_to_code("good").unwrap().to_string(), "4663");
//! assert!(pad.are_textonyms("good", "home").unwrap());
//! ```
//!
//! ## Concurrency
//!
//! `KeypadMap` is a plain value with no interior mutability. Queries take `&self` and
//! mutation takes `&mut self`, so sharing one across threads needs an outer lock
//! (e.g. `RwLock<KeypadMap>`).
//!
//! ## Module Overview
//!
//! - [`keypad`]: The keypad map, keys and codes
//! - [`api`]: The API facade, entry point for UI clients
//! - [`commands`]: One module per CLI operation
//! - [`config`]: Layout and options stored as JSON
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod keypad;
