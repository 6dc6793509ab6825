// Gemchat - terminal chat client for Gemini
// Library exports

// Core modules
pub mod cli;
pub mod config;
pub mod error;
pub mod provider;
pub mod session;
