pub mod analysis;
pub mod config;
pub mod error;
pub mod groq;
pub mod http;
pub mod prompts;
pub mod schemas;
pub mod waitlist;
pub mod word_bank;

// Load env from .env if present, silently ignore if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
