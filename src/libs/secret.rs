//! Encrypted on-disk cache for API credentials.
//!
//! Tokens are encrypted with AES-256-CBC using keys embedded at build time
//! (see `build.rs`) and stored in the application data directory, so a
//! configured remote service never requires re-entering the token on every
//! push.

use crate::libs::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs;
use std::path::PathBuf;

// Include generated metadata with encryption keys
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

/// A single named secret with an encrypted file cache.
#[derive(Clone, Debug)]
pub struct Secret {
    prompt: String,
    cache_path: PathBuf,
}

impl Secret {
    pub fn new(secret_name: &str, prompt: &str) -> Self {
        let cache_path = DataStorage::new().get_path(secret_name).unwrap_or_else(|_| PathBuf::from(secret_name));

        Self {
            prompt: prompt.to_owned(),
            cache_path,
        }
    }

    /// Returns the cached secret, prompting and caching it when missing
    /// or unreadable.
    pub fn get_or_prompt(&self) -> Result<String> {
        if self.cache_path.exists() {
            if let Ok(value) = self.decrypt() {
                return Ok(value);
            }
        }
        self.prompt()
    }

    /// Always prompts, replacing whatever is cached.
    pub fn prompt(&self) -> Result<String> {
        let value = Password::with_theme(&ColorfulTheme::default()).with_prompt(&self.prompt).interact()?;
        self.encrypt(&value)?;
        Ok(value)
    }

    /// Removes the cached secret, forcing a prompt on next use.
    pub fn forget(&self) -> Result<()> {
        if self.cache_path.exists() {
            fs::remove_file(&self.cache_path)?;
        }
        Ok(())
    }

    fn encrypt(&self, value: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(APP_METADATA_ENCRYPTION_KEY, APP_METADATA_ENCRYPTION_IV)?;
        let ciphertext = cipher.encrypt_vec(value.as_bytes());

        if let Some(parent) = self.cache_path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        fs::write(&self.cache_path, BASE64_STANDARD.encode(&ciphertext))?;

        Ok(())
    }

    fn decrypt(&self) -> Result<String> {
        let encoded = fs::read_to_string(&self.cache_path)?;
        let ciphertext = BASE64_STANDARD.decode(encoded)?;
        let cipher = Aes256Cbc::new_from_slices(APP_METADATA_ENCRYPTION_KEY, APP_METADATA_ENCRYPTION_IV)?;
        let plaintext = cipher.decrypt_vec(&ciphertext)?;

        Ok(String::from_utf8(plaintext)?)
    }
}
