use std::fmt::{Debug, Formatter, Result};

use secrecy::{ExposeSecret, SecretBox, SecretString};

use crate::config::KEY_SIZE;

/// A user password, zeroized when dropped.
pub struct Password {
    inner: SecretString,
}

impl Password {
    pub fn new(password: &str) -> Self {
        Self { inner: SecretString::from(password.to_owned()) }
    }

    pub fn from_string(password: String) -> Self {
        Self { inner: SecretString::from(password) }
    }

    pub fn expose_secret(&self) -> &str {
        self.inner.expose_secret()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.expose_secret().as_bytes()
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("Password([REDACTED])")
    }
}

/// A derived AES-256 key, zeroized when dropped.
pub type SecretKey = SecretBox<[u8; KEY_SIZE]>;
