// src/core/crypto/cipher.rs
//! AES-CBC with PKCS#7 padding over whole in-memory buffers
//!
//! Key lengths are validated by the engine before reaching this module.

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::aliases::Iv;
use crate::enums::KeySize;
use crate::error::{CoreError, Result};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes192CbcEnc = cbc::Encryptor<Aes192>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes192CbcDec = cbc::Decryptor<Aes192>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

fn invalid_key(size: KeySize, key: &[u8]) -> CoreError {
    CoreError::InvalidKeyLength {
        expected: size.bytes(),
        actual: key.len(),
    }
}

/// Pad and encrypt; always emits at least one block
pub(crate) fn encrypt_padded(size: KeySize, key: &[u8], iv: &Iv, plaintext: &[u8]) -> Result<Vec<u8>> {
    let ciphertext = match size {
        KeySize::Aes128 => Aes128CbcEnc::new_from_slices(key, iv)
            .map_err(|_| invalid_key(size, key))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        KeySize::Aes192 => Aes192CbcEnc::new_from_slices(key, iv)
            .map_err(|_| invalid_key(size, key))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        KeySize::Aes256 => Aes256CbcEnc::new_from_slices(key, iv)
            .map_err(|_| invalid_key(size, key))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
    };
    Ok(ciphertext)
}

/// Decrypt and strip padding
///
/// Ragged input (not a whole number of blocks) and malformed padding both
/// surface as `CoreError::Padding`.
pub(crate) fn decrypt_padded(size: KeySize, key: &[u8], iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let plaintext = match size {
        KeySize::Aes128 => Aes128CbcDec::new_from_slices(key, iv)
            .map_err(|_| invalid_key(size, key))?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
        KeySize::Aes192 => Aes192CbcDec::new_from_slices(key, iv)
            .map_err(|_| invalid_key(size, key))?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
        KeySize::Aes256 => Aes256CbcDec::new_from_slices(key, iv)
            .map_err(|_| invalid_key(size, key))?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
    };
    plaintext.map_err(|_| CoreError::Padding)
}
