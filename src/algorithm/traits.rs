use crate::algorithm::AlgorithmFamily;
use crate::error::Result;
use crate::keys::Key;

/// Core trait that every signature primitive implements
///
/// Implementations are stateless and live in the static registry table, so
/// they must be shareable across threads.
pub trait Algorithm: Send + Sync {
    /// Family this primitive belongs to
    fn family(&self) -> AlgorithmFamily;

    /// Produce a raw signature over `signing_input`
    ///
    /// # Arguments
    /// * `signing_input` - The data to sign (header.payload)
    /// * `key` - Secret or private key material
    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>>;

    /// Check a raw signature over `signing_input`
    ///
    /// Returns `false` for any failure, including unusable key material.
    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> bool;
}
