//! # Store Decoder Registry
//!
//! Maps a store namespace to the function that renders its raw entries.
//! Built incrementally by the coordinator; consumed by inspection tooling
//! that diffs two stores entry by entry.
//!
//! ## Semantics
//!
//! - **Last write wins**: a later registration for the same namespace
//!   replaces the earlier one. Replacement is logged, never rejected.
//! - **Deterministic listing**: namespaces are kept sorted.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::entities::KvPair;
use crate::errors::DecodeError;

/// Renders the same key read from two stores as human-readable text.
pub type StoreDecoder = Box<dyn Fn(&KvPair, &KvPair) -> Result<String, DecodeError> + Send + Sync>;

/// Registry of store decoders keyed by namespace.
#[derive(Default)]
pub struct StoreDecoderRegistry {
    decoders: BTreeMap<String, StoreDecoder>,
}

impl StoreDecoderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decoder for `namespace`, replacing any previous one.
    pub fn register<F>(&mut self, namespace: impl Into<String>, decoder: F)
    where
        F: Fn(&KvPair, &KvPair) -> Result<String, DecodeError> + Send + Sync + 'static,
    {
        let namespace = namespace.into();
        if self.decoders.contains_key(&namespace) {
            debug!(
                namespace = %namespace,
                "[DecoderRegistry] Decoder already registered, replacing"
            );
        }
        self.decoders.insert(namespace, Box::new(decoder));
    }

    /// Look up the decoder for `namespace`.
    pub fn get(&self, namespace: &str) -> Option<&StoreDecoder> {
        self.decoders.get(namespace)
    }

    /// Decode a pair of entries with the decoder for `namespace`.
    ///
    /// Returns `None` when no decoder is registered for the namespace.
    pub fn decode(
        &self,
        namespace: &str,
        kv_a: &KvPair,
        kv_b: &KvPair,
    ) -> Option<Result<String, DecodeError>> {
        self.get(namespace).map(|decoder| decoder(kv_a, kv_b))
    }

    /// Check if a namespace has a decoder.
    pub fn contains(&self, namespace: &str) -> bool {
        self.decoders.contains_key(namespace)
    }

    /// All registered namespaces, sorted.
    pub fn namespaces(&self) -> Vec<&str> {
        self.decoders.keys().map(String::as_str).collect()
    }

    /// Number of registered namespaces.
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Whether no decoder is registered.
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl fmt::Debug for StoreDecoderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreDecoderRegistry")
            .field("namespaces", &self.namespaces())
            .finish()
    }
}
