//! Envelope serialization seam.
//!
//! Building SOAP envelopes happens outside this workspace. Transports only
//! need the serialized bytes, which they obtain through [`Envelope`].

use bytes::Bytes;

/// Error returned by an envelope serializer.
pub type EnvelopeError = Box<dyn std::error::Error + Send + Sync>;

/// An in-memory message that can be turned into raw request bytes.
pub trait Envelope: Send + Sync {
    /// Serialize the envelope for the wire.
    fn to_bytes(&self) -> Result<Vec<u8>, EnvelopeError>;
}

impl Envelope for Vec<u8> {
    fn to_bytes(&self) -> Result<Vec<u8>, EnvelopeError> {
        Ok(self.clone())
    }
}

impl Envelope for Bytes {
    fn to_bytes(&self) -> Result<Vec<u8>, EnvelopeError> {
        Ok(self.to_vec())
    }
}

impl Envelope for String {
    fn to_bytes(&self) -> Result<Vec<u8>, EnvelopeError> {
        Ok(self.as_bytes().to_vec())
    }
}

impl Envelope for &str {
    fn to_bytes(&self) -> Result<Vec<u8>, EnvelopeError> {
        Ok(self.as_bytes().to_vec())
    }
}
