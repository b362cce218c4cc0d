//! Tag registry and the attestation dispatcher.
//!
//! A record is read in two steps: the tag and the whole bounded payload are
//! taken from the outer stream, then the payload is decoded in its own
//! sub-context by the first registered kind whose tag matches. A matched
//! kind must consume the payload exactly. Tags no kind claims produce an
//! [`UnknownAttestation`], which is a successful result.

use bytes::Bytes;
use tracing::trace;

use crate::attestation::{
    Attestation, BitcoinAttestation, PendingAttestation, UnknownAttestation, MAX_PAYLOAD_SIZE,
};
use crate::config::DecodeConfig;
use crate::context::DeserializationContext;
use crate::error::DecodeError;
use crate::types::{AttestationTag, TAG_SIZE};

/// The attestation kinds this crate can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttestationKind {
    Pending,
    Bitcoin,
}

impl AttestationKind {
    /// The tag that identifies this kind.
    pub const fn tag(self) -> AttestationTag {
        match self {
            Self::Pending => AttestationTag::PENDING,
            Self::Bitcoin => AttestationTag::BITCOIN,
        }
    }

    /// Exact byte-for-byte comparison against this kind's tag.
    pub fn matches(self, tag: &AttestationTag) -> bool {
        self.tag() == *tag
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Bitcoin => "bitcoin",
        }
    }

    /// Decode this kind's fields from a payload sub-context.
    pub fn decode(
        self,
        ctx: &mut DeserializationContext<'_>,
        config: &DecodeConfig,
    ) -> Result<Attestation, DecodeError> {
        match self {
            Self::Pending => PendingAttestation::decode(ctx, config).map(Attestation::Pending),
            Self::Bitcoin => BitcoinAttestation::decode(ctx).map(Attestation::Bitcoin),
        }
    }
}

/// An ordered list of attestation kinds consulted by the dispatcher.
///
/// Lookup is a linear scan; the first registered kind with a matching tag wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRegistry {
    kinds: Vec<AttestationKind>,
}

impl TagRegistry {
    /// A registry that recognizes nothing.
    pub fn empty() -> Self {
        Self { kinds: Vec::new() }
    }

    /// The standard registry: pending, then bitcoin.
    pub fn standard() -> Self {
        Self {
            kinds: vec![AttestationKind::Pending, AttestationKind::Bitcoin],
        }
    }

    /// Append a kind. Earlier registrations take precedence.
    pub fn register(mut self, kind: AttestationKind) -> Self {
        self.kinds.push(kind);
        self
    }

    /// Registered kinds in lookup order.
    pub fn kinds(&self) -> &[AttestationKind] {
        &self.kinds
    }

    /// Find the kind that owns `tag`.
    pub fn lookup(&self, tag: &AttestationTag) -> Option<AttestationKind> {
        self.kinds.iter().copied().find(|kind| kind.matches(tag))
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Parse one attestation record with the standard registry and default config.
pub fn parse_attestation(ctx: &mut DeserializationContext<'_>) -> Result<Attestation, DecodeError> {
    parse_attestation_with(ctx, &TagRegistry::standard(), &DecodeConfig::default())
}

/// Parse one attestation record.
///
/// On success the context is advanced past the whole record; on failure it
/// is left where it was.
pub fn parse_attestation_with(
    ctx: &mut DeserializationContext<'_>,
    registry: &TagRegistry,
    config: &DecodeConfig,
) -> Result<Attestation, DecodeError> {
    let mut cursor = ctx.clone();

    let tag = AttestationTag::from_bytes(cursor.read_array::<TAG_SIZE>()?);
    let payload = cursor
        .read_varbytes(0, MAX_PAYLOAD_SIZE)
        .map_err(|e| match e {
            DecodeError::LengthOutOfBounds { len, max, .. } => {
                DecodeError::PayloadTooLarge { len, max }
            }
            other => other,
        })?;

    let attestation = match registry.lookup(&tag) {
        Some(kind) => {
            let mut sub = DeserializationContext::new(payload);
            let attestation = kind.decode(&mut sub, config)?;
            sub.assert_eof()?;
            trace!(kind = kind.name(), payload_len = payload.len(), "decoded attestation");
            attestation
        }
        None => {
            trace!(%tag, payload_len = payload.len(), "unrecognized attestation tag");
            Attestation::Unknown(UnknownAttestation::new(tag, Bytes::copy_from_slice(payload)))
        }
    };

    *ctx = cursor;
    Ok(attestation)
}
