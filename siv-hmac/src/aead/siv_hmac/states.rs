use crate::error::Error;
use crate::sealed::Sealed;

/// The direction of a [`SivHmac`] context, fixed by its type.
///
/// [`SivHmac`]: crate::SivHmac
pub trait Direction: Sealed {
    /// `"encrypt"` or `"decrypt"`.
    const NAME: &'static str;

    #[doc(hidden)]
    const ENCRYPT: bool;
}

define_state! {
    /// Seal plaintext into `tag || ciphertext`.
    Encrypt,
    /// Open `tag || ciphertext` back into plaintext.
    Decrypt,
}

impl Direction for Encrypt {
    const NAME: &'static str = "encrypt";

    #[doc(hidden)]
    const ENCRYPT: bool = true;
}

impl Direction for Decrypt {
    const NAME: &'static str = "decrypt";

    #[doc(hidden)]
    const ENCRYPT: bool = false;
}

/// Where a context is within its use-cycle.
///
/// ```text
/// Init ──aad──> AcceptingAad ──aad──> AcceptingAad
///  │                 │
///  ├──nonce──────────┴──nonce──> NonceSet
///  │                                │
///  └───────────crypt────────────────┴──crypt──> Spent ──reset──> Init
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Freshly initialized or reset, nothing has been authenticated yet.
    Init,
    /// At least one associated data field has been absorbed.
    AcceptingAad,
    /// The nonce has been absorbed, only `crypt` remains.
    NonceSet,
    /// The message has been processed, or authentication failed. Requires a reset.
    Spent,
}

/// The calls which move a context between phases, other than reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    AssociatedData,
    Nonce,
    Crypt,
}

impl Phase {
    /// The phase following `call`.
    ///
    /// # Errors
    ///
    /// `SequenceError` if `call` is not permitted in this phase.
    pub(crate) const fn next(self, call: Call) -> Result<Self, Error> {
        match (self, call) {
            (Self::Init | Self::AcceptingAad, Call::AssociatedData) => Ok(Self::AcceptingAad),
            (Self::Init | Self::AcceptingAad, Call::Nonce) => Ok(Self::NonceSet),
            (Self::Init | Self::AcceptingAad | Self::NonceSet, Call::Crypt) => Ok(Self::Spent),
            _ => Err(Error::SequenceError)
        }
    }
}
