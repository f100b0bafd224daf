use core::fmt;

/// The ways an SIV-HMAC operation can fail.
///
/// Every variant is terminal for the operation which produced it. Only
/// [`AuthenticationFailure`] and a completed [`crypt`] require a [`reset`] before the context
/// can be used again, the rest leave the context exactly as it was prior to the call.
///
/// [`AuthenticationFailure`]: Error::AuthenticationFailure
/// [`crypt`]: crate::SivHmac::crypt
/// [`reset`]: crate::SivHmac::reset
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// The key was not one of the supported lengths (32, 48 or 64 bytes).
    InvalidKeySize,
    /// The tag length was below the 20 byte minimum or above the digest's output length.
    InvalidTagSize,
    /// A buffer was shorter than the operation requires, or a size computation overflowed.
    InvalidLength,
    /// The call is not permitted in the context's current phase.
    SequenceError,
    /// The tag did not authenticate the ciphertext, associated data and nonce.
    AuthenticationFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidKeySize => "InvalidKeySize",
            Self::InvalidTagSize => "InvalidTagSize",
            Self::InvalidLength => "InvalidLength",
            Self::SequenceError => "SequenceError",
            Self::AuthenticationFailure => "AuthenticationFailure",
        })
    }
}

std! { impl std::error::Error for Error {} }

impl From<crate::buf::InvalidSize> for Error {
    #[inline]
    fn from(_: crate::buf::InvalidSize) -> Self {
        Self::InvalidLength
    }
}

/// A generic error type representing an unspecified failure in cryptographic operations.
///
/// In cryptographic contexts, it is often necessary to hide the specific reason for
/// an operation's failure to prevent leaking sensitive information to potential attackers.
/// `Unspecified` serves this purpose by providing a simple, non-descriptive error type
/// that can be used in situations where the cause of the failure should not be exposed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unspecified;

impl fmt::Display for Unspecified {
    /// Writes "Unspecified" to the formatter.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Unspecified")
    }
}

std! { impl std::error::Error for Unspecified {} }

impl From<Error> for Unspecified {
    #[inline]
    fn from(_: Error) -> Self {
        Self
    }
}

/// Erases the reason for a failure.
///
/// Useful when a failure is reported to a peer, where distinguishing a malformed message from
/// a forged one only helps the attacker.
pub trait MakeOpaque<T> {
    /// Replace any error with [`Unspecified`].
    ///
    /// # Errors
    ///
    /// If `self` was an error of any kind.
    fn opaque(self) -> Result<T, Unspecified>;
}

impl<T, E: Into<Unspecified>> MakeOpaque<T> for Result<T, E> {
    #[inline]
    fn opaque(self) -> Result<T, Unspecified> {
        self.map_err(Into::into)
    }
}
