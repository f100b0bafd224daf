macro_rules! std {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "std")]
            $item
        )*
    };
}

macro_rules! alloc {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "alloc")]
            $item
        )*
    };
}

/// Declares zero-sized marker types which are sealed to this crate.
macro_rules! define_state {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
            pub struct $name;

            impl $crate::sealed::Sealed for $name {}
        )*
    };
}

/// `Debug` which never prints the contents, for anything holding secrets.
macro_rules! opaque_dbg {
    ($ident:ident $(< $(const $c:ident : $cty:ty),* >)?) => {
        impl $(< $(const $c: $cty),* >)? ::core::fmt::Debug for $ident $(< $($c),* >)? {
            #[inline]
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(concat!(stringify!($ident), " { ... }"))
            }
        }
    };
}

// Structured events only exist with the `tracing` feature, without it these expand to nothing
// and the arguments are never evaluated.
macro_rules! event_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    };
}

macro_rules! event_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}
