//! Gemini API reason-code mapping
//!
//! Gemini reports request failures as a JSON body carrying a `reason` string
//! (e.g. `"AuctionNotOpen"`). This module enumerates every documented reason
//! code as a closed table. Unrecognized codes are handled by a deliberate
//! fallback branch in [`GeminiError`](crate::error::GeminiError), never by
//! synthesizing an error type from the string at runtime.
//!
//! New codes are added by table entry: one variant, one arm in `from_code`,
//! one arm in `as_code`.

/// All documented Gemini API reason codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiReason {
    /// Failed to place an auction-only order because there is no current
    /// auction open for this symbol
    AuctionNotOpen,
    /// The client order id is longer than the server accepts
    ClientOrderIdTooLong,
    /// The client order id must be supplied as a string
    ClientOrderIdMustBeString,
    /// Mutually exclusive order execution options were supplied
    ConflictingOptions,
    /// The request path in the payload does not match the URI
    EndpointMismatch,
    /// No endpoint exists at the request path
    EndpointNotFound,
    /// The order was submitted outside the window it is valid for
    IneligibleTiming,
    /// Insufficient funds to place or fill the order
    InsufficientFunds,
    /// The request body or payload is not valid JSON
    InvalidJson,
    /// The nonce was not greater than the previously used nonce
    InvalidNonce,
    /// The order type is not recognized
    InvalidOrderType,
    /// The price is invalid for this symbol
    InvalidPrice,
    /// The quantity is invalid for this symbol
    InvalidQuantity,
    /// The side must be "buy" or "sell"
    InvalidSide,
    /// The signature did not match the payload
    InvalidSignature,
    /// The symbol is not recognized
    InvalidSymbol,
    /// The exchange is down for maintenance
    Maintenance,
    /// The order was rejected because the market is not open
    MarketNotOpen,
    /// The `X-GEMINI-APIKEY` header was missing
    MissingApikeyHeader,
    /// A required order field was missing
    MissingOrderField,
    /// The API key is missing the role required for this request
    MissingRole,
    /// The `X-GEMINI-PAYLOAD` header was missing
    MissingPayloadHeader,
    /// The `X-GEMINI-SIGNATURE` header was missing
    MissingSignatureHeader,
    /// The request was sent over plain HTTP
    NoSsl,
    /// The `options` order field must be an array
    OptionsMustBeArray,
    /// The referenced order does not exist or is not owned by this account
    OrderNotFound,
    /// Requests are being rate limited
    RateLimit,
    /// An internal exchange error occurred
    System,
    /// An unsupported order execution option was supplied
    UnsupportedOption,
}

impl ApiReason {
    /// Look up a reason code from the wire string.
    ///
    /// Matching is exact; `None` means the code is not in the table and the
    /// caller should fall back to the generic unknown-error kind.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "AuctionNotOpen" => Self::AuctionNotOpen,
            "ClientOrderIdTooLong" => Self::ClientOrderIdTooLong,
            "ClientOrderIdMustBeString" => Self::ClientOrderIdMustBeString,
            "ConflictingOptions" => Self::ConflictingOptions,
            "EndpointMismatch" => Self::EndpointMismatch,
            "EndpointNotFound" => Self::EndpointNotFound,
            "IneligibleTiming" => Self::IneligibleTiming,
            "InsufficientFunds" => Self::InsufficientFunds,
            "InvalidJson" => Self::InvalidJson,
            "InvalidNonce" => Self::InvalidNonce,
            "InvalidOrderType" => Self::InvalidOrderType,
            "InvalidPrice" => Self::InvalidPrice,
            "InvalidQuantity" => Self::InvalidQuantity,
            "InvalidSide" => Self::InvalidSide,
            "InvalidSignature" => Self::InvalidSignature,
            "InvalidSymbol" => Self::InvalidSymbol,
            "Maintenance" => Self::Maintenance,
            "MarketNotOpen" => Self::MarketNotOpen,
            "MissingApikeyHeader" => Self::MissingApikeyHeader,
            "MissingOrderField" => Self::MissingOrderField,
            "MissingRole" => Self::MissingRole,
            "MissingPayloadHeader" => Self::MissingPayloadHeader,
            "MissingSignatureHeader" => Self::MissingSignatureHeader,
            "NoSSL" => Self::NoSsl,
            "OptionsMustBeArray" => Self::OptionsMustBeArray,
            "OrderNotFound" => Self::OrderNotFound,
            "RateLimit" => Self::RateLimit,
            "System" => Self::System,
            "UnsupportedOption" => Self::UnsupportedOption,
            _ => return None,
        })
    }

    /// The wire string for this reason code
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::AuctionNotOpen => "AuctionNotOpen",
            Self::ClientOrderIdTooLong => "ClientOrderIdTooLong",
            Self::ClientOrderIdMustBeString => "ClientOrderIdMustBeString",
            Self::ConflictingOptions => "ConflictingOptions",
            Self::EndpointMismatch => "EndpointMismatch",
            Self::EndpointNotFound => "EndpointNotFound",
            Self::IneligibleTiming => "IneligibleTiming",
            Self::InsufficientFunds => "InsufficientFunds",
            Self::InvalidJson => "InvalidJson",
            Self::InvalidNonce => "InvalidNonce",
            Self::InvalidOrderType => "InvalidOrderType",
            Self::InvalidPrice => "InvalidPrice",
            Self::InvalidQuantity => "InvalidQuantity",
            Self::InvalidSide => "InvalidSide",
            Self::InvalidSignature => "InvalidSignature",
            Self::InvalidSymbol => "InvalidSymbol",
            Self::Maintenance => "Maintenance",
            Self::MarketNotOpen => "MarketNotOpen",
            Self::MissingApikeyHeader => "MissingApikeyHeader",
            Self::MissingOrderField => "MissingOrderField",
            Self::MissingRole => "MissingRole",
            Self::MissingPayloadHeader => "MissingPayloadHeader",
            Self::MissingSignatureHeader => "MissingSignatureHeader",
            Self::NoSsl => "NoSSL",
            Self::OptionsMustBeArray => "OptionsMustBeArray",
            Self::OrderNotFound => "OrderNotFound",
            Self::RateLimit => "RateLimit",
            Self::System => "System",
            Self::UnsupportedOption => "UnsupportedOption",
        }
    }

    /// Check if this is a rate limit rejection
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimit)
    }

    /// Check if this error indicates a problem with the credentials or
    /// signing pipeline rather than with the request's trading semantics
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidNonce
                | Self::InvalidSignature
                | Self::MissingApikeyHeader
                | Self::MissingPayloadHeader
                | Self::MissingSignatureHeader
                | Self::MissingRole
        )
    }
}

impl std::fmt::Display for ApiReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}
