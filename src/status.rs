//! HTTP status code to reason-phrase-identifier mapping.
//!
//! The error `name` for a failed fetch is the standard reason phrase of the
//! response status, written as a PascalCase identifier (404 -> `NotFound`,
//! 500 -> `InternalServerError`). The table is static so no runtime
//! status-reason lookup library is needed.

/// Fallback name for status codes outside the IANA registry.
pub(crate) const FALLBACK_NAME: &str = "HttpError";

/// Returns the PascalCase reason-phrase identifier for an HTTP status code.
///
/// Covers the IANA status code registry. Unregistered codes (e.g. 599) map to
/// the generic `"HttpError"`.
///
/// # Arguments
///
/// * `status` - The numeric HTTP status code
///
/// # Returns
///
/// A static string naming the status, suitable for use as an error name.
pub fn reason_name(status: u16) -> &'static str {
    match status {
        // Informational (1xx)
        100 => "Continue",
        101 => "SwitchingProtocols",
        102 => "Processing",
        103 => "EarlyHints",
        // Success (2xx) - never produced by the failure path, mapped for completeness
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "NonAuthoritativeInformation",
        204 => "NoContent",
        205 => "ResetContent",
        206 => "PartialContent",
        207 => "MultiStatus",
        208 => "AlreadyReported",
        226 => "IMUsed",
        // Redirection (3xx)
        300 => "MultipleChoices",
        301 => "MovedPermanently",
        302 => "Found",
        303 => "SeeOther",
        304 => "NotModified",
        305 => "UseProxy",
        307 => "TemporaryRedirect",
        308 => "PermanentRedirect",
        // Client errors (4xx)
        400 => "BadRequest",
        401 => "Unauthorized",
        402 => "PaymentRequired",
        403 => "Forbidden",
        404 => "NotFound",
        405 => "MethodNotAllowed",
        406 => "NotAcceptable",
        407 => "ProxyAuthenticationRequired",
        408 => "RequestTimeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "LengthRequired",
        412 => "PreconditionFailed",
        413 => "PayloadTooLarge",
        414 => "URITooLong",
        415 => "UnsupportedMediaType",
        416 => "RangeNotSatisfiable",
        417 => "ExpectationFailed",
        418 => "ImATeapot",
        421 => "MisdirectedRequest",
        422 => "UnprocessableEntity",
        423 => "Locked",
        424 => "FailedDependency",
        425 => "TooEarly",
        426 => "UpgradeRequired",
        428 => "PreconditionRequired",
        429 => "TooManyRequests",
        431 => "RequestHeaderFieldsTooLarge",
        451 => "UnavailableForLegalReasons",
        // Server errors (5xx)
        500 => "InternalServerError",
        501 => "NotImplemented",
        502 => "BadGateway",
        503 => "ServiceUnavailable",
        504 => "GatewayTimeout",
        505 => "HTTPVersionNotSupported",
        506 => "VariantAlsoNegotiates",
        507 => "InsufficientStorage",
        508 => "LoopDetected",
        509 => "BandwidthLimitExceeded",
        510 => "NotExtended",
        511 => "NetworkAuthenticationRequired",
        _ => FALLBACK_NAME,
    }
}
