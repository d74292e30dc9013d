//! Mime-type resolution for catalogued content.

/// Mime type recorded when nothing better can be inferred from a file name.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Extension recorded for mime types with no known extension.
pub const FALLBACK_EXTENSION: &str = "bin";

/// Resolves media types from file names, and canonical extensions from
/// media types.
///
/// The catalog treats this as an opaque injected collaborator so tests can
/// substitute a fixed mapping.
pub trait MimeResolver: Send + Sync {
    /// Infer a mime type from a file name.
    fn guess_mime_type(&self, file_name: &str) -> String;

    /// Canonical extension for a mime type.
    fn extension(&self, mime_type: &str) -> String;
}

/// Production resolver backed by the `mime_guess` extension table.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuessingMimeResolver;

impl MimeResolver for GuessingMimeResolver {
    fn guess_mime_type(&self, file_name: &str) -> String {
        mime_guess::from_path(file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }

    fn extension(&self, mime_type: &str) -> String {
        mime_guess::get_mime_extensions_str(mime_type)
            .and_then(|extensions| extensions.first())
            .map(|extension| (*extension).to_string())
            .unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
    }
}
