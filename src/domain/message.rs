/// Field delimiter of the payment string.
pub const DELIMITER: char = '|';

/// Maximum number of characters of the message embedded in the payment string.
pub const MAX_MESSAGE_CHARS: usize = 100;

/// Makes a free-text message safe to embed as the last payment-string field.
///
/// Trims surrounding whitespace, strips every delimiter and keeps at most
/// [`MAX_MESSAGE_CHARS`] characters. An empty result means "no message".
pub fn sanitize_message(message: &str) -> String {
    message
        .trim()
        .chars()
        .filter(|c| *c != DELIMITER)
        .take(MAX_MESSAGE_CHARS)
        .collect()
}
