//! Well-known parameter names.
//!
//! Algorithms that share a vocabulary agree on these keys so a single
//! parameter chain can configure a cipher, its mode and its padding at once.
//! The names are plain strings; nothing stops a caller from using its own.

/// Version number of a key or algorithm encoding.
pub const VERSION: &str = "Version";
/// Seed bytes for a deterministic generator.
pub const SEED: &str = "Seed";
/// Raw key bytes.
pub const KEY: &str = "Key";
/// Key length in bytes.
pub const KEY_SIZE: &str = "KeySize";
/// Effective key length in bits, where it differs from the stored length.
pub const EFFECTIVE_KEY_LENGTH: &str = "EffectiveKeyLength";
/// Initialization vector bytes.
pub const IV: &str = "IV";
/// Marks an IV that is carried inside the ciphertext.
pub const STOLEN_IV: &str = "StolenIV";
/// Number of cipher rounds.
pub const ROUNDS: &str = "Rounds";
/// Feedback size in bytes for feedback modes.
pub const FEEDBACK_SIZE: &str = "FeedbackSize";
/// Word size in bits.
pub const WORD_SIZE: &str = "WordSize";
/// Block size in bytes.
pub const BLOCK_SIZE: &str = "BlockSize";
/// Padding scheme selector.
pub const BLOCK_PADDING_SCHEME: &str = "BlockPaddingScheme";
/// Enables padding in encoders.
pub const PAD: &str = "Pad";
/// Byte used when padding is enabled.
pub const PADDING_BYTE: &str = "PaddingByte";
/// Group modulus.
pub const MODULUS: &str = "Modulus";
/// Order of the prime-order subgroup.
pub const SUBGROUP_ORDER: &str = "SubgroupOrder";
/// Generator of the prime-order subgroup.
pub const SUBGROUP_GENERATOR: &str = "SubgroupGenerator";
/// Public exponent.
pub const PUBLIC_EXPONENT: &str = "PublicExponent";
/// Private exponent.
pub const PRIVATE_EXPONENT: &str = "PrivateExponent";
/// First prime factor of the modulus.
pub const PRIME1: &str = "Prime1";
/// Second prime factor of the modulus.
pub const PRIME2: &str = "Prime2";
/// Public group element.
pub const PUBLIC_ELEMENT: &str = "PublicElement";
/// Digest length in bytes.
pub const DIGEST_SIZE: &str = "DigestSize";
/// Destination buffer for produced bytes.
pub const OUTPUT_BUFFER: &str = "OutputBuffer";
/// Source buffer for consumed bytes.
pub const INPUT_BUFFER: &str = "InputBuffer";
/// Path of an input file.
pub const INPUT_FILE_NAME: &str = "InputFileName";
/// Path of an output file.
pub const OUTPUT_FILE_NAME: &str = "OutputFileName";
/// Separator emitted between encoded groups.
pub const SEPARATOR: &str = "Separator";
/// Terminator emitted after the encoded output.
pub const TERMINATOR: &str = "Terminator";
/// Selects uppercase output in text encoders.
pub const UPPERCASE: &str = "Uppercase";
/// Number of symbols per group in text encoders.
pub const GROUP_SIZE: &str = "GroupSize";
/// Base-2 logarithm of an encoder's radix.
pub const LOG2_BASE: &str = "Log2Base";
/// Whether encoders insert line breaks.
pub const INSERT_LINE_BREAKS: &str = "InsertLineBreaks";
/// Maximum output line length for encoders that break lines.
pub const MAX_LINE_LENGTH: &str = "MaxLineLength";
/// Flags controlling signature verification filters.
pub const SIGNATURE_VERIFICATION_FILTER_FLAGS: &str = "SignatureVerificationFilterFlags";
/// Encoding parameters for asymmetric padding schemes.
pub const ENCODING_PARAMETERS: &str = "EncodingParameters";
/// Length of a derived key in bytes.
pub const DERIVED_KEY_LENGTH: &str = "DerivedKeyLength";
