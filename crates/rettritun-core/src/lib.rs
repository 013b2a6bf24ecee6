// rettritun-core: shared types for the Icelandic correction pipeline.
//
// Holds the token record that flows through every pipeline stage, the
// annotation type later correction passes attach to tokens, and the
// character/case utilities the tokenizer builds on. Language data and
// the correction rules themselves live in `rettritun-is`.

pub mod case;
pub mod character;
pub mod correction;
pub mod enums;
pub mod token;
