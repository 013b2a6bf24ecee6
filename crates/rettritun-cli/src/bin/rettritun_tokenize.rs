// rettritun-tokenize: tokenize Icelandic text from stdin.
//
// Reads text from stdin and prints the raw token stream, one token per
// line, without applying any correction.
//
// Usage:
//   rettritun-tokenize [OPTIONS]
//
// Options:
//   --auto-uppercase   Capitalize sentence-initial lowercase words
//   -h, --help         Print help

use rettritun_core::token::TokenValue;
use rettritun_is::{Tokenizer, TokenizerOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if rettritun_cli::wants_help(&args) {
        println!("rettritun-tokenize: Tokenize Icelandic text.");
        println!();
        println!("Usage: rettritun-tokenize [OPTIONS]");
        println!();
        println!("Reads text from stdin, prints tokens with kinds:");
        println!("  WORD:        <text>");
        println!("  NUMBER:      <text> (= value)");
        println!("  PUNCTUATION: <text>");
        println!("  UNKNOWN:     <text>");
        println!();
        println!("Options:");
        println!("  --auto-uppercase   Capitalize sentence-initial lowercase words");
        println!("  -h, --help         Print this help");
        return;
    }

    let options = TokenizerOptions {
        auto_uppercase: args.iter().any(|a| a == "--auto-uppercase"),
    };

    let input = rettritun_cli::read_stdin().unwrap_or_else(|e| rettritun_cli::fatal(&e));

    for token in Tokenizer::new(&input, options) {
        let label = rettritun_cli::kind_label(token.kind);
        let text = token.text.as_deref().unwrap_or("");
        match token.value {
            Some(TokenValue::Number(n)) => println!("{label:12} {text} (= {n})"),
            _ => println!("{label:12} {text}"),
        }
    }
}
